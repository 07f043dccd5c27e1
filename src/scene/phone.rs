use glam::{EulerRot, Mat4, Quat, Vec3};

use super::model::PhoneModel;
use crate::scroll::PhonePose;

/// The phone's node in the scene graph.
///
/// The pose is overwritten every frame. Until a model is attached the node
/// never reports itself visible.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneNode {
    /// Node position in world space.
    pub position: Vec3,
    /// Euler rotation (X, then Y, then Z) in radians.
    pub rotation: Vec3,
    visible: bool,
    model: Option<PhoneModel>,
}

impl PhoneNode {
    /// Node at the initial pose with no model.
    #[must_use]
    pub fn new() -> Self {
        let mut node = Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            visible: false,
            model: None,
        };
        node.apply_pose(&PhonePose::INITIAL);
        node
    }

    /// Install the loaded model.
    pub fn attach_model(&mut self, model: PhoneModel) {
        self.model = Some(model);
    }

    /// Attached model, if loading succeeded.
    #[must_use]
    pub fn model(&self) -> Option<&PhoneModel> {
        self.model.as_ref()
    }

    /// Whether a model is attached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Whether the node should be drawn this frame.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible && self.is_loaded()
    }

    /// Overwrite transform and visibility from a derived pose.
    pub fn apply_pose(&mut self, pose: &PhonePose) {
        self.position.y = pose.position_y;
        self.rotation.x = pose.rotation_x;
        self.rotation.y = pose.rotation_y;
        self.visible = pose.visible;
    }

    /// Node rotation as a quaternion.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// World transform of the model: node translation and rotation applied
    /// to the recentered, scaled model.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let node =
            Mat4::from_rotation_translation(self.orientation(), self.position);
        self.model
            .as_ref()
            .map_or(node, |model| node * model.local_transform())
    }
}

impl Default for PhoneNode {
    fn default() -> Self {
        Self::new()
    }
}
