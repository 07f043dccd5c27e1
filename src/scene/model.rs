//! Phone model asset: bounds of a glTF binary and the transform that
//! recenters it at the node origin.

use std::path::Path;

use glam::{Mat4, Vec3};

use crate::error::ShowcaseError;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box from two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Bounds of this box after an affine transform.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            let p = matrix.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Self::new(min, max)
    }
}

/// A loaded phone model, reduced to what the scene needs from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneModel {
    /// Bounds in model space, node transforms applied.
    pub bounds: Aabb,
    /// Uniform scale applied after recentering.
    pub scale: f32,
}

impl PhoneModel {
    /// Model with known bounds.
    #[must_use]
    pub fn new(bounds: Aabb, scale: f32) -> Self {
        Self { bounds, scale }
    }

    /// Parse a glTF binary (or JSON glTF with embedded buffers) and compute
    /// the bounds of its default scene.
    pub fn from_glb(bytes: &[u8], scale: f32) -> Result<Self, ShowcaseError> {
        let gltf = gltf::Gltf::from_slice(bytes)?;
        let scene = gltf
            .default_scene()
            .or_else(|| gltf.scenes().next())
            .ok_or_else(|| {
                ShowcaseError::ModelLoad("asset contains no scene".to_owned())
            })?;

        let mut bounds: Option<Aabb> = None;
        for node in scene.nodes() {
            accumulate_node_bounds(&node, Mat4::IDENTITY, &mut bounds);
        }
        let bounds = bounds.ok_or_else(|| {
            ShowcaseError::ModelLoad("asset contains no geometry".to_owned())
        })?;

        log::debug!(
            "phone model bounds {:?}..{:?} (size {:?})",
            bounds.min,
            bounds.max,
            bounds.size()
        );
        Ok(Self::new(bounds, scale))
    }

    /// Read and parse a glTF binary from disk.
    pub fn load(path: &Path, scale: f32) -> Result<Self, ShowcaseError> {
        let bytes = std::fs::read(path)?;
        Self::from_glb(&bytes, scale).map_err(|e| match e {
            ShowcaseError::ModelLoad(msg) => {
                ShowcaseError::ModelLoad(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Model-space transform placing the scaled model's center at the node
    /// origin.
    #[must_use]
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_translation(-self.bounds.center())
    }

    /// Size after scaling, in world units.
    #[must_use]
    pub fn scaled_size(&self) -> Vec3 {
        self.bounds.size() * self.scale
    }
}

fn accumulate_node_bounds(
    node: &gltf::Node<'_>,
    parent: Mat4,
    bounds: &mut Option<Aabb>,
) {
    let world =
        parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let bb = primitive.bounding_box();
            let local =
                Aabb::new(Vec3::from_array(bb.min), Vec3::from_array(bb.max));
            let placed = local.transformed(&world);
            *bounds = Some(match bounds {
                Some(existing) => existing.union(&placed),
                None => placed,
            });
        }
    }
    for child in node.children() {
        accumulate_node_bounds(&child, world, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal GLB: one triangle primitive with the given POSITION
    /// accessor bounds, placed by a node translation.
    fn glb(min: [f32; 3], max: [f32; 3], translation: [f32; 3]) -> Vec<u8> {
        let mut bin = Vec::new();
        for v in [min, max, [min[0], max[1], min[2]]] {
            for c in v {
                bin.extend_from_slice(&c.to_le_bytes());
            }
        }
        let json = serde_json::json!({
            "asset": { "version": "2.0" },
            "scene": 0,
            "scenes": [{ "nodes": [0] }],
            "nodes": [{ "mesh": 0, "translation": translation }],
            "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
            "accessors": [{
                "bufferView": 0,
                "componentType": 5126,
                "count": 3,
                "type": "VEC3",
                "min": min,
                "max": max,
            }],
            "bufferViews": [{ "buffer": 0, "byteLength": bin.len() }],
            "buffers": [{ "byteLength": bin.len() }],
        })
        .to_string();

        let mut json_bytes = json.into_bytes();
        while json_bytes.len() % 4 != 0 {
            json_bytes.push(b' ');
        }
        let total = 12 + 8 + json_bytes.len() + 8 + bin.len();

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"glTF");
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&(total as u32).to_le_bytes());
        out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(b"JSON");
        out.extend_from_slice(&json_bytes);
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin);
        out
    }

    #[test]
    fn bounds_include_node_translation() {
        let bytes = glb([-0.5, -1.0, -0.1], [0.5, 1.0, 0.1], [2.0, 0.0, 0.0]);
        let model = PhoneModel::from_glb(&bytes, 8.0).unwrap();
        assert!((model.bounds.min - Vec3::new(1.5, -1.0, -0.1)).length() < 1e-6);
        assert!((model.bounds.max - Vec3::new(2.5, 1.0, 0.1)).length() < 1e-6);
        assert!((model.scaled_size() - Vec3::new(8.0, 16.0, 1.6)).length() < 1e-5);
    }

    #[test]
    fn local_transform_recenters_then_scales() {
        let model = PhoneModel::new(
            Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 5.0, 1.0)),
            8.0,
        );
        let m = model.local_transform();
        assert!(m.transform_point3(model.bounds.center()).length() < 1e-6);
        let top = m.transform_point3(Vec3::new(2.0, 5.0, 1.0));
        assert!((top - Vec3::new(0.0, 16.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn garbage_bytes_are_a_load_error() {
        let err = PhoneModel::from_glb(b"not a model", 1.0).unwrap_err();
        assert!(matches!(err, ShowcaseError::ModelLoad(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PhoneModel::load(Path::new("/nonexistent/phone.glb"), 8.0)
            .unwrap_err();
        assert!(matches!(err, ShowcaseError::Io(_)));
    }

    #[test]
    fn aabb_transform_rotates_extent() {
        let aabb = Aabb::new(Vec3::new(-1.0, -2.0, 0.0), Vec3::new(1.0, 2.0, 0.0));
        let rotated =
            aabb.transformed(&Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));
        assert!((rotated.size() - Vec3::new(4.0, 2.0, 0.0)).length() < 1e-5);
    }
}
