//! Normalized scroll progress and the cell shared between the scroll
//! handler and the frame loop.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// How far the page has been scrolled, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    /// Top of the page.
    pub const START: Self = Self(0.0);
    /// Bottom of the page.
    pub const END: Self = Self(1.0);

    /// Sanitize a raw ratio: NaN becomes 0, everything else is clamped
    /// into `[0, 1]`.
    #[must_use]
    pub fn new(raw: f32) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    /// The progress value.
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Scroll geometry as reported by the host page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    /// Vertical scroll offset of the viewport.
    pub scroll_top: f64,
    /// Total scrollable document height.
    pub document_height: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// `scroll_top / (document_height - viewport_height)`, or 0 when the
    /// document does not scroll.
    #[must_use]
    pub fn progress(&self) -> ScrollProgress {
        let range = self.document_height - self.viewport_height;
        if range > 0.0 {
            ScrollProgress::new((self.scroll_top / range) as f32)
        } else {
            ScrollProgress::START
        }
    }
}

/// Lock-free progress cell: the scroll handler writes, the frame loop
/// reads. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedProgress {
    bits: Arc<AtomicU32>,
}

impl SharedProgress {
    /// New cell holding [`ScrollProgress::START`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new progress value.
    pub fn store(&self, progress: ScrollProgress) {
        self.bits.store(progress.value().to_bits(), Ordering::Relaxed);
    }

    /// Latest published progress value.
    #[must_use]
    pub fn load(&self) -> ScrollProgress {
        // Only sanitized values are ever stored, so no re-clamp needed.
        ScrollProgress(f32::from_bits(self.bits.load(Ordering::Relaxed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_out_of_range_values() {
        assert_eq!(ScrollProgress::new(f32::NAN).value(), 0.0);
        assert_eq!(ScrollProgress::new(-0.25).value(), 0.0);
        assert_eq!(ScrollProgress::new(1.75).value(), 1.0);
        assert_eq!(ScrollProgress::new(f32::INFINITY).value(), 1.0);
        assert_eq!(ScrollProgress::new(0.42).value(), 0.42);
    }

    #[test]
    fn geometry_progress_ratio() {
        let geometry = ScrollGeometry {
            scroll_top: 250.0,
            document_height: 1500.0,
            viewport_height: 1000.0,
        };
        assert_eq!(geometry.progress().value(), 0.5);
    }

    #[test]
    fn non_scrollable_document_is_zero() {
        let short = ScrollGeometry {
            scroll_top: 0.0,
            document_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(short.progress(), ScrollProgress::START);

        let exact = ScrollGeometry {
            scroll_top: 12.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(exact.progress(), ScrollProgress::START);
    }

    #[test]
    fn negative_offset_is_clamped() {
        // Elastic overscroll reports negative offsets.
        let geometry = ScrollGeometry {
            scroll_top: -40.0,
            document_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(geometry.progress(), ScrollProgress::START);
    }

    #[test]
    fn shared_progress_is_shared_between_clones() {
        let writer = SharedProgress::new();
        let reader = writer.clone();
        assert_eq!(reader.load(), ScrollProgress::START);
        writer.store(ScrollProgress::new(0.65));
        assert_eq!(reader.load().value(), 0.65);
    }
}
