//! Easing functions for scroll-driven animation.
//!
//! Every curve maps a normalized progress value onto `[0, 1]` with
//! `f(0) = 0` and `f(1) = 1`. Inputs outside `[0, 1]` are clamped first.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    /// Quadratic ease-out: `1 - (1-t)²`.
    QuadraticOut,
    /// Cubic ease-out: `1 - (1-t)³`.
    CubicOut,
    /// Quartic ease-out: `1 - (1-t)⁴`.
    QuarticOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::QuadraticOut => 1.0 - (1.0 - t).powi(2),
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::QuarticOut => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 3] = [
        EasingFunction::QuadraticOut,
        EasingFunction::CubicOut,
        EasingFunction::QuarticOut,
    ];

    #[test]
    fn test_endpoints() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f:?} at 0");
            assert!((f.evaluate(1.0) - 1.0).abs() < 1e-6, "{f:?} at 1");
        }
    }

    #[test]
    fn test_input_clamping() {
        for f in ALL {
            assert_eq!(f.evaluate(-0.5), 0.0);
            assert!((f.evaluate(1.5) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
    }

    #[test]
    fn test_cubic_out() {
        assert!((EasingFunction::CubicOut.evaluate(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_quartic_out() {
        assert!(
            (EasingFunction::QuarticOut.evaluate(0.5) - 0.9375).abs() < 1e-6
        );
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        for f in [EasingFunction::CubicOut, EasingFunction::QuarticOut] {
            let mut prev = f.evaluate(0.0);
            for i in 1..=100 {
                let v = f.evaluate(i as f32 / 100.0);
                assert!(v >= prev, "{f:?} decreased at step {i}");
                prev = v;
            }
        }
    }
}
