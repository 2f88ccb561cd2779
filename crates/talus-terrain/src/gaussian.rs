//! Anisotropic 2D Gaussian elevation sampler.
//!
//! Produces a single smooth bump: `height` at the center, decaying along each
//! horizontal axis at a rate set by that axis' radius. Contours of equal
//! elevation are axis-aligned ellipses.

use glam::DVec2;
use thiserror::Error;

/// Shape of the Gaussian bump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianParams {
    /// World-plane position of the peak.
    pub center: DVec2,
    /// Standard deviation along x and y. Both components must be strictly positive.
    pub radius: DVec2,
    /// Elevation at the peak.
    pub height: f64,
}

/// Errors raised when constructing a [`GaussianSurfaceSampler`].
#[derive(Debug, Error, PartialEq)]
pub enum GaussianParamsError {
    /// A radius component is zero or negative.
    #[error("radius along {axis} must be strictly positive, got {value}")]
    NonPositiveRadius {
        /// `'x'` or `'y'`.
        axis: char,
        /// Rejected radius.
        value: f64,
    },
    /// A parameter is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending parameter.
        field: &'static str,
    },
}

impl GaussianParams {
    /// Check the invariants the sampler relies on.
    ///
    /// # Errors
    ///
    /// Returns [`GaussianParamsError::NonFinite`] if any component is NaN or
    /// infinite, and [`GaussianParamsError::NonPositiveRadius`] if a radius is
    /// not strictly positive.
    pub fn validate(&self) -> Result<(), GaussianParamsError> {
        if !self.center.is_finite() {
            return Err(GaussianParamsError::NonFinite { field: "center" });
        }
        if !self.radius.is_finite() {
            return Err(GaussianParamsError::NonFinite { field: "radius" });
        }
        if !self.height.is_finite() {
            return Err(GaussianParamsError::NonFinite { field: "height" });
        }
        if self.radius.x <= 0.0 {
            return Err(GaussianParamsError::NonPositiveRadius {
                axis: 'x',
                value: self.radius.x,
            });
        }
        if self.radius.y <= 0.0 {
            return Err(GaussianParamsError::NonPositiveRadius {
                axis: 'y',
                value: self.radius.y,
            });
        }
        Ok(())
    }
}

/// Evaluates `height * exp(-(dx² / 2rx² + dy² / 2ry²))` at world-plane positions.
///
/// The tail never reaches zero: positions far from the center still receive a
/// tiny positive elevation (or exactly `0.0` once `exp` underflows). No
/// clamping is applied.
#[derive(Clone, Debug)]
pub struct GaussianSurfaceSampler {
    params: GaussianParams,
}

impl GaussianSurfaceSampler {
    /// Create a sampler after validating `params`.
    ///
    /// # Errors
    ///
    /// See [`GaussianParams::validate`].
    pub fn new(params: GaussianParams) -> Result<Self, GaussianParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Sample the elevation at a world-plane position.
    ///
    /// The offset is divided by the radius before squaring, so the result is
    /// finite for every radius `validate` accepts.
    pub fn sample(&self, position: DVec2) -> f64 {
        let q = (position - self.params.center) / self.params.radius;
        self.params.height * (-0.5 * q.length_squared()).exp()
    }

    /// Return a reference to the sampler parameters.
    pub fn params(&self) -> &GaussianParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler(center: DVec2, radius: DVec2, height: f64) -> GaussianSurfaceSampler {
        GaussianSurfaceSampler::new(GaussianParams {
            center,
            radius,
            height,
        })
        .unwrap()
    }

    #[test]
    fn test_center_returns_exact_height() {
        let cases = [
            (DVec2::ZERO, DVec2::splat(200.0), 400.0),
            (DVec2::new(-37.5, 12.25), DVec2::new(10.0, 1000.0), 20.0),
            (DVec2::new(1e4, -3e3), DVec2::new(55.0, 7.0), 123.456),
        ];
        for (center, radius, height) in cases {
            let s = sampler(center, radius, height);
            assert_eq!(s.sample(center), height, "center {center:?}");
        }
    }

    #[test]
    fn test_monotonic_decay_along_x() {
        let s = sampler(DVec2::new(5.0, -5.0), DVec2::new(200.0, 80.0), 400.0);
        let mut prev = s.sample(DVec2::new(5.0, -5.0));
        for i in 1..200 {
            let dx = i as f64 * 5.0;
            let h = s.sample(DVec2::new(5.0 + dx, -5.0));
            assert!(h < prev, "elevation must decrease: {prev} -> {h} at dx={dx}");
            prev = h;
        }
    }

    #[test]
    fn test_monotonic_decay_along_y() {
        let s = sampler(DVec2::ZERO, DVec2::new(40.0, 300.0), 250.0);
        let mut prev = s.sample(DVec2::ZERO);
        for i in 1..200 {
            let h = s.sample(DVec2::new(0.0, -(i as f64) * 7.0));
            assert!(h < prev, "elevation must decrease at step {i}");
            prev = h;
        }
    }

    #[test]
    fn test_point_symmetry() {
        let center = DVec2::new(12.0, -40.0);
        let s = sampler(center, DVec2::new(150.0, 90.0), 300.0);
        for &(dx, dy) in &[(1.0, 2.0), (-75.0, 33.0), (400.0, -400.0), (0.5, 0.0)] {
            let d = DVec2::new(dx, dy);
            assert_eq!(s.sample(center + d), s.sample(center - d), "offset {d:?}");
        }
    }

    #[test]
    fn test_one_radius_away_is_exp_minus_half() {
        let s = sampler(DVec2::ZERO, DVec2::new(200.0, 50.0), 400.0);
        let expected = 400.0 * (-0.5_f64).exp();
        assert!((s.sample(DVec2::new(200.0, 0.0)) - expected).abs() < 1e-9);
        assert!((s.sample(DVec2::new(0.0, 50.0)) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_elliptical_contours() {
        let s = sampler(DVec2::ZERO, DVec2::new(300.0, 100.0), 400.0);
        let along_wide = s.sample(DVec2::new(150.0, 0.0));
        let along_narrow = s.sample(DVec2::new(0.0, 150.0));
        assert!(along_wide > along_narrow);
        assert!((s.sample(DVec2::new(150.0, 0.0)) - s.sample(DVec2::new(0.0, 50.0))).abs() < 1e-9);
    }

    #[test]
    fn test_far_tail_is_tiny_positive() {
        let s = sampler(DVec2::ZERO, DVec2::splat(200.0), 400.0);
        let h = s.sample(DVec2::new(1400.0, 0.0));
        assert!(h > 0.0, "tail must stay positive, got {h}");
        assert!(h < 1e-6, "tail should be negligible, got {h}");
    }

    #[test]
    fn test_tiny_radius_keeps_exact_peak() {
        let s = sampler(DVec2::ZERO, DVec2::splat(1e-170), 100.0);
        assert_eq!(s.sample(DVec2::ZERO), 100.0);
        assert_eq!(s.sample(DVec2::new(1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_huge_radius_stays_finite() {
        let s = sampler(DVec2::ZERO, DVec2::splat(1e160), 100.0);
        assert_eq!(s.sample(DVec2::ZERO), 100.0);
        for x in [1e150, 1e300, f64::MAX] {
            let h = s.sample(DVec2::new(x, 0.0));
            assert!(h.is_finite(), "x={x} gave {h}");
            assert!((0.0..=100.0).contains(&h), "x={x} gave {h}");
        }
        assert_eq!(s.sample(DVec2::new(1e300, 0.0)), 0.0);
    }

    #[test]
    fn test_mixed_extreme_radii_stay_finite() {
        let s = sampler(DVec2::new(3.0, -4.0), DVec2::new(1e-170, 1e160), 50.0);
        assert_eq!(s.sample(DVec2::new(3.0, -4.0)), 50.0);
        for p in [DVec2::new(3.0, 1e300), DVec2::new(-1e300, -4.0), DVec2::splat(1e-300)] {
            let h = s.sample(p);
            assert!(h.is_finite() && (0.0..=50.0).contains(&h), "{p:?} gave {h}");
        }
    }

    #[test]
    fn test_deterministic() {
        let s = sampler(DVec2::ZERO, DVec2::new(120.0, 220.0), 310.0);
        let p = DVec2::new(77.0, -13.0);
        assert_eq!(s.sample(p).to_bits(), s.sample(p).to_bits());
    }

    #[test]
    fn test_zero_radius_rejected() {
        let result = GaussianSurfaceSampler::new(GaussianParams {
            center: DVec2::ZERO,
            radius: DVec2::new(0.0, 10.0),
            height: 100.0,
        });
        assert_eq!(
            result.unwrap_err(),
            GaussianParamsError::NonPositiveRadius {
                axis: 'x',
                value: 0.0
            }
        );
    }

    #[test]
    fn test_negative_radius_rejected() {
        let result = GaussianSurfaceSampler::new(GaussianParams {
            center: DVec2::ZERO,
            radius: DVec2::new(10.0, -1.0),
            height: 100.0,
        });
        assert!(matches!(
            result,
            Err(GaussianParamsError::NonPositiveRadius { axis: 'y', .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let nan_height = GaussianSurfaceSampler::new(GaussianParams {
            center: DVec2::ZERO,
            radius: DVec2::splat(10.0),
            height: f64::NAN,
        });
        assert!(matches!(
            nan_height,
            Err(GaussianParamsError::NonFinite { field: "height" })
        ));

        let inf_radius = GaussianSurfaceSampler::new(GaussianParams {
            center: DVec2::ZERO,
            radius: DVec2::new(f64::INFINITY, 10.0),
            height: 1.0,
        });
        assert!(matches!(
            inf_radius,
            Err(GaussianParamsError::NonFinite { field: "radius" })
        ));
    }
}
