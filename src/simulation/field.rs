//! Force-field sampling for visualization
//!
//! For every sample point, sums the force each body would exert on it and
//! encodes the result into the point's transform: rotation follows the
//! field direction, `scale.x` grows with log-magnitude and saturates.

use crate::simulation::forces::ForceLaw;
use crate::simulation::states::{Body, NVec2, SamplePoint};

/// Visual constants mapping a force magnitude to a line length
///
/// `length = min_scale + scale_range * clamp(ln(|f| + 1) / log_divisor, 0, 1)`,
/// so lengths always land in `[min_scale, min_scale + scale_range]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub min_scale: f64,
    pub scale_range: f64,
    pub log_divisor: f64,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            min_scale: 0.005,
            scale_range: 0.045,
            log_divisor: 3.0,
        }
    }
}

impl FieldStyle {
    pub fn line_length(&self, magnitude: f64) -> f64 {
        // ln_1p(0) == 0, so a zero field maps to exactly min_scale
        let t = (magnitude.ln_1p() / self.log_divisor).clamp(0.0, 1.0);
        self.min_scale + self.scale_range * t
    }

    pub fn max_scale(&self) -> f64 {
        self.min_scale + self.scale_range
    }
}

/// Stateless apart from its style constants
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VectorFieldSampler {
    pub style: FieldStyle,
}

impl VectorFieldSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: FieldStyle) -> Self {
        Self { style }
    }

    /// Net force the `bodies` exert on a probe sitting at `point`
    ///
    /// Scales with `point.mass`; sample points are built with unit mass.
    pub fn net_force<F: ForceLaw>(law: &F, bodies: &[Body], point: &SamplePoint) -> NVec2 {
        bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + law.compute_force(b, point))
    }

    /// Re-aim and re-size every sample point. Bodies are only read.
    pub fn update<F: ForceLaw>(&self, law: &F, bodies: &[Body], sample_points: &mut [SamplePoint]) {
        for point in sample_points.iter_mut() {
            let direction = Self::net_force(law, bodies, point);

            point.transform.scale.x = self.style.line_length(direction.norm());
            // atan2(0, 0) == 0 here; the line is at min length so it doesn't matter
            point.transform.rotation = direction.y.atan2(direction.x);
        }
    }
}
