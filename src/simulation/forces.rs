//! Pairwise force law for the gravity engine
//!
//! Defines the [`ForceLaw`] capability shared by integration and field
//! sampling, and [`GravitySimulator`], the inverse-square implementation.

use crate::simulation::states::{Body, NVec2};
use crate::simulation::integrator::substep_integrator;

/// Below this squared separation two bodies are treated as coincident and
/// exert no force on each other. A stability clamp, not physics.
pub const DISTANCE_SQUARED_EPSILON: f64 = 1e-10;

/// Anything that can tell how hard `source` pulls on `target`
///
/// Roles are explicit: the returned vector points along
/// `source.position - target.position` scaled by the law's magnitude.
/// Swapping the arguments must give the opposite vector.
pub trait ForceLaw {
    fn compute_force(&self, source: &Body, target: &Body) -> NVec2;
}

/// Newtonian gravity between point masses with a fixed strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySimulator {
    gravitational_strength: f64,
}

impl GravitySimulator {
    pub fn new(gravitational_strength: f64) -> Self {
        Self {
            gravitational_strength,
        }
    }

    pub fn gravitational_strength(&self) -> f64 {
        self.gravitational_strength
    }

    /// Advance `bodies` by `dt`, split into `substeps` equal semi-implicit
    /// Euler steps. More substeps are slower but stay stable through close
    /// encounters.
    pub fn update(&self, bodies: &mut [Body], dt: f64, substeps: u32) {
        substep_integrator(bodies, self, dt, substeps);
    }
}

impl ForceLaw for GravitySimulator {
    fn compute_force(&self, source: &Body, target: &Body) -> NVec2 {
        // offset points from target toward source
        let offset = source.position() - target.position();
        let distance_squared = offset.dot(&offset);

        // coincident bodies: drop the force instead of going singular
        if distance_squared.abs() < DISTANCE_SQUARED_EPSILON {
            return NVec2::zeros();
        }

        let magnitude =
            self.gravitational_strength * target.mass * source.mass / distance_squared;
        magnitude * offset / distance_squared.sqrt()
    }
}
