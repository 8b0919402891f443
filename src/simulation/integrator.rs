//! Fixed-step time integration for the body set
//!
//! Semi-implicit (symplectic) Euler: every pairwise velocity kick of a step
//! is applied first, then every body drifts with its new velocity.

use super::states::Body;
use super::forces::ForceLaw;

/// Advance `bodies` by `dt` split into `substeps` equal steps
/// `substeps == 0` leaves the bodies untouched
pub fn substep_integrator<F: ForceLaw>(bodies: &mut [Body], law: &F, dt: f64, substeps: u32) {
    if substeps == 0 {
        return;
    }
    let step_dt = dt / substeps as f64;
    for _ in 0..substeps {
        euler_step(bodies, law, step_dt);
    }
}

/// One semi-implicit Euler step of size `dt`
pub fn euler_step<F: ForceLaw>(bodies: &mut [Body], law: &F, dt: f64) {
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // Kick: visit each unordered pair (i, j) with i < j exactly once.
    // Positions are not touched here, so every pair sees the same snapshot.
    for i in 0..n {
        for j in (i + 1)..n {
            // force on body j from body i, pointing toward i
            let force = law.compute_force(&bodies[i], &bodies[j]);

            // equal and opposite, each scaled by its own mass
            let mass_i = bodies[i].mass;
            let mass_j = bodies[j].mass;
            bodies[i].velocity -= dt * force / mass_i;
            bodies[j].velocity += dt * force / mass_j;
        }
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in bodies.iter_mut() {
        b.transform.translation += dt * b.velocity;
    }
}
