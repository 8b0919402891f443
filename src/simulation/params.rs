//! Numerical parameters for the per-frame host step
//!
//! `Parameters` holds runtime settings:
//! - frame time step `dt` and how many substeps it is split into,
//! - gravitational strength handed to the simulator

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub gravitational_strength: f64,
    pub dt: f64, // frame step size
    pub substeps: u32, // integration steps per frame
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravitational_strength: 0.81,
            dt: 1.0 / 60.0,
            substeps: 5,
        }
    }
}
