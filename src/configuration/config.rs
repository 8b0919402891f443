//! Configuration types for loading scenes from YAML.
//!
//! A thin, `serde`-deserializable description of a scene:
//!
//! - [`SimulationConfig`] – force strength and per-frame stepping
//! - [`FieldConfig`]      – sample grid size and line-length constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! Every field has a default, so a file only needs what it changes.
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   gravitational_strength: 0.81
//!   dt: 0.016666666666666666   # seconds per frame
//!   substeps: 5                # integration steps per frame
//!
//! field:
//!   grid_count: 40             # 40 x 40 sample points over [-1, 1]^2
//!   min_scale: 0.005
//!   scale_range: 0.045
//!   log_divisor: 3.0
//!   probe_mass: 1.0
//!
//! bodies:
//!   - position: [ 0.5, 0.5 ]
//!     velocity: [ -0.5, 0.0 ]
//!     mass: 1.0
//!     color: [ 1.0, 0.0, 0.0 ]
//!     scale: 0.05
//! ```

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Force law and time stepping
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_strength: f64,
    pub dt: f64,       // frame time step
    pub substeps: u32, // stability knob, >= 1
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_strength: 0.81,
            dt: 1.0 / 60.0,
            substeps: 5,
        }
    }
}

/// Sample grid and visual constants for the force field
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub grid_count: usize,  // points per side
    pub min_scale: f64,     // shortest line
    pub scale_range: f64,   // added length at saturation
    pub log_divisor: f64,   // ln(|f| + 1) at which lines saturate
    pub probe_mass: f64,    // target mass used in the force law
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid_count: 40,
            min_scale: 0.005,
            scale_range: 0.045,
            log_divisor: 3.0,
            probe_mass: 1.0,
        }
    }
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_color")]
    pub color: [f64; 3],
    #[serde(default = "default_body_scale")]
    pub scale: f64, // render radius
}

fn default_mass() -> f64 {
    1.0
}

fn default_color() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_body_scale() -> f64 {
    0.05
}

/// Top-level scene configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig,
    pub field: FieldConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for ScenarioConfig {
    /// Red and blue bodies passing each other, the classic two-body scene
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            field: FieldConfig::default(),
            bodies: vec![
                BodyConfig {
                    position: [0.5, 0.5],
                    velocity: [-0.5, 0.0],
                    mass: 1.0,
                    color: [1.0, 0.0, 0.0],
                    scale: 0.05,
                },
                BodyConfig {
                    position: [-0.45, -0.25],
                    velocity: [0.5, 0.0],
                    mass: 1.0,
                    color: [0.0, 0.0, 1.0],
                    scale: 0.05,
                },
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s).context("invalid scenario yaml")?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        Ok(cfg)
    }

    /// Reject inputs the engine would turn into NaNs. The engine itself
    /// never checks, so this runs before a `Scenario` is built.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        ensure!(sim.dt.is_finite() && sim.dt > 0.0, "dt must be positive, got {}", sim.dt);
        ensure!(sim.substeps >= 1, "substeps must be at least 1");
        ensure!(
            sim.gravitational_strength.is_finite(),
            "gravitational_strength must be finite"
        );

        let field = &self.field;
        ensure!(field.grid_count >= 1, "field.grid_count must be at least 1");
        ensure!(
            field.log_divisor.is_finite() && field.log_divisor > 0.0,
            "field.log_divisor must be positive"
        );
        ensure!(
            field.probe_mass.is_finite() && field.probe_mass > 0.0,
            "field.probe_mass must be positive"
        );

        for (i, b) in self.bodies.iter().enumerate() {
            ensure!(
                b.mass.is_finite() && b.mass > 0.0,
                "body {i}: mass must be positive, got {}",
                b.mass
            );
            ensure!(
                b.position.iter().chain(b.velocity.iter()).all(|c| c.is_finite()),
                "body {i}: position and velocity must be finite"
            );
        }
        Ok(())
    }
}
