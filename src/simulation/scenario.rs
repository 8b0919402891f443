//! Build a runnable scene from configuration and drive it frame by frame
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! containing:
//! - numerical parameters (`Parameters`)
//! - the body set and the force-field sample grid
//! - the gravity simulator and field sampler
//!
//! The scenario is inserted into Bevy as a `Resource` and stepped by the
//! viewer, or stepped directly in headless mode.

use bevy::prelude::Resource;
use log::{debug, info};

use crate::configuration::config::{BodyConfig, FieldConfig, ScenarioConfig};
use crate::simulation::field::{FieldStyle, VectorFieldSampler};
use crate::simulation::forces::GravitySimulator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{total_momentum, Body, NVec2, NVec3, SamplePoint, Shape};

/// Sample points start at, and never shrink below, this line length
const FIELD_POINT_SCALE: f64 = 0.005;

/// Circle resolution for body meshes
const BODY_SIDES: u32 = 64;

#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub simulator: GravitySimulator,
    pub sampler: VectorFieldSampler,
    pub bodies: Vec<Body>,
    pub field: Vec<SamplePoint>,
    pub frame: u64,
    pub time: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies: Vec<Body> = cfg.bodies.iter().map(body_from_config).collect();

        let s_cfg = cfg.simulation;
        let parameters = Parameters {
            gravitational_strength: s_cfg.gravitational_strength,
            dt: s_cfg.dt,
            substeps: s_cfg.substeps,
        };

        let sampler = VectorFieldSampler::with_style(FieldStyle {
            min_scale: cfg.field.min_scale,
            scale_range: cfg.field.scale_range,
            log_divisor: cfg.field.log_divisor,
        });

        let field = build_field_grid(&cfg.field);

        info!(
            "scenario: {} bodies, {} field points, G = {}, dt = {}, substeps = {}",
            bodies.len(),
            field.len(),
            parameters.gravitational_strength,
            parameters.dt,
            parameters.substeps
        );

        let mut scenario = Self {
            simulator: GravitySimulator::new(parameters.gravitational_strength),
            parameters,
            sampler,
            bodies,
            field,
            frame: 0,
            time: 0.0,
        };
        // aim the field lines before the first frame is drawn
        scenario.sample_field();
        scenario
    }

    /// One host frame: integrate, then sample the field from the new
    /// positions. The order matters, the field must see this frame's bodies.
    pub fn step_frame(&mut self) {
        let Parameters { dt, substeps, .. } = self.parameters;
        self.simulator.update(&mut self.bodies, dt, substeps);
        self.sample_field();

        self.frame += 1;
        self.time += dt;
    }

    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step_frame();
            if self.frame % 60 == 0 {
                let p = self.total_momentum();
                debug!(
                    "frame {}: t = {:.3}, momentum = ({:.3e}, {:.3e})",
                    self.frame, self.time, p.x, p.y
                );
            }
        }
    }

    pub fn sample_field(&mut self) {
        self.sampler.update(&self.simulator, &self.bodies, &mut self.field);
    }

    pub fn total_momentum(&self) -> NVec2 {
        total_momentum(&self.bodies)
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    Body::new(
        bc.mass,
        NVec2::new(bc.position[0], bc.position[1]),
        NVec2::new(bc.velocity[0], bc.velocity[1]),
    )
    .with_color(NVec3::new(bc.color[0], bc.color[1], bc.color[2]))
    .with_scale(NVec2::new(bc.scale, bc.scale))
    .with_shape(Shape::Circle { sides: BODY_SIDES })
}

/// `grid_count x grid_count` probes at cell centers of `[-1, 1]^2`
pub fn build_field_grid(cfg: &FieldConfig) -> Vec<SamplePoint> {
    let n = cfg.grid_count;
    let cell = 2.0 / n as f64;
    let mut field = Vec::with_capacity(n * n);

    for i in 0..n {
        for j in 0..n {
            let position = NVec2::new(
                -1.0 + (i as f64 + 0.5) * cell,
                -1.0 + (j as f64 + 0.5) * cell,
            );
            let mut point = Body::sample_point(position, FIELD_POINT_SCALE);
            point.mass = cfg.probe_mass;
            field.push(point);
        }
    }
    field
}
