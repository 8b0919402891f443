use std::time::Instant;
use crate::simulation::states::{Body, NVec2, SamplePoint};
use crate::simulation::forces::GravitySimulator;
use crate::simulation::field::VectorFieldSampler;
use crate::simulation::scenario::build_field_grid;
use crate::configuration::config::FieldConfig;

/// Helper to build `n` bodies spread over [-1, 1]^2
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new((i_f * 0.37).sin(), (i_f * 0.13).cos());
            Body::new(1.0, x, NVec2::zeros())
        })
        .collect()
}

fn make_field(grid_count: usize) -> Vec<SamplePoint> {
    build_field_grid(&FieldConfig {
        grid_count,
        ..Default::default()
    })
}

/// Time one frame of `GravitySimulator::update` for growing body counts
pub fn bench_update() {
    let ns = [2, 4, 8, 16, 32, 64, 128, 256];
    let frames = 60;
    let dt = 1.0 / 60.0;
    let simulator = GravitySimulator::new(0.81);

    for n in ns {
        for substeps in [1, 5] {
            let mut bodies = make_bodies(n);

            // Warm up
            simulator.update(&mut bodies, dt, substeps);

            let t0 = Instant::now();
            for _ in 0..frames {
                simulator.update(&mut bodies, dt, substeps);
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

            println!("N = {n:4}, substeps = {substeps}, update = {ms:8.4} ms/frame");
        }
    }
}

/// Time field sampling for growing grids against a fixed body set
pub fn bench_field() {
    let grid_counts = [10, 20, 40, 80];
    let frames = 60;
    let simulator = GravitySimulator::new(0.81);
    let sampler = VectorFieldSampler::new();
    let bodies = make_bodies(8);

    for grid_count in grid_counts {
        let mut field = make_field(grid_count);

        // Warm up
        sampler.update(&simulator, &bodies, &mut field);

        let t0 = Instant::now();
        for _ in 0..frames {
            sampler.update(&simulator, &bodies, &mut field);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("grid = {grid_count:3}x{grid_count:<3} ({:5} points), field = {ms:8.4} ms/frame", field.len());
    }
}
