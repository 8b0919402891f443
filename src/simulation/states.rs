//! Core state types for the gravity simulation.
//!
//! A `Body` is a point mass with a 2D transform. Its position *is*
//! `transform.translation`, so whatever the physics writes is what the
//! renderer reads. Sample points for the force field reuse the same struct.

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Renderable shape handle. Opaque to the physics, only the viewer reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle of radius 1 approximated by `sides` triangles
    Circle { sides: u32 },
    /// Unit square shifted by `offset`, so rotation pivots off-center
    Square { offset: NVec2 },
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Circle { sides: 64 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d {
    pub translation: NVec2, // position
    pub scale: NVec2,
    pub rotation: f64, // radians
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            translation: NVec2::zeros(),
            scale: NVec2::new(1.0, 1.0),
            rotation: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub mass: f64,
    pub velocity: NVec2,
    pub transform: Transform2d,
    pub color: NVec3, // render only
    pub shape: Shape,
}

/// A massless probe in the force field. Structurally a `Body`; only
/// `VectorFieldSampler` writes to it and its mass should stay at
/// [`PROBE_MASS`].
pub type SamplePoint = Body;

/// Mass given to sample points. The force law multiplies by the target
/// mass, so keeping this fixed keeps the field independent of the probe.
pub const PROBE_MASS: f64 = 1.0;

impl Body {
    pub fn new(mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Self {
            mass,
            velocity,
            transform: Transform2d {
                translation: position,
                ..Default::default()
            },
            color: NVec3::new(1.0, 1.0, 1.0),
            shape: Shape::default(),
        }
    }

    /// Probe at `position` with unit mass, square line shape and minimum scale.
    pub fn sample_point(position: NVec2, scale: f64) -> SamplePoint {
        Body::new(PROBE_MASS, position, NVec2::zeros())
            .with_scale(NVec2::new(scale, scale))
            .with_shape(Shape::Square {
                offset: NVec2::new(0.5, 0.0),
            })
    }

    pub fn with_color(mut self, color: NVec3) -> Self {
        self.color = color;
        self
    }

    pub fn with_scale(mut self, scale: NVec2) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn position(&self) -> NVec2 {
        self.transform.translation
    }

    pub fn momentum(&self) -> NVec2 {
        self.mass * self.velocity
    }
}

/// Sum of `m * v` over a body slice
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
}
