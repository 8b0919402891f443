use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};
use log::info;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Shape};

/// Component tagging a circle with its index into `Scenario.bodies`
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging a field line with its index into `Scenario.field`
#[derive(Component)]
struct FieldIndex(pub usize);

/// Simulation units -> pixels. The scene lives in [-1, 1]^2.
const SCALE: f32 = 300.0;

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;

pub fn run_2d(scenario: Scenario) {
    info!(
        "run_2d: starting Bevy 2D viewer with {} bodies and {} field points",
        scenario.bodies.len(),
        scenario.field.len()
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gravity Vector Field".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene_system)
        // physics + field sampling first, then copy into the render transforms
        .add_systems(
            Update,
            (physics_step_system, sync_body_transforms_system, sync_field_transforms_system).chain(),
        )
        .run();
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    // one mesh per distinct shape, shared by every object using it
    let mut mesh_cache: Vec<(Shape, Mesh2dHandle)> = Vec::new();
    let mut mesh_for = |shape: Shape, meshes: &mut Assets<Mesh>| -> Mesh2dHandle {
        if let Some((_, handle)) = mesh_cache.iter().find(|(s, _)| *s == shape) {
            return handle.clone();
        }
        let handle = Mesh2dHandle(meshes.add(shape_mesh(shape)));
        mesh_cache.push((shape, handle.clone()));
        handle
    };

    for (i, body) in scenario.bodies.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh_for(body.shape, &mut *meshes),
                material: materials.add(ColorMaterial::from(body_color(body))),
                // bodies draw over the field lines
                transform: to_bevy_transform(body, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    for (i, point) in scenario.field.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh_for(point.shape, &mut *meshes),
                material: materials.add(ColorMaterial::from(body_color(point))),
                transform: to_bevy_transform(point, 0.0),
                ..Default::default()
            },
            FieldIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step_frame();
}

fn sync_body_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.bodies.get(*i) {
            *transform = to_bevy_transform(b, 1.0);
        }
    }
}

fn sync_field_transforms_system(scenario: Res<Scenario>, mut query: Query<(&FieldIndex, &mut Transform)>) {
    for (FieldIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.field.get(*i) {
            *transform = to_bevy_transform(p, 0.0);
        }
    }
}

fn shape_mesh(shape: Shape) -> Mesh {
    match shape {
        Shape::Circle { sides } => Mesh::from(Circle::new(1.0).mesh().resolution(sides as usize)),
        Shape::Square { offset } => Mesh::from(Rectangle::new(1.0, 1.0))
            .translated_by(Vec3::new(offset.x as f32, offset.y as f32, 0.0)),
    }
}

fn body_color(b: &Body) -> Color {
    Color::srgb(b.color.x as f32, b.color.y as f32, b.color.z as f32)
}

fn to_bevy_transform(b: &Body, z: f32) -> Transform {
    let t = &b.transform;
    Transform {
        translation: Vec3::new(t.translation.x as f32 * SCALE, t.translation.y as f32 * SCALE, z),
        rotation: Quat::from_rotation_z(t.rotation as f32),
        scale: Vec3::new(t.scale.x as f32 * SCALE, t.scale.y as f32 * SCALE, 1.0),
    }
}
