use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::{Cuboid, Sphere as SphereShape};
use tracing::{debug, info};

use crate::simulation::scenario::Scenario;

/// Component tagging each sphere mesh with its body index into the simulation
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the caption text
#[derive(Component)]
struct Caption;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 24.0;

const TITLE: &str = "Collision - Physics 3D\nLeft click to toggle Gravity.";

/// Open a window and run the scenario until it is closed.
/// Physics runs in the fixed-timestep schedule at 1/dt Hz.
pub fn run_3d(scenario: Scenario) {
    info!("run_3d: starting Bevy 3D viewer with {} bodies", scenario.simulation.system.len());
    let dt = scenario.simulation.dt();

    App::new()
        .insert_resource(scenario)
        .insert_resource(Time::<Fixed>::from_seconds(dt))
        // logging is set up by the binary
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_3d)
        .add_systems(FixedUpdate, physics_step_3d)
        .add_systems(Update, (toggle_gravity_on_click, sync_transforms_3d, update_caption))
        .run();
}

/// Startup system: camera, light, the box, one sphere per body, and the caption
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    let sim = &scenario.simulation;
    let center = sim.boundary.center();
    let size = sim.boundary.size();

    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(0.0, center[1] as f32, CAMERA_DISTANCE)
            .looking_at(Vec3::new(0.0, center[1] as f32, 0.0), Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 4_000_000.0,
            range: 100.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(4.0, center[1] as f32 + 8.0, CAMERA_DISTANCE * 0.5),
        ..Default::default()
    });

    // Translucent box showing the boundary
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(size[0] as f32, size[1] as f32, size[2] as f32).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(0.9, 0.9, 0.9, 0.2),
            alpha_mode: AlphaMode::Blend,
            ..Default::default()
        }),
        transform: Transform::from_xyz(center[0] as f32, center[1] as f32, center[2] as f32),
        ..Default::default()
    });

    for (i, s) in sim.system.spheres.iter().enumerate() {
        // tracked body is drawn red
        let color = if i == scenario.track {
            Color::srgb(1.0, 0.0, 0.0)
        } else {
            Color::srgb(1.0, 1.0, 1.0)
        };
        let x = s.position();

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(SphereShape::new(s.radius() as f32).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: color,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(x.x as f32, x.y as f32, x.z as f32),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    commands.spawn((
        TextBundle::from_section(
            caption_text(sim.collisions(), sim.gravity_enabled()),
            TextStyle {
                font_size: 18.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..Default::default()
        }),
        Caption,
    ));
}

fn caption_text(collisions: u64, gravity_enabled: bool) -> String {
    let gravity = if gravity_enabled { "on" } else { "off" };
    format!("{TITLE}\nGravity: {gravity}\nCollision Count: {collisions}")
}

/// Input runs in `Update`, so a click always lands between two physics frames
fn toggle_gravity_on_click(buttons: Res<ButtonInput<MouseButton>>, mut scenario: ResMut<Scenario>) {
    if buttons.just_pressed(MouseButton::Left) {
        let enabled = scenario.simulation.toggle_gravity();
        info!(enabled, "gravity toggled");
    }
}

/// Fixed-rate physics. A failed frame is rolled back by the driver, so the
/// last valid state stays on screen.
fn physics_step_3d(mut scenario: ResMut<Scenario>) {
    if let Err(e) = scenario.simulation.run_frame() {
        debug!(t = scenario.simulation.t(), "viewer frame rolled back: {e}");
    }
}

fn sync_transforms_3d(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(s) = scenario.simulation.system.spheres.get(*i) {
            let x = s.position();
            transform.translation = Vec3::new(x.x as f32, x.y as f32, x.z as f32);
        }
    }
}

fn update_caption(scenario: Res<Scenario>, mut query: Query<&mut Text, With<Caption>>) {
    let sim = &scenario.simulation;
    for mut text in &mut query {
        text.sections[0].value = caption_text(sim.collisions(), sim.gravity_enabled());
    }
}
