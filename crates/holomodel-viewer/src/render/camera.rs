use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::graph::GraphState;

pub const MIN_DISTANCE: f32 = 10.0;
pub const MAX_DISTANCE: f32 = 1000.0;
const INITIAL_DISTANCE: f32 = 200.0;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraOrbit {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: INITIAL_DISTANCE,
            target: Vec3::ZERO,
        }
    }
}

impl CameraOrbit {
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    pub fn zoom(&mut self, steps: f32) {
        // Multiplicative so the wheel feels the same near and far.
        self.distance = (self.distance * 0.9f32.powf(steps)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn pan(&mut self, delta: Vec2) {
        let right = Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin());
        let scale = self.distance * 0.0015;
        self.target -= right * delta.x * scale;
        self.target += Vec3::Y * delta.y * scale;
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * 0.005;
        self.pitch = (self.pitch + delta.y * 0.005).clamp(-1.5, 1.5);
    }
}

pub fn setup_scene(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 4000.0,
            ..default()
        },
        transform: Transform::from_xyz(0.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    for (pos, color) in [
        (Vec3::splat(-100.0), Color::srgb(0.0, 1.0, 1.0)),
        (Vec3::splat(100.0), Color::srgb(1.0, 0.0, 1.0)),
    ] {
        commands.spawn(PointLightBundle {
            point_light: PointLight {
                color,
                intensity: 40_000_000.0,
                range: 400.0,
                ..default()
            },
            transform: Transform::from_translation(pos),
            ..default()
        });
    }

    let orbit = CameraOrbit::default();
    commands.spawn(Camera3dBundle {
        projection: PerspectiveProjection {
            fov: 50f32.to_radians(),
            far: 5000.0,
            ..default()
        }
        .into(),
        transform: Transform::from_translation(orbit.position()).looking_at(orbit.target, Vec3::Y),
        ..default()
    });
    commands.insert_resource(orbit);
}

/// Left drag rotates, right drag pans, the wheel zooms. Input that egui
/// claims never reaches the camera.
pub fn orbit_camera(
    mut contexts: EguiContexts,
    mut st: ResMut<GraphState>,
    mut orbit: ResMut<CameraOrbit>,
    mut cam_q: Query<&mut Transform, With<Camera3d>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut scroll: EventReader<MouseWheel>,
) {
    if std::mem::take(&mut st.ui.reset_camera) {
        *orbit = CameraOrbit::default();
    }

    let delta: Vec2 = motion.read().map(|ev| ev.delta).sum();
    let wheel: f32 = scroll
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        })
        .sum();

    if !contexts.ctx_mut().wants_pointer_input() {
        if buttons.pressed(MouseButton::Left) {
            orbit.rotate(delta);
        } else if buttons.pressed(MouseButton::Right) || buttons.pressed(MouseButton::Middle) {
            orbit.pan(delta);
        }
        if wheel != 0.0 {
            orbit.zoom(wheel);
        }
    }

    let Ok(mut cam_tf) = cam_q.get_single_mut() else {
        return;
    };
    let pos = orbit.position();
    if cam_tf.translation != pos {
        *cam_tf = Transform::from_translation(pos).looking_at(orbit.target, Vec3::Y);
    }
}
