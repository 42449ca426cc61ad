//! Screen-space pointer to node resolution.
//!
//! The cursor is mapped to normalized device coordinates, a ray is cast from
//! the camera through that point and tested against every rendered node
//! sphere. The closest hit along the ray wins.

use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy_egui::EguiContexts;
use holomodel_core::NodeId;

use crate::app::events::{NodeClicked, NodeHovered};
use crate::graph::GraphState;
use crate::render::scene::NodeVisual;

/// Run condition: pointer systems only exist while there is a graph to hit.
pub fn graph_mounted(st: Res<GraphState>) -> bool {
    st.graph_mounted()
}

/// Pixel position (origin top-left) to NDC, `y` pointing up.
pub fn cursor_to_ndc(cursor: Vec2, size: Vec2) -> Option<Vec2> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / size.x * 2.0 - 1.0,
        -(cursor.y / size.y * 2.0 - 1.0),
    ))
}

/// Ray from the camera through `ndc`, as origin and unit direction.
pub fn ray_through_ndc(camera: &Camera, cam_tf: &GlobalTransform, ndc: Vec2) -> Option<(Vec3, Vec3)> {
    // Reverse-z: depth 1 is the near plane.
    let near = camera.ndc_to_world(cam_tf, ndc.extend(1.0))?;
    let origin = cam_tf.translation();
    let dir = (near - origin).try_normalize()?;
    Some((origin, dir))
}

/// Distance along the ray to the first intersection with the sphere, if it
/// lies in front of the origin.
pub fn intersect_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    // Origin inside the sphere.
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}

pub fn nearest_hit<'a>(
    origin: Vec3,
    dir: Vec3,
    spheres: impl IntoIterator<Item = (&'a NodeId, Vec3, f32)>,
) -> Option<NodeId> {
    spheres
        .into_iter()
        .filter_map(|(id, center, radius)| {
            intersect_sphere(origin, dir, center, radius).map(|t| (t, id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id.clone())
}

#[allow(clippy::too_many_arguments)]
pub fn pointer_picking(
    windows: Query<&Window>,
    cam_q: Query<(&Camera, &GlobalTransform)>,
    nodes: Query<(&NodeVisual, &Transform)>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut moved: EventReader<CursorMoved>,
    mut contexts: EguiContexts,
    mut clicked: EventWriter<NodeClicked>,
    mut hovered: EventWriter<NodeHovered>,
) {
    let pointer_moved = moved.read().count() > 0;
    let pressed = buttons.just_pressed(MouseButton::Left);
    if !pointer_moved && !pressed {
        return;
    }

    let ctx = contexts.ctx_mut();
    if ctx.is_pointer_over_area() || ctx.wants_pointer_input() {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_tf)) = cam_q.get_single() else {
        return;
    };
    let Some(ndc) = cursor_to_ndc(cursor, window.size()) else {
        return;
    };
    let Some((origin, dir)) = ray_through_ndc(camera, cam_tf, ndc) else {
        return;
    };

    let hit = nearest_hit(
        origin,
        dir,
        nodes
            .iter()
            .map(|(visual, tf)| (&visual.id, tf.translation, visual.radius)),
    );

    if pointer_moved {
        hovered.send(NodeHovered(hit.clone()));
    }
    if pressed {
        clicked.send(NodeClicked(hit));
    }
}
