use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::app::resources::SceneIndex;
use crate::graph::GraphState;

pub const EMPTY_STATE: &str = "No data to display at this time.";

/// Gap between a node's surface and the bottom of its label, in world units.
const LABEL_GAP: f32 = 5.0;

fn paint_label(painter: &egui::Painter, anchor: egui::Pos2, text: &str) {
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let rect = egui::Align2::CENTER_BOTTOM
        .anchor_size(anchor, galley.size())
        .expand(4.0);
    painter.rect_filled(rect, 3.0, egui::Color32::from_black_alpha(180));
    painter.galley(rect.min + egui::vec2(4.0, 4.0), galley, egui::Color32::WHITE);
}

/// Names above every node whose style asks for a label, i.e. the selected
/// and hovered ones.
pub fn node_labels(
    mut contexts: EguiContexts,
    st: Res<GraphState>,
    index: Res<SceneIndex>,
    cam_q: Query<(&Camera, &GlobalTransform)>,
) {
    let Ok((camera, cam_tf)) = cam_q.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();
    let painter = ctx
        .layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("node_labels"),
        ))
        .with_clip_rect(ctx.available_rect());

    for (id, style) in &index.style.nodes {
        if !style.label_visible {
            continue;
        }
        let (Some(node), Some(slot), Some(pos)) = (
            st.explorer.visible().node(id),
            index.slots.get(id),
            st.sim.position(id),
        ) else {
            continue;
        };
        let above = pos + Vec3::Y * (slot.radius + LABEL_GAP);
        let Some(screen) = camera.world_to_viewport(cam_tf, above) else {
            continue;
        };
        paint_label(&painter, egui::pos2(screen.x, screen.y), &node.name);
    }
}

pub fn empty_state(mut contexts: EguiContexts, st: Res<GraphState>) {
    if st.graph_mounted() {
        return;
    }
    let ctx = contexts.ctx_mut();
    let center = ctx.available_rect().center();
    egui::Area::new(egui::Id::new("empty_state"))
        .fixed_pos(center)
        .pivot(egui::Align2::CENTER_CENTER)
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(EMPTY_STATE).size(16.0).weak());
        });
}
