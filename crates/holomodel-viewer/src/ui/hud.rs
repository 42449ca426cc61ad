use bevy::prelude::Res;
use bevy_egui::{egui, EguiContexts};
use holomodel_core::SceneStyle;

use crate::app::resources::SceneIndex;
use crate::graph::GraphState;
use crate::ui::HUD_EDGE_PADDING;

/// Nodes left undimmed and links lit by the current selection.
pub fn focus_counts(style: &SceneStyle) -> (usize, usize) {
    let nodes = style.undimmed().len();
    let links = style.links.iter().filter(|l| l.highlighted).count();
    (nodes, links)
}

pub fn hud_overlay(mut contexts: EguiContexts, st: Res<GraphState>, index: Res<SceneIndex>) {
    let ctx = contexts.ctx_mut();
    let area = ctx.available_rect();
    let pos = area.min + egui::vec2(HUD_EDGE_PADDING, HUD_EDGE_PADDING);

    egui::Area::new(egui::Id::new("hud"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui| {
            ui.group(|ui| {
                ui.label(format!("FPS: {:.0}", st.perf.fps));
                ui.label(format!(
                    "Visible: {} nodes / {} links",
                    st.perf.visible_nodes, st.perf.visible_links
                ));
                if st.sim.is_settled() {
                    ui.label("Layout: settled");
                } else {
                    ui.label(format!("Layout: alpha {:.3}", st.perf.alpha));
                }
                if let Some(node) = st.explorer.selected_node() {
                    let (nodes, links) = focus_counts(&index.style);
                    ui.label(format!(
                        "Focus: {} ({} nodes / {} links)",
                        node.name, nodes, links
                    ));
                }
                if let Some(node) = st.explorer.hovered_node() {
                    ui.label(format!("Hover: {}", node.name));
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use holomodel_core::{Explorer, NodeId};

    #[test]
    fn focus_counts_cover_neighbourhood() {
        let mut ex = Explorer::with_builtin_domains();
        assert_eq!(focus_counts(&ex.style()), (10, 0));

        ex.click(Some(NodeId::new("moduleA")));
        assert_eq!(focus_counts(&ex.style()), (4, 3));

        ex.hover(Some(NodeId::new("db")));
        assert_eq!(ex.hovered_node().map(|n| n.name.as_str()), Some("Database"));
    }
}
