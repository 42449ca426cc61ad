use bevy::prelude::Res;
use bevy_egui::{egui, EguiContexts};
use holomodel_core::Node;

use crate::graph::GraphState;
use crate::ui::PANEL_W;

pub const EMPTY_HINT: &str = "Click on a node in the graph to see its details.";

/// Label and value rows shown for the selected node.
pub fn detail_rows(node: &Node) -> Vec<(&'static str, String)> {
    vec![
        ("Name", node.name.clone()),
        ("ID", node.id.to_string()),
        ("Type", node.kind.to_string()),
        ("Description", node.description.clone()),
        ("Size Value", format!("{}", node.val)),
        ("Start Time", node.start_time.to_string()),
    ]
}

pub fn info_panel(mut contexts: EguiContexts, st: Res<GraphState>) {
    egui::SidePanel::right("node_details")
        .exact_width(PANEL_W)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Node Details");
            ui.separator();
            let Some(node) = st.explorer.selected_node() else {
                ui.label(egui::RichText::new(EMPTY_HINT).italics().weak());
                return;
            };
            egui::Grid::new("node_details_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    for (label, value) in detail_rows(node) {
                        ui.label(egui::RichText::new(label).strong());
                        ui.add(egui::Label::new(value).wrap());
                        ui.end_row();
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use holomodel_core::{builtin_domains, NodeId};

    #[test]
    fn rows_cover_every_detail_field() {
        let domains = builtin_domains();
        let node = domains[0]
            .data
            .node(&NodeId::new("iface"))
            .expect("iface exists");
        let rows = detail_rows(node);
        let labels: Vec<&str> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            ["Name", "ID", "Type", "Description", "Size Value", "Start Time"]
        );
        assert_eq!(rows[0].1, "Repository Interface");
        assert_eq!(rows[2].1, "Interface");
        assert_eq!(rows[4].1, "4");
        assert_eq!(rows[5].1, "15");
    }
}
