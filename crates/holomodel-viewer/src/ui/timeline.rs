use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use holomodel_core::TimeCursor;

use crate::graph::GraphState;

pub fn timeline_footer(mut contexts: EguiContexts, mut st: ResMut<GraphState>) {
    egui::TopBottomPanel::bottom("timeline").show(contexts.ctx_mut(), |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let mut t = st.explorer.cursor().value();
            ui.label("Time");
            ui.spacing_mut().slider_width = (ui.available_width() - 80.0).max(100.0);
            let resp = ui.add(
                egui::Slider::new(&mut t, TimeCursor::MIN..=TimeCursor::MAX).show_value(false),
            );
            ui.monospace(format!("{t:>3}"));
            if resp.changed() {
                st.set_time(t);
            }
        });
        ui.add_space(4.0);
    });
}
