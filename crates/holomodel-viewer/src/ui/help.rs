use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::graph::GraphState;

pub fn help_overlay(mut contexts: EguiContexts, mut st: ResMut<GraphState>) {
    if !st.ui.help_open {
        return;
    }

    let mut open = true;
    egui::Window::new("Help / Shortcuts")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Left drag: rotate, right drag: pan, wheel: zoom");
            ui.label("Click a node to select it, empty space to deselect");
            ui.separator();
            ui.label("Esc: clear selection, close help");
            ui.label("Left / Right: time -1 / +1 (Shift: 10)");
            ui.label("Home / End: time 0 / 100");
            ui.label("1..9: select domain");
            ui.label("R: reset camera");
            ui.label("?: toggle help");
        });
    if !open {
        st.ui.help_open = false;
    }
}
