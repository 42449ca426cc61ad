use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use holomodel_core::TimeCursor;

use crate::graph::GraphState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Escape,
    StepTime(i32),
    TimeStart,
    TimeEnd,
    Domain(usize),
    ToggleHelp,
    ResetCamera,
}

const DOMAIN_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

fn pressed_shortcuts(input: &egui::InputState) -> Vec<Shortcut> {
    let mut out = Vec::new();
    let step = if input.modifiers.shift { 10 } else { 1 };
    if input.key_pressed(egui::Key::ArrowLeft) {
        out.push(Shortcut::StepTime(-step));
    }
    if input.key_pressed(egui::Key::ArrowRight) {
        out.push(Shortcut::StepTime(step));
    }
    if input.key_pressed(egui::Key::Home) {
        out.push(Shortcut::TimeStart);
    }
    if input.key_pressed(egui::Key::End) {
        out.push(Shortcut::TimeEnd);
    }
    for (i, key) in DOMAIN_KEYS.iter().enumerate() {
        if input.key_pressed(*key) {
            out.push(Shortcut::Domain(i));
        }
    }
    if input.key_pressed(egui::Key::Questionmark) {
        out.push(Shortcut::ToggleHelp);
    }
    if input.key_pressed(egui::Key::R) && !input.modifiers.command {
        out.push(Shortcut::ResetCamera);
    }
    out
}

pub fn handle_shortcuts(mut contexts: EguiContexts, mut st: ResMut<GraphState>) {
    let ctx = contexts.ctx_mut();
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        st.apply_shortcut(Shortcut::Escape);
    }
    // Keys belong to the focused widget while one is focused.
    if ctx.wants_keyboard_input() {
        return;
    }
    for shortcut in ctx.input(pressed_shortcuts) {
        st.apply_shortcut(shortcut);
    }
}

impl GraphState {
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::Escape => {
                self.ui.help_open = false;
                self.clear_interaction();
            }
            Shortcut::StepTime(delta) => self.step_time(delta),
            Shortcut::TimeStart => self.set_time(TimeCursor::MIN),
            Shortcut::TimeEnd => self.set_time(TimeCursor::MAX),
            Shortcut::Domain(i) => {
                self.select_domain_index(i);
            }
            Shortcut::ToggleHelp => self.ui.help_open = !self.ui.help_open,
            Shortcut::ResetCamera => self.ui.reset_camera = true,
        }
    }
}
