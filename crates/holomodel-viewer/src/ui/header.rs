use bevy_egui::{egui, EguiContexts};

pub const TITLE: &str = "Holistic System Modeler";
pub const SUBTITLE: &str = "A 3D/4D conceptual proof-of-concept for complex system visualization";

pub fn header_bar(mut contexts: EguiContexts) {
    egui::TopBottomPanel::top("header").show(contexts.ctx_mut(), |ui| {
        ui.add_space(4.0);
        ui.heading(TITLE);
        ui.label(egui::RichText::new(SUBTITLE).weak());
        ui.add_space(4.0);
    });
}
