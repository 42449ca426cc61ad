use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use holomodel_core::DomainIcon;

use crate::graph::GraphState;
use crate::ui::PANEL_W;
use crate::util::config;

pub fn icon_glyph(icon: DomainIcon) -> &'static str {
    match icon {
        DomainIcon::Code => "</>",
        DomainIcon::UserGroup => "👥",
        DomainIcon::Cube => "⬛",
    }
}

pub fn ui_panel(mut contexts: EguiContexts, mut st: ResMut<GraphState>) {
    egui::SidePanel::left("domains")
        .exact_width(PANEL_W)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Domains");
            ui.separator();

            let selected = st.explorer.selected_index();
            let mut pick = None;
            for (i, domain) in st.explorer.domains().iter().enumerate() {
                let text = format!("{}  {}", icon_glyph(domain.icon), domain.name);
                let resp = ui.selectable_label(i == selected, text);
                let resp = if i < 9 {
                    resp.on_hover_text(format!("Key {}", i + 1))
                } else {
                    resp
                };
                if resp.clicked() {
                    pick = Some(i);
                }
            }
            if let Some(i) = pick {
                st.select_domain_index(i);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.heading("Display");
            ui.checkbox(&mut st.ui.show_links, "Links");
            ui.checkbox(&mut st.ui.show_particles, "Particles");
            ui.add(egui::Slider::new(&mut st.cfg.particles_per_link, 0..=8).text("per link"));
            ui.horizontal(|ui| {
                if ui.button("Reset camera").clicked() {
                    st.ui.reset_camera = true;
                }
                if ui.button("Reheat layout").clicked() {
                    st.sim.reheat();
                }
            });

            ui.add_space(12.0);
            if ui.button("Save settings").clicked() {
                let notice = match config::save(&st.to_viewer_config()) {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "saved viewer config");
                        format!("Saved to {}", path.display())
                    }
                    Err(err) => {
                        tracing::warn!("failed to save viewer config: {err:#}");
                        format!("Save failed: {err}")
                    }
                };
                st.ui.notice = Some(notice);
            }
            if let Some(notice) = &st.ui.notice {
                ui.label(egui::RichText::new(notice).small().weak());
            }
        });
}
