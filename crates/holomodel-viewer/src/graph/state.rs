use bevy::prelude::Resource;
use holomodel_core::{Explorer, NodeId, TimeCursor};
use std::path::PathBuf;

use crate::graph::layout::{ForceSim, SimParams};
use crate::util::config::ViewerConfig;

pub struct UiState {
    pub show_links: bool,
    pub show_particles: bool,
    pub help_open: bool,
    pub reset_camera: bool,
    /// Result of the last settings save, shown under the button.
    pub notice: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_links: true,
            show_particles: true,
            help_open: false,
            reset_camera: false,
            notice: None,
        }
    }
}

#[derive(Default)]
pub struct PerfState {
    pub fps: f32,
    pub visible_nodes: usize,
    pub visible_links: usize,
    pub alpha: f32,
}

pub struct CfgState {
    pub particles_per_link: usize,
    pub particle_speed: f32,
    pub datasets_path: Option<PathBuf>,
}

impl Default for CfgState {
    fn default() -> Self {
        Self {
            particles_per_link: 2,
            particle_speed: 0.006,
            datasets_path: None,
        }
    }
}

#[derive(Resource)]
pub struct GraphState {
    pub explorer: Explorer,
    pub sim: ForceSim,
    pub ui: UiState,
    pub perf: PerfState,
    pub cfg: CfgState,
    /// Where the first particle of every link sits, as a fraction of the link.
    pub particle_phase: f32,

    // (domain index, data revision) the layout was last synced to.
    pub(crate) layout_synced: Option<(usize, u64)>,
}

impl Default for GraphState {
    fn default() -> Self {
        Self::new(Explorer::with_builtin_domains())
    }
}

impl GraphState {
    pub fn new(explorer: Explorer) -> Self {
        Self {
            explorer,
            sim: ForceSim::new(SimParams::default()),
            ui: UiState::default(),
            perf: PerfState::default(),
            cfg: CfgState::default(),
            particle_phase: 0.0,
            layout_synced: None,
        }
    }

    pub fn apply_viewer_config(&mut self, cfg: &ViewerConfig) {
        self.ui.show_links = cfg.show_links;
        self.ui.show_particles = cfg.show_particles;
        self.cfg.particles_per_link = cfg.particles_per_link;
        self.cfg.particle_speed = cfg.particle_speed.max(0.0);
        self.cfg.datasets_path = cfg.datasets_path.clone();
        self.sim.params = SimParams {
            link_distance: cfg.link_distance,
            charge_strength: cfg.charge_strength,
            velocity_decay: cfg.velocity_decay,
            alpha_min: cfg.alpha_min,
            alpha_decay: cfg.alpha_decay,
        };

        if !self.explorer.select_domain(&cfg.initial_domain) {
            tracing::warn!(
                domain = %cfg.initial_domain,
                "configured initial domain not found, keeping {}",
                self.explorer.selected_domain().id
            );
        }
        self.explorer.set_time(TimeCursor::new(cfg.initial_time));
    }

    /// Current session and settings as a config, ready to be saved.
    pub fn to_viewer_config(&self) -> ViewerConfig {
        let p = &self.sim.params;
        ViewerConfig {
            initial_domain: self.explorer.selected_domain().id.clone(),
            initial_time: self.explorer.cursor().value(),
            show_links: self.ui.show_links,
            show_particles: self.ui.show_particles,
            particles_per_link: self.cfg.particles_per_link,
            particle_speed: self.cfg.particle_speed,
            link_distance: p.link_distance,
            charge_strength: p.charge_strength,
            velocity_decay: p.velocity_decay,
            alpha_min: p.alpha_min,
            alpha_decay: p.alpha_decay,
            datasets_path: self.cfg.datasets_path.clone(),
        }
    }

    /// The graph view is only mounted while something is visible.
    pub fn graph_mounted(&self) -> bool {
        !self.explorer.visible().is_empty()
    }

    pub fn select_domain_index(&mut self, index: usize) -> bool {
        let before = self.explorer.selected_index();
        if !self.explorer.select_domain_index(index) {
            return false;
        }
        if before != index {
            let d = self.explorer.selected_domain();
            tracing::info!(domain = %d.id, nodes = self.explorer.visible().nodes.len(), "domain selected");
        }
        true
    }

    pub fn set_time(&mut self, value: i32) {
        let cursor = TimeCursor::new(value);
        if self.explorer.set_time(cursor) {
            tracing::debug!(
                time = cursor.value(),
                visible = self.explorer.visible().nodes.len(),
                "time changed"
            );
        }
    }

    pub fn step_time(&mut self, delta: i32) {
        let next = self.explorer.cursor().step(delta);
        self.set_time(next.value());
    }

    pub fn click(&mut self, id: Option<NodeId>) {
        let before = self.explorer.interaction().selected.clone();
        self.explorer.click(id);
        let after = &self.explorer.interaction().selected;
        if before.as_ref() != after.as_ref() {
            tracing::debug!(selected = ?after.as_ref().map(NodeId::as_str), "selection changed");
        }
    }

    pub fn hover(&mut self, id: Option<NodeId>) {
        self.explorer.hover(id);
    }

    pub fn clear_interaction(&mut self) {
        self.explorer.clear_interaction();
    }

    pub fn advance_particles(&mut self) {
        self.particle_phase = (self.particle_phase + self.cfg.particle_speed).fract();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_config_is_applied_to_session() {
        let mut st = GraphState::default();
        let cfg = ViewerConfig {
            initial_domain: "plm".to_string(),
            initial_time: 30,
            show_particles: false,
            link_distance: 45.0,
            ..ViewerConfig::default()
        };
        st.apply_viewer_config(&cfg);

        assert_eq!(st.explorer.selected_domain().id, "plm");
        assert_eq!(st.explorer.cursor().value(), 30);
        assert!(!st.ui.show_particles);
        assert_eq!(st.sim.params.link_distance, 45.0);
        assert_eq!(st.to_viewer_config(), cfg);
    }

    #[test]
    fn unknown_initial_domain_keeps_first() {
        let mut st = GraphState::default();
        st.apply_viewer_config(&ViewerConfig {
            initial_domain: "astronomy".to_string(),
            ..ViewerConfig::default()
        });
        assert_eq!(st.explorer.selected_domain().id, "software");
    }

    #[test]
    fn stepping_time_clamps_and_clears_selection() {
        let mut st = GraphState::default();
        st.click(Some(NodeId::new("app")));
        st.step_time(10);
        assert_eq!(st.explorer.cursor().value(), 100);
        assert!(st.explorer.interaction().selected.is_some());

        st.step_time(-95);
        assert_eq!(st.explorer.cursor().value(), 5);
        assert!(st.explorer.interaction().selected.is_none());

        st.set_time(-20);
        assert_eq!(st.explorer.cursor().value(), 0);
        assert!(st.graph_mounted());
    }

    #[test]
    fn particles_wrap_around() {
        let mut st = GraphState::default();
        st.cfg.particle_speed = 0.3;
        for _ in 0..4 {
            st.advance_particles();
        }
        assert!((st.particle_phase - 0.2).abs() < 1e-5);
    }
}
