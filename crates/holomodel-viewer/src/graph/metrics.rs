use bevy::prelude::{Res, ResMut, Time};

use crate::graph::state::GraphState;

pub fn tick_housekeeping(time: Res<Time>, mut st: ResMut<GraphState>) {
    let dt = time.delta_seconds().max(0.0001);
    st.tick_metrics(dt);
}

impl GraphState {
    // ----- HUD metrics -----
    pub fn tick_metrics(&mut self, dt: f32) {
        // Smoothed so the HUD stays readable.
        let fps = 1.0 / dt;
        self.perf.fps = if self.perf.fps > 0.0 {
            self.perf.fps * 0.9 + fps * 0.1
        } else {
            fps
        };
        let visible = self.explorer.visible();
        self.perf.visible_nodes = visible.nodes.len();
        self.perf.visible_links = visible.links.len();
        self.perf.alpha = self.sim.alpha();
    }
}
