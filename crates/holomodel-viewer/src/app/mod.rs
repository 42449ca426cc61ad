use bevy::prelude::*;
use holomodel_core::{Domain, Explorer};

use crate::app::events::{NodeClicked, NodeHovered};
use crate::app::resources::SceneIndex;
use crate::graph::GraphState;
use crate::util::config::ViewerConfig;

pub mod events;
pub mod resources;

pub struct HoloModelPlugin {
    pub config: ViewerConfig,
    pub domains: Vec<Domain>,
}

impl HoloModelPlugin {
    fn initial_state(&self) -> GraphState {
        let explorer = match Explorer::new(self.domains.clone()) {
            Ok(explorer) => explorer,
            Err(err) => {
                tracing::error!(%err, "domain catalog rejected, using built-in domains");
                Explorer::with_builtin_domains()
            }
        };
        let mut st = GraphState::new(explorer);
        st.apply_viewer_config(&self.config);
        tracing::info!(
            domains = st.explorer.domains().len(),
            domain = %st.explorer.selected_domain().id,
            time = st.explorer.cursor().value(),
            "explorer ready"
        );
        st
    }
}

impl Plugin for HoloModelPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<NodeClicked>()
            .add_event::<NodeHovered>()
            .insert_resource(self.initial_state())
            .init_resource::<SceneIndex>()
            .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)))
            .add_systems(Startup, crate::render::setup_scene)
            .add_systems(
                Update,
                (
                    (
                        crate::ui::handle_shortcuts,
                        crate::ui::header_bar,
                        crate::ui::timeline_footer,
                        crate::ui::ui_panel,
                        crate::ui::info_panel,
                        crate::ui::help_overlay,
                    )
                        .chain(),
                    crate::render::pointer_picking.run_if(crate::render::graph_mounted),
                    apply_pointer_events,
                    (
                        crate::graph::sync_layout,
                        crate::render::sync_node_entities,
                        crate::render::apply_styles,
                        crate::graph::update_layout,
                        crate::render::sync_transforms,
                    )
                        .chain(),
                    (
                        crate::render::draw_links,
                        crate::ui::node_labels,
                        crate::ui::empty_state,
                        crate::ui::hud_overlay,
                        crate::render::orbit_camera,
                        crate::graph::tick_housekeeping,
                    )
                        .chain(),
                )
                    .chain(),
            );
    }
}

fn apply_pointer_events(
    mut st: ResMut<GraphState>,
    mut clicks: EventReader<NodeClicked>,
    mut hovers: EventReader<NodeHovered>,
) {
    for NodeHovered(id) in hovers.read() {
        st.hover(id.clone());
    }
    for NodeClicked(id) in clicks.read() {
        st.click(id.clone());
    }
}
