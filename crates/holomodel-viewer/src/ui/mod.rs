pub mod header;
pub mod help;
pub mod hud;
pub mod info;
pub mod labels;
pub mod panel;
pub mod shortcuts;
pub mod timeline;

pub use header::header_bar;
pub use help::help_overlay;
pub use hud::hud_overlay;
pub use info::info_panel;
pub use labels::{empty_state, node_labels};
pub use panel::ui_panel;
pub use shortcuts::handle_shortcuts;
pub use timeline::timeline_footer;

pub const PANEL_W: f32 = 240.0;
pub const HUD_EDGE_PADDING: f32 = 8.0;
