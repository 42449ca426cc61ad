pub mod layout;
pub mod metrics;
pub mod state;

pub use layout::{sync_layout, update_layout};
pub use metrics::tick_housekeeping;
pub use state::GraphState;
