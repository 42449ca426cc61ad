pub mod camera;
pub mod picking;
pub mod scene;

pub use camera::{orbit_camera, setup_scene};
pub use picking::{graph_mounted, pointer_picking};
pub use scene::{apply_styles, draw_links, sync_node_entities, sync_transforms};
