//! Data model and interaction rules for the holistic system modeler.
//!
//! Nothing in this crate knows about rendering: the viewer feeds pointer
//! results in and reads visible subgraphs and styles out.

pub mod catalog;
pub mod error;
pub mod explorer;
pub mod filter;
pub mod highlight;
pub mod model;
pub mod palette;

pub use catalog::{builtin_domains, merge_domains, parse_domains_json};
pub use error::DatasetError;
pub use explorer::Explorer;
pub use filter::{visible_subgraph, TimeCursor};
pub use highlight::{adjacent_set, Interaction, LinkStyle, NodeStyle, SceneStyle};
pub use model::{Domain, DomainIcon, GraphData, Link, Node, NodeId, NodeKind};
pub use palette::Rgba;
