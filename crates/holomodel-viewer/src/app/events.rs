use bevy::prelude::Event;
use holomodel_core::NodeId;

/// Result of a click in the 3D view; `None` means empty space.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct NodeClicked(pub Option<NodeId>);

#[derive(Event, Debug, Clone, PartialEq)]
pub struct NodeHovered(pub Option<NodeId>);
