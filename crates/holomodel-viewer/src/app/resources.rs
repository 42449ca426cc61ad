use bevy::prelude::{Entity, Handle, Mesh, Resource, StandardMaterial};
use holomodel_core::{NodeId, SceneStyle};
use std::collections::HashMap;

pub struct NodeSlot {
    pub entity: Entity,
    pub material: Handle<StandardMaterial>,
    pub radius: f32,
}

/// Side table from node id to its scene entity and material. Nodes carry no
/// rendering state themselves.
#[derive(Resource, Default)]
pub struct SceneIndex {
    pub slots: HashMap<NodeId, NodeSlot>,
    // Sphere meshes shared between nodes of the same radius.
    pub meshes: HashMap<u32, Handle<Mesh>>,
    /// Styles last applied to the scene; labels and links read from here.
    pub style: SceneStyle,
    pub synced: Option<(usize, u64)>,
    pub styled: Option<u64>,
}
