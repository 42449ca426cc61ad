use bevy::prelude::*;
use holomodel_core::{palette, NodeId, Rgba};

use crate::app::resources::{NodeSlot, SceneIndex};
use crate::graph::GraphState;

const PARTICLE_RADIUS: f32 = 0.4;

#[derive(Component, Debug, Clone)]
pub struct NodeVisual {
    pub id: NodeId,
    pub radius: f32,
}

pub fn to_color(c: Rgba) -> Color {
    let [r, g, b, a] = c.to_f32();
    Color::srgba(r, g, b, a)
}

fn emissive(hex: u32) -> LinearRgba {
    to_color(Rgba::hex(hex, 1.0)).into()
}

/// Spawns entities for newly visible nodes and despawns the ones that left.
/// A domain switch clears the scene.
pub fn sync_node_entities(
    mut commands: Commands,
    st: Res<GraphState>,
    mut index: ResMut<SceneIndex>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut mats: ResMut<Assets<StandardMaterial>>,
) {
    let key = (
        st.explorer.selected_index(),
        st.explorer.data_revision(),
    );
    if index.synced == Some(key) {
        return;
    }
    let domain_changed = index.synced.map(|(domain, _)| domain) != Some(key.0);
    let visible = st.explorer.visible();

    let stale: Vec<NodeId> = index
        .slots
        .keys()
        .filter(|id| domain_changed || !visible.contains(id))
        .cloned()
        .collect();
    for id in &stale {
        if let Some(slot) = index.slots.remove(id) {
            commands.entity(slot.entity).despawn_recursive();
        }
    }

    let mut spawned = 0usize;
    for node in &visible.nodes {
        if index.slots.contains_key(&node.id) {
            continue;
        }
        let radius = node.radius();
        let mesh = index
            .meshes
            .entry(radius.to_bits())
            .or_insert_with(|| meshes.add(Sphere::new(radius).mesh().uv(16, 8)))
            .clone();
        let material = mats.add(StandardMaterial {
            base_color: to_color(palette::node_color(&node.kind).with_alpha(0.9)),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.9,
            ..default()
        });
        let pos = st.sim.position(&node.id).unwrap_or(Vec3::ZERO);
        let entity = commands
            .spawn((
                PbrBundle {
                    mesh,
                    material: material.clone(),
                    transform: Transform::from_translation(pos),
                    ..default()
                },
                NodeVisual {
                    id: node.id.clone(),
                    radius,
                },
            ))
            .id();
        index.slots.insert(
            node.id.clone(),
            NodeSlot {
                entity,
                material,
                radius,
            },
        );
        spawned += 1;
    }

    tracing::debug!(spawned, despawned = stale.len(), "scene synced");
    index.synced = Some(key);
    index.styled = None;
}

/// Pushes opacity and emissive onto the node materials. Skipped while the
/// session revision is unchanged.
pub fn apply_styles(
    st: Res<GraphState>,
    mut index: ResMut<SceneIndex>,
    mut mats: ResMut<Assets<StandardMaterial>>,
) {
    let rev = st.explorer.revision();
    if index.styled == Some(rev) {
        return;
    }
    let style = st.explorer.style();
    for node in &st.explorer.visible().nodes {
        let (Some(slot), Some(ns)) = (index.slots.get(&node.id), style.node(&node.id)) else {
            continue;
        };
        let Some(mat) = mats.get_mut(&slot.material) else {
            continue;
        };
        mat.base_color = to_color(palette::node_color(&node.kind).with_alpha(ns.opacity));
        mat.emissive = emissive(ns.emissive);
    }
    index.style = style;
    index.styled = Some(rev);
}

pub fn sync_transforms(st: Res<GraphState>, mut q: Query<(&NodeVisual, &mut Transform)>) {
    for (visual, mut tf) in q.iter_mut() {
        let Some(pos) = st.sim.position(&visual.id) else {
            continue;
        };
        if tf.translation != pos {
            tf.translation = pos;
        }
    }
}

/// Fractions along a link where its particles sit, evenly spaced.
pub fn particle_offsets(phase: f32, count: usize) -> impl Iterator<Item = f32> {
    (0..count).map(move |k| (phase + k as f32 / count as f32).fract())
}

pub fn draw_links(st: Res<GraphState>, index: Res<SceneIndex>, mut gizmos: Gizmos) {
    if !st.ui.show_links && !st.ui.show_particles {
        return;
    }
    for (i, link) in st.explorer.visible().links.iter().enumerate() {
        let (Some(a), Some(b)) = (st.sim.position(&link.source), st.sim.position(&link.target))
        else {
            continue;
        };
        let color = index
            .style
            .links
            .get(i)
            .map(|s| s.color)
            .unwrap_or(palette::LINK_DEFAULT);
        let color = to_color(color);

        if st.ui.show_links {
            gizmos.line(a, b, color);
        }
        if st.ui.show_particles {
            for t in particle_offsets(st.particle_phase, st.cfg.particles_per_link) {
                gizmos.sphere(a.lerp(b, t), Quat::IDENTITY, PARTICLE_RADIUS, color);
            }
        }
    }
}
