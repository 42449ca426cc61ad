use bevy::prelude::{ResMut, Vec3};
use holomodel_core::{GraphData, NodeId};
use smallvec::SmallVec;
use std::collections::HashMap;

use crate::graph::state::GraphState;

/// Feeds the visible subgraph to the layout whenever it changed.
pub fn sync_layout(mut st: ResMut<GraphState>) {
    st.sync_layout();
}

/// Advances the layout by one tick per rendered frame.
pub fn update_layout(mut st: ResMut<GraphState>) {
    let was_running = !st.sim.is_settled();
    st.sim.tick();
    if was_running && st.sim.is_settled() {
        tracing::debug!(ticks = st.sim.ticks(), "layout cooled down");
    }
    st.perf.alpha = st.sim.alpha();
    st.advance_particles();
}

impl GraphState {
    /// Returns `true` when the layout was rebuilt. A new domain starts from
    /// scratch; a time change keeps the nodes that stay visible in place.
    pub fn sync_layout(&mut self) -> bool {
        let key = (
            self.explorer.selected_index(),
            self.explorer.data_revision(),
        );
        if self.layout_synced == Some(key) {
            return false;
        }
        if self.layout_synced.map(|(domain, _)| domain) != Some(key.0) {
            self.sim.reset();
        }
        self.sim.sync(self.explorer.visible());
        self.layout_synced = Some(key);
        tracing::debug!(bodies = self.sim.len(), "layout synced");
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    pub link_distance: f32,
    pub charge_strength: f32,
    pub velocity_decay: f32,
    pub alpha_min: f32,
    pub alpha_decay: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            link_distance: 30.0,
            charge_strength: -30.0,
            velocity_decay: 0.4,
            alpha_min: 0.001,
            alpha_decay: 1.0 - 0.001f32.powf(1.0 / 300.0),
        }
    }
}

#[derive(Debug, Clone)]
struct SimLink {
    source: usize,
    target: usize,
    strength: f32,
    bias: f32,
}

/// Force layout in 3D: link springs, many-body
/// repulsion and re-centering, cooled by `alpha`.
#[derive(Debug, Clone, Default)]
pub struct ForceSim {
    pub params: SimParams,
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    neighbors: Vec<SmallVec<[usize; 4]>>,
    links: Vec<SimLink>,
    alpha: f32,
    ticks: u64,
}

const INITIAL_RADIUS: f32 = 10.0;
const DISTANCE_MIN2: f32 = 1.0;

fn initial_position(i: usize) -> Vec3 {
    let roll_step = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());
    let yaw_step = std::f32::consts::PI * 20.0 / (9.0 + 221.0f32.sqrt());
    let i = i as f32;
    let radius = INITIAL_RADIUS * (0.5 + i).cbrt();
    let roll = i * roll_step;
    let yaw = i * yaw_step;
    Vec3::new(
        radius * roll.sin() * yaw.cos(),
        radius * roll.cos(),
        radius * roll.sin() * yaw.sin(),
    )
}

// Deterministic nudge for coincident points.
fn jiggle(seed: usize) -> f32 {
    ((seed as f32 * 12.9898).sin() * 43758.547).fract() * 1e-6 + 1e-7
}

impl ForceSim {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Replaces the simulated graph. Nodes already present keep their
    /// position and velocity; new ones are placed on a spiral. Reheats.
    pub fn sync(&mut self, data: &GraphData) {
        let old_index = std::mem::take(&mut self.index);
        let old_pos = std::mem::take(&mut self.positions);
        let old_vel = std::mem::take(&mut self.velocities);

        self.ids = data.nodes.iter().map(|n| n.id.clone()).collect();
        for (i, id) in self.ids.iter().enumerate() {
            self.index.insert(id.clone(), i);
            match old_index.get(id) {
                Some(&j) => {
                    self.positions.push(old_pos[j]);
                    self.velocities.push(old_vel[j]);
                }
                None => {
                    self.positions.push(initial_position(i));
                    self.velocities.push(Vec3::ZERO);
                }
            }
        }

        self.neighbors = vec![SmallVec::new(); self.ids.len()];
        let mut resolved = Vec::with_capacity(data.links.len());
        for link in &data.links {
            let (Some(&s), Some(&t)) = (self.index.get(&link.source), self.index.get(&link.target))
            else {
                continue;
            };
            self.neighbors[s].push(t);
            self.neighbors[t].push(s);
            resolved.push((s, t));
        }

        self.links = resolved
            .into_iter()
            .map(|(s, t)| {
                let ds = self.neighbors[s].len() as f32;
                let dt = self.neighbors[t].len() as f32;
                SimLink {
                    source: s,
                    target: t,
                    strength: 1.0 / ds.min(dt),
                    bias: ds / (ds + dt),
                }
            })
            .collect();

        self.reheat();
    }

    pub fn reset(&mut self) {
        self.ids.clear();
        self.index.clear();
        self.positions.clear();
        self.velocities.clear();
        self.neighbors.clear();
        self.links.clear();
        self.alpha = 0.0;
        self.ticks = 0;
    }

    pub fn reheat(&mut self) {
        self.alpha = 1.0;
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_settled(&self) -> bool {
        self.alpha < self.params.alpha_min
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: &NodeId) -> Option<Vec3> {
        self.index.get(id).map(|&i| self.positions[i])
    }

    /// One simulation step. Returns `false` once cooled down.
    pub fn tick(&mut self) -> bool {
        if self.is_settled() || self.is_empty() {
            return false;
        }
        self.alpha += (0.0 - self.alpha) * self.params.alpha_decay;

        self.apply_links();
        self.apply_charge();

        let keep = 1.0 - self.params.velocity_decay.clamp(0.0, 1.0);
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *v *= keep;
            *p += *v;
        }
        self.apply_center();

        self.ticks += 1;
        true
    }

    fn apply_links(&mut self) {
        let distance = self.params.link_distance.max(0.1);
        for (k, link) in self.links.iter().enumerate() {
            let (s, t) = (link.source, link.target);
            let mut d = self.positions[t] + self.velocities[t]
                - self.positions[s]
                - self.velocities[s];
            if d.x == 0.0 {
                d.x = jiggle(k);
            }
            if d.y == 0.0 {
                d.y = jiggle(k + 1);
            }
            if d.z == 0.0 {
                d.z = jiggle(k + 2);
            }
            let len = d.length();
            let l = (len - distance) / len * self.alpha * link.strength;
            let d = d * l;
            self.velocities[t] -= d * link.bias;
            self.velocities[s] += d * (1.0 - link.bias);
        }
    }

    fn apply_charge(&mut self) {
        let strength = self.params.charge_strength;
        let n = self.positions.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let mut d = self.positions[j] - self.positions[i];
                if d == Vec3::ZERO {
                    d = Vec3::new(jiggle(i), jiggle(j), jiggle(i + j));
                }
                let mut l2 = d.length_squared();
                if l2 < DISTANCE_MIN2 {
                    l2 = (DISTANCE_MIN2 * l2).sqrt();
                }
                let w = d * (strength * self.alpha / l2);
                self.velocities[i] += w;
                self.velocities[j] -= w;
            }
        }
    }

    fn apply_center(&mut self) {
        let n = self.positions.len() as f32;
        let mean = self.positions.iter().copied().sum::<Vec3>() / n;
        for p in self.positions.iter_mut() {
            *p -= mean;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holomodel_core::{builtin_domains, visible_subgraph, TimeCursor};

    fn software(t: i32) -> GraphData {
        visible_subgraph(&builtin_domains()[0].data, TimeCursor::new(t))
    }

    #[test]
    fn initial_positions_are_distinct() {
        let mut sim = ForceSim::new(SimParams::default());
        sim.sync(&software(100));
        let pts: Vec<Vec3> = sim.positions.clone();
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                assert!(pts[i].distance(pts[j]) > 1.0);
            }
        }
    }

    #[test]
    fn sync_keeps_positions_of_surviving_nodes() {
        let mut sim = ForceSim::new(SimParams::default());
        sim.sync(&software(20));
        for _ in 0..25 {
            sim.tick();
        }
        let app = sim.position(&NodeId::new("app")).expect("app placed");

        sim.sync(&software(100));
        assert_eq!(sim.position(&NodeId::new("app")), Some(app));
        assert!(sim.position(&NodeId::new("var")).is_some());
        assert_eq!(sim.alpha(), 1.0);
        assert_eq!(sim.len(), 10);
    }

    #[test]
    fn link_strength_uses_smaller_degree() {
        let mut sim = ForceSim::new(SimParams::default());
        sim.sync(&software(100));
        let iface = sim.index[&NodeId::new("iface")];
        assert_eq!(sim.neighbors[iface].len(), 3);
        let link = sim
            .links
            .iter()
            .find(|l| sim.ids[l.source].as_str() == "iface" && sim.ids[l.target].as_str() == "db")
            .expect("iface -> db");
        assert_eq!(link.strength, 1.0);
        assert_eq!(link.bias, 0.75);
    }

    #[test]
    fn cools_down_and_stays_centred() {
        let mut sim = ForceSim::new(SimParams::default());
        sim.sync(&software(100));
        let mut steps = 0;
        while sim.tick() {
            steps += 1;
            assert!(steps < 10_000, "never settled");
        }
        assert!(sim.is_settled());
        assert!(!sim.tick());

        let centroid = sim.positions.iter().copied().sum::<Vec3>() / sim.len() as f32;
        assert!(centroid.length() < 1e-2);
        assert!(sim.positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn linked_nodes_end_closer_than_unlinked_ones() {
        let mut sim = ForceSim::new(SimParams::default());
        sim.sync(&software(100));
        while sim.tick() {}
        let pos = |s: &str| sim.position(&NodeId::new(s)).expect("placed");
        let linked = pos("funcB").distance(pos("var"));
        let far = pos("var").distance(pos("db"));
        assert!(linked < far, "linked {linked} vs far {far}");
    }

    #[test]
    fn domain_switch_rebuilds_time_change_keeps() {
        let mut st = GraphState::default();
        assert!(st.sync_layout());
        assert!(!st.sync_layout());
        for _ in 0..10 {
            st.sim.tick();
        }
        let db = st.sim.position(&NodeId::new("db"));

        st.set_time(50);
        assert!(!st.sync_layout(), "no start time crossed between 40 and 100");
        st.set_time(20);
        assert!(st.sync_layout());
        assert_eq!(st.sim.position(&NodeId::new("db")), db);

        st.select_domain_index(1);
        assert!(st.sync_layout());
        assert!(st.sim.position(&NodeId::new("db")).is_none());
        assert_eq!(st.sim.len(), st.explorer.visible().nodes.len());
    }

    #[test]
    fn reset_empties_the_layout() {
        let mut sim = ForceSim::new(SimParams::default());
        sim.sync(&software(100));
        sim.reset();
        assert!(sim.is_empty());
        assert!(!sim.tick());
        assert!(sim.position(&NodeId::new("app")).is_none());
    }
}
