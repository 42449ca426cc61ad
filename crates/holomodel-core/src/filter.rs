use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{GraphData, Node, NodeId};

/// Position of the time slider. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct TimeCursor(i32);

impl TimeCursor {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn step(self, delta: i32) -> Self {
        Self::new(self.0.saturating_add(delta))
    }

    pub fn reveals(self, node: &Node) -> bool {
        node.start_time <= self.0
    }
}

impl Default for TimeCursor {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<i32> for TimeCursor {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<TimeCursor> for i32 {
    fn from(cursor: TimeCursor) -> Self {
        cursor.0
    }
}

/// Nodes whose start time has elapsed at `cursor`, plus the links joining two
/// such nodes. Dataset order is preserved for both.
pub fn visible_subgraph(data: &GraphData, cursor: TimeCursor) -> GraphData {
    let nodes: Vec<_> = data
        .nodes
        .iter()
        .filter(|n| cursor.reveals(n))
        .cloned()
        .collect();
    let ids: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();
    let links = data
        .links
        .iter()
        .filter(|l| ids.contains(&l.source) && ids.contains(&l.target))
        .cloned()
        .collect();
    GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_domains;
    use crate::model::Link;

    fn ids(g: &GraphData) -> Vec<&str> {
        g.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn software_at_twenty() {
        let domains = builtin_domains();
        let vis = visible_subgraph(&domains[0].data, TimeCursor::new(20));

        assert_eq!(ids(&vis), vec!["app", "moduleA", "moduleB", "classA", "db", "iface"]);
        assert!(!vis.links.contains(&Link::new("classA", "funcA")));
        assert!(vis.links.contains(&Link::new("app", "moduleA")));
    }

    #[test]
    fn reveal_is_monotonic() {
        for d in builtin_domains() {
            let mut prev: HashSet<NodeId> = HashSet::new();
            for t in TimeCursor::MIN..=TimeCursor::MAX {
                let vis = visible_subgraph(&d.data, TimeCursor::new(t));
                let cur: HashSet<NodeId> = vis.nodes.iter().map(|n| n.id.clone()).collect();
                assert!(prev.is_subset(&cur), "{} shrank at t={t}", d.id);
                prev = cur;
            }
            assert_eq!(prev.len(), d.data.nodes.len());
        }
    }

    #[test]
    fn links_visible_iff_both_ends_visible() {
        for d in builtin_domains() {
            for t in [0, 5, 15, 33, 60, 100] {
                let vis = visible_subgraph(&d.data, TimeCursor::new(t));
                for link in &d.data.links {
                    let both = vis.contains(&link.source) && vis.contains(&link.target);
                    assert_eq!(vis.links.contains(link), both, "{} {link:?} t={t}", d.id);
                }
            }
        }
    }

    #[test]
    fn filter_is_stable_across_calls() {
        let domains = builtin_domains();
        let a = visible_subgraph(&domains[1].data, TimeCursor::new(45));
        let b = visible_subgraph(&domains[1].data, TimeCursor::new(45));
        assert_eq!(a, b);
    }

    #[test]
    fn cursor_clamps_to_range() {
        assert_eq!(TimeCursor::new(-4).value(), 0);
        assert_eq!(TimeCursor::new(250).value(), 100);
        assert_eq!(TimeCursor::new(95).step(10).value(), 100);
        assert_eq!(TimeCursor::default().value(), 100);
    }
}
