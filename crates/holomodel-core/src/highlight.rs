//! Selection and hover styling rules.
//!
//! Styles are derived purely from the visible subgraph and the current
//! [`Interaction`], so computing them twice from the same inputs always
//! gives the same result.

use std::collections::{HashMap, HashSet};

use crate::model::{GraphData, Link, NodeId};
use crate::palette::{self, Rgba};

pub const BASE_OPACITY: f32 = 0.9;
pub const DIMMED_OPACITY: f32 = 0.15;
pub const SELECTED_OPACITY: f32 = 1.0;

pub const NO_EMISSIVE: u32 = 0x000000;
pub const HOVER_EMISSIVE: u32 = 0x666666;
pub const SELECTED_EMISSIVE: u32 = 0xcccccc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    pub selected: Option<NodeId>,
    pub hovered: Option<NodeId>,
}

impl Interaction {
    pub fn clear(&mut self) {
        self.selected = None;
        self.hovered = None;
    }
}

/// The selected node plus every node one link away, in either direction.
pub fn adjacent_set(links: &[Link], selected: &NodeId) -> HashSet<NodeId> {
    let mut out = HashSet::new();
    out.insert(selected.clone());
    for link in links {
        if let Some(other) = link.other_end(selected) {
            out.insert(other.clone());
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub opacity: f32,
    pub emissive: u32,
    pub label_visible: bool,
}

impl NodeStyle {
    pub fn is_dimmed(&self) -> bool {
        self.opacity < BASE_OPACITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkStyle {
    pub color: Rgba,
    pub highlighted: bool,
}

pub fn node_style(
    id: &NodeId,
    interaction: &Interaction,
    adjacent: Option<&HashSet<NodeId>>,
) -> NodeStyle {
    let is_selected = interaction.selected.as_ref() == Some(id);
    let is_hovered = interaction.hovered.as_ref() == Some(id);

    let mut style = NodeStyle {
        opacity: BASE_OPACITY,
        emissive: NO_EMISSIVE,
        label_visible: is_selected || is_hovered,
    };
    if let Some(adjacent) = adjacent {
        if !adjacent.contains(id) {
            style.opacity = DIMMED_OPACITY;
        }
    }
    if is_hovered {
        style.emissive = HOVER_EMISSIVE;
    }
    if is_selected {
        style.emissive = SELECTED_EMISSIVE;
        style.opacity = SELECTED_OPACITY;
    }
    style
}

pub fn link_style(link: &Link, interaction: &Interaction) -> LinkStyle {
    let highlighted = interaction
        .selected
        .as_ref()
        .map(|sel| link.touches(sel))
        .unwrap_or(false);
    LinkStyle {
        color: if highlighted {
            palette::LINK_HIGHLIGHT
        } else {
            palette::LINK_DEFAULT
        },
        highlighted,
    }
}

/// Styles for every visible node and link. `links[i]` belongs to
/// `visible.links[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneStyle {
    pub nodes: HashMap<NodeId, NodeStyle>,
    pub links: Vec<LinkStyle>,
}

impl SceneStyle {
    pub fn compute(visible: &GraphData, interaction: &Interaction) -> Self {
        let adjacent = interaction
            .selected
            .as_ref()
            .map(|sel| adjacent_set(&visible.links, sel));

        let nodes = visible
            .nodes
            .iter()
            .map(|n| (n.id.clone(), node_style(&n.id, interaction, adjacent.as_ref())))
            .collect();
        let links = visible
            .links
            .iter()
            .map(|l| link_style(l, interaction))
            .collect();
        Self { nodes, links }
    }

    pub fn node(&self, id: &NodeId) -> Option<&NodeStyle> {
        self.nodes.get(id)
    }

    pub fn undimmed(&self) -> HashSet<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, s)| !s.is_dimmed())
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_domains;
    use crate::filter::{visible_subgraph, TimeCursor};

    fn id(s: &str) -> NodeId {
        NodeId::new(s)
    }

    fn software(t: i32) -> GraphData {
        visible_subgraph(&builtin_domains()[0].data, TimeCursor::new(t))
    }

    #[test]
    fn selection_undims_exactly_the_neighbourhood() {
        let vis = software(100);
        let interaction = Interaction {
            selected: Some(id("moduleA")),
            hovered: None,
        };
        let style = SceneStyle::compute(&vis, &interaction);

        let expected: HashSet<NodeId> =
            ["moduleA", "app", "classA", "iface"].into_iter().map(id).collect();
        assert_eq!(style.undimmed(), expected);

        let sel = style.node(&id("moduleA")).copied().expect("selected style");
        assert_eq!(sel.opacity, SELECTED_OPACITY);
        assert_eq!(sel.emissive, SELECTED_EMISSIVE);
        assert!(sel.label_visible);

        let dimmed = style.node(&id("db")).copied().expect("db style");
        assert_eq!(dimmed.opacity, DIMMED_OPACITY);
        assert!(!dimmed.label_visible);
    }

    #[test]
    fn adjacency_only_follows_visible_links() {
        // funcA (t=30) is hidden at t=20, so classA has only moduleA next to it.
        let vis = software(20);
        let adj = adjacent_set(&vis.links, &id("classA"));
        let expected: HashSet<NodeId> = ["classA", "moduleA"].into_iter().map(id).collect();
        assert_eq!(adj, expected);
    }

    #[test]
    fn no_selection_restores_defaults() {
        let vis = software(100);
        let style = SceneStyle::compute(&vis, &Interaction::default());
        assert!(style.nodes.values().all(|s| s.opacity == BASE_OPACITY));
        assert!(style.nodes.values().all(|s| s.emissive == NO_EMISSIVE));
        assert!(style.nodes.values().all(|s| !s.label_visible));
        assert!(style.links.iter().all(|l| l.color == palette::LINK_DEFAULT));
    }

    #[test]
    fn hover_glows_and_shows_label_without_dimming() {
        let vis = software(100);
        let interaction = Interaction {
            selected: None,
            hovered: Some(id("db")),
        };
        let style = SceneStyle::compute(&vis, &interaction);
        let db = style.node(&id("db")).copied().expect("db style");
        assert_eq!(db.emissive, HOVER_EMISSIVE);
        assert_eq!(db.opacity, BASE_OPACITY);
        assert!(db.label_visible);
        assert!(style.undimmed().len() == vis.nodes.len());
    }

    #[test]
    fn selection_overrides_hover_on_same_node() {
        let vis = software(100);
        let interaction = Interaction {
            selected: Some(id("iface")),
            hovered: Some(id("iface")),
        };
        let style = SceneStyle::compute(&vis, &interaction);
        let s = style.node(&id("iface")).copied().expect("iface style");
        assert_eq!(s.emissive, SELECTED_EMISSIVE);
        assert_eq!(s.opacity, SELECTED_OPACITY);
    }

    #[test]
    fn hovered_dimmed_node_keeps_dim_opacity() {
        let vis = software(100);
        let interaction = Interaction {
            selected: Some(id("app")),
            hovered: Some(id("var")),
        };
        let style = SceneStyle::compute(&vis, &interaction);
        let var = style.node(&id("var")).copied().expect("var style");
        assert_eq!(var.opacity, DIMMED_OPACITY);
        assert_eq!(var.emissive, HOVER_EMISSIVE);
        assert!(var.label_visible);
    }

    #[test]
    fn links_touching_selection_are_highlighted() {
        let vis = software(100);
        let interaction = Interaction {
            selected: Some(id("iface")),
            hovered: None,
        };
        let style = SceneStyle::compute(&vis, &interaction);
        for (link, ls) in vis.links.iter().zip(&style.links) {
            assert_eq!(ls.highlighted, link.touches(&id("iface")), "{link:?}");
        }
        assert_eq!(style.links.iter().filter(|l| l.highlighted).count(), 3);
    }

    #[test]
    fn recompute_is_idempotent() {
        let vis = software(35);
        let interaction = Interaction {
            selected: Some(id("classB")),
            hovered: Some(id("app")),
        };
        assert_eq!(
            SceneStyle::compute(&vis, &interaction),
            SceneStyle::compute(&vis, &interaction)
        );
    }
}
