//! Session state shared by every panel of the explorer: which domain is
//! shown, where the time slider sits, and what the pointer has picked.

use crate::catalog::builtin_domains;
use crate::error::DatasetError;
use crate::filter::{visible_subgraph, TimeCursor};
use crate::highlight::{Interaction, SceneStyle};
use crate::model::{Domain, GraphData, Node, NodeId};

#[derive(Debug, Clone)]
pub struct Explorer {
    domains: Vec<Domain>,
    selected: usize,
    cursor: TimeCursor,
    interaction: Interaction,
    visible: GraphData,
    // Bumped when the visible subgraph changes.
    data_revision: u64,
    // Bumped on any change that can alter styling, data changes included.
    revision: u64,
}

impl Explorer {
    pub fn new(domains: Vec<Domain>) -> Result<Self, DatasetError> {
        if domains.is_empty() {
            return Err(DatasetError::NoDomains);
        }
        for d in &domains {
            d.validate()?;
        }
        Ok(Self::from_validated(domains))
    }

    pub fn with_builtin_domains() -> Self {
        Self::from_validated(builtin_domains())
    }

    fn from_validated(domains: Vec<Domain>) -> Self {
        let cursor = TimeCursor::default();
        let visible = visible_subgraph(&domains[0].data, cursor);
        Self {
            domains,
            selected: 0,
            cursor,
            interaction: Interaction::default(),
            visible,
            data_revision: 0,
            revision: 0,
        }
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn selected_domain(&self) -> &Domain {
        &self.domains[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn cursor(&self) -> TimeCursor {
        self.cursor
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn visible(&self) -> &GraphData {
        &self.visible
    }

    pub fn data_revision(&self) -> u64 {
        self.data_revision
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switches to the domain at `index` and clears selection and hover.
    /// Returns `false` for an out-of-range index.
    pub fn select_domain_index(&mut self, index: usize) -> bool {
        if index >= self.domains.len() {
            return false;
        }
        if index != self.selected {
            self.selected = index;
            self.refilter();
        }
        self.reset_interaction();
        true
    }

    pub fn select_domain(&mut self, id: &str) -> bool {
        match self.domains.iter().position(|d| d.id == id) {
            Some(index) => self.select_domain_index(index),
            None => false,
        }
    }

    /// Moves the time slider. Any actual move clears selection and hover.
    pub fn set_time(&mut self, cursor: TimeCursor) -> bool {
        if cursor == self.cursor {
            return false;
        }
        let before = self.visible.nodes.len();
        self.cursor = cursor;
        // Visible node counts only change when a start time is crossed.
        let crossed = self
            .selected_domain()
            .data
            .nodes
            .iter()
            .filter(|n| cursor.reveals(n))
            .count()
            != before;
        if crossed {
            self.refilter();
        }
        self.reset_interaction();
        true
    }

    /// Click result from the picker. Ids outside the visible set count as
    /// a click on empty space.
    pub fn click(&mut self, id: Option<NodeId>) {
        let id = id.filter(|id| self.visible.contains(id));
        if self.interaction.selected != id {
            self.interaction.selected = id;
            self.revision += 1;
        }
    }

    pub fn hover(&mut self, id: Option<NodeId>) {
        let id = id.filter(|id| self.visible.contains(id));
        if self.interaction.hovered != id {
            self.interaction.hovered = id;
            self.revision += 1;
        }
    }

    pub fn clear_interaction(&mut self) {
        self.reset_interaction();
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.interaction
            .selected
            .as_ref()
            .and_then(|id| self.visible.node(id))
    }

    pub fn hovered_node(&self) -> Option<&Node> {
        self.interaction
            .hovered
            .as_ref()
            .and_then(|id| self.visible.node(id))
    }

    pub fn style(&self) -> SceneStyle {
        SceneStyle::compute(&self.visible, &self.interaction)
    }

    fn refilter(&mut self) {
        self.visible = visible_subgraph(&self.domains[self.selected].data, self.cursor);
        self.data_revision += 1;
        self.revision += 1;
    }

    fn reset_interaction(&mut self) {
        if self.interaction != Interaction::default() {
            self.interaction.clear();
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Option<NodeId> {
        Some(NodeId::new(s))
    }

    #[test]
    fn starts_on_first_domain_fully_revealed() {
        let ex = Explorer::with_builtin_domains();
        assert_eq!(ex.selected_domain().id, "software");
        assert_eq!(ex.cursor().value(), 100);
        assert_eq!(ex.visible().nodes.len(), 10);
        assert!(ex.selected_node().is_none());
    }

    #[test]
    fn switching_domain_resets_selection_and_hover() {
        let mut ex = Explorer::with_builtin_domains();
        ex.click(id("app"));
        ex.hover(id("db"));
        assert_eq!(ex.selected_node().map(|n| n.name.as_str()), Some("Application"));

        assert!(ex.select_domain("hr"));
        assert_eq!(ex.interaction(), &Interaction::default());
        assert_eq!(ex.visible().nodes[0].id.as_str(), "employer");

        ex.click(id("employer"));
        assert!(ex.select_domain("hr"));
        assert!(ex.interaction().selected.is_none());

        assert!(!ex.select_domain("nope"));
        assert!(!ex.select_domain_index(7));
    }

    #[test]
    fn time_change_clears_interaction_and_refilters() {
        let mut ex = Explorer::with_builtin_domains();
        ex.click(id("var"));
        let data_rev = ex.data_revision();

        assert!(ex.set_time(TimeCursor::new(20)));
        assert!(ex.interaction().selected.is_none());
        assert_eq!(ex.visible().nodes.len(), 6);
        assert!(ex.data_revision() > data_rev);

        assert!(!ex.set_time(TimeCursor::new(20)));
    }

    #[test]
    fn time_move_without_crossing_keeps_data_revision() {
        let mut ex = Explorer::with_builtin_domains();
        ex.set_time(TimeCursor::new(41));
        let data_rev = ex.data_revision();
        assert!(ex.set_time(TimeCursor::new(60)));
        assert_eq!(ex.data_revision(), data_rev);
    }

    #[test]
    fn clicks_on_hidden_nodes_count_as_empty_space() {
        let mut ex = Explorer::with_builtin_domains();
        ex.set_time(TimeCursor::new(10));
        ex.click(id("funcA"));
        assert!(ex.interaction().selected.is_none());

        ex.click(id("app"));
        ex.click(None);
        assert!(ex.interaction().selected.is_none());
    }

    #[test]
    fn unchanged_hover_does_not_bump_revision() {
        let mut ex = Explorer::with_builtin_domains();
        ex.hover(id("db"));
        let rev = ex.revision();
        ex.hover(id("db"));
        assert_eq!(ex.revision(), rev);
        ex.hover(None);
        assert!(ex.revision() > rev);
    }

    #[test]
    fn style_follows_selection() {
        let mut ex = Explorer::with_builtin_domains();
        ex.click(id("funcB"));
        let style = ex.style();
        let undimmed = style.undimmed();
        assert_eq!(undimmed.len(), 3);
        assert!(undimmed.contains(&NodeId::new("classB")));
        assert!(undimmed.contains(&NodeId::new("var")));
    }

    #[test]
    fn new_rejects_empty_and_invalid_catalogs() {
        assert!(matches!(Explorer::new(Vec::new()), Err(DatasetError::NoDomains)));

        let mut domains = builtin_domains();
        domains[2].data.links.push(crate::model::Link::new("bom", "ghost"));
        assert!(matches!(
            Explorer::new(domains),
            Err(DatasetError::InvalidDomain { .. })
        ));
    }
}
