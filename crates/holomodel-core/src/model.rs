use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::DatasetError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Node type tag. Only the four code-structure kinds get their own colour;
/// every other tag is kept verbatim in `Other` for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Module,
    Class,
    Function,
    Interface,
    Other(String),
}

impl NodeKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "Module" => Self::Module,
            "Class" => Self::Class,
            "Function" => Self::Function,
            "Interface" => Self::Interface,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Module => "Module",
            Self::Class => "Class",
            Self::Function => "Function",
            Self::Interface => "Interface",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub description: String,
    pub val: f32,
    pub start_time: i32,
}

impl Node {
    /// Sphere radius used for both the mesh and hit testing.
    pub fn radius(&self) -> f32 {
        ((self.val + 1.0).ln() * 1.5).max(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: NodeId(source.into()),
            target: NodeId(target.into()),
        }
    }

    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }

    /// The endpoint across from `id`, if `id` is one of the endpoints.
    pub fn other_end(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl GraphData {
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut ids: HashSet<&NodeId> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.id.0.trim().is_empty() {
                return Err(DatasetError::EmptyNodeId);
            }
            if !ids.insert(&node.id) {
                return Err(DatasetError::DuplicateNode(node.id.clone()));
            }
        }
        for link in &self.links {
            for end in [&link.source, &link.target] {
                if !ids.contains(end) {
                    return Err(DatasetError::DanglingLink {
                        from: link.source.clone(),
                        to: link.target.clone(),
                        missing: end.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainIcon {
    Code,
    UserGroup,
    Cube,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub icon: DomainIcon,
    pub data: GraphData,
}

impl Domain {
    pub fn validate(&self) -> Result<(), DatasetError> {
        self.data
            .validate()
            .map_err(|reason| DatasetError::InvalidDomain {
                domain: self.id.clone(),
                reason: Box::new(reason),
            })
    }
}
