use thiserror::Error;

use crate::model::NodeId;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("node id must not be empty")]
    EmptyNodeId,

    #[error("duplicate node id `{0}`")]
    DuplicateNode(NodeId),

    #[error("link {from} -> {to} references unknown node `{missing}`")]
    DanglingLink {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    #[error("domain `{domain}`: {reason}")]
    InvalidDomain {
        domain: String,
        reason: Box<DatasetError>,
    },

    #[error("duplicate domain id `{0}`")]
    DuplicateDomain(String),

    #[error("at least one domain is required")]
    NoDomains,

    #[error("malformed domain json: {0}")]
    Json(#[from] serde_json::Error),
}
