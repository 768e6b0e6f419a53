//! Deployment-definition input types.
//!
//! These structures are the in-memory form of the network definition handed
//! to the build pipeline: identifiers for data networks, link endpoint
//! references, raw link declarations, and the slice associations attached to
//! subscriber requests. File parsing and validation of the surrounding
//! definition document belong to the caller; only the shapes consumed by the
//! routing and allocation engines live here.

use serde::{Deserialize, Serialize};

/// Identifier of a data network: the slice it serves plus its network name.
///
/// Two data networks may share a network name only if they differ in slice,
/// but path queries address a data network by network name alone, matching
/// how link declarations refer to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataNetworkId {
    /// Slice / service-class identifier (e.g. an S-NSSAI string).
    pub slice: String,
    /// Data network name, unique within the deployment's link namespace.
    pub name: String,
}

impl DataNetworkId {
    pub fn new(slice: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slice: slice.into(),
            name: name.into(),
        }
    }
}

/// One endpoint of a declared link: either a plain node name (radio or
/// forwarding node, resolved against the declared node lists) or a full
/// data-network identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Name(String),
    DataNetwork(DataNetworkId),
}

impl From<&str> for NodeRef {
    fn from(name: &str) -> Self {
        NodeRef::Name(name.to_string())
    }
}

impl From<DataNetworkId> for NodeRef {
    fn from(dn: DataNetworkId) -> Self {
        NodeRef::DataNetwork(dn)
    }
}

/// A raw link declaration between two node references.
///
/// Deserializes from the two shapes the definition document uses:
/// `[a, b]` (cost defaults to 1) or `[a, b, cost]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link {
    Pair(NodeRef, NodeRef),
    Weighted(NodeRef, NodeRef, u32),
}

impl Link {
    pub fn new(a: impl Into<NodeRef>, b: impl Into<NodeRef>) -> Self {
        Link::Pair(a.into(), b.into())
    }

    pub fn with_cost(a: impl Into<NodeRef>, b: impl Into<NodeRef>, cost: u32) -> Self {
        Link::Weighted(a.into(), b.into(), cost)
    }

    /// Endpoints and effective cost of this declaration.
    pub fn parts(&self) -> (&NodeRef, &NodeRef, u32) {
        match self {
            Link::Pair(a, b) => (a, b, 1),
            Link::Weighted(a, b, cost) => (a, b, *cost),
        }
    }
}

/// Slice association carried by a subscriber request: the slice identifier
/// and the data network names reachable through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceAssociation {
    pub slice: String,
    #[serde(default)]
    pub data_networks: Vec<String>,
}
