//! Topology type definitions.
//!
//! Node and edge variants for the user-plane graph, plus the errors a graph
//! build can raise.

use crate::netdef::DataNetworkId;

/// A node in the user-plane topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Wireless-access endpoint originating user sessions.
    Radio { name: String },
    /// User-plane packet forwarder between radio nodes and data networks.
    Forwarding { name: String },
    /// External network a session ultimately connects to.
    DataNetwork { id: DataNetworkId },
}

impl Node {
    /// Name under which this node is keyed in the graph. Data networks are
    /// keyed by network name, matching how link declarations refer to them.
    pub fn name(&self) -> &str {
        match self {
            Node::Radio { name } | Node::Forwarding { name } => name,
            Node::DataNetwork { id } => &id.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Radio { .. } => NodeKind::Radio,
            Node::Forwarding { .. } => NodeKind::Forwarding,
            Node::DataNetwork { .. } => NodeKind::DataNetwork,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Radio,
    Forwarding,
    DataNetwork,
}

/// Link role, derived from its endpoints: a radio endpoint makes it an
/// access link, otherwise a data-network endpoint makes it an egress link,
/// otherwise it runs between two forwarders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    RadioLink,
    InterForwardingLink,
    DataLink,
}

impl EdgeKind {
    pub fn derive(a: NodeKind, b: NodeKind) -> Self {
        if a == NodeKind::Radio || b == NodeKind::Radio {
            EdgeKind::RadioLink
        } else if a == NodeKind::DataNetwork || b == NodeKind::DataNetwork {
            EdgeKind::DataLink
        } else {
            EdgeKind::InterForwardingLink
        }
    }
}

/// An undirected edge between two nodes, stored by graph index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub kind: EdgeKind,
    pub cost: u32,
}

/// Errors raised while building a user-plane graph.
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("link references unknown node '{0}'")]
    UnknownNodeReference(String),
    #[error("link references undeclared data network '{0}'")]
    UnknownDataNetwork(String),
    #[error("data network descriptor with empty slice or name")]
    MalformedDataNetwork,
    #[error("duplicate node name '{0}' in topology")]
    DuplicateNode(String),
    #[error("duplicate link between '{0}' and '{1}'")]
    DuplicateLink(String, String),
    #[error("self-loop on node '{0}'")]
    SelfLoop(String),
    #[error("link between '{0}' and '{1}' has zero cost")]
    ZeroCost(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kind_derivation() {
        use NodeKind::*;
        assert_eq!(EdgeKind::derive(Radio, Forwarding), EdgeKind::RadioLink);
        assert_eq!(EdgeKind::derive(Forwarding, Radio), EdgeKind::RadioLink);
        // A radio endpoint takes precedence over a data-network endpoint.
        assert_eq!(EdgeKind::derive(Radio, DataNetwork), EdgeKind::RadioLink);
        assert_eq!(EdgeKind::derive(Forwarding, DataNetwork), EdgeKind::DataLink);
        assert_eq!(
            EdgeKind::derive(Forwarding, Forwarding),
            EdgeKind::InterForwardingLink
        );
    }
}
