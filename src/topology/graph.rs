//! User-plane graph construction.
//!
//! Builds the undirected, weighted topology graph from declared node lists
//! and raw link declarations. Storage is arena style: nodes in a dense
//! vector, edges as adjacency lists by node index. The graphs are small
//! (tens to low hundreds of nodes), so no further indexing is needed.

use std::collections::HashMap;

use log::debug;

use crate::netdef::{DataNetworkId, Link, NodeRef};

use super::types::{Edge, EdgeKind, Node, TopologyError};

/// The user-plane topology of one deployment.
///
/// Built once per build invocation and read-only afterwards; all queries
/// take `&self`.
#[derive(Debug)]
pub struct UpGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) adjacency: Vec<Vec<(usize, u32)>>,
    pub(crate) edges: Vec<Edge>,
}

impl UpGraph {
    /// Build the graph from the declared node lists and link declarations.
    ///
    /// Plain-name link endpoints resolve against the forwarding-node list
    /// first, then the radio-node list; a name matching neither is an error.
    /// Duplicate links between the same pair of nodes are rejected rather
    /// than overwritten, since a silent overwrite would change path costs.
    pub fn build(
        radio_nodes: &[String],
        forwarding_nodes: &[String],
        data_networks: &[DataNetworkId],
        links: &[Link],
    ) -> Result<Self, TopologyError> {
        let mut graph = UpGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        };

        for name in radio_nodes {
            graph.add_node(Node::Radio { name: name.clone() })?;
        }
        for name in forwarding_nodes {
            graph.add_node(Node::Forwarding { name: name.clone() })?;
        }
        for dn in data_networks {
            if dn.slice.is_empty() || dn.name.is_empty() {
                return Err(TopologyError::MalformedDataNetwork);
            }
            graph.add_node(Node::DataNetwork { id: dn.clone() })?;
        }

        for link in links {
            let (a, b, cost) = link.parts();
            let ai = graph.resolve(a, forwarding_nodes, data_networks)?;
            let bi = graph.resolve(b, forwarding_nodes, data_networks)?;
            graph.add_edge(ai, bi, cost)?;
        }

        debug!(
            "Built user-plane graph: {} nodes, {} edges",
            graph.nodes.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    /// All nodes, in declaration order (radio, forwarding, data networks).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All accepted edges, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn node_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn add_node(&mut self, node: Node) -> Result<usize, TopologyError> {
        let name = node.name().to_string();
        if self.index.contains_key(&name) {
            return Err(TopologyError::DuplicateNode(name));
        }
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        self.index.insert(name, idx);
        Ok(idx)
    }

    fn resolve(
        &self,
        node_ref: &NodeRef,
        forwarding_nodes: &[String],
        data_networks: &[DataNetworkId],
    ) -> Result<usize, TopologyError> {
        match node_ref {
            NodeRef::DataNetwork(id) => {
                if id.slice.is_empty() || id.name.is_empty() {
                    return Err(TopologyError::MalformedDataNetwork);
                }
                if !data_networks.contains(id) {
                    return Err(TopologyError::UnknownDataNetwork(id.name.clone()));
                }
                self.node_index(&id.name)
                    .ok_or_else(|| TopologyError::UnknownDataNetwork(id.name.clone()))
            }
            NodeRef::Name(name) => {
                // Forwarding nodes shadow radio nodes of the same name; a
                // name declared as neither is rejected instead of being
                // assumed to be a radio node.
                if forwarding_nodes.contains(name) || self.is_radio(name) {
                    self.node_index(name)
                        .ok_or_else(|| TopologyError::UnknownNodeReference(name.clone()))
                } else {
                    Err(TopologyError::UnknownNodeReference(name.clone()))
                }
            }
        }
    }

    fn is_radio(&self, name: &str) -> bool {
        matches!(
            self.node_index(name).map(|i| &self.nodes[i]),
            Some(Node::Radio { .. })
        )
    }

    fn add_edge(&mut self, a: usize, b: usize, cost: u32) -> Result<(), TopologyError> {
        if a == b {
            return Err(TopologyError::SelfLoop(self.nodes[a].name().to_string()));
        }
        if cost == 0 {
            return Err(TopologyError::ZeroCost(
                self.nodes[a].name().to_string(),
                self.nodes[b].name().to_string(),
            ));
        }
        if self.adjacency[a].iter().any(|&(to, _)| to == b) {
            return Err(TopologyError::DuplicateLink(
                self.nodes[a].name().to_string(),
                self.nodes[b].name().to_string(),
            ));
        }

        let kind = EdgeKind::derive(self.nodes[a].kind(), self.nodes[b].kind());
        self.adjacency[a].push((b, cost));
        self.adjacency[b].push((a, cost));
        self.edges.push(Edge { a, b, kind, cost });
        Ok(())
    }
}
