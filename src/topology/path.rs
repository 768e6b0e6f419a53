//! Shortest-path routing queries against a built user-plane graph.
//!
//! Self-contained Dijkstra over the graph's adjacency lists. Equal-cost
//! paths are resolved by preferring the lexicographically smaller node name,
//! so repeated builds from identical input always produce identical routes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::netdef::DataNetworkId;

use super::graph::UpGraph;

impl UpGraph {
    /// Compute the session route between a radio node and a data network.
    ///
    /// Returns the forwarding-node names strictly between the two endpoints,
    /// in traversal order. Returns `None` when no path exists, when either
    /// endpoint is unknown, or when the radio node would connect to the data
    /// network with zero forwarding hops; callers treat all three as "no
    /// route".
    pub fn compute_path(&self, radio_node: &str, dn: &DataNetworkId) -> Option<Vec<String>> {
        let src = self.node_index(radio_node)?;
        let dst = self.node_index(&dn.name)?;

        let path = self.dijkstra(src, dst)?;
        if path.len() <= 2 {
            return None;
        }
        Some(
            path[1..path.len() - 1]
                .iter()
                .map(|&i| self.nodes[i].name().to_string())
                .collect(),
        )
    }

    /// Weighted shortest path from `src` to `dst` as a node index sequence,
    /// endpoints included.
    fn dijkstra(&self, src: usize, dst: usize) -> Option<Vec<usize>> {
        let mut dist: Vec<Option<u64>> = vec![None; self.nodes.len()];
        let mut prev: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut heap = BinaryHeap::new();

        dist[src] = Some(0);
        heap.push(Reverse((0u64, self.nodes[src].name(), src)));

        while let Some(Reverse((d, _, u))) = heap.pop() {
            if dist[u] != Some(d) {
                continue; // stale entry
            }
            if u == dst {
                break;
            }
            for &(v, cost) in &self.adjacency[u] {
                let nd = d + u64::from(cost);
                let better = match dist[v] {
                    None => true,
                    Some(old) if nd < old => true,
                    // Tie: keep whichever predecessor has the smaller name.
                    Some(old) => {
                        nd == old
                            && prev[v].is_some_and(|p| {
                                self.nodes[u].name() < self.nodes[p].name()
                            })
                    }
                };
                if better {
                    let relaxed = dist[v] != Some(nd);
                    dist[v] = Some(nd);
                    prev[v] = Some(u);
                    if relaxed {
                        heap.push(Reverse((nd, self.nodes[v].name(), v)));
                    }
                }
            }
        }

        dist[dst]?;
        let mut path = vec![dst];
        let mut cur = dst;
        while cur != src {
            cur = prev[cur]?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netdef::Link;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn internet() -> DataNetworkId {
        DataNetworkId::new("1", "internet")
    }

    fn build(forwarders: &[&str], links: Vec<Link>) -> UpGraph {
        UpGraph::build(&names(&["gnb0"]), &names(forwarders), &[internet()], &links).unwrap()
    }

    #[test]
    fn test_single_forwarder_path() {
        let graph = build(
            &["upf0"],
            vec![Link::new("gnb0", "upf0"), Link::new("upf0", internet())],
        );
        assert_eq!(
            graph.compute_path("gnb0", &internet()),
            Some(vec!["upf0".to_string()])
        );
    }

    #[test]
    fn test_direct_link_is_no_route() {
        let graph = build(&[], vec![Link::new("gnb0", internet())]);
        assert_eq!(graph.compute_path("gnb0", &internet()), None);
    }

    #[test]
    fn test_disconnected_is_no_route() {
        let graph = build(&["upf0"], vec![Link::new("gnb0", "upf0")]);
        assert_eq!(graph.compute_path("gnb0", &internet()), None);
    }

    #[test]
    fn test_unknown_endpoints_are_no_route() {
        let graph = build(
            &["upf0"],
            vec![Link::new("gnb0", "upf0"), Link::new("upf0", internet())],
        );
        assert_eq!(graph.compute_path("gnb9", &internet()), None);
        assert_eq!(
            graph.compute_path("gnb0", &DataNetworkId::new("1", "ims")),
            None
        );
    }

    #[test]
    fn test_costs_steer_route() {
        // Two-hop detour is cheaper than the expensive single forwarder.
        let graph = build(
            &["upfa", "upfb", "upfc"],
            vec![
                Link::with_cost("gnb0", "upfa", 10),
                Link::new("upfa", internet()),
                Link::new("gnb0", "upfb"),
                Link::new("upfb", "upfc"),
                Link::new("upfc", internet()),
            ],
        );
        assert_eq!(
            graph.compute_path("gnb0", &internet()),
            Some(vec!["upfb".to_string(), "upfc".to_string()])
        );
    }

    #[test]
    fn test_equal_cost_tie_breaks_lexicographically() {
        let graph = build(
            &["upfz", "upfa"],
            vec![
                Link::new("gnb0", "upfz"),
                Link::new("upfz", internet()),
                Link::new("gnb0", "upfa"),
                Link::new("upfa", internet()),
            ],
        );
        // Both routes cost 2; the lexicographically smaller forwarder wins
        // regardless of declaration order.
        assert_eq!(
            graph.compute_path("gnb0", &internet()),
            Some(vec!["upfa".to_string()])
        );
    }

    #[test]
    fn test_path_never_contains_endpoints() {
        let graph = build(
            &["upf0", "upf1"],
            vec![
                Link::new("gnb0", "upf0"),
                Link::new("upf0", "upf1"),
                Link::new("upf1", internet()),
            ],
        );
        let path = graph.compute_path("gnb0", &internet()).unwrap();
        assert!(!path.contains(&"gnb0".to_string()));
        assert!(!path.contains(&"internet".to_string()));
        assert_eq!(path, vec!["upf0".to_string(), "upf1".to_string()]);
    }
}
