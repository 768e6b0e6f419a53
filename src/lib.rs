//! # updeploy-core - Routing and addressing engines for mobile-network test deployments
//!
//! This library resolves an abstract deployment description (radio nodes,
//! user-plane forwarding nodes, data networks, and the declared links between
//! them) into the two artifacts a deployment generator needs:
//!
//! - a user-plane routing decision: the ordered forwarding nodes a session
//!   between a radio node and a data network must traverse, and
//! - a collision-free IPv4 assignment for every logical network segment and
//!   every host attached to it.
//!
//! ## Architecture
//!
//! The library is organized into four independent engines consumed by an
//! external build pipeline; they do not call each other:
//!
//! - `netdef`: deployment-definition input types (node references, link
//!   declarations, slice associations)
//! - `topology`: weighted undirected user-plane graph and shortest-path
//!   routing queries
//! - `subscriber`: deterministic distribution of subscriber identities
//!   across radio nodes
//! - `ip`: `/24`-per-network address allocation from one bounded space
//!
//! ## Example Usage
//!
//! ```rust
//! use updeploy_core::ip::{AddressSpace, IpAllocator};
//!
//! let space: AddressSpace = "172.25.192.0/18".parse()?;
//! let mut alloc = IpAllocator::new(space);
//! let subnet = alloc.alloc_network("mgmt")?;      // "172.25.192.0/24"
//! let addr = alloc.alloc_netif("mgmt", "amf")?;   // "172.25.192.2"
//! # assert_eq!(subnet, "172.25.192.0/24");
//! # assert_eq!(addr, "172.25.192.2");
//! # Ok::<(), updeploy_core::ip::AllocError>(())
//! ```
//!
//! ## Error Handling
//!
//! Each engine exposes a `thiserror` enum (`TopologyError`, `AllocError`,
//! `DistributionError`). Every error is fatal to the current build
//! invocation; a routing query that finds no usable path is not an error but
//! a normal `None` outcome.
//!
//! ## Determinism
//!
//! All engines are pure CPU with no I/O. Identical inputs produce identical
//! outputs, including shortest-path tie-breaking, so repeated builds of the
//! same deployment yield byte-identical artifacts. Address assignment is
//! additionally sensitive to call order; callers must allocate in a stable,
//! sorted order across rebuilds (see `ip::IpAllocator`).

pub mod netdef;
pub mod topology;
pub mod subscriber;
pub mod ip;
