//! Subscriber distribution module.
//!
//! Produces the deterministic identity blocks that populate the deployment's
//! subscriber records.

pub mod types;
pub mod distribution;

// Re-export key types for easier access
pub use distribution::{add_subscribers_per_radio_node, DistributionError};
pub use types::Subscriber;
