//! Subscriber record definitions.

use serde::{Deserialize, Serialize};

use crate::netdef::SliceAssociation;

/// One block of provisioned subscriber identities, pinned to a single radio
/// node. Produced by the distributor and serialized by the caller into
/// vendor-specific subscriber databases; immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    /// First identity of the block, as a zero-padded 15-digit decimal string.
    pub identity: String,
    /// Number of consecutive identities in the block; may be 0 when the
    /// requested total was exhausted by earlier radio nodes.
    pub count: u64,
    /// Slice associations, carried through unmodified from the request.
    pub slices: Vec<SliceAssociation>,
    /// Names of the radio nodes serving this block; the distributor always
    /// assigns exactly one.
    pub radio_nodes: Vec<String>,
}
