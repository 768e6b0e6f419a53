//! Address-space definition.
//!
//! One IPv4 CIDR block from which every per-network /24 subnet is carved.
//! The block must be /18 or larger so that a realistic deployment (dozens of
//! logical networks) always fits.

use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnetwork::Ipv4Network;

use super::allocator::AllocError;

/// Maximum prefix length accepted for the overall block.
const MAX_PREFIX: u8 = 18;

/// The IPv4 block all subnets are allocated from. Immutable for the
/// lifetime of an allocator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpace {
    block: Ipv4Network,
}

impl AddressSpace {
    /// Wrap a parsed CIDR block, rejecting blocks smaller than /18.
    pub fn new(block: Ipv4Network) -> Result<Self, AllocError> {
        if block.prefix() > MAX_PREFIX {
            return Err(AllocError::SpaceTooSmall {
                prefix: block.prefix(),
            });
        }
        Ok(Self { block })
    }

    /// First address of the block.
    pub fn base(&self) -> Ipv4Addr {
        self.block.network()
    }

    /// Last address of the block.
    pub fn last(&self) -> Ipv4Addr {
        self.block.broadcast()
    }

    pub(crate) fn base_long(&self) -> u32 {
        u32::from(self.block.network())
    }

    pub(crate) fn last_long(&self) -> u32 {
        u32::from(self.block.broadcast())
    }

    /// Whether `addr` falls inside the block.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.block.contains(addr)
    }
}

impl FromStr for AddressSpace {
    type Err = AllocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let block: Ipv4Network = s
            .parse()
            .map_err(|_| AllocError::InvalidSpace(s.to_string()))?;
        Self::new(block)
    }
}
