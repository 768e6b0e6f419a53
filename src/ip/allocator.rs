//! IPv4 address allocation.
//!
//! Assigns a stable /24 subnet to every named logical network and a stable
//! host address to every (network, host) pair, from one bounded address
//! space. Assignment is strictly first-come-first-served and never freed,
//! which makes every call idempotent; callers that want stable addressing
//! across rebuilds must issue calls in a stable, sorted order (e.g. by
//! network name, then host name). The allocator cannot enforce that
//! contract, only honor it.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use log::debug;

use super::space::AddressSpace;

/// Last host octet handed out within a /24; .255 stays unused.
const LAST_HOST_OCTET: u32 = 254;

/// Errors raised by address-space handling and allocation.
#[derive(Debug, thiserror::Error)]
pub enum AllocError {
    #[error("invalid address space '{0}'")]
    InvalidSpace(String),
    #[error("address space /{prefix} is too small, /18 or larger required")]
    SpaceTooSmall { prefix: u8 },
    #[error("address space exhausted: too many {0}s")]
    CapacityExceeded(&'static str),
    #[error("network '{0}' does not exist")]
    UnknownNetwork(String),
    #[error("{kind} '{name}' has a conflicting fixed assignment")]
    FixedConflict { kind: &'static str, name: String },
    #[error("fixed address {0} is outside the address space")]
    FixedOutsideSpace(Ipv4Addr),
}

/// Bidirectional name <-> value slot map with get-or-assign semantics.
/// Values already taken (by earlier assignment or a fixed pin) are skipped
/// when scanning for the next free slot.
#[derive(Debug, Default)]
struct SlotMap {
    by_name: HashMap<String, u32>,
    by_value: HashMap<u32, String>,
}

impl SlotMap {
    fn get(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    fn pin(&mut self, kind: &'static str, name: &str, value: u32) -> Result<(), AllocError> {
        if let Some(existing) = self.by_name.get(name) {
            if *existing != value {
                return Err(AllocError::FixedConflict {
                    kind,
                    name: name.to_string(),
                });
            }
        }
        if let Some(existing) = self.by_value.get(&value) {
            if existing != name {
                return Err(AllocError::FixedConflict {
                    kind,
                    name: name.to_string(),
                });
            }
        }
        self.by_name.insert(name.to_string(), value);
        self.by_value.insert(value, name.to_string());
        Ok(())
    }

    fn get_or_assign(
        &mut self,
        kind: &'static str,
        name: &str,
        next: &mut u32,
        step: u32,
        max: u32,
    ) -> Result<u32, AllocError> {
        if let Some(value) = self.get(name) {
            return Ok(value);
        }
        loop {
            let value = *next;
            if value > max {
                return Err(AllocError::CapacityExceeded(kind));
            }
            // Saturate on overflow at the top of IPv4 space; the sentinel is
            // always above `max`, so the next scan reports exhaustion.
            *next = value.checked_add(step).unwrap_or(u32::MAX);
            if !self.by_value.contains_key(&value) {
                self.by_name.insert(name.to_string(), value);
                self.by_value.insert(value, name.to_string());
                return Ok(value);
            }
        }
    }
}

/// Host slots of one allocated network: final octets by host name.
#[derive(Debug)]
struct HostSlots {
    map: SlotMap,
    next: u32,
}

impl Default for HostSlots {
    fn default() -> Self {
        // Octets 0 and 1 are the network address and gateway. Pre-seeding
        // them keeps fixed pins from claiming either one; dynamic
        // assignment starts at 2.
        let mut map = SlotMap::default();
        for (name, octet) in [(".0", 0u32), (".1", 1)] {
            map.by_name.insert(name.to_string(), octet);
            map.by_value.insert(octet, name.to_string());
        }
        Self { map, next: 2 }
    }
}

/// IPv4 address allocator for one build invocation.
#[derive(Debug)]
pub struct IpAllocator {
    space: AddressSpace,
    networks: SlotMap,
    next_network: u32,
    hosts: HashMap<String, HostSlots>,
}

impl IpAllocator {
    pub fn new(space: AddressSpace) -> Self {
        Self {
            space,
            networks: SlotMap::default(),
            next_network: space.base_long(),
            hosts: HashMap::new(),
        }
    }

    /// Pin a (network, host) pair to a fixed address before any dynamic
    /// allocation. The pin reserves both the network's /24 base and the
    /// host's final octet within it; dynamic assignment skips reserved
    /// values. Conflicting pins are rejected.
    pub fn pin_fixed(
        &mut self,
        network: &str,
        host: &str,
        addr: Ipv4Addr,
    ) -> Result<(), AllocError> {
        if !self.space.contains(addr) {
            return Err(AllocError::FixedOutsideSpace(addr));
        }
        let long = u32::from(addr);
        self.networks.pin("network", network, long & !0xFF)?;
        self.hosts
            .entry(network.to_string())
            .or_default()
            .map
            .pin("host", host, long & 0xFF)?;
        debug!("Pinned {addr} to host {host} in network {network}");
        Ok(())
    }

    /// Allocate (or look up) the /24 subnet of a named network.
    pub fn alloc_network(&mut self, network: &str) -> Result<String, AllocError> {
        let fresh = self.networks.get(network).is_none();
        let base = self.networks.get_or_assign(
            "network",
            network,
            &mut self.next_network,
            256,
            // The whole /24 must fit inside the space.
            self.space.last_long().saturating_sub(255),
        )?;
        if fresh {
            debug!("Allocated subnet {}/24 to network {network}", Ipv4Addr::from(base));
        }
        Ok(format!("{}/24", Ipv4Addr::from(base)))
    }

    /// Allocate (or look up) the address of `host` within `network`.
    ///
    /// The network must already have been allocated via
    /// [`alloc_network`](Self::alloc_network); asking for a host first is an
    /// ordering bug in the caller, not a recoverable condition.
    pub fn alloc_netif(&mut self, network: &str, host: &str) -> Result<String, AllocError> {
        let base = self
            .networks
            .get(network)
            .ok_or_else(|| AllocError::UnknownNetwork(network.to_string()))?;

        let slots = self.hosts.entry(network.to_string()).or_default();
        let fresh = slots.map.get(host).is_none();
        let octet =
            slots
                .map
                .get_or_assign("host", host, &mut slots.next, 1, LAST_HOST_OCTET)?;
        let addr = Ipv4Addr::from(base | octet);
        if fresh {
            debug!("Allocated {addr} to host {host} in network {network}");
        }
        Ok(addr.to_string())
    }

    /// Find the allocated network whose /24 contains `addr`, if any.
    pub fn find_network(&self, addr: Ipv4Addr) -> Option<&str> {
        self.networks
            .by_value
            .get(&(u32::from(addr) & !0xFF))
            .map(String::as_str)
    }
}
