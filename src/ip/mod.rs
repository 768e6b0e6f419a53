//! IP address allocation module.
//!
//! This module carves /24 subnets for logical networks out of one bounded
//! address space and hands out host addresses within them, keeping every
//! assignment stable and collision-free for the lifetime of the allocator.

pub mod space;
pub mod allocator;

// Re-export commonly used types
pub use allocator::{AllocError, IpAllocator};
pub use space::AddressSpace;
