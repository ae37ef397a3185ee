//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory room storage

pub mod memory;

pub use memory::InMemoryRoomRepository;
