//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `RoomRepository` - Room storage with per-room locking and the
//!   session -> room index

mod room_repository;

pub use room_repository::{RoomHandle, RoomRepository};
