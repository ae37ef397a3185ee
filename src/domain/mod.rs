//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `booking` - Rooms, scheduled sessions, participants and their values

pub mod booking;
pub mod foundation;
