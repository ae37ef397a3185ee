//! Studio Booking - Recording room scheduling
//!
//! This crate books recording rooms against a calendar of non-overlapping
//! half-open time intervals. The `Room` aggregate owns its sessions and
//! rejects any booking that collides with one already accepted.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
