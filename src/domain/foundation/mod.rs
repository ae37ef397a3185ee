//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the timestamp value object, and the error
//! vocabulary that form the base of the studio booking domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{ParticipantId, RoomId, ScheduledSessionId};
pub use timestamp::Timestamp;
