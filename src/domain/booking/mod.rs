//! Booking domain module.
//!
//! Rooms, the sessions booked in them, and the values those sessions are
//! built from. `Room` is the aggregate root: it owns its sessions and is
//! the only place new ones are created.
//!
//! # Composition
//!
//! - `TimeInterval` - half-open `[start, end)` range with an overlap test
//! - `UnionCard` - validated union membership card (`OMB-` prefix)
//! - `Participant` - identified musician, optionally carrying a card
//! - `ScheduledSession` - immutable interval + distinct participants
//! - `Room` - rejects overlapping sessions, delegates the rest

mod errors;
mod participant;
mod room;
mod scheduled_session;
mod time_interval;
mod union_card;

pub use errors::{BookingError, RoomError};
pub use participant::Participant;
pub use room::Room;
pub use scheduled_session::{ScheduledSession, SessionRequest};
pub use time_interval::TimeInterval;
pub use union_card::{UnionCard, UNION_CARD_PREFIX};
