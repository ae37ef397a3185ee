//! Booking-specific error types.
//!
//! # Error Taxonomy
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | InvalidInterval | `TimeInterval::new` |
//! | InvalidParticipant | `Participant::new` |
//! | InvalidCredential | `UnionCard::new` |
//! | InvalidRoomName | `Room::new` |
//! | MissingInterval | `ScheduledSession::from_request`, `Room::prepare_request` |
//! | NilParticipantList | `ScheduledSession::from_request`, `Room::prepare_request` |
//! | EmptySessionParticipants | `ScheduledSession::new` |
//! | DuplicateParticipant | `ScheduledSession::new` |
//! | BookingCollision | `Room::book_session`, `Room::prepare_request`, `Room::commit` |
//!
//! All of these are business-rule rejections and are never retried.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, RoomId, ScheduledSessionId};

/// Rule violations raised while building booking values or booking a room.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Start must be before end")]
    InvalidInterval,

    #[error("Participant name cannot be empty")]
    InvalidParticipant,

    #[error("Invalid union card: {reason}")]
    InvalidCredential { reason: String },

    #[error("Room name cannot be empty")]
    InvalidRoomName,

    #[error("Session must have a time interval")]
    MissingInterval,

    #[error("Participant list is required")]
    NilParticipantList,

    #[error("Session must have at least one participant")]
    EmptySessionParticipants,

    #[error("Duplicate participant detected: {name}")]
    DuplicateParticipant { name: String },

    #[error("Booking collision detected. The room is already booked for this time range")]
    BookingCollision,
}

impl BookingError {
    pub fn invalid_credential(reason: impl Into<String>) -> Self {
        BookingError::InvalidCredential {
            reason: reason.into(),
        }
    }

    pub fn duplicate_participant(name: impl Into<String>) -> Self {
        BookingError::DuplicateParticipant { name: name.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::InvalidInterval => ErrorCode::InvalidInterval,
            BookingError::InvalidParticipant => ErrorCode::InvalidParticipant,
            BookingError::InvalidCredential { .. } => ErrorCode::InvalidCredential,
            BookingError::InvalidRoomName => ErrorCode::InvalidRoomName,
            BookingError::MissingInterval => ErrorCode::MissingInterval,
            BookingError::NilParticipantList => ErrorCode::NilParticipantList,
            BookingError::EmptySessionParticipants => ErrorCode::EmptySessionParticipants,
            BookingError::DuplicateParticipant { .. } => ErrorCode::DuplicateParticipant,
            BookingError::BookingCollision => ErrorCode::BookingCollision,
        }
    }
}

/// Errors surfaced by the room application layer.
///
/// Booking rule violations pass through untouched in the `Booking` variant.
#[derive(Debug, Clone, Error)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(RoomId),

    #[error("Session not found: {0}")]
    SessionNotFound(ScheduledSessionId),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl RoomError {
    pub fn not_found(id: RoomId) -> Self {
        RoomError::NotFound(id)
    }

    pub fn session_not_found(id: ScheduledSessionId) -> Self {
        RoomError::SessionNotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RoomError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RoomError::NotFound(_) => ErrorCode::RoomNotFound,
            RoomError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            RoomError::Booking(err) => err.code(),
            RoomError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns the wrapped booking rule violation, if that is what failed.
    pub fn as_booking(&self) -> Option<&BookingError> {
        match self {
            RoomError::Booking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for RoomError {
    fn from(err: DomainError) -> Self {
        RoomError::Infrastructure(err.to_string())
    }
}
