//! Error vocabulary shared across the domain layer.

use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Value construction errors
    InvalidInterval,
    InvalidParticipant,
    InvalidCredential,
    InvalidRoomName,

    // Caller contract errors
    MissingInterval,
    NilParticipantList,

    // Business rule errors
    EmptySessionParticipants,
    DuplicateParticipant,
    BookingCollision,

    // Not found errors
    RoomNotFound,
    SessionNotFound,

    // Infrastructure errors
    Conflict,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInterval => "INVALID_INTERVAL",
            ErrorCode::InvalidParticipant => "INVALID_PARTICIPANT",
            ErrorCode::InvalidCredential => "INVALID_CREDENTIAL",
            ErrorCode::InvalidRoomName => "INVALID_ROOM_NAME",
            ErrorCode::MissingInterval => "MISSING_INTERVAL",
            ErrorCode::NilParticipantList => "NIL_PARTICIPANT_LIST",
            ErrorCode::EmptySessionParticipants => "EMPTY_SESSION_PARTICIPANTS",
            ErrorCode::DuplicateParticipant => "DUPLICATE_PARTICIPANT",
            ErrorCode::BookingCollision => "BOOKING_COLLISION",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// Used at the port boundary, where adapters report failures that are not
/// booking rule violations.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
