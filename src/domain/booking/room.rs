//! Room aggregate.
//!
//! A recording room owns its calendar of scheduled sessions and is the
//! only way to create new ones.

use serde::Serialize;

use super::{BookingError, Participant, ScheduledSession, SessionRequest, TimeInterval};
use crate::domain::foundation::RoomId;

/// Room aggregate - a bookable recording room and its sessions.
///
/// # Invariants
///
/// - `name` is non-empty
/// - no two sessions have overlapping intervals
/// - `sessions` is append-only, in booking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    /// Unique identifier for this room.
    id: RoomId,

    /// Display name, e.g. "Studio A".
    name: String,

    /// Sessions accepted so far (owned).
    sessions: Vec<ScheduledSession>,
}

impl Room {
    /// Create a new room with an empty calendar.
    ///
    /// # Errors
    ///
    /// - `InvalidRoomName` if name is empty or whitespace
    pub fn new(name: impl Into<String>) -> Result<Self, BookingError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BookingError::InvalidRoomName);
        }

        Ok(Self {
            id: RoomId::new(),
            name,
            sessions: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the booked sessions in booking order.
    pub fn sessions(&self) -> &[ScheduledSession] {
        &self.sessions
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if `interval` collides with no booked session.
    pub fn is_available(&self, interval: &TimeInterval) -> bool {
        !self
            .sessions
            .iter()
            .any(|session| session.interval().overlaps(interval))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Book a new session in this room.
    ///
    /// The collision check runs first; the session is only built when the
    /// room is free. Participant rules belong to `ScheduledSession` and
    /// its errors are returned as they are.
    ///
    /// # Errors
    ///
    /// - `BookingCollision` if `interval` overlaps a booked session
    /// - `EmptySessionParticipants` / `DuplicateParticipant` from session
    ///   construction
    pub fn book_session(
        &mut self,
        interval: TimeInterval,
        participants: Vec<Participant>,
    ) -> Result<ScheduledSession, BookingError> {
        self.ensure_available(&interval)?;

        let session = ScheduledSession::new(interval, participants)?;
        self.sessions.push(session.clone());
        Ok(session)
    }

    /// Book a session from a request whose parts may be absent.
    ///
    /// Same order as `book_session`: the collision check runs as soon as the
    /// interval is known, before the participant list is looked at.
    ///
    /// # Errors
    ///
    /// - `MissingInterval` if the request has no interval
    /// - `BookingCollision` if the interval overlaps a booked session
    /// - `NilParticipantList` if the request has no participant list
    /// - `EmptySessionParticipants` / `DuplicateParticipant` from session
    ///   construction
    pub fn book_request(
        &mut self,
        request: SessionRequest,
    ) -> Result<ScheduledSession, BookingError> {
        let session = self.prepare_request(request)?;
        self.commit(session.clone())?;
        Ok(session)
    }

    /// Validate a request against this room and build its session without
    /// adding it to the calendar.
    ///
    /// Pair with `commit` while holding the room exclusively.
    pub fn prepare_request(
        &self,
        request: SessionRequest,
    ) -> Result<ScheduledSession, BookingError> {
        let interval = request.interval.ok_or(BookingError::MissingInterval)?;
        self.ensure_available(&interval)?;

        let participants = request.participants.ok_or(BookingError::NilParticipantList)?;
        ScheduledSession::new(interval, participants)
    }

    /// Add a prepared session to the calendar.
    ///
    /// # Errors
    ///
    /// - `BookingCollision` if the calendar changed since `prepare_request`
    pub fn commit(&mut self, session: ScheduledSession) -> Result<(), BookingError> {
        self.ensure_available(session.interval())?;
        self.sessions.push(session);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_available(&self, interval: &TimeInterval) -> Result<(), BookingError> {
        if self.is_available(interval) {
            Ok(())
        } else {
            Err(BookingError::BookingCollision)
        }
    }
}
