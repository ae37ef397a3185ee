//! Scheduled session entity.
//!
//! A session binds one time interval to the musicians recording in it.
//! It is fully validated on construction and never changes afterwards.
//!
//! # Ownership
//!
//! Sessions are owned by the `Room` that booked them but hold no
//! reference back to it. Use the room repository's session index to find
//! the owning room.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{BookingError, Participant, TimeInterval};
use crate::domain::foundation::ScheduledSessionId;

/// Immutable booking of an interval for a set of participants.
///
/// # Invariants
///
/// - `participants` is non-empty
/// - no two participants share an id
/// - participant order is first-seen input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledSession {
    id: ScheduledSessionId,
    interval: TimeInterval,
    participants: Vec<Participant>,
}

impl ScheduledSession {
    /// Builds a session from an interval and its participants.
    ///
    /// # Errors
    ///
    /// - `DuplicateParticipant` on the first repeated participant id,
    ///   naming that participant; scanning stops there
    /// - `EmptySessionParticipants` if no participants were given
    pub fn new(
        interval: TimeInterval,
        participants: impl IntoIterator<Item = Participant>,
    ) -> Result<Self, BookingError> {
        let mut seen = HashSet::new();
        let mut accepted = Vec::new();

        for participant in participants {
            if !seen.insert(*participant.id()) {
                return Err(BookingError::duplicate_participant(participant.name()));
            }
            accepted.push(participant);
        }

        if accepted.is_empty() {
            return Err(BookingError::EmptySessionParticipants);
        }

        Ok(Self {
            id: ScheduledSessionId::new(),
            interval,
            participants: accepted,
        })
    }

    /// Builds a session from a request whose parts may be absent.
    ///
    /// # Errors
    ///
    /// - `MissingInterval` if the request has no interval
    /// - `NilParticipantList` if the request has no participant list
    /// - anything `ScheduledSession::new` returns
    pub fn from_request(request: SessionRequest) -> Result<Self, BookingError> {
        let (interval, participants) = request.into_parts()?;
        Self::new(interval, participants)
    }

    pub fn id(&self) -> &ScheduledSessionId {
        &self.id
    }

    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

/// Booking input as it arrives from outside the typed API.
///
/// A missing participant list (`None`) is a caller contract violation and
/// is reported differently from an empty one (`Some(vec![])`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionRequest {
    pub interval: Option<TimeInterval>,
    pub participants: Option<Vec<Participant>>,
}

impl SessionRequest {
    /// Creates a request with both parts present.
    pub fn new(interval: TimeInterval, participants: Vec<Participant>) -> Self {
        Self {
            interval: Some(interval),
            participants: Some(participants),
        }
    }

    /// Unwraps the request into its typed parts.
    ///
    /// # Errors
    ///
    /// - `MissingInterval` if `interval` is `None`
    /// - `NilParticipantList` if `participants` is `None`
    pub fn into_parts(self) -> Result<(TimeInterval, Vec<Participant>), BookingError> {
        let interval = self.interval.ok_or(BookingError::MissingInterval)?;
        let participants = self.participants.ok_or(BookingError::NilParticipantList)?;
        Ok((interval, participants))
    }
}
