//! FindSessionRoomHandler - Query handler resolving a session to its room.

use std::sync::Arc;

use crate::domain::booking::RoomError;
use crate::domain::foundation::{RoomId, ScheduledSessionId};
use crate::ports::RoomRepository;

/// Query to find which room a session was booked in.
#[derive(Debug, Clone)]
pub struct FindSessionRoomQuery {
    pub session_id: ScheduledSessionId,
}

/// Handler backed by the repository's session index.
pub struct FindSessionRoomHandler {
    repository: Arc<dyn RoomRepository>,
}

impl FindSessionRoomHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: FindSessionRoomQuery) -> Result<RoomId, RoomError> {
        self.repository
            .room_for_session(&query.session_id)
            .await?
            .ok_or_else(|| RoomError::session_not_found(query.session_id))
    }
}
