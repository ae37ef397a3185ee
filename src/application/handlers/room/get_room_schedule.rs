//! GetRoomScheduleHandler - Query handler for a room's booked sessions.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::booking::{RoomError, ScheduledSession};
use crate::domain::foundation::RoomId;
use crate::ports::RoomRepository;

/// Query to get a room's schedule.
#[derive(Debug, Clone)]
pub struct GetRoomScheduleQuery {
    pub room_id: RoomId,
}

/// Snapshot of a room's calendar, sessions ordered by start time.
#[derive(Debug, Clone, Serialize)]
pub struct RoomSchedule {
    pub room_id: RoomId,
    pub room_name: String,
    pub sessions: Vec<ScheduledSession>,
}

/// Handler for reading room schedules.
pub struct GetRoomScheduleHandler {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomScheduleHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRoomScheduleQuery) -> Result<RoomSchedule, RoomError> {
        let handle = self
            .repository
            .get(&query.room_id)
            .await?
            .ok_or_else(|| RoomError::not_found(query.room_id))?;

        let room = handle.lock().await;
        let mut sessions = room.sessions().to_vec();
        sessions.sort_by_key(|session| session.interval().start());

        Ok(RoomSchedule {
            room_id: *room.id(),
            room_name: room.name().to_string(),
            sessions,
        })
    }
}
