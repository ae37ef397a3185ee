//! ListRoomsHandler - Query handler for the room inventory.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::booking::RoomError;
use crate::domain::foundation::RoomId;
use crate::ports::RoomRepository;

/// Lightweight view of a room for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub session_count: usize,
}

/// Handler for listing rooms, sorted by name.
pub struct ListRoomsHandler {
    repository: Arc<dyn RoomRepository>,
}

impl ListRoomsHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<RoomSummary>, RoomError> {
        let handles = self.repository.list().await?;

        let mut summaries = Vec::with_capacity(handles.len());
        for handle in handles {
            let room = handle.lock().await;
            summaries.push(RoomSummary {
                id: *room.id(),
                name: room.name().to_string(),
                session_count: room.session_count(),
            });
        }
        summaries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(summaries)
    }
}
