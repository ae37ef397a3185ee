//! In-memory room repository.
//!
//! Stores each room behind its own `tokio::sync::Mutex` inside an outer
//! `RwLock<HashMap<..>>`. Bookings on the same room are serialized;
//! bookings on different rooms proceed concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::booking::Room;
use crate::domain::foundation::{DomainError, ErrorCode, RoomId, ScheduledSessionId};
use crate::ports::{RoomHandle, RoomRepository};

/// In-memory room store for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<RoomId, RoomHandle>>,
    session_index: RwLock<HashMap<ScheduledSessionId, RoomId>>,
}

impl InMemoryRoomRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rooms.
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert(&self, room: Room) -> Result<RoomId, DomainError> {
        let room_id = *room.id();
        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room_id) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("room {} already exists", room_id),
            ));
        }
        rooms.insert(room_id, Arc::new(Mutex::new(room)));
        tracing::debug!(%room_id, "room stored");
        Ok(room_id)
    }

    async fn get(&self, id: &RoomId) -> Result<Option<RoomHandle>, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<RoomHandle>, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.values().cloned().collect())
    }

    async fn index_session(
        &self,
        session_id: ScheduledSessionId,
        room_id: RoomId,
    ) -> Result<(), DomainError> {
        self.session_index.write().await.insert(session_id, room_id);
        Ok(())
    }

    async fn room_for_session(
        &self,
        session_id: &ScheduledSessionId,
    ) -> Result<Option<RoomId>, DomainError> {
        Ok(self.session_index.read().await.get(session_id).copied())
    }
}
