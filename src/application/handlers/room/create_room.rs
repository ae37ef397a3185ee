//! CreateRoomHandler - Command handler for registering new rooms.

use std::sync::Arc;

use crate::domain::booking::{Room, RoomError};
use crate::domain::foundation::RoomId;
use crate::ports::RoomRepository;

/// Command to create a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomCommand {
    pub name: String,
}

/// Result of successful room creation.
#[derive(Debug, Clone)]
pub struct CreateRoomResult {
    pub room_id: RoomId,
    pub name: String,
}

/// Handler for creating rooms.
pub struct CreateRoomHandler {
    repository: Arc<dyn RoomRepository>,
}

impl CreateRoomHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateRoomCommand) -> Result<CreateRoomResult, RoomError> {
        let room = Room::new(cmd.name)?;
        let name = room.name().to_string();

        let room_id = self.repository.insert(room).await?;
        tracing::info!(%room_id, room_name = %name, "room created");

        Ok(CreateRoomResult { room_id, name })
    }
}
