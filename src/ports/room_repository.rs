//! Room repository port.
//!
//! Defines the contract for storing Room aggregates and locating them.
//!
//! # Design
//!
//! - **Per-room locking**: rooms are handed out behind their own mutex so
//!   a booking's collision check and append run as one unit
//! - **Session index**: sessions do not know their room; the repository
//!   keeps the session -> room mapping instead

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::booking::Room;
use crate::domain::foundation::{DomainError, RoomId, ScheduledSessionId};

/// Shared, lockable handle to a stored room.
pub type RoomHandle = Arc<Mutex<Room>>;

/// Repository port for Room aggregates.
///
/// Implementations must ensure:
/// - every `get` for the same id returns a handle to the same room
/// - rooms are independent; locking one never blocks another
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Store a new room.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a room with the same id is already stored
    async fn insert(&self, room: Room) -> Result<RoomId, DomainError>;

    /// Find a room by its ID.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: &RoomId) -> Result<Option<RoomHandle>, DomainError>;

    /// All stored rooms, in no particular order.
    async fn list(&self) -> Result<Vec<RoomHandle>, DomainError>;

    /// Record that `session_id` was booked in `room_id`.
    async fn index_session(
        &self,
        session_id: ScheduledSessionId,
        room_id: RoomId,
    ) -> Result<(), DomainError>;

    /// Find the room a session was booked in.
    ///
    /// Returns `None` if the session is unknown.
    async fn room_for_session(
        &self,
        session_id: &ScheduledSessionId,
    ) -> Result<Option<RoomId>, DomainError>;
}
