//! BookSessionHandler - Command handler for booking a session in a room.
//!
//! The room's lock is held from the collision check until the session is
//! both indexed and appended, so no other booking on the same room can
//! interleave. A session whose index write fails is never appended.

use std::sync::Arc;

use crate::domain::booking::{RoomError, ScheduledSession, SessionRequest};
use crate::domain::foundation::RoomId;
use crate::ports::RoomRepository;

/// Command to book a session.
#[derive(Debug, Clone)]
pub struct BookSessionCommand {
    pub room_id: RoomId,
    pub request: SessionRequest,
}

/// Result of a successful booking.
#[derive(Debug, Clone)]
pub struct BookSessionResult {
    pub room_id: RoomId,
    pub session: ScheduledSession,
}

/// Handler for booking sessions.
pub struct BookSessionHandler {
    repository: Arc<dyn RoomRepository>,
}

impl BookSessionHandler {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: BookSessionCommand) -> Result<BookSessionResult, RoomError> {
        let room_id = cmd.room_id;

        // 1. Locate the room
        let handle = self
            .repository
            .get(&room_id)
            .await?
            .ok_or_else(|| RoomError::not_found(room_id))?;

        // 2. Validate, index, then append under the room's lock
        let session = {
            let mut room = handle.lock().await;
            let session = match room.prepare_request(cmd.request) {
                Ok(session) => session,
                Err(err) => {
                    tracing::warn!(%room_id, code = %err.code(), "booking rejected: {}", err);
                    return Err(err.into());
                }
            };

            if let Err(err) = self.repository.index_session(*session.id(), room_id).await {
                tracing::error!(
                    %room_id,
                    session_id = %session.id(),
                    "session index failed: {}",
                    err
                );
                return Err(err.into());
            }

            room.commit(session.clone())?;
            session
        };

        tracing::info!(
            %room_id,
            session_id = %session.id(),
            start = %session.interval().start().as_datetime(),
            end = %session.interval().end().as_datetime(),
            participants = session.participant_count(),
            "session booked"
        );

        Ok(BookSessionResult { room_id, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRoomRepository;
    use crate::domain::booking::{BookingError, Participant, Room, TimeInterval};
    use crate::domain::foundation::{DomainError, ErrorCode, ScheduledSessionId, Timestamp};
    use crate::ports::RoomHandle;
    use async_trait::async_trait;

    /// Stores rooms in memory but refuses every session index write.
    #[derive(Default)]
    struct IndexFailingRoomRepository {
        inner: InMemoryRoomRepository,
    }

    #[async_trait]
    impl RoomRepository for IndexFailingRoomRepository {
        async fn insert(&self, room: Room) -> Result<RoomId, DomainError> {
            self.inner.insert(room).await
        }

        async fn get(&self, id: &RoomId) -> Result<Option<RoomHandle>, DomainError> {
            self.inner.get(id).await
        }

        async fn list(&self) -> Result<Vec<RoomHandle>, DomainError> {
            self.inner.list().await
        }

        async fn index_session(
            &self,
            _session_id: ScheduledSessionId,
            _room_id: RoomId,
        ) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "Simulated index failure"))
        }

        async fn room_for_session(
            &self,
            session_id: &ScheduledSessionId,
        ) -> Result<Option<RoomId>, DomainError> {
            self.inner.room_for_session(session_id).await
        }
    }

    fn hours(from: i64, to: i64) -> TimeInterval {
        let base = Timestamp::from_ymd_hms(2025, 1, 1, 12, 0, 0).unwrap();
        TimeInterval::new(base.plus_hours(from), base.plus_hours(to)).unwrap()
    }

    fn band() -> Vec<Participant> {
        vec![
            Participant::new("John", None).unwrap(),
            Participant::new("Paul", None).unwrap(),
        ]
    }

    async fn setup() -> (Arc<InMemoryRoomRepository>, BookSessionHandler, RoomId) {
        let repo = Arc::new(InMemoryRoomRepository::new());
        let room_id = repo.insert(Room::new("Studio A").unwrap()).await.unwrap();
        let handler = BookSessionHandler::new(repo.clone());
        (repo, handler, room_id)
    }

    fn command(room_id: RoomId, interval: TimeInterval) -> BookSessionCommand {
        BookSessionCommand {
            room_id,
            request: SessionRequest::new(interval, band()),
        }
    }

    #[tokio::test]
    async fn books_session_and_indexes_it() {
        let (repo, handler, room_id) = setup().await;

        let result = handler.handle(command(room_id, hours(0, 2))).await.unwrap();

        assert_eq!(result.room_id, room_id);
        assert_eq!(result.session.participant_count(), 2);
        assert_eq!(
            repo.room_for_session(result.session.id()).await.unwrap(),
            Some(room_id)
        );
        let handle = repo.get(&room_id).await.unwrap().unwrap();
        assert_eq!(handle.lock().await.session_count(), 1);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let (_repo, handler, _room_id) = setup().await;
        let missing = RoomId::new();

        let err = handler.handle(command(missing, hours(0, 1))).await.unwrap_err();

        assert!(matches!(err, RoomError::NotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn collision_is_passed_through() {
        let (repo, handler, room_id) = setup().await;
        handler.handle(command(room_id, hours(0, 2))).await.unwrap();

        let err = handler.handle(command(room_id, hours(1, 3))).await.unwrap_err();

        assert_eq!(err.as_booking(), Some(&BookingError::BookingCollision));
        let handle = repo.get(&room_id).await.unwrap().unwrap();
        assert_eq!(handle.lock().await.session_count(), 1);
    }

    #[tokio::test]
    async fn missing_participant_list_is_passed_through() {
        let (_repo, handler, room_id) = setup().await;

        let err = handler
            .handle(BookSessionCommand {
                room_id,
                request: SessionRequest {
                    interval: Some(hours(0, 1)),
                    participants: None,
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.as_booking(), Some(&BookingError::NilParticipantList));
    }

    #[tokio::test]
    async fn failed_index_write_leaves_room_unbooked() {
        let repo = Arc::new(IndexFailingRoomRepository::default());
        let room_id = repo.insert(Room::new("Studio A").unwrap()).await.unwrap();
        let handler = BookSessionHandler::new(repo.clone());

        let err = handler.handle(command(room_id, hours(0, 2))).await.unwrap_err();

        assert!(matches!(err, RoomError::Infrastructure(_)));
        let handle = repo.get(&room_id).await.unwrap().unwrap();
        assert_eq!(handle.lock().await.session_count(), 0);
    }

    #[tokio::test]
    async fn slot_is_still_free_after_failed_index_write() {
        let repo = Arc::new(IndexFailingRoomRepository::default());
        let room_id = repo.insert(Room::new("Studio A").unwrap()).await.unwrap();
        let handler = BookSessionHandler::new(repo.clone());
        handler.handle(command(room_id, hours(0, 2))).await.unwrap_err();

        let handle = repo.get(&room_id).await.unwrap().unwrap();
        assert!(handle.lock().await.is_available(&hours(0, 2)));
    }

    #[tokio::test]
    async fn collision_wins_over_missing_participant_list() {
        let (repo, handler, room_id) = setup().await;
        handler.handle(command(room_id, hours(0, 2))).await.unwrap();

        let err = handler
            .handle(BookSessionCommand {
                room_id,
                request: SessionRequest {
                    interval: Some(hours(1, 3)),
                    participants: None,
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.as_booking(), Some(&BookingError::BookingCollision));
        let handle = repo.get(&room_id).await.unwrap().unwrap();
        assert_eq!(handle.lock().await.session_count(), 1);
    }
}
