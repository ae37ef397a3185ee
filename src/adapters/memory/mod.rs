//! In-memory adapters.

mod room_repository;

pub use room_repository::InMemoryRoomRepository;
