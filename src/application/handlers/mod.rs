//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod room;

pub use room::{
    BookSessionCommand, BookSessionHandler, BookSessionResult, CreateRoomCommand,
    CreateRoomHandler, CreateRoomResult, FindSessionRoomHandler, FindSessionRoomQuery,
    GetRoomScheduleHandler, GetRoomScheduleQuery, ListRoomsHandler, RoomSchedule, RoomSummary,
};
