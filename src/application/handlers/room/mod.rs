//! Room command and query handlers.

mod book_session;
mod create_room;
mod find_session_room;
mod get_room_schedule;
mod list_rooms;

pub use book_session::{BookSessionCommand, BookSessionHandler, BookSessionResult};
pub use create_room::{CreateRoomCommand, CreateRoomHandler, CreateRoomResult};
pub use find_session_room::{FindSessionRoomHandler, FindSessionRoomQuery};
pub use get_room_schedule::{GetRoomScheduleHandler, GetRoomScheduleQuery, RoomSchedule};
pub use list_rooms::{ListRoomsHandler, RoomSummary};
