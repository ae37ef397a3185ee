//! studio-booking entry point.
//!
//! Loads configuration, seeds the configured rooms into an in-memory
//! repository and reports the resulting inventory.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use studio_booking::adapters::InMemoryRoomRepository;
use studio_booking::application::{CreateRoomCommand, CreateRoomHandler, ListRoomsHandler};
use studio_booking::config::{AppConfig, LoggingConfig};
use studio_booking::ports::RoomRepository;

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.logging);
    tracing::info!(studio = %config.studio.name, "starting studio-booking");

    // Seed rooms
    let repository: Arc<dyn RoomRepository> = Arc::new(InMemoryRoomRepository::new());
    let create_room = CreateRoomHandler::new(Arc::clone(&repository));
    for name in config.studio.room_names() {
        create_room.handle(CreateRoomCommand { name }).await?;
    }

    // Report inventory
    let rooms = ListRoomsHandler::new(repository).handle().await?;
    if rooms.is_empty() {
        tracing::warn!("no rooms configured; set STUDIO_BOOKING__STUDIO__ROOMS");
    }
    for room in &rooms {
        tracing::info!(room_id = %room.id, room_name = %room.name, "room ready");
    }

    Ok(())
}
