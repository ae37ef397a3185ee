//! Studio configuration

use std::collections::HashSet;

use serde::Deserialize;

use super::error::ValidationError;

/// Studio configuration: the studio's name and the rooms seeded at start-up
#[derive(Debug, Clone, Deserialize)]
pub struct StudioConfig {
    /// Studio display name
    #[serde(default = "default_name")]
    pub name: String,

    /// Room names to create on start-up (comma-separated)
    pub rooms: Option<String>,
}

impl StudioConfig {
    /// Get room names as a vector, trimmed, in listed order
    pub fn room_names(&self) -> Vec<String> {
        self.rooms
            .as_ref()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_default()
    }

    /// Validate studio configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("studio.name"));
        }

        let mut seen = HashSet::new();
        for room in self.room_names() {
            if room.is_empty() {
                return Err(ValidationError::BlankRoomName);
            }
            if !seen.insert(room.clone()) {
                return Err(ValidationError::DuplicateRoomName(room));
            }
        }
        Ok(())
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rooms: None,
        }
    }
}

fn default_name() -> String {
    "Recording Studio".to_string()
}
