//! Session participant entity.

use serde::{Deserialize, Serialize};

use super::{BookingError, UnionCard};
use crate::domain::foundation::ParticipantId;

/// A person taking part in a recording session.
///
/// Identity is the `id`; two participants with the same name are still
/// different people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParticipant")]
pub struct Participant {
    id: ParticipantId,
    name: String,
    card: Option<UnionCard>,
}

impl Participant {
    /// Creates a participant with a freshly generated id.
    ///
    /// # Errors
    ///
    /// - `InvalidParticipant` if name is empty or whitespace
    pub fn new(name: impl Into<String>, card: Option<UnionCard>) -> Result<Self, BookingError> {
        Self::reconstitute(ParticipantId::new(), name, card)
    }

    /// Rebuilds a participant whose id was assigned elsewhere.
    ///
    /// The name is still validated.
    pub fn reconstitute(
        id: ParticipantId,
        name: impl Into<String>,
        card: Option<UnionCard>,
    ) -> Result<Self, BookingError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BookingError::InvalidParticipant);
        }
        Ok(Self { id, name, card })
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn card(&self) -> Option<&UnionCard> {
        self.card.as_ref()
    }

    pub fn is_union_member(&self) -> bool {
        self.card.is_some()
    }
}

#[derive(Deserialize)]
struct RawParticipant {
    id: ParticipantId,
    name: String,
    card: Option<UnionCard>,
}

impl TryFrom<RawParticipant> for Participant {
    type Error = BookingError;

    fn try_from(raw: RawParticipant) -> Result<Self, Self::Error> {
        Self::reconstitute(raw.id, raw.name, raw.card)
    }
}
