//! Union card value object.
//!
//! A musician may carry a union membership card. The card number is kept
//! verbatim once it passes validation.
//!
//! # Validation Rules
//!
//! - Number must not be empty or whitespace
//! - Number must start with `OMB-`

use serde::{Deserialize, Serialize};

use super::BookingError;

/// Required prefix for every union card number.
pub const UNION_CARD_PREFIX: &str = "OMB-";

/// A validated union membership card.
///
/// Two cards with the same number are equal, regardless of where they
/// were constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnionCard {
    number: String,
}

impl UnionCard {
    /// Creates a new card from its number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredential` if:
    /// - Number is empty or whitespace
    /// - Number doesn't start with `OMB-`
    pub fn new(number: impl Into<String>) -> Result<Self, BookingError> {
        let number = number.into();

        if number.trim().is_empty() {
            return Err(BookingError::invalid_credential("number cannot be empty"));
        }

        if !number.starts_with(UNION_CARD_PREFIX) {
            return Err(BookingError::invalid_credential(format!(
                "number must start with '{}'",
                UNION_CARD_PREFIX
            )));
        }

        Ok(Self { number })
    }

    /// Returns the card number exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.number
    }
}

impl std::fmt::Display for UnionCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

impl TryFrom<&str> for UnionCard {
    type Error = BookingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for UnionCard {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnionCard> for String {
    fn from(card: UnionCard) -> Self {
        card.number
    }
}
