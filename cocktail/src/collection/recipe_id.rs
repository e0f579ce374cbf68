use crate::common::ID_DIGITS;
use crate::errors::{ErrorKind, RecipeError, RecipeResult};
use crate::ID_GENERATOR;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display};

const MAX_VALUE: u64 = 10u64.pow(19);
const MIN_VALUE: u64 = 10u64.pow(18);

/// Store-assigned identifier of a recipe.
///
/// Ids come from a snowflake generator and always fall in `[10^18, 10^19)`,
/// so their textual form is exactly 19 decimal digits. That textual form is
/// what travels over the wire and what [RecipeId::parse] accepts.
#[derive(PartialEq, Eq, Ord, PartialOrd, Hash, Clone, Copy)]
pub struct RecipeId {
    id_value: u64,
}

impl RecipeId {
    /// Generates a new unique id.
    pub fn new() -> Self {
        RecipeId {
            id_value: ID_GENERATOR.get_id(),
        }
    }

    /// Wraps a raw value, failing if it is outside the id range.
    pub fn create_id(id_value: u64) -> RecipeResult<RecipeId> {
        RecipeId::valid_id(id_value)?;
        Ok(RecipeId { id_value })
    }

    /// Parses the 19-digit textual form of an id.
    ///
    /// Anything else (wrong length, non-digits, out of range) is an
    /// [ErrorKind::InvalidArgument] naming the offending text.
    pub fn parse(text: &str) -> RecipeResult<RecipeId> {
        if text.len() != ID_DIGITS || !text.bytes().all(|b| b.is_ascii_digit()) {
            log::error!("Invalid recipe id '{}'", text);
            return Err(RecipeError::new(
                &format!("Invalid recipe id '{}'", text),
                ErrorKind::InvalidArgument,
            ));
        }

        let id_value = text.parse::<u64>()?;
        RecipeId::create_id(id_value).map_err(|_| {
            RecipeError::new(
                &format!("Invalid recipe id '{}'", text),
                ErrorKind::InvalidArgument,
            )
        })
    }

    pub fn id_value(&self) -> u64 {
        self.id_value
    }

    pub(crate) fn valid_id(id_value: u64) -> RecipeResult<bool> {
        if id_value >= MAX_VALUE {
            log::error!("Id value is too large");
            return Err(RecipeError::new(
                &format!("Id value must be less than 10^19, got {}", id_value),
                ErrorKind::InvalidArgument,
            ));
        } else if id_value < MIN_VALUE {
            log::error!("Id value is too small");
            return Err(RecipeError::new(
                &format!("Id value must be at least 10^18, got {}", id_value),
                ErrorKind::InvalidArgument,
            ));
        }

        Ok(true)
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        RecipeId::new()
    }
}

impl Debug for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecipeId({})", self.id_value)
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id_value)
    }
}

impl Serialize for RecipeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RecipeIdVisitor;

impl Visitor<'_> for RecipeIdVisitor {
    type Value = RecipeId;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a 19-digit recipe id string")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        RecipeId::parse(v).map_err(|err| E::custom(err.message()))
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RecipeIdVisitor)
    }
}
