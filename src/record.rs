//! Verb records and their sanitization

use crate::{duplicates, pronouns};
use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level conjugation categories which are not used downstream
pub const REMOVED_CATEGORIES: &[&str] = &["perfecto", "progresivo", "perfecto_subjuntivo"];

/// Name of the field holding the infinitive of the verb
pub const INFINITIVE_KEY: &str = "verbo";

/// Conjugation data about a single verb
///
/// Maps each mood to its conjugation table, plus the `verbo` metadata key
/// which holds the infinitive. Every record is guaranteed to have a string
/// `verbo` field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VerbRecord(Map<String, Value>);
//
impl VerbRecord {
    /// Check that a value has the expected record layout and wrap it
    ///
    /// On failure, returns a description of what is wrong with the value.
    pub fn from_value(value: Value) -> Result<Self, &'static str> {
        let Value::Object(fields) = value else {
            return Err("record is not an object");
        };
        match fields.get(INFINITIVE_KEY) {
            Some(Value::String(_)) => Ok(Self(fields)),
            Some(_) => Err("record's \"verbo\" field is not a string"),
            None => Err("record has no \"verbo\" field"),
        }
    }

    /// Infinitive of the verb, used as its identity
    pub fn infinitive(&self) -> &str {
        self.0
            .get(INFINITIVE_KEY)
            .and_then(Value::as_str)
            .expect("VerbRecord construction guarantees a string infinitive")
    }

    /// Access the underlying fields
    #[cfg(test)]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Produce the cleaned up version of this record
    ///
    /// Unused categories are removed from the top level first, then pronoun
    /// labels are shortened, and finally redundant formal forms are dropped.
    /// That last step relies on the shortened labels, so order matters.
    pub fn sanitize(&self) -> Self {
        let mut fields = self.0.clone();
        for category in REMOVED_CATEGORIES {
            if fields.shift_remove(*category).is_some() {
                log::trace!("Removed category {category:?} from {:?}", self.infinitive());
            }
        }
        let normalized = pronouns::normalize_fields(&Value::Object(fields));
        match duplicates::collapse_duplicates(&normalized) {
            Value::Object(fields) => Self(fields),
            _ => unreachable!("normalization and collapsing preserve the value kind"),
        }
    }
}
