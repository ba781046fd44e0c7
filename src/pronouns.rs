//! Replacement of Spanish pronoun labels with compact person codes

use serde_json::{Map, Value};

/// Pronoun labels of the source dataset and the person code that replaces them
pub const PRONOUN_CODES: &[(&str, &str)] = &[
    ("yo", "1s"),
    ("tú", "2s"),
    ("nosotros", "1p"),
    ("vosotros", "2p"),
    ("él/ella/Ud.", "3s"),
    ("ellos/ellas/Uds.", "3p"),
];

/// Person code associated with a pronoun label, if it is one
pub fn person_code(label: &str) -> Option<&'static str> {
    PRONOUN_CODES
        .iter()
        .find(|(pronoun, _code)| *pronoun == label)
        .map(|(_pronoun, code)| *code)
}

/// Rewrite every pronoun-labeled mapping key into its person code
///
/// Recurses through nested mappings and sequences. Keys which are not pronoun
/// labels, as well as all scalar values, are carried over unchanged, and keys
/// keep their original position within their mapping.
pub fn normalize_fields(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, inner) in map {
                let key = match person_code(key) {
                    Some(code) => {
                        log::trace!("Renamed pronoun label {key:?} into {code:?}");
                        code.to_owned()
                    }
                    None => key.clone(),
                };
                normalized.insert(key, normalize_fields(inner));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize_fields).collect()),
        scalar => scalar.clone(),
    }
}
