//! Removal of formal conjugated forms that merely repeat the informal ones
//!
//! In most tenses, the formal "usted" forms are spelled exactly like the
//! third-person forms, so keeping both only bloats the dataset. Formal forms
//! are only dropped when they are redundant: if they differ, both are kept.

use serde_json::{Map, Value};

/// Pairs of (informal, formal) person labels that may carry duplicate forms
pub const DUPLICATE_PAIRS: &[(&str, &str)] = &[("3p", "Uds."), ("3s", "Ud.")];

/// Formal labels of a mapping whose value repeats their informal counterpart
///
/// A pair only counts when both labels are present in the very same mapping
/// and map to textually identical conjugated forms. Non-string values are
/// never considered duplicates.
fn redundant_labels(map: &Map<String, Value>) -> Vec<&'static str> {
    DUPLICATE_PAIRS
        .iter()
        .filter(|(informal, formal)| match (map.get(*informal), map.get(*formal)) {
            (Some(Value::String(informal_form)), Some(Value::String(formal_form))) => {
                informal_form == formal_form
            }
            _ => false,
        })
        .map(|(_informal, formal)| *formal)
        .collect()
}

/// Drop every formal form that duplicates its informal counterpart
///
/// Recurses through all nested mappings and sequences which survive the
/// removal. Returns a new value, the input is left untouched.
pub fn collapse_duplicates(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let redundant = redundant_labels(map);
            let mut collapsed = Map::with_capacity(map.len());
            for (key, inner) in map {
                if redundant.contains(&key.as_str()) {
                    log::trace!("Dropped formal form {key:?} = {inner}, same as informal form");
                    continue;
                }
                collapsed.insert(key.clone(), collapse_duplicates(inner));
            }
            Value::Object(collapsed)
        }
        Value::Array(items) => Value::Array(items.iter().map(collapse_duplicates).collect()),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_forms_are_collapsed() {
        assert_eq!(
            collapse_duplicates(&json!({"3s": "es", "Ud.": "es"})),
            json!({"3s": "es"})
        );
        assert_eq!(
            collapse_duplicates(&json!({"3p": "son", "Uds.": "son"})),
            json!({"3p": "son"})
        );
    }

    #[test]
    fn different_forms_are_kept() {
        let input = json!({"3s": "es", "Ud.": "fuese"});
        assert_eq!(collapse_duplicates(&input), input);
    }

    #[test]
    fn both_pairs_are_checked_in_the_same_mapping() {
        let input = json!({
            "1s": "hablo",
            "3s": "habla",
            "Ud.": "habla",
            "3p": "hablan",
            "Uds.": "hablan",
        });
        assert_eq!(
            collapse_duplicates(&input),
            json!({"1s": "hablo", "3s": "habla", "3p": "hablan"})
        );

        let input = json!({"3s": "habla", "Ud.": "habla", "3p": "hablan", "Uds.": "hablen"});
        assert_eq!(
            collapse_duplicates(&input),
            json!({"3s": "habla", "3p": "hablan", "Uds.": "hablen"})
        );
    }

    #[test]
    fn lone_formal_labels_are_kept() {
        let input = json!({"Ud.": "es", "nested": {"3s": "es"}});
        assert_eq!(collapse_duplicates(&input), input);
        let input = json!({"3s": "es", "nested": {"Ud.": "es"}});
        assert_eq!(collapse_duplicates(&input), input);
    }

    #[test]
    fn only_exact_equality_counts() {
        let input = json!({"3s": "es", "Ud.": "Es"});
        assert_eq!(collapse_duplicates(&input), input);
        let input = json!({"3s": "", "Ud.": ""});
        assert_eq!(collapse_duplicates(&input), json!({"3s": ""}));
    }

    #[test]
    fn only_string_forms_are_collapsed() {
        let input = json!({"3s": {"a": "es"}, "Ud.": {"a": "es"}});
        assert_eq!(collapse_duplicates(&input), input);
        let input = json!({"3p": ["son"], "Uds.": ["son"]});
        assert_eq!(collapse_duplicates(&input), input);
        let input = json!({"3s": null, "Ud.": null, "3p": 1, "Uds.": 1});
        assert_eq!(collapse_duplicates(&input), input);
    }

    #[test]
    fn recurses_below_collapsed_mappings() {
        let input = json!({
            "3s": "x",
            "Ud.": "x",
            "inner": [{"3p": "y", "Uds.": "y"}],
        });
        assert_eq!(
            collapse_duplicates(&input),
            json!({"3s": "x", "inner": [{"3p": "y"}]})
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let input = json!({"3s": "es", "Ud.": "es"});
        let before = input.clone();
        let _ = collapse_duplicates(&input);
        assert_eq!(input, before);
    }
}
