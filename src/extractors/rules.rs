// src/extractors/rules.rs
//! Declarative selector table: which element(s) back each listing field.
//!
//! The built-in table targets Carzone's listing page markup. A replacement
//! table can be loaded from JSON, e.g.
//!
//! ```json
//! [
//!   { "field": "car_name", "method": "first_text", "selector": "h1.title" },
//!   { "field": "key_features", "method": "joined",
//!     "selectors": ["li#engine span", "li#colour span"], "separator": ", " }
//! ]
//! ```

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::listing::Field;
use crate::utils::error::ExtractError;

const DEFAULT_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorRule {
    pub field: Field,
    #[serde(flatten)]
    pub extraction: Extraction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Extraction {
    /// Trimmed text of the first matching element.
    FirstText { selector: String },
    /// First-match text of each selector, blanks dropped, joined by `separator`.
    Joined {
        selectors: Vec<String>,
        #[serde(default = "default_separator")]
        separator: String,
    },
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl SelectorRule {
    pub fn first_text(field: Field, selector: &str) -> Self {
        Self {
            field,
            extraction: Extraction::FirstText { selector: selector.to_string() },
        }
    }

    pub fn joined(field: Field, selectors: &[String], separator: &str) -> Self {
        Self {
            field,
            extraction: Extraction::Joined {
                selectors: selectors.to_vec(),
                separator: separator.to_string(),
            },
        }
    }
}

/// Text node of one entry in the listing's feature list, e.g. `li#engine`.
fn feature(id: &str) -> String {
    format!("li#{} span.fpa-features__item__text", id)
}

// --- Built-in Carzone table ---
pub static CARZONE_RULES: Lazy<Vec<SelectorRule>> = Lazy::new(|| {
    let key_features: Vec<String> = ["engine", "bodytype", "transmission", "colour", "mileage", "seats"]
        .iter()
        .map(|id| feature(id))
        .collect();

    vec![
        SelectorRule::first_text(Field::CarName, "span.fpa-title__inner"),
        SelectorRule::first_text(Field::Price, "div.cz-price span"),
        SelectorRule::first_text(Field::Nct, &feature("nct")),
        SelectorRule::first_text(Field::Location, "p.fpa-actions__sub-title"),
        SelectorRule::joined(Field::KeyFeatures, &key_features, DEFAULT_SEPARATOR),
        SelectorRule::first_text(Field::Transmission, &feature("transmission")),
        SelectorRule::first_text(Field::Tax, &feature("tax-band")),
        SelectorRule::first_text(Field::Mileage, &feature("mileage")),
        // Carzone only exposes fuel type inside the engine entry ("1.6 Petrol").
        SelectorRule::first_text(Field::FuelType, &feature("engine")),
    ]
});

/// Reads a selector table from a JSON file.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<Vec<SelectorRule>, ExtractError> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|source| ExtractError::ConfigRead {
        path: path_display.clone(),
        source,
    })?;

    let rules: Vec<SelectorRule> = serde_json::from_str(&raw)
        .map_err(|source| ExtractError::ConfigParse { path: path_display.clone(), source })?;

    tracing::info!("Loaded {} selector rules from {}", rules.len(), path_display);
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_carzone_table_covers_every_field_once() {
        for field in Field::ALL {
            let count = CARZONE_RULES.iter().filter(|r| r.field == field).count();
            assert_eq!(count, 1, "field {:?} should have exactly one rule", field);
        }
    }

    #[test]
    fn test_key_features_joins_six_entries() {
        let rule = CARZONE_RULES.iter().find(|r| r.field == Field::KeyFeatures).unwrap();
        match &rule.extraction {
            Extraction::Joined { selectors, separator } => {
                assert_eq!(selectors.len(), 6);
                assert_eq!(selectors[0], "li#engine span.fpa-features__item__text");
                assert_eq!(separator, ", ");
            }
            other => panic!("unexpected extraction {:?}", other),
        }
    }

    #[test]
    fn test_load_rules_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "field": "car_name", "method": "first_text", "selector": "h1.title" }},
                {{ "field": "key_features", "method": "joined", "selectors": ["li.a", "li.b"] }}
            ]"#
        )
        .unwrap();

        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], SelectorRule::first_text(Field::CarName, "h1.title"));
        assert_eq!(
            rules[1],
            SelectorRule::joined(Field::KeyFeatures, &["li.a".to_string(), "li.b".to_string()], ", ")
        );
    }

    #[test]
    fn test_load_rules_rejects_unknown_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "field": "colour", "method": "first_text", "selector": "p" }}]"#).unwrap();

        let err = load_rules(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_rules_missing_file() {
        let err = load_rules("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ExtractError::ConfigRead { .. }));
    }
}
