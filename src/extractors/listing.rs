// src/extractors/listing.rs

// --- Imports ---
use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::extractors::rules::{Extraction, SelectorRule, CARZONE_RULES};
use crate::listing::{Field, ListingRecord};
use crate::utils::error::ExtractError;

// --- Compiled rule table ---
#[derive(Debug)]
enum CompiledExtraction {
    FirstText(Selector),
    Joined { selectors: Vec<Selector>, separator: String },
}

#[derive(Debug)]
struct CompiledRule {
    field: Field,
    extraction: CompiledExtraction,
}

impl CompiledRule {
    fn apply(&self, document: &Html) -> Option<String> {
        match &self.extraction {
            CompiledExtraction::FirstText(selector) => first_text(document, selector),
            CompiledExtraction::Joined { selectors, separator } => {
                let parts: Vec<String> = selectors
                    .iter()
                    .filter_map(|selector| first_text(document, selector))
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(separator))
                }
            }
        }
    }
}

/// Trimmed text of the first element matching `selector`, if any and non-blank.
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

// --- Main Extractor Structure ---
/// Turns listing page markup into a `ListingRecord` using a selector table.
#[derive(Debug)]
pub struct FieldExtractor {
    rules: Vec<CompiledRule>,
}

impl FieldExtractor {
    /// Extractor for Carzone listing pages.
    pub fn carzone() -> Result<Self, ExtractError> {
        Self::from_rules(&CARZONE_RULES)
    }

    /// Compiles a selector table. Fields without a rule always come out as the sentinel.
    pub fn from_rules(rules: &[SelectorRule]) -> Result<Self, ExtractError> {
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            if !seen.insert(rule.field) {
                return Err(ExtractError::DuplicateField(rule.field.key().to_string()));
            }

            let extraction = match &rule.extraction {
                Extraction::FirstText { selector } => CompiledExtraction::FirstText(compile(selector)?),
                Extraction::Joined { selectors, separator } => CompiledExtraction::Joined {
                    selectors: selectors.iter().map(|s| compile(s)).collect::<Result<_, _>>()?,
                    separator: separator.clone(),
                },
            };
            compiled.push(CompiledRule { field: rule.field, extraction });
        }

        let missing: Vec<&str> = Field::ALL
            .iter()
            .filter(|field| !seen.contains(*field))
            .map(|field| field.header())
            .collect();
        if !missing.is_empty() {
            tracing::warn!("Selector table has no rule for: {}", missing.join(", "));
        }

        Ok(Self { rules: compiled })
    }

    /// Extracts every field from `markup`. Never fails: anything not found is the sentinel.
    pub fn extract(&self, markup: &str, url: &str) -> ListingRecord {
        let document = Html::parse_document(markup);

        let record = ListingRecord::build(url, |field| {
            self.rules
                .iter()
                .find(|rule| rule.field == field)
                .and_then(|rule| rule.apply(&document))
        });

        tracing::debug!("Extracted '{}' from {}", record.get(Field::CarName), record.source_identifier());
        record
    }
}
