// src/listing/models.rs
use serde::{Deserialize, Serialize};

/// Placeholder for any field that could not be determined.
pub const SENTINEL: &str = "N/A";

/// Column labels shared by the console table, the CSV file and the spreadsheet.
/// The nine extracted fields in `Field::ALL` order, then the source URL.
pub const HEADERS: [&str; 10] = [
    "Car Name",
    "Price",
    "NCT",
    "Location",
    "Key Features",
    "Transmission",
    "Tax",
    "Mileage",
    "Fuel Type",
    "URL",
];

/// The nine fields pulled out of a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CarName,
    Price,
    Nct,
    Location,
    KeyFeatures,
    Transmission,
    Tax,
    Mileage,
    FuelType,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::CarName,
        Field::Price,
        Field::Nct,
        Field::Location,
        Field::KeyFeatures,
        Field::Transmission,
        Field::Tax,
        Field::Mileage,
        Field::FuelType,
    ];

    /// Column label used in every rendered output.
    pub fn header(self) -> &'static str {
        HEADERS[self.index()]
    }

    /// Key used for this field in selector table files.
    pub fn key(self) -> &'static str {
        match self {
            Field::CarName => "car_name",
            Field::Price => "price",
            Field::Nct => "nct",
            Field::Location => "location",
            Field::KeyFeatures => "key_features",
            Field::Transmission => "transmission",
            Field::Tax => "tax",
            Field::Mileage => "mileage",
            Field::FuelType => "fuel_type",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One processed listing page. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    url: String,
    fields: [String; 9],
}

impl ListingRecord {
    /// Builds a record by asking `value_of` for each field.
    /// Blank values are normalized to the sentinel.
    pub fn build<F>(url: &str, mut value_of: F) -> Self
    where
        F: FnMut(Field) -> Option<String>,
    {
        let fields = Field::ALL.map(|field| {
            value_of(field)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| SENTINEL.to_string())
        });

        Self { url: url.to_string(), fields }
    }

    /// Placeholder record for a locator that could not be fetched.
    pub fn failed(url: &str, message: &str) -> Self {
        Self::build(url, |field| match field {
            Field::CarName => Some(format!("Error: {}", message)),
            _ => None,
        })
    }

    pub fn source_identifier(&self) -> &str {
        &self.url
    }

    pub fn get(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// All ten cell values in `HEADERS` order.
    pub fn cells(&self) -> [&str; 10] {
        let mut cells = [""; 10];
        for (cell, value) in cells.iter_mut().zip(self.fields.iter()) {
            *cell = value.as_str();
        }
        cells[9] = &self.url;
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_follow_field_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.header(), HEADERS[i]);
        }
        assert_eq!(HEADERS[9], "URL");
    }

    #[test]
    fn test_build_normalizes_blank_values() {
        let record = ListingRecord::build("https://example.com/a", |field| match field {
            Field::CarName => Some("  Toyota Corolla \n".to_string()),
            Field::Price => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(record.get(Field::CarName), "Toyota Corolla");
        assert_eq!(record.get(Field::Price), SENTINEL);
        assert_eq!(record.get(Field::FuelType), SENTINEL);
        assert_eq!(record.source_identifier(), "https://example.com/a");
    }

    #[test]
    fn test_failed_record_shape() {
        let record = ListingRecord::failed("https://example.com/b", "timeout");

        assert_eq!(record.get(Field::CarName), "Error: timeout");
        for field in &Field::ALL[1..] {
            assert_eq!(record.get(*field), SENTINEL);
        }
        assert_eq!(record.cells()[9], "https://example.com/b");
    }

    #[test]
    fn test_field_keys_match_serde_names() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
    }
}
