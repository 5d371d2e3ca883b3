// src/listing/mod.rs
pub mod models;

pub use models::{Field, ListingRecord, HEADERS, SENTINEL};
