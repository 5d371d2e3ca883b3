// src/extractors/mod.rs
pub mod listing;
pub mod rules;

// Re-export key extraction types for convenience
pub use listing::FieldExtractor;
pub use rules::load_rules;
