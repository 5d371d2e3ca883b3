// src/carzone/mod.rs
pub mod client;

pub use client::{ListingClient, PageSource, DEFAULT_TIMEOUT};
