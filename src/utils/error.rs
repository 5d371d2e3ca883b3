// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{}", describe(.0))]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("Request failed with status code {}", .0.as_u16())]
    Http(reqwest::StatusCode), // e.g., 404 Not Found, 403 Forbidden

    #[error("timeout")]
    Timeout,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Whether another attempt at the same URL could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(e) => !e.is_builder(),
            FetchError::Http(status) => status.is_server_error(),
            FetchError::Timeout => true,
            FetchError::Client(_) => false,
        }
    }
}

/// reqwest keeps the useful part ("dns error", "relative URL without a base") in the source chain.
fn describe(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Field '{0}' is listed more than once in the selector table")]
    DuplicateField(String),

    #[error("Could not read selector table {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse selector table {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Prompt failed: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    #[error("HTTP client setup failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Selector table error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}
