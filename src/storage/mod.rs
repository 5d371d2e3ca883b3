// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use serde_json::Value;

use crate::listing::{HEADERS, SENTINEL};
use crate::output::{Rendered, StructuredRow};
use crate::utils::error::ExportError;

const BASE_NAME: &str = "car_details";
const SHEET_NAME: &str = "Car Details";

/// Answer to "save the results as a file?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportChoice {
    Csv,
    Excel,
    None,
}

impl ExportChoice {
    pub const ALL: [ExportChoice; 3] = [ExportChoice::Csv, ExportChoice::Excel, ExportChoice::None];

    pub fn label(self) -> &'static str {
        match self {
            ExportChoice::Csv => "CSV",
            ExportChoice::Excel => "Excel",
            ExportChoice::None => "None",
        }
    }

    pub fn kind(self) -> Option<ExportKind> {
        match self {
            ExportChoice::Csv => Some(ExportKind::Delimited),
            ExportChoice::Excel => Some(ExportKind::Structured),
            ExportChoice::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Delimited,
    Structured,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            ExportKind::Delimited => "csv",
            ExportKind::Structured => "xlsx",
        }
    }
}

pub struct ExportSink {
    base_dir: PathBuf,
}

impl ExportSink {
    /// Creates a sink writing into `base_dir`. The directory must already exist.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self { base_dir: base_dir.as_ref().to_path_buf() }
    }

    pub fn path_for(&self, kind: ExportKind) -> PathBuf {
        self.base_dir.join(format!("{}.{}", BASE_NAME, kind.extension()))
    }

    /// Writes the export for `choice`, if any. `ExportChoice::None` touches nothing.
    pub fn export(&self, choice: ExportChoice, rendered: &Rendered) -> Result<Option<PathBuf>, ExportError> {
        match choice.kind() {
            Some(kind) => self.write(kind, rendered).map(Some),
            None => Ok(None),
        }
    }

    /// Writes `car_details.csv` or `car_details.xlsx`, replacing any existing file.
    pub fn write(&self, kind: ExportKind, rendered: &Rendered) -> Result<PathBuf, ExportError> {
        let file_path = self.path_for(kind);

        match kind {
            ExportKind::Delimited => fs::write(&file_path, rendered.csv_text())?,
            ExportKind::Structured => write_workbook(&file_path, &rendered.structured_rows)?,
        }

        tracing::info!("Saved {} export to {}", kind.extension(), file_path.display());
        Ok(file_path)
    }
}

fn write_workbook(file_path: &Path, rows: &[StructuredRow]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // Headers
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    // Rows
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, header) in HEADERS.iter().enumerate() {
            let value = row.get(*header).and_then(Value::as_str).unwrap_or(SENTINEL);
            worksheet.write_string(r, col as u16, value)?;
        }
    }

    workbook.save(file_path)?;
    Ok(())
}
