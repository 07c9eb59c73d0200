// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::filter::CATEGORY_ALL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub query: QueryOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            query: QueryOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// The filter pair as CLI/startup input. Normalization happens in the
/// controller, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub category: String,
    pub term: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { category: s!(CATEGORY_ALL), term: s!() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: false,
            out: None,
        }
    }
}

impl ExportOptions {
    /// Explicit -o path, or `out/products.<ext>` with the extension
    /// following the selected format.
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR)
                .join(join!(DEFAULT_EXPORT_STEM, ".", self.format.ext())),
        }
    }
}
