//! CSV-backed organization table.
//!
//! The table is loaded whole, mutated in place by the processor, and
//! written back once at the end of the run. All original columns and their
//! order are preserved; result columns are appended when absent.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

pub const COL_URL: &str = "URL";
pub const COL_VACANCIES: &str = "Vacancies";
pub const COL_CONFIDENCE: &str = "Vacancies_Confidence";
pub const COL_TYPE: &str = "Vacancies_Type";
pub const COL_SITEMAP: &str = "Vacancies_Sitemap";

/// Indexes of the four result columns, resolved once per run.
#[derive(Debug, Clone, Copy)]
pub struct ResultColumns {
    pub vacancies: usize,
    pub confidence: usize,
    pub label: usize,
    pub sitemap: usize,
}

#[derive(Debug)]
pub struct JobsTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl JobsTable {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // Short rows are padded so every cell is addressable; rows wider
            // than the header would lose cells on write-back, so they abort
            // the run instead.
            if row.len() > headers.len() {
                return Err(AppError::RaggedRow {
                    row: index + 1,
                    found: row.len(),
                    expected: headers.len(),
                });
            }
            row.resize(headers.len(), String::new());
            rows.push(row);
        }
        Ok(Self { headers, rows })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: &str) {
        self.rows[row][col] = value.to_string();
    }

    /// Append any missing result columns (empty-valued) and resolve their
    /// indexes.
    pub fn ensure_result_columns(&mut self) -> ResultColumns {
        ResultColumns {
            vacancies: self.ensure_column(COL_VACANCIES),
            confidence: self.ensure_column(COL_CONFIDENCE),
            label: self.ensure_column(COL_TYPE),
            sitemap: self.ensure_column(COL_SITEMAP),
        }
    }

    fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }
}
