//! The batch loop: the only writer of the table.
//!
//! Rows with a resolved `Vacancies` value are skipped, so repeated runs
//! make forward progress without reprocessing. The window of rows per run
//! comes from the checkpoint and wraps around the end of the table.

use std::time::Duration;

use chrono::Utc;

use crate::config::Config;
use crate::domain::models::RunSummary;
use crate::error::{AppError, Result};
use crate::repository::state::RunState;
use crate::repository::table::{JobsTable, COL_URL};
use crate::service::discovery::JobsPageDiscovery;

pub async fn run_batch(config: &Config) -> Result<RunSummary> {
    let mut table = JobsTable::load(&config.input_csv)?;
    let url_col = table
        .column_index(COL_URL)
        .ok_or_else(|| AppError::MissingColumn(COL_URL.to_string()))?;
    let result_cols = table.ensure_result_columns();

    let row_count = table.row_count();
    if row_count == 0 {
        tracing::info!("Input table is empty, nothing to do");
        return Ok(RunSummary::default());
    }

    let state = RunState::load(&config.state_path);
    let start = config.start_row.unwrap_or(state.next_start_row) % row_count;
    let run_len = if config.max_rows == 0 {
        row_count
    } else {
        config.max_rows.min(row_count)
    };
    let indices = batch_indices(start, run_len, row_count);
    tracing::info!(
        rows = indices.len(),
        start,
        total = row_count,
        "Starting batch"
    );

    let discovery = JobsPageDiscovery::new()?;
    let mut checked = 0usize;
    let mut updated = 0usize;

    for &row in &indices {
        if !table.get(row, result_cols.vacancies).trim().is_empty() {
            checked += 1;
            continue;
        }

        let org_url = table.get(row, url_col).trim().to_string();
        let result = discovery.discover(&org_url).await;

        if !result.vacancies.is_empty() {
            table.set(row, result_cols.vacancies, &result.vacancies);
            table.set(row, result_cols.confidence, &result.confidence.to_string());
            table.set(row, result_cols.label, result.label.as_str());
            table.set(row, result_cols.sitemap, &result.sitemap);
            updated += 1;
        }
        checked += 1;

        politeness_sleep(config).await;

        if checked % 50 == 0 {
            tracing::info!(checked, total = indices.len(), updated, "Batch progress");
        }
    }

    let next_start = (start + run_len) % row_count;
    RunState {
        next_start_row: next_start,
        last_run_utc: Some(Utc::now()),
        rows_processed_last_run: indices.len(),
        rows_updated_last_run: updated,
    }
    .save(&config.state_path)?;
    table.save(&config.output_csv)?;

    tracing::info!(
        checked,
        updated,
        next_start,
        output = %config.output_csv.display(),
        "Run complete"
    );
    Ok(RunSummary {
        checked,
        updated,
        next_start_row: next_start,
    })
}

/// Row window for this run: `start..start+run_len`, wrapping past the end.
pub fn batch_indices(start: usize, run_len: usize, row_count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (start..row_count.min(start + run_len)).collect();
    if start + run_len > row_count {
        indices.extend(0..(start + run_len - row_count));
    }
    indices
}

/// Fixed randomized delay between organizations; not adaptive.
async fn politeness_sleep(config: &Config) {
    let secs = config.sleep_min_secs + rand::random::<f64>() * config.sleep_rand_secs;
    if secs > 0.0 {
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
    }
}
