//! Run configuration, read once from the environment at startup.
//!
//! The resulting `Config` is immutable and passed by reference into the
//! processor; no component reads ambient environment state after this.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Input table path.
    pub input_csv: PathBuf,
    /// Output table path. Defaults to the input path (in-place update).
    pub output_csv: PathBuf,
    /// Maximum rows to process per run. 0 = the whole table.
    pub max_rows: usize,
    /// Overrides the checkpointed start offset when set.
    pub start_row: Option<usize>,
    /// Minimum politeness delay between rows, in seconds.
    pub sleep_min_secs: f64,
    /// Random additional delay on top of the minimum, in seconds.
    pub sleep_rand_secs: f64,
    /// Checkpoint file path.
    pub state_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let input_csv =
            PathBuf::from(env::var("INPUT_CSV").unwrap_or_else(|_| "direct job pages.csv".into()));
        let output_csv = env::var("OUTPUT_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| input_csv.clone());

        Ok(Self {
            input_csv,
            output_csv,
            max_rows: env_parse("MAX_ROWS", 750)?,
            start_row: env_parse_opt("START_ROW")?,
            sleep_min_secs: env_parse("SLEEP_MIN", 0.06)?,
            sleep_rand_secs: env_parse("SLEEP_RAND", 0.10)?,
            state_path: PathBuf::from(
                env::var("STATE_PATH").unwrap_or_else(|_| ".state/jobs_pages_state.json".into()),
            ),
        })
    }
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key}={raw:?}: {e}"))),
        Err(_) => Ok(default),
    }
}

fn env_parse_opt<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{key}={raw:?}: {e}"))),
        Err(_) => Ok(None),
    }
}
