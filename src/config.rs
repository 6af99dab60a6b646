use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Number of rows printed when `--num_rows` is not given.
pub const DEFAULT_NUM_ROWS: usize = 3;

const POLARS_FMT_MAX_ROWS: &str = "POLARS_FMT_MAX_ROWS";

/// A non-negative row limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCount(pub usize);

impl Default for RowCount {
    fn default() -> Self {
        RowCount(DEFAULT_NUM_ROWS)
    }
}

impl FromStr for RowCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(n) if n >= 0 => Ok(RowCount(n as usize)),
            Ok(n) => Err(format!(
                "Invalid row count: {}. The number of rows must be zero or positive",
                n
            )),
            Err(_) => Err(format!("Invalid row count: {}. Expected an integer", s)),
        }
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read schema and first N rows from a Parquet file using Polars and arrow.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Parquet file
    #[arg(help = "Path to the input Parquet file.")]
    pub file_path: PathBuf,

    /// Number of rows to read from the beginning
    #[arg(
        short = 'n',
        long = "num_rows",
        alias = "num-rows",
        default_value_t = RowCount::default(),
        allow_negative_numbers = true
    )]
    pub num_rows: RowCount,
}

impl Args {
    /// Make Polars print every row that was read instead of truncating the
    /// table, unless the user already chose a limit.
    pub fn apply_display_settings(&self) {
        if std::env::var_os(POLARS_FMT_MAX_ROWS).is_none() {
            std::env::set_var(POLARS_FMT_MAX_ROWS, self.num_rows.to_string());
        }
    }
}
