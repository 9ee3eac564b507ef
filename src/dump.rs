//! Text dump of a coverage table.
//!
//! The dump is a fixed-column-width grid: a header row with the column terms
//! in compact form, then one row per candidate implicant with a marker in
//! every cell the row covers. Rows are separated by dashed lines.
//!
//! ```text
//! |      |    10|    11|    00|
//! -----------------------------
//! |    1~|XXXXXX|XXXXXX|      |
//! -----------------------------
//! |    ~0|XXXXXX|      |XXXXXX|
//! -----------------------------
//! ```
//!
//! # Examples
//!
//! ```
//! use qmc_rs::table::CoverageTable;
//!
//! let table = CoverageTable::new(vec!["1~".parse().unwrap()], vec!["10".parse().unwrap()]);
//! let grid = table.to_grid().unwrap();
//! assert!(grid.starts_with("|      |    10|"));
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::table::CoverageTable;

/// Configuration options for the table dump.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Width of every cell, in characters (default: 6)
    pub cell_width: usize,
    /// Character repeated across a marked cell (default: 'X')
    pub mark: char,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self { cell_width: 6, mark: 'X' }
    }
}

impl CoverageTable {
    /// Renders the table as a text grid with the default configuration.
    pub fn to_grid(&self) -> std::result::Result<String, std::fmt::Error> {
        self.to_grid_with_config(&DumpConfig::default())
    }

    /// Renders the table as a text grid.
    pub fn to_grid_with_config(&self, config: &DumpConfig) -> std::result::Result<String, std::fmt::Error> {
        let width = config.cell_width;
        let marked: String = std::iter::repeat(config.mark).take(width).collect();

        let mut out = String::new();
        write!(out, "|{:width$}|", "", width = width)?;
        for column in self.columns() {
            write!(out, "{:>width$}|", column, width = width)?;
        }
        let underline = format!("\n{}\n", "-".repeat(out.chars().count()));

        for (i, row) in self.rows().iter().enumerate() {
            if i == 0 {
                out.push_str(&underline);
            }
            write!(out, "|{:>width$}|", row, width = width)?;
            for j in 0..self.num_columns() {
                let cell = if self.is_marked(i, j) { marked.as_str() } else { "" };
                write!(out, "{:>width$}|", cell, width = width)?;
            }
            out.push_str(&underline);
        }
        Ok(out)
    }

    /// Writes the grid to `path`, replacing any existing file.
    pub fn write_dump(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_dump_with_config(path, &DumpConfig::default())
    }

    pub fn write_dump_with_config(&self, path: impl AsRef<Path>, config: &DumpConfig) -> Result<()> {
        let path = path.as_ref();
        let grid = self
            .to_grid_with_config(config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        fs::write(path, grid)?;
        info!("Wrote {}x{} coverage table to {}", self.num_rows(), self.num_columns(), path.display());
        Ok(())
    }
}
