//! Prime implicant coverage table.
//!
//! Rows are candidate implicants, columns are the original minterms, and a
//! cell is marked when the row [covers][Term::covers] the column. A column
//! marked by exactly one row makes both that row and that column essential:
//! no cover can leave that row out.
//!
//! ```
//! use qmc_rs::table::CoverageTable;
//! use qmc_rs::term::Term;
//!
//! let rows: Vec<Term> = vec!["0~".parse().unwrap(), "~1".parse().unwrap()];
//! let columns: Vec<Term> = vec!["00".parse().unwrap(), "01".parse().unwrap(), "11".parse().unwrap()];
//! let table = CoverageTable::new(rows, columns);
//!
//! assert!(table.is_marked(0, 0));
//! assert!(table.is_essential_row(0));
//! assert!(table.is_essential_row(1));
//! assert!(table.is_covered_by(&table.essential_rows()));
//! ```

use log::{debug, warn};

use crate::bitset::BitSet;
use crate::term::Term;

/// Coverage of original minterms (columns) by candidate implicants (rows).
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CoverageTable {
    rows: Vec<Term>,
    columns: Vec<Term>,
    /// `marks[i]` holds the columns covered by row `i`.
    marks: Vec<BitSet>,
    essential_rows: BitSet,
    essential_columns: BitSet,
    uncovered_columns: BitSet,
}

impl CoverageTable {
    /// Builds the table and runs the essential pass.
    pub fn new(rows: Vec<Term>, columns: Vec<Term>) -> Self {
        let marks: Vec<BitSet> = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .filter(|(_, column)| row.covers(column))
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        let mut table = Self {
            rows,
            columns,
            marks,
            essential_rows: BitSet::default(),
            essential_columns: BitSet::default(),
            uncovered_columns: BitSet::default(),
        };
        table.mark_essentials();
        table
    }

    fn mark_essentials(&mut self) {
        for j in 0..self.columns.len() {
            let mut marked = self.marks.iter().enumerate().filter(|(_, m)| m.contains(j)).map(|(i, _)| i);
            match (marked.next(), marked.next()) {
                (Some(i), None) => {
                    self.essential_rows.insert(i);
                    self.essential_columns.insert(j);
                }
                (None, _) => {
                    warn!("column {} ({}) is not covered by any row", j, self.columns[j]);
                    self.uncovered_columns.insert(j);
                }
                _ => {}
            }
        }
        debug!(
            "coverage table {}x{}: {} essential rows, {} essential columns",
            self.rows.len(),
            self.columns.len(),
            self.essential_rows.len(),
            self.essential_columns.len()
        );
    }

    pub fn rows(&self) -> &[Term] {
        &self.rows
    }

    pub fn columns(&self) -> &[Term] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Checks if row `i` covers column `j`.
    pub fn is_marked(&self, i: usize, j: usize) -> bool {
        self.marks[i].contains(j)
    }

    pub fn is_essential_row(&self, i: usize) -> bool {
        self.essential_rows.contains(i)
    }

    pub fn is_essential_column(&self, j: usize) -> bool {
        self.essential_columns.contains(j)
    }

    /// Rows that are the sole coverer of at least one column.
    pub fn essential_rows(&self) -> BitSet {
        self.essential_rows.clone()
    }

    /// Terms of the essential rows, in row order.
    pub fn essential_terms(&self) -> Vec<Term> {
        self.essential_rows.iter().map(|i| self.rows[i].clone()).collect()
    }

    /// Columns no row covers.
    ///
    /// Always empty for a table built from the prime implicants of its own columns.
    pub fn uncovered_columns(&self) -> &BitSet {
        &self.uncovered_columns
    }

    /// Returns the columns covered by the selected rows.
    pub fn row_cover(&self, rows: &BitSet) -> BitSet {
        let mut covered = BitSet::new(self.columns.len());
        for i in rows {
            covered.union_with(&self.marks[i]);
        }
        covered
    }

    /// Checks if the selected rows cover every column.
    ///
    /// Only the marks are consulted; essential flags play no part.
    pub fn is_covered_by(&self, rows: &BitSet) -> bool {
        self.row_cover(rows).contains_all(self.columns.len())
    }
}
