//! Exhaustive search for a minimum-cost cover.
//!
//! Essential rows are part of every candidate. On top of them the search
//! enumerates every `k`-subset of the remaining rows, for `k` from 1 up to
//! (but excluding) the number of remaining rows, and keeps each subset that
//! covers every column. The trivial cover of all rows is always added last.
//! The candidate with strictly the lowest cost wins, so ties go to the first
//! one encountered.
//!
//! Enumeration order is fixed: `k` ascending, and subsets of a given size in
//! lexicographic order of row indices. Rows of a table built by the
//! [minimizer][crate::minimize] are in canonical term order, which makes the
//! outcome reproducible.
//!
//! # Scaling
//!
//! The number of tested subsets is `2^m - 2` for `m` non-essential rows (see
//! [`search_space`]). Every subset size is explored even after a valid cover
//! has been found. This is only practical for small prime implicant tables.
//!
//! # Example
//!
//! ```
//! use qmc_rs::cover::{minimal_cover, SearchConfig};
//! use qmc_rs::table::CoverageTable;
//! use qmc_rs::term::Term;
//!
//! let rows: Vec<Term> = ["0~", "~1", "1~"].iter().map(|s| s.parse().unwrap()).collect();
//! let columns: Vec<Term> = ["00", "01", "11"].iter().map(|s| s.parse().unwrap()).collect();
//! let table = CoverageTable::new(rows, columns);
//!
//! let solution = minimal_cover(&table, &SearchConfig::default());
//! assert!(table.is_covered_by(&solution.rows));
//! ```

use itertools::Itertools;
use log::{debug, info, warn};
use num_bigint::BigUint;

use crate::bitset::BitSet;
use crate::table::CoverageTable;
use crate::term::Term;
use crate::utils::{binomial, search_space};

/// Above this many non-essential rows the search is reported as expensive.
const EXPENSIVE_SEARCH_ROWS: usize = 24;

/// How the cost of a candidate cover is measured.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CostMetric {
    /// Sum of term lengths. Every term has length `n`, so this is `n` times the
    /// number of terms, whatever their literals.
    #[default]
    TermLength,
    /// Sum of defined (non-absent) positions, i.e. the number of printed literals.
    LiteralCount,
}

impl CostMetric {
    /// Cost of a single term.
    pub fn term_cost(self, term: &Term) -> usize {
        match self {
            CostMetric::TermLength => term.len(),
            CostMetric::LiteralCount => term.defined_count(),
        }
    }

    /// Cost of a set of terms.
    pub fn cost<'a>(self, terms: impl IntoIterator<Item = &'a Term>) -> usize {
        terms.into_iter().map(|t| self.term_cost(t)).sum()
    }
}

/// Options for [`minimal_cover`].
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Cost metric used to rank candidates (default: [`CostMetric::TermLength`])
    pub cost: CostMetric,
    /// Also try the essential rows on their own before any larger subset (default: false)
    pub try_essential_only: bool,
}

/// The winning cover.
#[derive(Debug, Clone)]
pub struct CoverSolution {
    /// Selected rows of the coverage table
    pub rows: BitSet,
    /// Terms of the selected rows, in row order
    pub terms: Vec<Term>,
    /// Cost under the configured metric
    pub cost: usize,
    /// Number of valid candidates compared, the trivial cover included
    pub candidates: usize,
}

/// Lowest-cost candidate seen so far.
struct Best {
    rows: Option<BitSet>,
    cost: usize,
    candidates: usize,
}

impl Best {
    fn new() -> Self {
        Self {
            rows: None,
            cost: usize::MAX,
            candidates: 0,
        }
    }

    /// Keeps `rows` if it is strictly cheaper than the current best.
    fn offer(&mut self, rows: BitSet, cost: usize) {
        self.candidates += 1;
        if self.rows.is_none() || cost < self.cost {
            self.rows = Some(rows);
            self.cost = cost;
        }
    }
}

/// Number of row subsets [`minimal_cover`] tests on `table`.
pub fn search_space_for(table: &CoverageTable) -> BigUint {
    search_space(table.num_rows(), table.essential_rows().len())
}

/// Finds a lowest-cost set of rows covering every column of `table`.
pub fn minimal_cover(table: &CoverageTable, config: &SearchConfig) -> CoverSolution {
    let essential = table.essential_rows();
    let optional: Vec<usize> = (0..table.num_rows()).filter(|&i| !essential.contains(i)).collect();
    let row_cost = |rows: &BitSet| config.cost.cost(rows.iter().map(|i| &table.rows()[i]));

    let space = search_space_for(table);
    info!(
        "Searching covers: {} rows, {} essential, {} subsets to test",
        table.num_rows(),
        essential.len(),
        space
    );
    if optional.len() > EXPENSIVE_SEARCH_ROWS {
        warn!("Cover search over {} non-essential rows will take a long time", optional.len());
    }

    let mut best = Best::new();

    if config.try_essential_only && table.is_covered_by(&essential) {
        best.offer(essential.clone(), row_cost(&essential));
    }

    for k in 1..optional.len() {
        debug!("combinations from {} ({})", k, binomial(optional.len(), k));
        for combination in optional.iter().copied().combinations(k) {
            let mut rows = essential.clone();
            rows.extend(combination);
            if table.is_covered_by(&rows) {
                let cost = row_cost(&rows);
                best.offer(rows, cost);
            }
        }
    }

    let trivial = BitSet::full(table.num_rows());
    let trivial_cost = row_cost(&trivial);
    best.offer(trivial, trivial_cost);

    let rows = best.rows.unwrap_or_default();
    let terms = rows.iter().map(|i| table.rows()[i].clone()).collect();
    debug!("minimal_cover: {} candidates, best cost {}", best.candidates, best.cost);

    CoverSolution {
        rows,
        terms,
        cost: best.cost,
        candidates: best.candidates,
    }
}
