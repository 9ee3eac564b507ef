//! End-to-end minimization of a truth table.
//!
//! The [`Minimizer`] runs every stage in order:
//!
//! 1. extract the minterms of the [`TruthTable`],
//! 2. merge them into [prime implicants][crate::merge::prime_implicants],
//! 3. build the [`CoverageTable`] of primes against minterms and find the essential rows,
//! 4. [search][crate::cover::minimal_cover] for a lowest-cost cover.
//!
//! The returned [`Minimization`] keeps the output of every stage so callers can
//! report on it or dump the table.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::minimize::minimize;
//! use qmc_rs::truth_table::TruthTable;
//!
//! let tt = TruthTable::from_values(&[0, 1, 1, 0]).unwrap();
//! let result = minimize(&tt);
//! assert_eq!(result.sop().to_string(), "!x1x0 + x1!x0");
//! assert_eq!(result.cost(), 4);
//! ```

use log::info;

use crate::cover::{minimal_cover, CoverSolution, SearchConfig};
use crate::merge::prime_implicants;
use crate::table::CoverageTable;
use crate::term::{Sop, Term};
use crate::truth_table::TruthTable;

/// Runs the minimization pipeline with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: SearchConfig,
}

impl Minimizer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Minimizes the function given by a truth table.
    pub fn minimize(&self, tt: &TruthTable) -> Minimization {
        info!("Minimizing function of {} variables ({} of {} inputs are 1)", tt.num_vars(), tt.count_ones(), tt.len());
        self.minimize_terms(tt.minterms())
    }

    /// Minimizes the function whose on-set is given by `minterms`.
    ///
    /// All minterms must have the same length.
    pub fn minimize_terms(&self, minterms: Vec<Term>) -> Minimization {
        info!("Source minterms: {}", minterms.len());

        let primes = prime_implicants(&minterms);
        info!("Prime implicants: {}", primes.len());

        let table = CoverageTable::new(primes.clone(), minterms.clone());
        let essential = table.essential_terms();
        info!("Core implicants: {}, table size: {} rows", essential.len(), table.num_rows());

        let solution = minimal_cover(&table, &self.config);
        info!("Result: {} terms, cost {}", solution.terms.len(), solution.cost);

        Minimization {
            minterms,
            prime_implicants: primes,
            essential,
            table,
            solution,
        }
    }
}

/// Minimizes a truth table with the default configuration.
pub fn minimize(tt: &TruthTable) -> Minimization {
    Minimizer::default().minimize(tt)
}

/// Output of every stage of a minimization run.
#[derive(Debug, Clone)]
pub struct Minimization {
    /// Original minterms, in truth table order
    pub minterms: Vec<Term>,
    /// Prime implicants, in canonical order
    pub prime_implicants: Vec<Term>,
    /// Essential prime implicants, in row order
    pub essential: Vec<Term>,
    /// Coverage table of prime implicants against minterms
    pub table: CoverageTable,
    /// The chosen cover
    pub solution: CoverSolution,
}

impl Minimization {
    /// Terms of the minimized expression.
    pub fn terms(&self) -> &[Term] {
        &self.solution.terms
    }

    pub fn cost(&self) -> usize {
        self.solution.cost
    }

    /// Total number of literals printed in the algebraic form.
    pub fn literal_count(&self) -> usize {
        self.terms().iter().map(Term::defined_count).sum()
    }

    /// Fraction of minterms covered by the result; 1.0 when there are no minterms.
    pub fn coverage_ratio(&self) -> f64 {
        if self.minterms.is_empty() {
            return 1.0;
        }
        let covered = self
            .minterms
            .iter()
            .filter(|m| self.terms().iter().any(|t| t.covers(m)))
            .count();
        covered as f64 / self.minterms.len() as f64
    }

    /// Evaluates the minimized expression on an assignment.
    pub fn eval(&self, inputs: &[bool]) -> bool {
        self.terms().iter().any(|t| t.eval(inputs))
    }

    /// Display adapter for the sum-of-products form.
    pub fn sop(&self) -> Sop<'_> {
        Sop(self.terms())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::cover::CostMetric;

    #[test]
    fn test_stages_are_kept() {
        let tt = TruthTable::from_values(&[1, 1, 0, 1]).unwrap();
        let result = minimize(&tt);
        assert_eq!(result.minterms.len(), 3);
        assert_eq!(result.prime_implicants.len(), 2);
        assert_eq!(result.essential.len(), 2);
        assert_eq!(result.table.num_columns(), 3);
        assert_eq!(result.sop().to_string(), "x1 + !x0");
        assert_eq!(result.literal_count(), 2);
        assert_eq!(result.coverage_ratio(), 1.0);
    }

    #[test]
    fn test_config_is_used() {
        let config = SearchConfig {
            cost: CostMetric::LiteralCount,
            try_essential_only: true,
        };
        let minimizer = Minimizer::new(config);
        assert_eq!(minimizer.config().cost, CostMetric::LiteralCount);

        let tt = TruthTable::from_values(&[1, 1, 1, 1]).unwrap();
        let result = minimizer.minimize(&tt);
        assert_eq!(result.terms(), &[Term::absent(2)]);
        assert_eq!(result.cost(), 0);
    }

    #[test]
    fn test_minimize_terms() {
        let minterms: Vec<Term> = ["110", "111"].iter().map(|s| s.parse().unwrap()).collect();
        let result = Minimizer::default().minimize_terms(minterms);
        assert_eq!(result.sop().to_string(), "x2x1");
        assert!(result.eval(&[false, true, true]));
        assert!(!result.eval(&[false, true, false]));
    }
}
