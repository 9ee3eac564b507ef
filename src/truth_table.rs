//! Truth table input for the minimizer.
//!
//! A Boolean function `f: {0,1}^n → {0,1}` is given by a flat vector of `2^n`
//! values. Value `i` is the function at the input whose MSB-first, `n`-digit
//! binary representation is `i`, and digit `k` of that representation is
//! variable `x<k>` of the resulting minterm.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::term::Term;

/// A truth table for a Boolean function on `n` variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    /// Number of variables
    n: usize,
    /// The truth table as a big integer (2^n bits), bit `i` is `f(i)`
    bits: BigUint,
}

impl TruthTable {
    /// Creates a truth table from a vector of 0/1 values.
    ///
    /// The length must be a power of two and every value must be 0 or 1.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        let n = num_vars_for(values.len())?;
        let mut bits = BigUint::ZERO;
        for (index, &value) in values.iter().enumerate() {
            match value {
                0 => {}
                1 => bits |= BigUint::from(1u8) << index,
                _ => {
                    return Err(Error::NonBinaryValue {
                        index,
                        value: value.to_string(),
                    })
                }
            }
        }
        Ok(Self { n, bits })
    }

    /// Creates a truth table from Boolean values.
    pub fn from_bools(values: &[bool]) -> Result<Self> {
        let values: Vec<u8> = values.iter().map(|&v| v as u8).collect();
        Self::from_values(&values)
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.n
    }

    /// Number of entries, `2^n`.
    pub fn len(&self) -> usize {
        1 << self.n
    }

    /// A truth table always has at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value of the function at input `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn value(&self, i: usize) -> bool {
        assert!(i < self.len(), "Input index out of range");
        self.bits.bit(i as u64)
    }

    /// Number of inputs mapped to 1.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns the input assignment for index `i`, position `k` being digit `k`
    /// of the MSB-first binary representation.
    pub fn assignment(&self, i: usize) -> Vec<bool> {
        (0..self.n).map(|k| (i >> (self.n - 1 - k)) & 1 == 1).collect()
    }

    /// Returns the minterms, one fully specified term per input mapped to 1, in index order.
    pub fn minterms(&self) -> Vec<Term> {
        (0..self.len())
            .filter(|&i| self.value(i))
            .map(|i| Term::from_literals(self.assignment(i).into_iter().map(Into::into)))
            .collect()
    }
}

fn num_vars_for(len: usize) -> Result<usize> {
    if len == 0 || !len.is_power_of_two() {
        return Err(Error::InvalidLength { len });
    }
    Ok(len.trailing_zeros() as usize)
}

impl FromStr for TruthTable {
    type Err = Error;

    /// Parses a string of `0`/`1` digits. Whitespace, `,` and `_` are separators.
    fn from_str(s: &str) -> Result<Self> {
        let mut values = Vec::new();
        for ch in s.chars() {
            match ch {
                '0' => values.push(0),
                '1' => values.push(1),
                c if c.is_whitespace() || c == ',' || c == '_' => {}
                c => {
                    return Err(Error::NonBinaryValue {
                        index: values.len(),
                        value: c.to_string(),
                    })
                }
            }
        }
        Self::from_values(&values)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            write!(f, "{}", self.value(i) as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_from_values() {
        let tt = TruthTable::from_values(&[0, 1, 1, 0]).unwrap();
        assert_eq!(tt.num_vars(), 2);
        assert_eq!(tt.len(), 4);
        assert_eq!(tt.count_ones(), 2);
        assert!(!tt.value(0));
        assert!(tt.value(1));
        assert_eq!(tt.to_string(), "0110");
    }

    #[test]
    fn test_single_entry() {
        let tt = TruthTable::from_values(&[1]).unwrap();
        assert_eq!(tt.num_vars(), 0);
        assert_eq!(tt.minterms(), vec![Term::absent(0)]);
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(
            TruthTable::from_values(&[0, 1, 1]),
            Err(Error::InvalidLength { len: 3 })
        ));
        assert!(matches!(TruthTable::from_values(&[]), Err(Error::InvalidLength { len: 0 })));
    }

    #[test]
    fn test_non_binary() {
        let err = TruthTable::from_values(&[0, 2]).unwrap_err();
        assert!(matches!(err, Error::NonBinaryValue { index: 1, .. }));

        let err = "01x0".parse::<TruthTable>().unwrap_err();
        assert!(matches!(err, Error::NonBinaryValue { index: 2, .. }));
    }

    #[test]
    fn test_parse_separators() {
        let tt: TruthTable = "1, 0, 1, 1\n0_0_0_1".parse().unwrap();
        assert_eq!(tt.num_vars(), 3);
        assert_eq!(tt.to_string(), "10110001");
    }

    #[test]
    fn test_minterms_match_binary_indices() {
        let values = [0, 1, 0, 1, 1, 0, 0, 1];
        let tt = TruthTable::from_values(&values).unwrap();
        let expected: Vec<Term> = values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .map(|(i, _)| Term::from_binary(&format!("{:03b}", i)).unwrap())
            .collect();
        assert_eq!(tt.minterms(), expected);
        assert!(tt.minterms().iter().all(|t| t.len() == 3 && t.defined_count() == 3));
    }

    #[test]
    fn test_assignment() {
        let tt = TruthTable::from_values(&[0; 8]).unwrap();
        assert_eq!(tt.assignment(1), vec![false, false, true]);
        assert_eq!(tt.assignment(6), vec![true, true, false]);
        assert!(tt.minterms().is_empty());
    }
}
