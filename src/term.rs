//! Fixed-length product terms over three-valued literals.
//!
//! A [`Term`] is a product of literals, one position per Boolean variable.
//! Minterms are fully specified terms; merging replaces positions with
//! [`Literal::Absent`] to produce more general terms.
//!
//! # Textual forms
//!
//! - **Compact** ([`Display`][fmt::Display]): one character per position, `~`, `0` or `1`,
//!   printed with position 0 rightmost.
//! - **Algebraic** ([`Term::algebraic`]): `x<i>` or `!x<i>` per defined position,
//!   lowest index rightmost. The all-absent term prints as the empty string.
//!
//! ```
//! use qmc_rs::term::Term;
//!
//! let t = Term::from_binary("01").unwrap();
//! assert_eq!(t.to_string(), "10");
//! assert_eq!(t.algebraic().to_string(), "x1!x0");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Literal;

/// An immutable product term of fixed length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    literals: Box<[Literal]>,
}

impl Term {
    /// Creates a term from its literals, position 0 first.
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    /// Creates the term of length `n` with every position absent.
    pub fn absent(n: usize) -> Self {
        Self::from_literals(std::iter::repeat(Literal::Absent).take(n))
    }

    /// Creates a fully specified term from a binary digit string.
    ///
    /// The k-th digit becomes position k: `'0'` is a false literal and `'1'`
    /// a true one.
    pub fn from_binary(digits: &str) -> Result<Self> {
        digits
            .chars()
            .enumerate()
            .map(|(index, ch)| match ch {
                '0' => Ok(Literal::False),
                '1' => Ok(Literal::True),
                _ => Err(Error::InvalidDigit { index, ch }),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::from_literals)
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Checks if the term has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn literal(&self, index: usize) -> Literal {
        self.literals[index]
    }

    /// Number of positions holding a true literal.
    pub fn weight(&self) -> usize {
        self.literals.iter().filter(|&&lit| lit == Literal::True).count()
    }

    /// Number of positions that are not absent.
    pub fn defined_count(&self) -> usize {
        self.literals.iter().filter(|lit| lit.is_defined()).count()
    }

    /// Hamming distance to `other`.
    ///
    /// # Panics
    ///
    /// Panics if the terms have different lengths.
    pub fn distance(&self, other: &Term) -> usize {
        assert_eq!(self.len(), other.len(), "expected terms lengths are equal");
        self.literals
            .iter()
            .zip(other.literals.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Returns the first position where the terms differ, or `None` if they are equal.
    ///
    /// # Panics
    ///
    /// Panics if the terms have different lengths.
    pub fn differing_index(&self, other: &Term) -> Option<usize> {
        assert_eq!(self.len(), other.len(), "expected terms lengths are equal");
        self.literals
            .iter()
            .zip(other.literals.iter())
            .position(|(a, b)| a != b)
    }

    /// Checks if this term generalizes `other`.
    ///
    /// Absent positions are wildcards. Terms of different lengths are simply
    /// unrelated, so this returns `false` for them instead of panicking.
    pub fn covers(&self, other: &Term) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.literals
            .iter()
            .zip(other.literals.iter())
            .all(|(&a, &b)| a == Literal::Absent || a == b)
    }

    /// Returns a copy of this term with position `index` made absent.
    pub fn with_absent(&self, index: usize) -> Term {
        let mut literals = self.literals.clone();
        literals[index] = Literal::Absent;
        Term { literals }
    }

    /// Evaluates the product on an assignment, position `i` reading `inputs[i]`.
    pub fn eval(&self, inputs: &[bool]) -> bool {
        self.literals.iter().zip(inputs).all(|(&lit, &value)| match lit {
            Literal::Absent => true,
            Literal::True => value,
            Literal::False => !value,
        })
    }

    /// Returns a display adapter for the algebraic form.
    pub fn algebraic(&self) -> Algebraic<'_> {
        Algebraic(self)
    }
}

/// Terms are ordered the way their compact form reads: highest position first.
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.literals
            .iter()
            .rev()
            .cmp(other.literals.iter().rev())
            .then_with(|| self.len().cmp(&other.len()))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.literals.iter().rev().map(|lit| lit.to_char()).collect();
        // Pad as a whole so width flags behave like they do for strings.
        f.pad(&s)
    }
}

impl FromStr for Term {
    type Err = Error;

    /// Parses the compact form produced by [`Display`][fmt::Display].
    fn from_str(s: &str) -> Result<Self> {
        let n = s.chars().count();
        let mut literals = vec![Literal::Absent; n];
        for (index, ch) in s.chars().enumerate() {
            let lit = Literal::from_char(ch).ok_or(Error::InvalidDigit { index, ch })?;
            literals[n - 1 - index] = lit;
        }
        Ok(Self::from_literals(literals))
    }
}

/// Algebraic form of a term, e.g. `x3!x1x0`.
pub struct Algebraic<'a>(&'a Term);

impl fmt::Display for Algebraic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lit) in self.0.literals.iter().enumerate().rev() {
            match lit {
                Literal::Absent => {}
                Literal::False => write!(f, "!x{}", i)?,
                Literal::True => write!(f, "x{}", i)?,
            }
        }
        Ok(())
    }
}

/// Sum-of-products form of a term list, joined with `" + "`.
pub struct Sop<'a>(pub &'a [Term]);

impl fmt::Display for Sop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term.algebraic())?;
        }
        Ok(())
    }
}

/// Compact forms of a term list, joined with `", "`.
pub struct Terms<'a>(pub &'a [Term]);

impl fmt::Display for Terms<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn term(s: &str) -> Term {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_binary() {
        let t = Term::from_binary("011").unwrap();
        assert_eq!(t.literals(), &[Literal::False, Literal::True, Literal::True]);
        assert_eq!(t.to_string(), "110");
        assert_eq!(t.weight(), 2);

        let err = Term::from_binary("01x").unwrap_err();
        assert!(matches!(err, Error::InvalidDigit { index: 2, ch: 'x' }));
    }

    #[test]
    fn test_compact_roundtrip() {
        for s in ["~~", "10~1", "0", "1~0~"] {
            assert_eq!(term(s).to_string(), s);
        }
        assert!("1a".parse::<Term>().is_err());
        assert_eq!(format!("{:>6}", term("1~0")), "   1~0");
    }

    #[test]
    fn test_distance() {
        assert_eq!(term("1010").distance(&term("1010")), 0);
        assert_eq!(term("1010").distance(&term("1011")), 1);
        assert_eq!(term("1~10").distance(&term("1010")), 1);
        assert_eq!(term("0000").distance(&term("1111")), 4);
    }

    #[test]
    #[should_panic(expected = "expected terms lengths are equal")]
    fn test_distance_length_mismatch() {
        term("101").distance(&term("10"));
    }

    #[test]
    #[should_panic(expected = "expected terms lengths are equal")]
    fn test_differing_index_length_mismatch() {
        term("101").differing_index(&term("10"));
    }

    #[test]
    fn test_differing_index() {
        // Compact form is reversed: position 0 is the rightmost char.
        assert_eq!(term("1010").differing_index(&term("1011")), Some(0));
        assert_eq!(term("1010").differing_index(&term("0010")), Some(3));
        assert_eq!(term("1010").differing_index(&term("1010")), None);
    }

    #[test]
    fn test_covers() {
        assert!(term("1~~0").covers(&term("10~0")));
        assert!(term("1~~0").covers(&term("1~10")));
        assert!(!term("10~0").covers(&term("1~~0")));
        assert!(term("~~").covers(&term("01")));
        assert!(!term("1~").covers(&term("01")));
        // Length mismatch means no relation, not a panic.
        assert!(!term("~~").covers(&term("0")));
    }

    #[test]
    fn test_with_absent() {
        let t = term("101");
        let g = t.with_absent(1);
        assert_eq!(g.to_string(), "1~1");
        assert_eq!(t.to_string(), "101");
        assert_eq!(g.defined_count(), 2);
    }

    #[test]
    fn test_algebraic() {
        assert_eq!(term("10~1").algebraic().to_string(), "x3!x2x0");
        assert_eq!(term("00").algebraic().to_string(), "!x1!x0");
        assert_eq!(term("~~").algebraic().to_string(), "");
    }

    #[test]
    fn test_sop_and_terms() {
        let terms = vec![term("01"), term("10")];
        assert_eq!(Sop(&terms).to_string(), "!x1x0 + x1!x0");
        assert_eq!(Terms(&terms).to_string(), "01, 10");
        assert_eq!(Sop(&[]).to_string(), "");
    }

    #[test]
    fn test_canonical_order() {
        let mut terms = vec![term("1~"), term("01"), term("~0"), term("10")];
        terms.sort();
        let sorted: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        assert_eq!(sorted, vec!["01", "10", "1~", "~0"]);
    }

    #[test]
    fn test_eval() {
        let t = term("1~0");
        assert!(t.eval(&[false, true, true]));
        assert!(t.eval(&[false, false, true]));
        assert!(!t.eval(&[true, false, true]));
        assert!(Term::absent(3).eval(&[true, false, true]));
    }
}
