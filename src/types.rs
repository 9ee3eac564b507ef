//! The three-valued literal that makes up a term.
//!
//! Every position of a [`Term`][crate::term::Term] holds a [`Literal`] describing
//! the role of one Boolean variable in the product: it is either generalized
//! out, appears inverted, or appears directly.
use std::fmt;

/// The role of a single variable inside a product term.
///
/// The derived ordering is `False < True < Absent`, which matches the ASCII
/// order of the compact characters `0`, `1` and `~`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Literal {
    /// The variable appears inverted (`!x`).
    False,
    /// The variable appears directly (`x`).
    True,
    /// The variable was merged away and does not appear in the product.
    Absent,
}

impl Literal {
    /// Returns the compact character for this literal: `0`, `1` or `~`.
    pub fn to_char(self) -> char {
        match self {
            Literal::False => '0',
            Literal::True => '1',
            Literal::Absent => '~',
        }
    }

    /// Parses a compact character back into a literal.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Literal::False),
            '1' => Some(Literal::True),
            '~' => Some(Literal::Absent),
            _ => None,
        }
    }

    /// Checks if the variable takes part in the product.
    pub fn is_defined(self) -> bool {
        self != Literal::Absent
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        if value {
            Literal::True
        } else {
            Literal::False
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_literal_chars() {
        for lit in [Literal::False, Literal::True, Literal::Absent] {
            assert_eq!(Literal::from_char(lit.to_char()), Some(lit));
        }
        assert_eq!(Literal::from_char('x'), None);
        assert_eq!(Literal::True.to_string(), "1");
    }

    #[test]
    fn test_literal_order() {
        assert!(Literal::False < Literal::True);
        assert!(Literal::True < Literal::Absent);
        assert!(!Literal::Absent.is_defined());
        assert!(Literal::from(false).is_defined());
    }
}
