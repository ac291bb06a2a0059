//! Evaluation values with explicit infinities.

use std::fmt;
use std::ops::Neg;

/// A node evaluation as seen by the search.
///
/// Leaves carry finite values; internal nodes are seeded with one of the
/// infinities before their first child returns. The derived ordering puts
/// `NegInf` below every finite value and `PosInf` above every finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Eval {
    NegInf,
    Finite(i32),
    PosInf,
}

impl Eval {
    /// Returns the finite value, if any.
    pub fn finite(self) -> Option<i32> {
        match self {
            Eval::Finite(v) => Some(v),
            _ => None,
        }
    }

    /// The worst possible value for a player, used to seed internal nodes.
    pub fn worst_for(maximizing: bool) -> Eval {
        if maximizing {
            Eval::NegInf
        } else {
            Eval::PosInf
        }
    }

    pub fn is_infinite(self) -> bool {
        !matches!(self, Eval::Finite(_))
    }

    /// Multiplies by a color sign (+1 or -1).
    pub fn signed(self, sign: i32) -> Eval {
        if sign < 0 {
            -self
        } else {
            self
        }
    }
}

impl From<i32> for Eval {
    fn from(v: i32) -> Self {
        Eval::Finite(v)
    }
}

impl Neg for Eval {
    type Output = Eval;

    fn neg(self) -> Eval {
        match self {
            Eval::NegInf => Eval::PosInf,
            Eval::PosInf => Eval::NegInf,
            Eval::Finite(v) => Eval::Finite(v.saturating_neg()),
        }
    }
}

impl fmt::Display for Eval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eval::NegInf => f.write_str("-∞"),
            Eval::PosInf => f.write_str("∞"),
            Eval::Finite(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_with_infinities() {
        assert!(Eval::NegInf < Eval::Finite(i32::MIN));
        assert!(Eval::Finite(i32::MAX) < Eval::PosInf);
        assert!(Eval::Finite(-3) < Eval::Finite(2));
        assert_eq!(Eval::NegInf.max(Eval::Finite(7)), Eval::Finite(7));
        assert_eq!(Eval::PosInf.min(Eval::Finite(7)), Eval::Finite(7));
    }

    #[test]
    fn test_negation_and_sign() {
        assert_eq!(-Eval::NegInf, Eval::PosInf);
        assert_eq!(-Eval::Finite(5), Eval::Finite(-5));
        assert_eq!(-Eval::Finite(i32::MIN), Eval::Finite(i32::MAX));
        assert_eq!(Eval::Finite(4).signed(-1), Eval::Finite(-4));
        assert_eq!(Eval::Finite(4).signed(1), Eval::Finite(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Eval::NegInf.to_string(), "-∞");
        assert_eq!(Eval::PosInf.to_string(), "∞");
        assert_eq!(Eval::Finite(-12).to_string(), "-12");
    }
}
