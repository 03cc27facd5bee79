//! Tagged comparison values produced by deferred checks.
//!
//! A deferred check captures its two operands and, when invoked, produces a [`Check`]: the tag, both operands
//! rendered with `Debug`, and the outcome of comparing them with `PartialEq`. Runners decide what a failed
//! outcome means; nothing here panics or reports.

use std::fmt::{self, Debug, Display};

/// The comparison a [`Check`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Operands are expected to be equal.
    Eq,
    /// Operands are expected to differ.
    Neq,
}

impl CheckKind {
    /// Canonical tag name (`"Eq"` / `"Neq"`).
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Eq => "Eq",
            CheckKind::Neq => "Neq",
        }
    }
}

impl Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of invoking a deferred check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    kind: CheckKind,
    left: String,
    right: String,
    holds: bool,
}

impl Check {
    /// Compare `x` and `y` for equality.
    ///
    /// ## Parameters
    /// - `x`: the actual value.
    /// - `y`: the expected value.
    ///
    /// ## Returns
    /// - (`Check`): an `Eq` check whose outcome is `x == y`.
    pub fn equal<T: PartialEq + Debug + ?Sized>(x: &T, y: &T) -> Self {
        Self::new(CheckKind::Eq, x, y, x == y)
    }

    /// Compare `x` and `y` for inequality.
    ///
    /// ## Returns
    /// - (`Check`): a `Neq` check whose outcome is `x != y`.
    pub fn not_equal<T: PartialEq + Debug + ?Sized>(x: &T, y: &T) -> Self {
        Self::new(CheckKind::Neq, x, y, x != y)
    }

    fn new<T: Debug + ?Sized>(kind: CheckKind, x: &T, y: &T, holds: bool) -> Self {
        Self {
            kind,
            left: format!("{x:?}"),
            right: format!("{y:?}"),
            holds,
        }
    }

    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    /// `Debug` rendering of the first operand.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// `Debug` rendering of the second operand.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Whether the comparison named by [`Check::kind`] holds for the captured operands.
    pub fn holds(&self) -> bool {
        self.holds
    }
}

impl Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.kind, self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_holds_for_equal_operands() {
        let check = Check::equal(&0, &0);
        assert_eq!(check.kind(), CheckKind::Eq);
        assert!(check.holds());
        assert_eq!(check.to_string(), "Eq(0, 0)");
    }

    #[test]
    fn test_eq_fails_for_different_operands() {
        let check = Check::equal(&1, &2);
        assert!(!check.holds());
        assert_eq!(check.left(), "1");
        assert_eq!(check.right(), "2");
    }

    #[test]
    fn test_neq_inverts_outcome() {
        assert!(Check::not_equal(&1, &2).holds());
        assert!(!Check::not_equal(&"a", &"a").holds());
        assert_eq!(Check::not_equal(&"a", &"b").to_string(), r#"Neq("a", "b")"#);
    }

    #[test]
    fn test_unsized_operands() {
        let check = Check::equal("abc", "abc");
        assert!(check.holds());
        assert_eq!(check.left(), r#""abc""#);
    }

    #[test]
    fn test_float_nan_never_equal() {
        assert!(!Check::equal(&f64::NAN, &f64::NAN).holds());
    }
}
