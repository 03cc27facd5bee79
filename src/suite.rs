//! Assertion registrar
//!
//! A test module owns one [`Registrar`]. Each registration bumps the registrar's counter, derives a label from the
//! caller-supplied location and the new counter value, and records a deferred check. Nothing is compared at
//! registration time: the check closure owns its operands and is only invoked by whoever receives the suite.
//!
//! ## Ordering
//!
//! Assertions are stored in registration order. Handoff order is chosen separately (see
//! [`SuiteOrder`](crate::config::SuiteOrder)).

use std::fmt::{self, Debug, Display};

use pairsuite_core::{Check, label};

use crate::config::SuiteOrder;

/// A deferred check: invoking it compares the captured operands.
///
/// The closure is `Fn`, so a check can be invoked any number of times and always yields the same [`Check`].
pub type Deferred = Box<dyn Fn() -> Check>;

/// A labelled, deferred comparison.
pub struct Assertion {
    label: String,
    check: Deferred,
}

impl Assertion {
    pub fn new(label: impl Into<String>, check: Deferred) -> Self {
        Self {
            label: label.into(),
            check,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invoke the deferred check.
    pub fn check(&self) -> Check {
        (self.check)()
    }

    /// Split into `(label, deferred check)`.
    pub fn into_pair(self) -> (String, Deferred) {
        (self.label, self.check)
    }
}

impl Debug for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of assertions registered by one test module.
#[derive(Debug, Default)]
pub struct Suite {
    assertions: Vec<Assertion>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Assertion> {
        self.assertions.iter()
    }

    /// Labels in registration order.
    pub fn labels(&self) -> Vec<&str> {
        self.assertions.iter().map(Assertion::label).collect()
    }

    /// Consume the suite, yielding assertions in `order`.
    pub fn into_pairs(self, order: SuiteOrder) -> Vec<Assertion> {
        let mut pairs = self.assertions;
        if order == SuiteOrder::NewestFirst {
            pairs.reverse();
        }
        pairs
    }

    fn push(&mut self, assertion: Assertion) {
        self.assertions.push(assertion);
    }
}

impl<'a> IntoIterator for &'a Suite {
    type Item = &'a Assertion;
    type IntoIter = std::slice::Iter<'a, Assertion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Registration state for one test module: the suite plus the id counter used for labels.
#[derive(Debug, Default)]
pub struct Registrar {
    suite: Suite,
    test_id: u32,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a deferred equality check between `x` and `y`.
    ///
    /// ## Parameters
    /// - `loc`: free-form location text; the label is `loc + " id " + <counter>`.
    /// - `x`, `y`: operands, moved into the deferred check.
    ///
    /// ## Notes
    /// - Always succeeds. Exactly one assertion is added and the counter grows by exactly one.
    pub fn register<T>(&mut self, loc: impl Display, x: T, y: T)
    where
        T: PartialEq + Debug + 'static,
    {
        self.push_deferred(loc, Box::new(move || Check::equal(&x, &y)));
    }

    /// Register a deferred inequality check between `x` and `y`.
    pub fn register_neq<T>(&mut self, loc: impl Display, x: T, y: T)
    where
        T: PartialEq + Debug + 'static,
    {
        self.push_deferred(loc, Box::new(move || Check::not_equal(&x, &y)));
    }

    fn push_deferred(&mut self, loc: impl Display, check: Deferred) {
        self.test_id += 1;
        let label = label(&loc.to_string(), self.test_id);
        tracing::debug!(label = %label, "registered assertion");
        self.suite.push(Assertion::new(label, check));
    }

    /// Number of registrations so far (the last id handed out).
    pub fn test_id(&self) -> u32 {
        self.test_id
    }

    pub fn suite(&self) -> &Suite {
        &self.suite
    }

    pub fn len(&self) -> usize {
        self.suite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suite.is_empty()
    }

    pub fn into_suite(self) -> Suite {
        self.suite
    }
}

/// Register an equality check labelled with the caller's source location.
///
/// ```rust
/// let mut registrar = pairsuite::Registrar::new();
/// pairsuite::check_eq!(registrar, 1 + 1, 2);
/// assert_eq!(registrar.test_id(), 1);
/// ```
#[macro_export]
macro_rules! check_eq {
    ($registrar:expr, $x:expr, $y:expr $(,)?) => {
        $registrar.register($crate::Location::caller(), $x, $y)
    };
}

/// Register an inequality check labelled with the caller's source location.
#[macro_export]
macro_rules! check_neq {
    ($registrar:expr, $x:expr, $y:expr $(,)?) => {
        $registrar.register_neq($crate::Location::caller(), $x, $y)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairsuite_core::CheckKind;

    #[test]
    fn test_register_from_empty() {
        let mut registrar = Registrar::new();
        assert!(registrar.is_empty());
        assert_eq!(registrar.test_id(), 0);

        registrar.register("L", 0, 0);

        assert_eq!(registrar.test_id(), 1);
        assert_eq!(registrar.suite().labels(), vec!["L id 1"]);
        let check = registrar.suite().iter().next().unwrap().check();
        assert_eq!(check, Check::equal(&0, &0));
        assert!(check.holds());
    }

    #[test]
    fn test_counter_spans_locations() {
        let mut registrar = Registrar::new();
        registrar.register("a", 1, 1);
        registrar.register("b", "x", "y");
        registrar.register_neq("a", 1.5, 2.5);

        assert_eq!(registrar.suite().labels(), vec!["a id 1", "b id 2", "a id 3"]);
        assert_eq!(registrar.test_id(), 3);
    }

    #[test]
    fn test_deferred_check_is_repeatable() {
        let mut registrar = Registrar::new();
        registrar.register("v", vec![1, 2], vec![1, 3]);

        let assertion = registrar.suite().iter().next().unwrap();
        let first = assertion.check();
        let second = assertion.check();
        assert_eq!(first, second);
        assert!(!first.holds());
        assert_eq!(first.left(), "[1, 2]");
    }

    #[test]
    fn test_register_neq_tags_check() {
        let mut registrar = Registrar::new();
        registrar.register_neq("n", 'a', 'b');
        let check = registrar.suite().iter().next().unwrap().check();
        assert_eq!(check.kind(), CheckKind::Neq);
        assert!(check.holds());
    }

    #[test]
    fn test_into_pairs_order() {
        let mut registrar = Registrar::new();
        for i in 0..3 {
            registrar.register("o", i, i);
        }

        let newest: Vec<String> = registrar
            .into_suite()
            .into_pairs(SuiteOrder::NewestFirst)
            .into_iter()
            .map(|a| a.label().to_string())
            .collect();
        assert_eq!(newest, vec!["o id 3", "o id 2", "o id 1"]);

        let mut registrar = Registrar::new();
        for i in 0..3 {
            registrar.register("o", i, i);
        }
        let oldest: Vec<String> = registrar
            .into_suite()
            .into_pairs(SuiteOrder::Chronological)
            .into_iter()
            .map(|a| a.label().to_string())
            .collect();
        assert_eq!(oldest, vec!["o id 1", "o id 2", "o id 3"]);
    }

    #[test]
    fn test_check_eq_macro_uses_caller_location() {
        let mut registrar = Registrar::new();
        crate::check_eq!(registrar, 2, 2);

        let label = registrar.suite().labels()[0].to_string();
        assert!(label.starts_with("File \""), "{label}");
        assert!(label.contains("suite.rs"), "{label}");
        assert!(label.ends_with(" id 1"), "{label}");
    }

    #[test]
    fn test_into_pair_keeps_check() {
        let mut registrar = Registrar::new();
        registrar.register("p", 7u8, 7u8);
        let (label, check) = registrar
            .into_suite()
            .into_pairs(SuiteOrder::default())
            .remove(0)
            .into_pair();
        assert_eq!(label, "p id 1");
        assert!(check().holds());
    }
}
