//! `gpr_1667_test.ml`
//!
//! Regression for applying a function that ignores its argument to a two-parameter closure. The expression is
//! evaluated for its own sake (the compiler must accept and run it); the suite holds one trivial assertion.

use crate::suite::Registrar;

pub const NAME: &str = "gpr_1667";
pub const MODULE_NAME: &str = "gpr_1667_test.ml";

/// Label prefix of the single assertion.
pub const EQ_LOCATION: &str = r#"File "gpr_1667_test.ml", line 18, characters 7-14"#;

/// `(fun _ -> 0) (fun _ _ -> false) = 0`
pub fn regression_expression() -> bool {
    let ignore_arg = |_: fn(i32, i32) -> bool| 0;
    ignore_arg(|_, _| false) == 0
}

pub fn register(registrar: &mut Registrar) {
    let evaluated = regression_expression();
    tracing::trace!(evaluated, "evaluated gpr_1667 expression");

    registrar.register(EQ_LOCATION, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_expression_holds() {
        assert!(regression_expression());
    }

    #[test]
    fn test_registers_single_assertion() {
        let mut registrar = Registrar::new();
        register(&mut registrar);

        assert_eq!(registrar.test_id(), 1);
        assert_eq!(
            registrar.suite().labels(),
            vec![r#"File "gpr_1667_test.ml", line 18, characters 7-14 id 1"#]
        );
        assert!(registrar.suite().iter().all(|a| a.check().holds()));
    }
}
