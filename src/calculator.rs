use crate::{error::ServiceError, util::parse_operand};

pub const INVALID_OPERANDS: &str = "Invalid input. Please provide num1 and num2 as numbers.";
pub const OUT_OF_RANGE: &str = "Result is out of range.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
        }
    }

    /// Name reported back to clients alongside the result
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
        }
    }
}

/// Coerces both operands and applies `op`.
///
/// Operands may be JSON numbers or numeric strings. Anything else, including
/// a missing operand, is a validation error. A result that overflows `f64` is
/// rejected as well.
pub fn evaluate(
    op: Operation,
    num1: Option<&serde_json::Value>,
    num2: Option<&serde_json::Value>,
) -> Result<f64, ServiceError> {
    let a = num1
        .and_then(parse_operand)
        .ok_or_else(|| ServiceError::validation(INVALID_OPERANDS))?;
    let b = num2
        .and_then(parse_operand)
        .ok_or_else(|| ServiceError::validation(INVALID_OPERANDS))?;

    let result = op.apply(a, b);
    if !result.is_finite() {
        return Err(ServiceError::validation(OUT_OF_RANGE));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(Operation::Add.apply(2.0, 3.5), 5.5);
        assert_eq!(Operation::Subtract.apply(2.0, 3.5), -1.5);
        assert_eq!(Operation::Subtract.apply(-4.0, -4.0), 0.0);
    }

    #[test]
    fn test_evaluate_accepts_numeric_strings() {
        let result = evaluate(Operation::Add, Some(&json!("1.5")), Some(&json!(2))).unwrap();
        assert_eq!(result, 3.5);
    }

    #[test]
    fn test_evaluate_rejects_missing_operand() {
        let err = evaluate(Operation::Add, Some(&json!(1)), None).unwrap_err();
        assert_eq!(err, ServiceError::validation(INVALID_OPERANDS));
    }

    #[test]
    fn test_evaluate_rejects_non_numeric_operand() {
        for bad in [json!("abc"), json!(null), json!(true), json!([1]), json!({"a": 1})] {
            assert!(evaluate(Operation::Subtract, Some(&bad), Some(&json!(1))).is_err());
        }
    }

    #[test]
    fn test_evaluate_rejects_overflow() {
        let huge = json!(1.7e308);
        let err = evaluate(Operation::Add, Some(&huge), Some(&huge)).unwrap_err();
        assert_eq!(err, ServiceError::validation(OUT_OF_RANGE));

        let err = evaluate(Operation::Subtract, Some(&json!(-1.7e308)), Some(&huge)).unwrap_err();
        assert_eq!(err, ServiceError::validation(OUT_OF_RANGE));

        let max = evaluate(Operation::Add, Some(&json!(f64::MAX)), Some(&json!(0))).unwrap();
        assert_eq!(max, f64::MAX);
    }

    proptest! {
        #[test]
        fn prop_add_matches_float_addition(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(Operation::Add.apply(a, b), a + b);
        }

        #[test]
        fn prop_subtract_matches_float_subtraction(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(Operation::Subtract.apply(a, b), a - b);
        }
    }
}
