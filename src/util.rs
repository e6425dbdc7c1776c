use serde_json::Value;

/// Reads a finite number out of a JSON value.
///
/// Accepts JSON numbers and strings holding a decimal number (surrounding
/// whitespace is ignored). Infinity and NaN are rejected.
pub fn parse_operand(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Reads a non-negative integer out of a JSON value.
///
/// Accepts JSON integers and strings holding an integer. Fractions, negative
/// numbers and every other type yield `None`.
pub fn parse_length(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand(&json!(3)), Some(3.0));
        assert_eq!(parse_operand(&json!(-0.25)), Some(-0.25));
        assert_eq!(parse_operand(&json!(" 42.5 ")), Some(42.5));
        assert_eq!(parse_operand(&json!("inf")), None);
        assert_eq!(parse_operand(&json!("NaN")), None);
        assert_eq!(parse_operand(&json!("")), None);
        assert_eq!(parse_operand(&json!(false)), None);
        assert_eq!(parse_operand(&Value::Null), None);
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length(&json!(8)), Some(8));
        assert_eq!(parse_length(&json!("16")), Some(16));
        assert_eq!(parse_length(&json!(0)), Some(0));
        assert_eq!(parse_length(&json!(-1)), None);
        assert_eq!(parse_length(&json!(8.5)), None);
        assert_eq!(parse_length(&json!("8.5")), None);
        assert_eq!(parse_length(&json!(null)), None);
    }
}
