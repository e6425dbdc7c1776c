// Request and response bodies for the JSON API
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    abbreviations::Expansion,
    credentials::{PasswordOptions, UsernameOptions},
    error::ServiceError,
    util::parse_length,
};

pub const INVALID_PARAMETERS: &str = "Invalid input parameters.";

/// Operands are kept as raw JSON so numeric strings can be coerced later
#[derive(Deserialize, Debug, Default)]
pub struct CalculatorRequest {
    pub num1: Option<Value>,
    pub num2: Option<Value>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct CalculatorResponse {
    pub success: bool,
    pub result: f64,
    pub operation: &'static str,
}

#[derive(Deserialize, Debug, Default)]
pub struct AbbreviationRequest {
    pub abbreviation: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ExpansionResponse {
    pub success: bool,
    #[serde(flatten)]
    pub entry: Expansion,
}

#[derive(Serialize, Debug)]
pub struct TableResponse {
    pub success: bool,
    pub table: &'static str,
    pub entries: Vec<Expansion>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UsernameRequest {
    pub length: Option<Value>,
    pub prefix: Option<String>,
    pub include_numbers: Option<bool>,
    pub include_special: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PasswordRequest {
    pub length: Option<Value>,
    pub include_uppercase: Option<bool>,
    pub include_lowercase: Option<bool>,
    pub include_numbers: Option<bool>,
    pub include_special: Option<bool>,
}

#[derive(Serialize, Debug)]
pub struct UsernameResponse {
    pub success: bool,
    pub username: String,
    pub length: usize,
}

#[derive(Serialize, Debug)]
pub struct PasswordResponse {
    pub success: bool,
    pub password: String,
    pub length: usize,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Missing and `null` lengths fall back to the default
fn requested_length(length: Option<&Value>, default: usize) -> Result<usize, ServiceError> {
    match length {
        None | Some(Value::Null) => Ok(default),
        Some(value) => {
            parse_length(value).ok_or_else(|| ServiceError::validation(INVALID_PARAMETERS))
        }
    }
}

impl TryFrom<UsernameRequest> for UsernameOptions {
    type Error = ServiceError;

    fn try_from(request: UsernameRequest) -> Result<Self, Self::Error> {
        let defaults = UsernameOptions::default();
        Ok(UsernameOptions {
            length: requested_length(request.length.as_ref(), defaults.length)?,
            prefix: request.prefix.unwrap_or(defaults.prefix),
            include_numbers: request.include_numbers.unwrap_or(defaults.include_numbers),
            include_special: request.include_special.unwrap_or(defaults.include_special),
        })
    }
}

impl TryFrom<PasswordRequest> for PasswordOptions {
    type Error = ServiceError;

    fn try_from(request: PasswordRequest) -> Result<Self, Self::Error> {
        let defaults = PasswordOptions::default();
        Ok(PasswordOptions {
            length: requested_length(request.length.as_ref(), defaults.length)?,
            include_uppercase: request.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: request.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_numbers: request.include_numbers.unwrap_or(defaults.include_numbers),
            include_special: request.include_special.unwrap_or(defaults.include_special),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_username_request_defaults() {
        let request: UsernameRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            UsernameOptions::try_from(request).unwrap(),
            UsernameOptions::default()
        );
    }

    #[test]
    fn test_password_request_nulls_use_defaults() {
        let request: PasswordRequest = serde_json::from_value(json!({
            "length": null,
            "include_special": null,
            "include_numbers": false
        }))
        .unwrap();
        let options = PasswordOptions::try_from(request).unwrap();
        assert_eq!(options.length, 12);
        assert!(options.include_special);
        assert!(!options.include_numbers);
    }

    #[test]
    fn test_length_as_string() {
        let request: UsernameRequest =
            serde_json::from_value(json!({"length": "10", "prefix": "x"})).unwrap();
        let options = UsernameOptions::try_from(request).unwrap();
        assert_eq!(options.length, 10);
        assert_eq!(options.prefix, "x");
    }

    #[test]
    fn test_invalid_length() {
        for length in [json!("ten"), json!(-3), json!(2.5), json!([8])] {
            let request = PasswordRequest {
                length: Some(length),
                ..Default::default()
            };
            assert_eq!(
                PasswordOptions::try_from(request),
                Err(ServiceError::validation(INVALID_PARAMETERS))
            );
        }
    }

    #[test]
    fn test_expansion_response_is_flat() {
        let response = ExpansionResponse {
            success: true,
            entry: Expansion {
                abbreviation: "BRB",
                expansion: "Be Right Back",
            },
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"success": true, "abbreviation": "BRB", "expansion": "Be Right Back"})
        );
    }
}
