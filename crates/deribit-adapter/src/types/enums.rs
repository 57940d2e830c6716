/*
[INPUT]:  Exchange schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Limit,
    Market,
    StopLimit,
    StopMarket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    Future,
    Option,
    Spot,
    FutureCombo,
    OptionCombo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    ClientCredentials,
}

/// A price or amount sent exactly as the caller wrote it
///
/// The exchange accepts both `"20"` and `20`; the chosen form goes on the
/// wire untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericParam {
    Text(String),
    Number(serde_json::Number),
}

impl NumericParam {
    /// `None` for NaN and infinities, which JSON cannot carry
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(NumericParam::Number)
    }
}

impl From<&str> for NumericParam {
    fn from(value: &str) -> Self {
        NumericParam::Text(value.to_string())
    }
}

impl From<String> for NumericParam {
    fn from(value: String) -> Self {
        NumericParam::Text(value)
    }
}

impl From<i64> for NumericParam {
    fn from(value: i64) -> Self {
        NumericParam::Number(value.into())
    }
}

impl From<u64> for NumericParam {
    fn from(value: u64) -> Self {
        NumericParam::Number(value.into())
    }
}

impl From<Decimal> for NumericParam {
    fn from(value: Decimal) -> Self {
        NumericParam::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_param_keeps_representation() {
        assert_eq!(serde_json::to_value(NumericParam::from("20")).unwrap(), json!("20"));
        assert_eq!(serde_json::to_value(NumericParam::from(20_i64)).unwrap(), json!(20));
        assert_eq!(
            serde_json::to_value(NumericParam::from_f64(20.5).unwrap()).unwrap(),
            json!(20.5)
        );
        assert!(NumericParam::from_f64(f64::NAN).is_none());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(OrderType::Limit).unwrap(), json!("limit"));
        assert_eq!(serde_json::to_value(InstrumentKind::Future).unwrap(), json!("future"));
        assert_eq!(
            serde_json::to_value(GrantType::ClientCredentials).unwrap(),
            json!("client_credentials")
        );
    }
}
