/*
[INPUT]:  Decoded `result` values and the method that produced them
[OUTPUT]: Typed field reads that fail with the offending field name
[POS]:    Data layer - projection helpers for typed results
[UPDATE]: When adding new projected field types
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::http::{DeribitError, ProjectionFault, Result};
use crate::rpc::RpcMethod;

/// Read-only view over one JSON object inside a result
pub(crate) struct Fields<'a> {
    method: RpcMethod,
    object: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    /// `path` names the object itself in error messages ("" for the result root)
    pub(crate) fn of(method: RpcMethod, value: &'a Value, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        match value {
            Value::Object(object) => Ok(Self {
                method,
                object,
                path,
            }),
            _ => Err(invalid(method, root_name(&path), "object")),
        }
    }

    fn qualified(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path, field)
        }
    }

    pub(crate) fn get(&self, field: &str) -> Result<&'a Value> {
        self.object.get(field).ok_or_else(|| {
            DeribitError::projection(
                self.method.as_str(),
                self.qualified(field),
                ProjectionFault::Missing,
            )
        })
    }

    pub(crate) fn string(&self, field: &str) -> Result<String> {
        self.get(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| invalid(self.method, self.qualified(field), "string"))
    }

    pub(crate) fn decimal(&self, field: &str) -> Result<Decimal> {
        let value = self.get(field)?;
        to_decimal(value).ok_or_else(|| {
            invalid(
                self.method,
                self.qualified(field),
                decimal_expectation(value, "number"),
            )
        })
    }

    /// Present but `null` is `None`; absent is still an error
    pub(crate) fn optional_decimal(&self, field: &str) -> Result<Option<Decimal>> {
        match self.get(field)? {
            Value::Null => Ok(None),
            value => to_decimal(value).map(Some).ok_or_else(|| {
                invalid(
                    self.method,
                    self.qualified(field),
                    decimal_expectation(value, "number or null"),
                )
            }),
        }
    }

    pub(crate) fn i64(&self, field: &str) -> Result<i64> {
        self.get(field)?
            .as_i64()
            .ok_or_else(|| invalid(self.method, self.qualified(field), "integer"))
    }

    pub(crate) fn array(&self, field: &str) -> Result<&'a Vec<Value>> {
        self.get(field)?
            .as_array()
            .ok_or_else(|| invalid(self.method, self.qualified(field), "array"))
    }
}

pub(crate) fn invalid(method: RpcMethod, field: impl Into<String>, expected: &'static str) -> DeribitError {
    DeribitError::projection(
        method.as_str(),
        field,
        ProjectionFault::InvalidType { expected },
    )
}

/// A JSON number that still failed to convert is out of `Decimal` range
fn decimal_expectation(value: &Value, otherwise: &'static str) -> &'static str {
    if value.is_number() { "decimal in range" } else { otherwise }
}

fn root_name(path: &str) -> &str {
    if path.is_empty() { "result" } else { path }
}

/// Decimal from the JSON number's literal text, so no float rounding sneaks in
pub(crate) fn to_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
