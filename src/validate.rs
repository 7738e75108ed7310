//! Field checks shared by every record that can be built from a JSON document.
//!
//! Typed constructors only need the range checks (`positive`, `non_negative`);
//! the `*_field` helpers add the type checks dynamic input requires.

use serde_json::{Map, Value};

use crate::error::{LabError, Result};

pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn as_record(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| LabError::invalid_type("record", "object", kind_of(value)))
}

pub fn field<'a>(record: &'a Value, name: &str) -> Result<&'a Value> {
    as_record(record)?
        .get(name)
        .ok_or_else(|| LabError::missing_field(name))
}

pub fn string_field(record: &Value, name: &str) -> Result<String> {
    let value = field(record, name)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| LabError::invalid_type(name, "string", kind_of(value)))
}

/// Any JSON number, integer or float.
pub fn number_field(record: &Value, name: &str) -> Result<f64> {
    let value = field(record, name)?;
    value
        .as_f64()
        .ok_or_else(|| LabError::invalid_type(name, "number", kind_of(value)))
}

/// Integers only; `200.0` is rejected.
pub fn integer_field(record: &Value, name: &str) -> Result<i64> {
    let value = field(record, name)?;
    match value {
        Value::Number(n) if n.is_i64() => Ok(n.as_i64().unwrap_or_default()),
        Value::Number(n) if n.is_u64() => Err(LabError::invalid_value(name, n, "integer is too large")),
        other => Err(LabError::invalid_type(name, "integer", kind_of(other))),
    }
}

/// Integers, plus floats without a fractional part.
pub fn whole_number_field(record: &Value, name: &str) -> Result<i64> {
    let value = field(record, name)?;
    match value {
        Value::Number(n) if n.is_f64() => {
            let float = n.as_f64().unwrap_or(f64::NAN);
            if float.fract() != 0.0 {
                Err(LabError::invalid_type(name, "whole number", "fractional float"))
            } else if float.abs() >= i64::MAX as f64 {
                Err(LabError::invalid_value(name, float, "integer is too large"))
            } else {
                Ok(float as i64)
            }
        }
        _ => integer_field(record, name),
    }
}

pub fn positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(LabError::invalid_value(name, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(LabError::invalid_value(name, value, "must be a positive number"));
    }
    Ok(value)
}

pub fn positive_integer(name: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(LabError::invalid_value(name, value, "must be a positive integer"));
    }
    u32::try_from(value).map_err(|_| LabError::invalid_value(name, value, "integer is too large"))
}

pub fn non_negative(name: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| LabError::invalid_value(name, value, "cannot be negative"))
}
