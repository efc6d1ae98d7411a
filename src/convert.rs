//! Conversions between [`Value`] and the trees of JSON and TOML parsers.
//!
//! `serde_json` is built with `preserve_order`, so map keys keep the order of
//! the source document in both directions.

use crate::{Number, Value};

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::from(b),
            Json::Number(n) => Value::from(Number::from(n)),
            Json::String(s) => Value::from(s),
            Json::Array(items) => items.into_iter().map(Value::from).collect(),
            Json::Object(obj) => obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(n) = n.as_u64() {
            Number::UInt(n)
        } else if let Some(n) = n.as_i64() {
            Number::Int(n)
        } else {
            // serde_json numbers are always representable as f64 without
            // arbitrary_precision
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

#[cfg(feature = "json")]
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        From::from(&value)
    }
}

#[cfg(feature = "json")]
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        use crate::Scalar;
        use serde_json::Value as Json;
        match value {
            Value::Null => Json::Null,
            Value::Scalar(Scalar::Bool(b)) => Json::Bool(*b),
            Value::Scalar(Scalar::Number(Number::UInt(n))) => Json::from(*n),
            Value::Scalar(Scalar::Number(Number::Int(n))) => Json::from(*n),
            // non-finite floats have no JSON representation
            Value::Scalar(Scalar::Number(Number::Float(n))) => {
                serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number)
            }
            Value::Scalar(Scalar::String(s)) => Json::String(s.to_string()),
            Value::List(list) => Json::Array(list.iter().map(Json::from).collect()),
            Value::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Json::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "toml")]
impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        use toml::Value as Toml;
        match value {
            Toml::String(s) => Value::from(s),
            Toml::Integer(n) => Value::from(n),
            Toml::Float(n) => Value::from(n),
            Toml::Boolean(b) => Value::from(b),
            Toml::Datetime(dt) => Value::from(dt.to_string()),
            Toml::Array(items) => items.into_iter().map(Value::from).collect(),
            Toml::Table(table) => table
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
        }
    }
}
