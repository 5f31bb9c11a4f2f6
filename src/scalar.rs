// SPDX-License-Identifier: PMPL-1.0-or-later

//! `deserialize_with` helpers for loosely typed scalars.
//!
//! Settings files and the injected client object both carry values that
//! may arrive quoted (`port: "8080"`) or natively typed (`port: 8080`).
//! The `number`/`boolean` helpers accept either and still reject values
//! that do not parse. The `lenient_*` helpers never fail: a value of the
//! wrong shape becomes the field's default.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

pub(crate) fn parse_value<T>(value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|err| anyhow::anyhow!("invalid value {:?}: {}", value, err))
}

pub(crate) fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "on" => Ok(true),
        "0" | "f" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!("invalid boolean {:?}", value)),
    }
}

/// Number given natively or as a string.
pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = Scalar::deserialize(deserializer)?.into_text();
    parse_value(&text).map_err(D::Error::custom)
}

/// Boolean given natively, as `0`/`1`, or as a string.
pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Bool(b) => Ok(b),
        other => parse_bool(&other.into_text()).map_err(D::Error::custom),
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().unwrap_or_default(),
        Value::String(s) => parse_value(&s).unwrap_or_default(),
        _ => 0,
    })
}

pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        other => scalar_text(other)
            .and_then(|text| parse_bool(&text).ok())
            .unwrap_or_default(),
    })
}
