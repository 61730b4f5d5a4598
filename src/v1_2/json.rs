/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Tolerant field extraction from the legacy API's JSON replies.
//!
//! Every accessor returns `None` for a missing key, an explicit JSON null,
//! or an incompatible value. Only parsing the reply text itself can fail,
//! and that happens before these are ever called.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// A parsed JSON object as returned by the legacy API.
pub type JsonObject = Map<String, Value>;

// The legacy API renders timestamps as e.g. "2009-03-01 14:35:12".
pub(crate) const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Extracts a string field. The service uses `""` for unset, so empty
/// strings are treated as absent.
pub fn string_field(obj: &JsonObject, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Extracts an unsigned integer field, accepting string-encoded decimals.
pub fn u64_field(obj: &JsonObject, key: &str) -> Option<u64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Extracts a signed integer field, accepting string-encoded decimals.
pub fn i64_field(obj: &JsonObject, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Extracts a float field, accepting string-encoded decimals.
pub fn f64_field(obj: &JsonObject, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Extracts a boolean field.
///
/// The service encodes booleans as `0`/`1` (sometimes as the strings
/// `"0"`/`"1"`); native JSON booleans are accepted as well in case any
/// field uses them.
pub fn bool_field(obj: &JsonObject, key: &str) -> Option<bool> {
    match obj.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "0" | "false" => Some(false),
            "1" | "true" => Some(true),
            _ => None,
        },
        _ => None,
    }
}

/// Extracts a timestamp field in the service's `%Y-%m-%d %H:%M:%S` format.
pub fn date_time_field(obj: &JsonObject, key: &str) -> Option<NaiveDateTime> {
    let s = string_field(obj, key)?;
    NaiveDateTime::parse_from_str(&s, TIME_FORMAT).ok()
}

/// Extracts a nested object field.
pub fn object_field<'a>(obj: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    obj.get(key)?.as_object()
}

/// Extracts an array field.
pub fn array_field<'a>(obj: &'a JsonObject, key: &str) -> Option<&'a [Value]> {
    obj.get(key)?.as_array().map(Vec::as_slice)
}

/// Maps an array of objects through `f`. An absent or non-array field
/// yields an empty `Vec`, never `None`; non-object elements are skipped.
pub fn object_list<T>(obj: &JsonObject, key: &str, f: impl Fn(&JsonObject) -> T) -> Vec<T> {
    array_field(obj, key)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_object)
        .map(f)
        .collect()
}

// Write-side counterparts used by the entity `to_json` methods. Absent
// fields are omitted entirely; booleans render as 0/1 like the service does.

pub(crate) fn put_string(obj: &mut JsonObject, key: &str, v: &Option<String>) {
    if let Some(v) = v {
        obj.insert(key.to_string(), Value::String(v.clone()));
    }
}

pub(crate) fn put_u64(obj: &mut JsonObject, key: &str, v: Option<u64>) {
    if let Some(v) = v {
        obj.insert(key.to_string(), Value::from(v));
    }
}

pub(crate) fn put_i64(obj: &mut JsonObject, key: &str, v: Option<i64>) {
    if let Some(v) = v {
        obj.insert(key.to_string(), Value::from(v));
    }
}

pub(crate) fn put_f64(obj: &mut JsonObject, key: &str, v: Option<f64>) {
    if let Some(v) = v {
        obj.insert(key.to_string(), Value::from(v));
    }
}

pub(crate) fn put_bool(obj: &mut JsonObject, key: &str, v: Option<bool>) {
    if let Some(v) = v {
        obj.insert(key.to_string(), Value::from(u8::from(v)));
    }
}

pub(crate) fn put_date_time(obj: &mut JsonObject, key: &str, v: Option<NaiveDateTime>) {
    if let Some(v) = v {
        obj.insert(
            key.to_string(),
            Value::String(v.format(TIME_FORMAT).to_string()),
        );
    }
}
