//! Text rendering for terminal results.
//!
//! Sequences produce plain in-memory values; this module turns the common
//! shapes into human-readable strings:
//!
//! - [`list`] -- `[a, b, c]`
//! - [`grouped`] -- `{k1=[a, b], k2=[c]}` for the output of `group_by`
//! - [`map_with`] -- `{k1=v1, k2=v2}` with a custom value formatter
//! - [`to_json`] -- pretty JSON for anything `Serialize` (feature `json`)
//!
//! `KeyedMap` and `SummaryStatistics` also implement `Display` directly.

use crate::keyed::KeyedMap;
use std::fmt::Display;

/// Render elements as `[a, b, c]`.
///
/// ```
/// assert_eq!(seqflow::render::list(&["Max", "Peter"]), "[Max, Peter]");
/// assert_eq!(seqflow::render::list::<i32>(&[]), "[]");
/// ```
pub fn list<T: Display>(items: &[T]) -> String {
    let body: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", body.join(", "))
}

/// Render a keyed map, formatting each value with `fmt_value`.
pub fn map_with<K, V, F>(map: &KeyedMap<K, V>, fmt_value: F) -> String
where
    K: Display,
    F: Fn(&V) -> String,
{
    let body: Vec<String> = map
        .iter()
        .map(|(k, v)| format!("{k}={}", fmt_value(v)))
        .collect();
    format!("{{{}}}", body.join(", "))
}

/// Render grouping output as `{k1=[a, b], k2=[c]}`.
pub fn grouped<K: Display, T: Display>(map: &KeyedMap<K, Vec<T>>) -> String {
    map_with(map, |v| list(v))
}

/// Pretty JSON rendering of any serializable result.
#[cfg(feature = "json")]
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    use anyhow::Context;
    serde_json::to_string_pretty(value)
        .with_context(|| format!("rendering {} as JSON", std::any::type_name::<T>()))
}
