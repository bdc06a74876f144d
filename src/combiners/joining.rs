//! String joining: [`StringJoiner`] and the [`Joining`] collector.

use super::CombineFn;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Builds `prefix + e1 + sep + e2 + ... + suffix`.
///
/// With no elements added the result is `prefix + suffix`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringJoiner {
    separator: String,
    prefix: String,
    suffix: String,
    /// Joined elements without prefix/suffix; `None` until the first `add`.
    body: Option<String>,
}

impl StringJoiner {
    pub fn new(separator: &str) -> Self {
        Self::with_affixes(separator, "", "")
    }

    pub fn with_affixes(separator: &str, prefix: &str, suffix: &str) -> Self {
        Self {
            separator: separator.to_owned(),
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
            body: None,
        }
    }

    /// Append one element.
    pub fn add(&mut self, element: &str) {
        match &mut self.body {
            Some(body) => {
                body.push_str(&self.separator);
                body.push_str(element);
            }
            None => self.body = Some(element.to_owned()),
        }
    }

    /// Append the elements of `other` (without its prefix or suffix) as one
    /// more element of `self`. An empty `other` leaves `self` unchanged.
    pub fn merge(&mut self, other: &StringJoiner) {
        if let Some(rest) = &other.body {
            self.add(rest);
        }
    }

    /// Length of the rendered string.
    pub fn len(&self) -> usize {
        self.prefix.len() + self.body.as_ref().map_or(0, String::len) + self.suffix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for StringJoiner {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(&self.prefix)?;
        if let Some(body) = &self.body {
            f.write_str(body)?;
        }
        f.write_str(&self.suffix)
    }
}

/// Collector joining the `Display` form of each value.
#[derive(Clone, Debug, Default)]
pub struct Joining {
    separator: String,
    prefix: String,
    suffix: String,
}

impl Joining {
    pub fn new(separator: &str) -> Self {
        Self::with_affixes(separator, "", "")
    }

    pub fn with_affixes(separator: &str, prefix: &str, suffix: &str) -> Self {
        Self {
            separator: separator.to_owned(),
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        }
    }
}

impl<V: Display> CombineFn<V, StringJoiner, String> for Joining {
    fn create(&self) -> StringJoiner {
        StringJoiner::with_affixes(&self.separator, &self.prefix, &self.suffix)
    }

    fn add_input(&self, acc: &mut StringJoiner, v: V) {
        acc.add(&v.to_string());
    }

    fn merge(&self, acc: &mut StringJoiner, other: StringJoiner) {
        acc.merge(&other);
    }

    fn finish(&self, acc: StringJoiner) -> String {
        acc.to_string()
    }
}
