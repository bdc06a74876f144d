//! Pre-built datasets for tests and demos.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A person with a name and an age.
///
/// `Display` renders only the name, so lists of people read as
/// `[Max, Peter]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    #[must_use]
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(&self.name)
    }
}

/// Four people, two of whom share an age.
///
/// # Example
///
/// ```
/// use seqflow::testing::sample_persons;
///
/// let people = sample_persons();
/// assert_eq!(people.len(), 4);
/// assert_eq!(people[0].name, "Max");
/// ```
#[must_use]
pub fn sample_persons() -> Vec<Person> {
    vec![
        Person::new("Max", 18),
        Person::new("Peter", 23),
        Person::new("Pamela", 23),
        Person::new("David", 12),
    ]
}

/// Small unsorted integer list with one repeated value (sum 34).
#[must_use]
pub fn sample_ints() -> Vec<i32> {
    vec![5, 4, 7, 9, 2, 4, 3]
}

/// Short string codes: a letter followed by a digit.
#[must_use]
pub fn sample_strings() -> Vec<String> {
    ["a1", "a2", "b1", "c2", "c1"]
        .into_iter()
        .map(String::from)
        .collect()
}
