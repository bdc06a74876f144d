use crate::combiners::Joining;
use crate::error::Result;
use crate::{SeqBound, Sequence};
use std::fmt::Display;

impl<T: SeqBound + Display> Sequence<T> {
    /// Concatenate the `Display` form of every element.
    ///
    /// Elements are separated by `separator` and the whole is wrapped in
    /// `prefix` and `suffix`. An empty sequence yields `prefix + suffix`.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let s = from_vec(vec!["Max", "Peter"]).join(" and ", "In Germany ", " are of legal age.")?;
    /// assert_eq!(s, "In Germany Max and Peter are of legal age.");
    ///
    /// let empty = from_vec(Vec::<String>::new()).join(", ", "[", "]")?;
    /// assert_eq!(empty, "[]");
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn join(self, separator: &str, prefix: &str, suffix: &str) -> Result<String> {
        self.collect_with(Joining::with_affixes(separator, prefix, suffix))
    }
}
