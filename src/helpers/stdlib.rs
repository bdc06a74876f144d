//! Constructors that turn native Rust data into a [`Sequence`].
//!
//! ### Overview
//! - [`from_vec`] -- wrap a `Vec<T>` as a source.
//! - [`from_iter`] -- collect any `IntoIterator<Item = T>` into a source.
//! - [`of`] -- the same, for a fixed list of literal elements.
//! - [`range`] -- the half-open integer range `start..end`.
//!
//! Each one inserts a [`Node::Source`] at the head of a new lineage. The
//! source data is shared, never mutated: every terminal operation opens its
//! own stream over it and clones elements as they are pulled. [`range`]
//! stores only its bounds and generates elements on demand.
//!
//! ### Example
//! ```
//! use seqflow::*;
//!
//! let squares = range(1, 6).map(|n| n * n);
//! assert_eq!(squares.collect()?, vec![1, 4, 9, 16, 25]);
//!
//! let words = of(["a1", "a2", "a3"]);
//! assert_eq!(words.count()?, 3);
//! # Ok::<_, seqflow::SeqError>(())
//! ```

use crate::node::Node;
use crate::pipeline::Pipeline;
use crate::type_token::{TypeTag, range_source, vec_source};
use crate::{SeqBound, Sequence};

/// Create a [`Sequence<T>`] from an existing [`Vec<T>`].
///
/// ```
/// use seqflow::*;
///
/// let seq = from_vec(vec![10, 20, 30]);
/// assert_eq!(seq.collect()?, vec![10, 20, 30]);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub fn from_vec<T>(data: Vec<T>) -> Sequence<T>
where
    T: SeqBound,
{
    Sequence::from_pipeline(Pipeline::from_source(Node::Source {
        source: vec_source(data),
        elem_tag: TypeTag::of::<T>(),
    }))
}

/// Create a [`Sequence<T>`] from anything implementing [`IntoIterator`].
///
/// The items are gathered into a `Vec` up front so that every terminal can
/// replay them.
pub fn from_iter<T, I>(iter: I) -> Sequence<T>
where
    T: SeqBound,
    I: IntoIterator<Item = T>,
{
    from_vec(iter.into_iter().collect::<Vec<T>>())
}

/// Create a [`Sequence<T>`] from a fixed set of elements.
pub fn of<T, const N: usize>(items: [T; N]) -> Sequence<T>
where
    T: SeqBound,
{
    from_vec(Vec::from(items))
}

/// Integers `start, start + 1, ..., end - 1`. Empty when `start >= end`.
///
/// Nothing is allocated up front, so very wide ranges are fine as long as
/// the terminal stops early.
///
/// ```
/// use seqflow::*;
///
/// let first = range(0, i64::MAX).filter(|n| n % 7 == 3).limit(2)?.collect()?;
/// assert_eq!(first, vec![3, 10]);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub fn range(start: i64, end: i64) -> Sequence<i64> {
    Sequence::from_pipeline(Pipeline::from_source(Node::Source {
        source: range_source(start, end),
        elem_tag: TypeTag::of::<i64>(),
    }))
}

impl<T: SeqBound> From<Vec<T>> for Sequence<T> {
    fn from(data: Vec<T>) -> Self {
        from_vec(data)
    }
}

impl<T: SeqBound> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_iter(iter)
    }
}
