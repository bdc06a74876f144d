//! Generic terminal operations.
//!
//! Every method here consumes the [`Sequence`], opens its element stream
//! through the [`Runner`], and pulls elements until it has its result.
//! `find_first` and the `*_match` family stop at the first element that
//! decides the answer.

use crate::error::Result;
use crate::{Runner, SeqBound, Sequence};
use tracing::debug;

impl<T: SeqBound> Sequence<T> {
    /// Materialize every element, in order.
    pub fn collect(self) -> Result<Vec<T>> {
        Runner.run_collect::<T>(&self.pipeline)
    }

    /// Run `f` once per element, in order.
    pub fn for_each<F>(self, mut f: F) -> Result<()>
    where
        F: FnMut(T),
    {
        for t in self.stream()? {
            f(t?);
        }
        Ok(())
    }

    /// The first element, if any. Pulls at most one element.
    pub fn find_first(self) -> Result<Option<T>> {
        self.stream()?.next().transpose()
    }

    /// Number of elements.
    pub fn count(self) -> Result<usize> {
        let mut n = 0usize;
        for t in self.stream()? {
            t?;
            n += 1;
        }
        debug!(count = n, "count");
        Ok(n)
    }

    /// Whether any element satisfies `pred`; `false` when empty.
    pub fn any_match<F>(self, pred: F) -> Result<bool>
    where
        F: Fn(&T) -> bool,
    {
        for t in self.stream()? {
            if pred(&t?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every element satisfies `pred`; `true` when empty.
    pub fn all_match<F>(self, pred: F) -> Result<bool>
    where
        F: Fn(&T) -> bool,
    {
        Ok(!self.any_match(|t| !pred(t))?)
    }

    /// Whether no element satisfies `pred`; `true` when empty.
    pub fn none_match<F>(self, pred: F) -> Result<bool>
    where
        F: Fn(&T) -> bool,
    {
        Ok(!self.any_match(pred)?)
    }

    /// Left fold starting from `identity`.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let product = from_vec(vec![1, 2, 3, 4]).reduce(1, |a, b| a * b)?;
    /// assert_eq!(product, 24);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn reduce<F>(self, identity: T, f: F) -> Result<T>
    where
        F: Fn(T, T) -> T,
    {
        self.stream()?.try_fold(identity, |acc, t| Ok(f(acc, t?)))
    }

    /// Left fold seeded with the first element; `None` when empty.
    pub fn reduce_first<F>(self, f: F) -> Result<Option<T>>
    where
        F: Fn(T, T) -> T,
    {
        let mut acc: Option<T> = None;
        for t in self.stream()? {
            let t = t?;
            acc = Some(match acc {
                Some(a) => f(a, t),
                None => t,
            });
        }
        Ok(acc)
    }

    /// Smallest element under `cmp`; the earliest wins ties.
    pub fn min_by<F>(self, cmp: F) -> Result<Option<T>>
    where
        F: Fn(&T, &T) -> std::cmp::Ordering,
    {
        // Replace only on a strictly smaller element.
        self.reduce_first(|a, b| if cmp(&b, &a).is_lt() { b } else { a })
    }

    /// Largest element under `cmp`; the earliest wins ties, as with
    /// [`Max`](crate::combiners::Max).
    pub fn max_by<F>(self, cmp: F) -> Result<Option<T>>
    where
        F: Fn(&T, &T) -> std::cmp::Ordering,
    {
        self.min_by(move |a, b| cmp(b, a))
    }
}
