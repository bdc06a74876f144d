//! Ordering and positional operators.
//!
//! - [`Sequence::sorted`], [`Sequence::sorted_by`], [`Sequence::sorted_by_key`]
//!   -- stable sorts; equal elements keep their relative input order.
//! - [`Sequence::distinct`] -- drop repeats, keeping first occurrences.
//! - [`Sequence::skip`], [`Sequence::limit`], [`Sequence::slice`] -- positional
//!   windows. Negative counts are rejected with
//!   [`SeqError::InvalidArgument`] when the operator is added.

use crate::error::{Result, SeqError, non_negative};
use crate::node::{DynOp, barrier, downcast_iter, erase};
use crate::type_token::{ElemIter, Partition};
use crate::{SeqBound, Sequence};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

struct SortOp<T, C>(Arc<C>, PhantomData<T>);
impl<T, C> DynOp for SortOp<T, C>
where
    T: SeqBound,
    C: Send + Sync + Fn(&T, &T) -> Ordering + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<T>(input, "sort")?;
        let cmp = Arc::clone(&self.0);
        Ok(erase(barrier(it, move |mut v: Vec<T>| {
            // `sort_by` is stable.
            v.sort_by(|a, b| cmp(a, b));
            v
        })))
    }

    fn name(&self) -> &'static str {
        "sort"
    }

    fn is_barrier(&self) -> bool {
        true
    }
}

struct DistinctOp<T>(PhantomData<T>);
impl<T> DynOp for DistinctOp<T>
where
    T: SeqBound + Eq + Hash,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<T>(input, "distinct")?;
        let mut seen: HashSet<T> = HashSet::new();
        Ok(erase::<T>(Box::new(it.filter(move |r| match r {
            Ok(t) => seen.insert(t.clone()),
            Err(_) => true,
        }))))
    }

    fn name(&self) -> &'static str {
        "distinct"
    }
}

struct SkipOp<T>(usize, PhantomData<T>);
impl<T: SeqBound> DynOp for SkipOp<T> {
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<T>(input, "skip")?;
        let mut remaining = self.0;
        // Errors are never skipped.
        Ok(erase::<T>(Box::new(it.filter(move |r| {
            if r.is_err() || remaining == 0 {
                return true;
            }
            remaining -= 1;
            false
        }))))
    }

    fn name(&self) -> &'static str {
        "skip"
    }
}

struct LimitOp<T>(usize, PhantomData<T>);
impl<T: SeqBound> DynOp for LimitOp<T> {
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<T>(input, "limit")?;
        Ok(erase::<T>(Box::new(it.take(self.0))))
    }

    fn name(&self) -> &'static str {
        "limit"
    }
}

struct SliceOp<T> {
    start: usize,
    end: usize,
    _t: PhantomData<T>,
}
impl<T: SeqBound> DynOp for SliceOp<T> {
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<T>(input, "slice")?;
        Ok(erase::<T>(Box::new(SliceIter {
            inner: it,
            pos: 0,
            start: self.start,
            end: self.end,
            done: false,
        })))
    }

    fn name(&self) -> &'static str {
        "slice"
    }
}

/// Yields positions `start..end` of `inner`, failing if `inner` ends first.
struct SliceIter<T> {
    inner: ElemIter<T>,
    pos: usize,
    start: usize,
    end: usize,
    done: bool,
}

impl<T> Iterator for SliceIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }
        while self.pos < self.end {
            match self.inner.next() {
                Some(Ok(t)) => {
                    self.pos += 1;
                    if self.pos > self.start {
                        return Some(Ok(t));
                    }
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return Some(Err(SeqError::invalid_argument(
                        "slice",
                        format!("end {} exceeds sequence length {}", self.end, self.pos),
                    )));
                }
            }
        }
        self.done = true;
        None
    }
}

impl<T: SeqBound> Sequence<T> {
    /// Stable sort by `cmp`.
    pub fn sorted_by<C>(self, cmp: C) -> Sequence<T>
    where
        C: 'static + Send + Sync + Fn(&T, &T) -> Ordering,
    {
        self.chain(Arc::new(SortOp::<T, C>(Arc::new(cmp), PhantomData)))
    }

    /// Stable sort by the key `f` extracts.
    pub fn sorted_by_key<K, F>(self, f: F) -> Sequence<T>
    where
        K: Ord,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        self.sorted_by(move |a, b| f(a).cmp(&f(b)))
    }

    /// Drop the first `n` elements.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// assert_eq!(from_vec(vec![5, 4, 7]).skip(1)?.collect()?, vec![4, 7]);
    /// assert!(from_vec(vec![5, 4, 7]).skip(-1).is_err());
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn skip(self, n: i64) -> Result<Sequence<T>> {
        let n = non_negative("skip", "n", n)?;
        Ok(self.chain(Arc::new(SkipOp::<T>(n, PhantomData))))
    }

    /// Keep at most the first `n` elements.
    pub fn limit(self, n: i64) -> Result<Sequence<T>> {
        let n = non_negative("limit", "n", n)?;
        Ok(self.chain(Arc::new(LimitOp::<T>(n, PhantomData))))
    }

    /// Elements at positions `start..end`.
    ///
    /// `start < 0` or `end < start` fail immediately. Whether `end` lies
    /// within the sequence can only be known once it is evaluated: the
    /// terminal fails when the sequence runs out before position `end`.
    /// A terminal that stops pulling earlier (a later `limit`, `find_first`)
    /// never reaches that point and does not fail.
    pub fn slice(self, start: i64, end: i64) -> Result<Sequence<T>> {
        let start = non_negative("slice", "start", start)?;
        let end = non_negative("slice", "end", end)?;
        if end < start {
            return Err(SeqError::invalid_argument(
                "slice",
                format!("start {start} is greater than end {end}"),
            ));
        }
        Ok(self.chain(Arc::new(SliceOp::<T> {
            start,
            end,
            _t: PhantomData,
        })))
    }
}

impl<T: SeqBound + Ord> Sequence<T> {
    /// Stable sort by natural order.
    pub fn sorted(self) -> Sequence<T> {
        self.sorted_by(|a: &T, b: &T| a.cmp(b))
    }

    /// Smallest element; the earliest wins ties.
    pub fn min(self) -> Result<Option<T>> {
        self.collect_with(crate::combiners::Min::<T>::new())
    }

    /// Largest element; the earliest wins ties.
    pub fn max(self) -> Result<Option<T>> {
        self.collect_with(crate::combiners::Max::<T>::new())
    }

    /// Materialize and sort by natural order.
    pub fn collect_sorted(self) -> Result<Vec<T>> {
        let mut v = self.collect()?;
        v.sort();
        Ok(v)
    }
}

impl<T: SeqBound + Eq + Hash> Sequence<T> {
    /// Drop repeated elements, keeping each first occurrence in place.
    pub fn distinct(self) -> Sequence<T> {
        self.chain(Arc::new(DistinctOp::<T>(PhantomData)))
    }
}
