//! Global (non-keyed) collectors.
//!
//! - [`Sequence::collect_with`] folds every element through a [`CombineFn`]
//!   and returns its finished output.
//! - [`Sequence::custom_collect`] does the same for a collector given as four
//!   closures (supplier, accumulator, combiner, finisher).
//! - [`Sequence::combine_globally`] is the lazy counterpart: it appends a
//!   stage that reduces the sequence to a single element, so further stages
//!   can follow.
//! - Numeric shorthands: [`sum`](Sequence::sum), [`average`](Sequence::average),
//!   [`summary_statistics`](Sequence::summary_statistics) and their `_by`
//!   variants that extract the number from each element first.

use std::marker::PhantomData;
use std::ops::Add;
use std::sync::Arc;

use crate::combiners::{AverageF64, CombineFn, Collector, Sum, SummaryStatistics, SummaryStats};
use crate::error::Result;
use crate::node::{DynOp, downcast_iter, erase};
use crate::type_token::{ElemIter, Partition};
use crate::{SeqBound, Sequence};

struct CombineGlobalOp<T, A, O, C> {
    comb: Arc<C>,
    _t: PhantomData<fn(T, A) -> O>,
}

impl<T, A, O, C> DynOp for CombineGlobalOp<T, A, O, C>
where
    T: SeqBound,
    A: 'static,
    O: SeqBound,
    C: CombineFn<T, A, O>,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let rows = downcast_iter::<T>(input, "combine_globally")?;
        let comb = Arc::clone(&self.comb);
        let out: ElemIter<O> = Box::new(std::iter::once_with(move || {
            fold::<T, A, O, C>(comb.as_ref(), rows)
        }));
        Ok(erase(out))
    }

    fn name(&self) -> &'static str {
        "combine_globally"
    }

    fn is_barrier(&self) -> bool {
        true
    }
}

/// Drain `values` through `comb`, stopping at the first error.
fn fold<V, A, O, C>(comb: &C, values: impl IntoIterator<Item = Result<V>>) -> Result<O>
where
    C: CombineFn<V, A, O> + ?Sized,
{
    let mut acc = comb.create();
    for v in values {
        comb.add_input(&mut acc, v?);
    }
    Ok(comb.finish(acc))
}

impl<T: SeqBound> Sequence<T> {
    /// Reduce the whole sequence to one element using `comb`.
    ///
    /// Produces exactly one element even for empty input (`finish(create())`).
    ///
    /// ```
    /// use seqflow::*;
    /// use seqflow::combiners::Sum;
    ///
    /// let total = from_vec(vec![1u64, 2, 3, 4])
    ///     .combine_globally(Sum::<u64>::default())
    ///     .map(|s| s * 10)
    ///     .collect()?;
    /// assert_eq!(total, vec![100u64]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn combine_globally<C, A, O>(self, comb: C) -> Sequence<O>
    where
        C: CombineFn<T, A, O>,
        A: 'static,
        O: SeqBound,
    {
        self.chain(Arc::new(CombineGlobalOp::<T, A, O, C> {
            comb: Arc::new(comb),
            _t: PhantomData,
        }))
    }

    /// Terminal: fold every element through `comb`.
    pub fn collect_with<C, A, O>(self, comb: C) -> Result<O>
    where
        C: CombineFn<T, A, O>,
    {
        fold(&comb, self.stream()?)
    }

    /// Terminal: fold with a collector given as closures.
    ///
    /// `supplier` creates the container, `accumulator` adds one element,
    /// `combiner` merges two containers and `finisher` produces the result.
    pub fn custom_collect<A, O, S, Acc, C, F>(
        self,
        supplier: S,
        accumulator: Acc,
        combiner: C,
        finisher: F,
    ) -> Result<O>
    where
        A: 'static,
        O: 'static,
        S: Fn() -> A + Send + Sync + 'static,
        Acc: Fn(&mut A, T) + Send + Sync + 'static,
        C: Fn(&mut A, A) + Send + Sync + 'static,
        F: Fn(A) -> O + Send + Sync + 'static,
    {
        self.collect_with(Collector::of(supplier, accumulator, combiner, finisher))
    }

    /// Mean of `f(element)`; `0.0` when empty.
    pub fn average_by<V, F>(self, f: F) -> Result<f64>
    where
        V: Into<f64>,
        F: Fn(&T) -> V,
    {
        fold(&AverageF64, self.stream()?.map(|r| r.map(|t| f(&t))))
    }

    /// Count, sum, min, max and average of `f(element)` in one pass.
    pub fn summarize_by<V, F>(self, f: F) -> Result<SummaryStatistics>
    where
        V: Into<i64>,
        F: Fn(&T) -> V,
    {
        fold(&SummaryStats, self.stream()?.map(|r| r.map(|t| f(&t))))
    }
}

impl<T: SeqBound + Add<Output = T> + Default> Sequence<T> {
    /// Sum of all elements; `T::default()` when empty.
    pub fn sum(self) -> Result<T> {
        self.collect_with(Sum::<T>::new())
    }
}

impl<T: SeqBound + Into<f64>> Sequence<T> {
    /// Mean of all elements; `0.0` when empty.
    pub fn average(self) -> Result<f64> {
        self.collect_with(AverageF64)
    }
}

impl<T: SeqBound + Into<i64>> Sequence<T> {
    /// Count, sum, min, max and average of all elements in one pass.
    pub fn summary_statistics(self) -> Result<SummaryStatistics> {
        self.collect_with(SummaryStats)
    }
}
