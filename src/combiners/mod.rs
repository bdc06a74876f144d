//! Collectors: reusable mutable-accumulation folds.
//!
//! A collector is described by [`CombineFn`], four steps that map onto the
//! classic supplier / accumulator / combiner / finisher tuple:
//!
//! | step        | `CombineFn` method | role                                   |
//! |-------------|--------------------|----------------------------------------|
//! | supplier    | `create`           | fresh, empty accumulator               |
//! | accumulator | `add_input`        | fold one element into the accumulator  |
//! | combiner    | `merge`            | merge two accumulators                 |
//! | finisher    | `finish`           | turn the accumulator into the result   |
//!
//! Sequences run collectors on a single thread, so `merge` is never needed to
//! produce a result; it is part of the contract so accumulators built
//! separately can still be combined.
//!
//! Built-ins:
//! - [`Count`], [`Sum<T>`], [`Min<T>`], [`Max<T>`], [`ToList`]
//! - [`AverageF64`] and [`SummaryStats`] (count, sum, min, max, average in one pass)
//! - [`Joining`] backed by [`StringJoiner`]
//!
//! Ad-hoc collectors are built from closures with [`Collector::of`].
//!
//! # Examples
//! ```
//! use seqflow::*;
//! use seqflow::combiners::{Collector, StringJoiner};
//!
//! let names = from_vec(vec!["Max".to_string(), "Peter".to_string()]);
//! let joined = names.collect_with(Collector::of(
//!     || StringJoiner::new(" | "),
//!     |j: &mut StringJoiner, s: String| j.add(&s.to_uppercase()),
//!     |j: &mut StringJoiner, other: StringJoiner| j.merge(&other),
//!     |j: StringJoiner| j.to_string(),
//! ))?;
//! assert_eq!(joined, "MAX | PETER");
//! # Ok::<_, seqflow::SeqError>(())
//! ```

mod basic;
mod joining;
mod statistical;

pub use basic::{Count, Max, Min, Sum, ToList};
pub use joining::{Joining, StringJoiner};
pub use statistical::{AverageF64, SummaryStatistics, SummaryStats};

use std::sync::Arc;

/// A mutable-accumulation fold from values `V` through accumulator `A` to output `O`.
pub trait CombineFn<V, A, O>: Send + Sync + 'static {
    /// Create a fresh accumulator (supplier).
    fn create(&self) -> A;
    /// Fold one value into `acc` (accumulator).
    fn add_input(&self, acc: &mut A, v: V);
    /// Merge `other` into `acc` (combiner).
    fn merge(&self, acc: &mut A, other: A);
    /// Produce the final output (finisher).
    fn finish(&self, acc: A) -> O;
}

type Supplier<A> = Arc<dyn Fn() -> A + Send + Sync>;
type Accumulator<A, V> = Arc<dyn Fn(&mut A, V) + Send + Sync>;
type Combiner<A> = Arc<dyn Fn(&mut A, A) + Send + Sync>;
type Finisher<A, O> = Arc<dyn Fn(A) -> O + Send + Sync>;

/// A collector assembled from four closures.
pub struct Collector<V, A, O> {
    supplier: Supplier<A>,
    accumulator: Accumulator<A, V>,
    combiner: Combiner<A>,
    finisher: Finisher<A, O>,
}

impl<V, A, O> Clone for Collector<V, A, O> {
    fn clone(&self) -> Self {
        Self {
            supplier: Arc::clone(&self.supplier),
            accumulator: Arc::clone(&self.accumulator),
            combiner: Arc::clone(&self.combiner),
            finisher: Arc::clone(&self.finisher),
        }
    }
}

impl<V, A, O> Collector<V, A, O> {
    /// Build a collector from a supplier, accumulator, combiner and finisher.
    pub fn of<S, Acc, C, F>(supplier: S, accumulator: Acc, combiner: C, finisher: F) -> Self
    where
        S: Fn() -> A + Send + Sync + 'static,
        Acc: Fn(&mut A, V) + Send + Sync + 'static,
        C: Fn(&mut A, A) + Send + Sync + 'static,
        F: Fn(A) -> O + Send + Sync + 'static,
    {
        Self {
            supplier: Arc::new(supplier),
            accumulator: Arc::new(accumulator),
            combiner: Arc::new(combiner),
            finisher: Arc::new(finisher),
        }
    }
}

impl<V, A, O> CombineFn<V, A, O> for Collector<V, A, O>
where
    V: 'static,
    A: 'static,
    O: 'static,
{
    fn create(&self) -> A {
        (self.supplier)()
    }

    fn add_input(&self, acc: &mut A, v: V) {
        (self.accumulator)(acc, v);
    }

    fn merge(&self, acc: &mut A, other: A) {
        (self.combiner)(acc, other);
    }

    fn finish(&self, acc: A) -> O {
        (self.finisher)(acc)
    }
}
