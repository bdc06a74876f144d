//! # Seqflow
//!
//! **Lazy, composable sequence pipelines** over in-memory data. Seqflow lets
//! you chain transformations (map, filter, sort, slice) on a collection and
//! finish the chain with a terminal operation that produces a list, a single
//! value, a mapping or a formatted string.
//!
//! ## Key Features
//!
//! - **Deferred execution** - transforms only record a stage; nothing runs until a terminal
//! - **Element-at-a-time evaluation** - stages interleave per element and short-circuiting terminals stop early
//! - **Immutable handles** - every transform returns a new [`Sequence`]; sources are never mutated
//! - **Stable ordering** - sorts are stable and grouping keeps first-seen key order
//! - **Collectors** - supplier / accumulator / combiner / finisher folds via [`CombineFn`]
//! - **Built-in collectors** - Count, Sum, Min, Max, average, summary statistics, joining
//! - **Typed errors** - bad bounds and unmergeable keys surface as [`SeqError`]
//!
//! ## Quick Start
//!
//! ```
//! use seqflow::*;
//!
//! let codes = from_vec(vec!["a1", "a2", "b1", "c2", "c1"]);
//! let upper = codes
//!     .filter(|s| s.starts_with('c'))
//!     .map(|s| s.to_uppercase())
//!     .sorted()
//!     .collect()?;
//! assert_eq!(upper, vec!["C1", "C2"]);
//! # Ok::<_, seqflow::SeqError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequence
//!
//! A [`Sequence<T>`] is an ordered, lazily evaluated view over a source
//! collection. Create one with [`from_vec`], [`from_iter`], [`of`] or
//! [`range`]. Sequences are cheap to clone; a clone shares the recorded
//! stages and can be terminated independently.
//!
//! ### Transformations
//!
//! - [`map`](Sequence::map), [`filter`](Sequence::filter),
//!   [`flat_map`](Sequence::flat_map), [`inspect`](Sequence::inspect)
//! - [`sorted`](Sequence::sorted), [`sorted_by`](Sequence::sorted_by),
//!   [`sorted_by_key`](Sequence::sorted_by_key), [`distinct`](Sequence::distinct)
//! - [`skip`](Sequence::skip), [`limit`](Sequence::limit), [`slice`](Sequence::slice)
//! - [`combine_globally`](Sequence::combine_globally)
//!
//! ### Terminal operations
//!
//! - [`collect`](Sequence::collect), [`for_each`](Sequence::for_each),
//!   [`find_first`](Sequence::find_first), [`count`](Sequence::count)
//! - [`reduce`](Sequence::reduce), [`sum`](Sequence::sum),
//!   [`average`](Sequence::average), [`summary_statistics`](Sequence::summary_statistics)
//! - [`group_by`](Sequence::group_by), [`to_map`](Sequence::to_map),
//!   [`to_map_with_merge`](Sequence::to_map_with_merge)
//! - [`join`](Sequence::join), [`collect_with`](Sequence::collect_with),
//!   [`custom_collect`](Sequence::custom_collect)
//!
//! ## Group and Aggregate
//!
//! ```
//! use seqflow::*;
//! use seqflow::testing::sample_persons;
//!
//! let by_age = from_vec(sample_persons()).to_map_with_merge(
//!     |p| p.age,
//!     |p| p.name.clone(),
//!     |a, b| format!("{a};{b}"),
//! )?;
//! assert_eq!(by_age.to_string(), "{18=Max, 23=Peter;Pamela, 12=David}");
//!
//! let avg = from_vec(sample_persons()).average_by(|p| p.age)?;
//! assert_eq!(avg, 19.0);
//! # Ok::<_, seqflow::SeqError>(())
//! ```
//!
//! ## Architecture
//!
//! 1. Building a sequence appends nodes to an immutable [`Pipeline`] lineage
//! 2. The [`planner`] linearizes the lineage and fuses adjacent stateless stages
//! 3. The [`runner`] stacks the plan's operators into one element stream per terminal operation
//! 4. The terminal pulls elements one at a time through every stage and folds them into its result,
//!    stopping early when it can (`find_first`, `any_match`, `limit`)
//!
//! ## Feature Flags
//!
//! - `json` (default) - [`render::to_json`] via `serde_json`
//!
//! ## Module Overview
//!
//! - [`sequence`] - the `Sequence` handle and element-wise transforms
//! - [`combiners`] - the collector trait and built-in collectors
//! - [`keyed`] - insertion-ordered `KeyedMap`
//! - [`render`] - text rendering of results
//! - [`planner`] / [`runner`] - plan construction and execution
//! - [`testing`] - assertions and fixtures for tests

pub mod combiners;
pub mod error;
pub mod helpers;
pub mod keyed;
pub mod node;
pub mod node_id;
pub mod pipeline;
pub mod planner;
pub mod render;
pub mod runner;
pub mod sequence;
pub mod testing;
pub mod type_token;

// General re-exports
pub use combiners::{
    AverageF64, Collector, CombineFn, Count, Joining, Max, Min, StringJoiner, Sum,
    SummaryStatistics, SummaryStats, ToList,
};
pub use error::SeqError;
pub use helpers::*;
pub use keyed::KeyedMap;
pub use node_id::NodeId;
pub use pipeline::Pipeline;
pub use planner::{ExecutionExplanation, build_plan};
pub use runner::Runner;
pub use sequence::{SeqBound, Sequence};
pub use type_token::Partition;
