//! Testing utilities for sequence pipelines.
//!
//! - **Assertions**: compare terminal results with expected values
//!   ([`assert_collections_equal`], [`assert_same_multiset`], [`assert_all`],
//!   [`assert_none`], [`assert_keyed_equal`]).
//! - **Fixtures**: small datasets ([`sample_persons`], [`sample_ints`],
//!   [`sample_strings`]) and the [`Person`] record they use.
//!
//! # Quick Start
//!
//! ```
//! use seqflow::*;
//! use seqflow::testing::*;
//!
//! let adults = from_vec(sample_persons())
//!     .filter(|p| p.age >= 18)
//!     .map(|p| p.name.clone())
//!     .collect()?;
//! assert_collections_equal(&adults, &["Max".to_string(), "Peter".into(), "Pamela".into()]);
//! # Ok::<_, seqflow::SeqError>(())
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
