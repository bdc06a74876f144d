//! Type tags and type-erased element streams.
//!
//! Stages are stored without their generic element type so that a lineage of
//! heterogeneous transforms can live in one list. This module provides the
//! pieces the runner needs to work with such erased data:
//! - [`ElemIter`]: the pull-based stream of elements one stage hands the next.
//! - [`Partition`]: an [`ElemIter`] with its element type erased.
//! - [`TypeTag`]: a runtime identifier for the element type of a source.
//! - [`SourceOps`]: opens a fresh stream over a source without knowing `T`.

use crate::error::Result;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

/// Elements flowing out of a stage, pulled one at a time.
///
/// An `Err` item aborts the terminal that is consuming the stream.
pub type ElemIter<T> = Box<dyn Iterator<Item = Result<T>>>;

/// An [`ElemIter`] carried between stages at runtime.
///
/// Every stage downcasts its input to the `ElemIter<T>` it expects and boxes
/// the stream it builds on top of it again.
pub type Partition = Box<dyn Any>;

/// A lightweight runtime type tag for explanations and assertions.
///
/// ```
/// use seqflow::type_token::TypeTag;
/// let tag = TypeTag::of::<u32>();
/// assert_eq!(tag.name, "u32");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag {
    /// Stable Rust type identifier.
    pub id: TypeId,
    /// Human-readable type name (best-effort).
    pub name: &'static str,
}

impl TypeTag {
    /// Construct a tag for `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// Type-erased access to the root of a lineage.
///
/// A source can be opened any number of times; each call yields an
/// independent stream and never mutates the underlying data.
pub trait SourceOps: Send + Sync {
    /// Number of elements, if known without iterating.
    fn len(&self) -> Option<usize>;

    /// Whether the source is known to hold no elements.
    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Open a fresh stream over the source as a [`Partition`].
    fn open(&self) -> Partition;
}

/// A shared `Vec<T>`; each stream clones elements as they are pulled.
struct VecSource<T>(Arc<Vec<T>>);

impl<T: Clone + Send + Sync + 'static> SourceOps for VecSource<T> {
    fn len(&self) -> Option<usize> {
        Some(self.0.len())
    }

    fn open(&self) -> Partition {
        let data = Arc::clone(&self.0);
        let it: ElemIter<T> = Box::new((0..data.len()).map(move |i| Ok(data[i].clone())));
        Box::new(it)
    }
}

/// The half-open integer range `start..end`, generated on demand.
struct RangeSource {
    start: i64,
    end: i64,
}

impl SourceOps for RangeSource {
    fn len(&self) -> Option<usize> {
        let n = self.end.saturating_sub(self.start).max(0);
        Some(usize::try_from(n).unwrap_or(usize::MAX))
    }

    fn open(&self) -> Partition {
        let it: ElemIter<i64> = Box::new((self.start..self.end).map(Ok));
        Box::new(it)
    }
}

/// Create a type-erased [`SourceOps`] over `data`.
///
/// ```
/// use seqflow::type_token::{ElemIter, vec_source};
///
/// let src = vec_source(vec![1i64, 2, 3]);
/// assert_eq!(src.len(), Some(3));
///
/// let stream = src.open().downcast::<ElemIter<i64>>().map(|b| *b);
/// let first = stream.ok().and_then(|mut it| it.next());
/// assert_eq!(first.transpose()?, Some(1));
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub fn vec_source<T: Clone + Send + Sync + 'static>(data: Vec<T>) -> Arc<dyn SourceOps> {
    Arc::new(VecSource(Arc::new(data)))
}

/// Create a type-erased [`SourceOps`] producing `start..end` lazily.
pub fn range_source(start: i64, end: i64) -> Arc<dyn SourceOps> {
    Arc::new(RangeSource { start, end })
}
