use crate::error::{Result, SeqError};
use crate::type_token::{ElemIter, Partition, SourceOps, TypeTag};
use std::sync::Arc;

/// A type-erased stage.
///
/// `apply` wraps the stream produced by the previous stage in a new stream;
/// it does not pull any element itself. Elements move through the whole
/// chain one at a time once a terminal operation starts pulling. A stage may
/// reject the data it sees (for instance a slice whose end lies past the
/// last element) by yielding an `Err` item, which aborts that terminal.
pub trait DynOp: Send + Sync {
    fn apply(&self, input: Partition) -> Result<Partition>;

    /// Short operator name used in logs and plan explanations.
    fn name(&self) -> &'static str;

    /// Whether the stage has to see every element before emitting any.
    fn is_barrier(&self) -> bool {
        false
    }
}

#[derive(Clone)]
pub enum Node {
    /// Root of a lineage: a reopenable source of elements.
    Source {
        source: Arc<dyn SourceOps>,
        elem_tag: TypeTag,
    },

    /// One or more transforms applied in order.
    Stateless(Vec<Arc<dyn DynOp>>),
}

impl Node {
    pub(crate) fn op(op: Arc<dyn DynOp>) -> Self {
        Node::Stateless(vec![op])
    }
}

/// Downcast a partition to the element stream a stage expects.
pub(crate) fn downcast_iter<T: 'static>(input: Partition, stage: &'static str) -> Result<ElemIter<T>> {
    input
        .downcast::<ElemIter<T>>()
        .map(|it| *it)
        .map_err(|_| SeqError::type_mismatch::<T>(stage))
}

/// Box a typed stream back into a [`Partition`].
pub(crate) fn erase<T: 'static>(it: ElemIter<T>) -> Partition {
    Box::new(it)
}

/// A stream that drains `input` on its first pull, hands the buffered
/// elements to `finish` and then yields what it returns.
///
/// Used by stages that must see every element before emitting any. An error
/// pulled from `input` is passed through and ends the stream.
pub(crate) fn barrier<T, O, F>(input: ElemIter<T>, finish: F) -> ElemIter<O>
where
    T: 'static,
    O: 'static,
    F: FnOnce(Vec<T>) -> Vec<O> + 'static,
{
    let drained = std::iter::once_with(move || input.collect::<Result<Vec<T>>>().map(finish));
    Box::new(drained.flat_map(|r| -> ElemIter<O> {
        match r {
            Ok(v) => Box::new(v.into_iter().map(Ok)),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }))
}
