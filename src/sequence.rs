use crate::error::Result;
use crate::node::{DynOp, Node, downcast_iter, erase};
use crate::node_id::NodeId;
use crate::pipeline::Pipeline;
use crate::planner::{ExecutionExplanation, build_plan};
use crate::runner::Runner;
use crate::type_token::{ElemIter, Partition};
use std::marker::PhantomData;
use std::sync::Arc;

/// Bound shared by every element type that can flow through a [`Sequence`].
pub trait SeqBound: 'static + Send + Sync + Clone {}
impl<T> SeqBound for T where T: 'static + Send + Sync + Clone {}

/// An ordered, lazily evaluated view over a source collection.
///
/// Transforms return a new `Sequence` and only record a stage; nothing runs
/// until a terminal operation (such as [`collect`](Sequence::collect) or
/// [`sum`](Sequence::sum)) is called. Each terminal evaluates the lineage
/// at most once and never mutates the source, so a cloned `Sequence` can be
/// terminated again independently.
///
/// Evaluation pulls one element at a time through every stage, so side
/// effects of successive stages interleave in source order, and a terminal
/// that needs only a prefix stops pulling once it has it.
#[derive(Clone)]
pub struct Sequence<T> {
    pub(crate) pipeline: Pipeline,
    _t: PhantomData<T>,
}

impl<T: SeqBound> Sequence<T> {
    pub(crate) fn from_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            _t: PhantomData,
        }
    }

    /// Append a single operator, producing a sequence of `O`.
    pub(crate) fn chain<O: SeqBound>(&self, op: Arc<dyn DynOp>) -> Sequence<O> {
        Sequence::from_pipeline(self.pipeline.then(Node::op(op)))
    }

    /// Open the element stream a terminal pulls from.
    pub(crate) fn stream(&self) -> Result<ElemIter<T>> {
        Runner.run_iter::<T>(&self.pipeline)
    }

    /// Id of the stage this sequence ends at.
    pub fn node_id(&self) -> NodeId {
        self.pipeline.terminal()
    }

    /// The lineage backing this sequence.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Describe the plan a terminal would run, without running it.
    pub fn explain(&self) -> Result<ExecutionExplanation> {
        Ok(build_plan(&self.pipeline)?.explain())
    }
}

/// ---- Stateless DynOps ----
/// Each one wraps the incoming stream lazily and passes `Err` items through.
pub(crate) struct MapOp<I, O, F>(pub(crate) Arc<F>, pub(crate) PhantomData<(I, O)>);
impl<I, O, F> DynOp for MapOp<I, O, F>
where
    I: SeqBound,
    O: SeqBound,
    F: Send + Sync + Fn(&I) -> O + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<I>(input, "map")?;
        let f = Arc::clone(&self.0);
        Ok(erase::<O>(Box::new(it.map(move |r| r.map(|i| f(&i))))))
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

pub(crate) struct FilterOp<T, P>(pub(crate) Arc<P>, pub(crate) PhantomData<T>);
impl<T, P> DynOp for FilterOp<T, P>
where
    T: SeqBound,
    P: Send + Sync + Fn(&T) -> bool + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<T>(input, "filter")?;
        let pred = Arc::clone(&self.0);
        Ok(erase::<T>(Box::new(
            it.filter(move |r| r.as_ref().map_or(true, |t| pred(t))),
        )))
    }

    fn name(&self) -> &'static str {
        "filter"
    }
}

pub(crate) struct FlatMapOp<I, O, F>(pub(crate) Arc<F>, pub(crate) PhantomData<(I, O)>);
impl<I, O, F> DynOp for FlatMapOp<I, O, F>
where
    I: SeqBound,
    O: SeqBound,
    F: Send + Sync + Fn(&I) -> Vec<O> + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<I>(input, "flat_map")?;
        let f = Arc::clone(&self.0);
        let out: ElemIter<O> = Box::new(it.flat_map(move |r| -> ElemIter<O> {
            match r {
                Ok(i) => Box::new(f(&i).into_iter().map(Ok)),
                Err(e) => Box::new(std::iter::once(Err(e))),
            }
        }));
        Ok(erase(out))
    }

    fn name(&self) -> &'static str {
        "flat_map"
    }
}

pub(crate) struct InspectOp<T, F>(pub(crate) Arc<F>, pub(crate) PhantomData<T>);
impl<T, F> DynOp for InspectOp<T, F>
where
    T: SeqBound,
    F: Send + Sync + Fn(&T) + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let it = downcast_iter::<T>(input, "inspect")?;
        let f = Arc::clone(&self.0);
        Ok(erase::<T>(Box::new(it.inspect(move |r| {
            if let Ok(t) = r {
                f(t);
            }
        }))))
    }

    fn name(&self) -> &'static str {
        "inspect"
    }
}

impl<T: SeqBound> Sequence<T> {
    /// Apply `f` to every element, preserving order.
    pub fn map<O, F>(self, f: F) -> Sequence<O>
    where
        O: SeqBound,
        F: 'static + Send + Sync + Fn(&T) -> O,
    {
        self.chain(Arc::new(MapOp::<T, O, F>(Arc::new(f), PhantomData)))
    }

    /// Keep the elements for which `pred` holds, preserving order.
    pub fn filter<F>(self, pred: F) -> Sequence<T>
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        self.chain(Arc::new(FilterOp::<T, F>(Arc::new(pred), PhantomData)))
    }

    /// Replace every element with the zero or more elements `f` returns.
    pub fn flat_map<O, F>(self, f: F) -> Sequence<O>
    where
        O: SeqBound,
        F: 'static + Send + Sync + Fn(&T) -> Vec<O>,
    {
        self.chain(Arc::new(FlatMapOp::<T, O, F>(Arc::new(f), PhantomData)))
    }

    /// Observe each element as it passes this stage.
    ///
    /// `f` runs once per element that reaches this stage, in source order,
    /// and only while a terminal operation is pulling from the sequence.
    ///
    /// ```
    /// use seqflow::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let (before, after) = (Arc::clone(&log), Arc::clone(&log));
    /// let seq = from_vec(vec![1, 2])
    ///     .inspect(move |n| before.lock().unwrap().push(format!("a{n}")))
    ///     .map(|n| n * 10)
    ///     .inspect(move |n| after.lock().unwrap().push(format!("b{n}")));
    /// assert!(log.lock().unwrap().is_empty());
    ///
    /// seq.collect()?;
    /// assert_eq!(*log.lock().unwrap(), ["a1", "b10", "a2", "b20"]);
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn inspect<F>(self, f: F) -> Sequence<T>
    where
        F: 'static + Send + Sync + Fn(&T),
    {
        self.chain(Arc::new(InspectOp::<T, F>(Arc::new(f), PhantomData)))
    }
}
