//! Identifier for stages within a [`Pipeline`](crate::pipeline::Pipeline) lineage.
//!
//! A stage's id is its depth in the lineage: the source is stage `0`, the
//! first transform appended to it is stage `1`, and so on. Two sequences that
//! branch from a common prefix share the ids of that prefix.

/// Position of a stage within a pipeline lineage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn new(v: u64) -> Self {
        Self(v)
    }

    /// Return the underlying depth.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The id of the stage appended directly after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
