use crate::error::Result;
use crate::node::downcast_iter;
use crate::pipeline::Pipeline;
use crate::planner::{Plan, build_plan};
use crate::type_token::ElemIter;
use tracing::{debug, trace};

/// Executes plans synchronously on the calling thread.
///
/// Running a plan opens a fresh stream over the source and stacks every
/// operator on top of it. Elements are then pulled one at a time through the
/// whole chain, so a terminal that stops early (`find_first`, `any_match`,
/// a `limit` further down) leaves the rest of the source untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Runner;

impl Runner {
    /// Build the element stream for `pipeline` without pulling from it.
    pub fn run_iter<T: 'static>(&self, pipeline: &Pipeline) -> Result<ElemIter<T>> {
        let plan = build_plan(pipeline)?;
        exec_seq::<T>(plan)
    }

    /// Evaluate `pipeline` to completion.
    pub fn run_collect<T: 'static>(&self, pipeline: &Pipeline) -> Result<Vec<T>> {
        let out = self.run_iter::<T>(pipeline)?.collect::<Result<Vec<T>>>()?;
        debug!(terminal = pipeline.terminal().raw(), output = out.len(), "plan finished");
        Ok(out)
    }
}

/// Sequential executor: open the source, then wrap it in each fused op.
fn exec_seq<T: 'static>(plan: Plan) -> Result<ElemIter<T>> {
    let Plan {
        source,
        source_tag,
        ops,
        terminal,
        ..
    } = plan;

    debug!(
        terminal = terminal.raw(),
        source = source_tag.name,
        input = ?source.len(),
        ops = ops.len(),
        "executing plan"
    );

    let mut stream = source.open();
    for op in &ops {
        stream = op.apply(stream)?;
        trace!(stage = op.name(), "stage attached");
    }

    downcast_iter::<T>(stream, "terminal")
}
