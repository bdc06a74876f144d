//! Plan construction and explanation.
//!
//! The planner turns a [`Pipeline`] lineage into a [`Plan`]: the source plus
//! a single flat list of operators. Adjacent stateless stages are fused so
//! the runner stacks them into one element stream without revisiting the
//! lineage. The plan can also describe itself through [`Plan::explain`].

use crate::error::{Result, SeqError};
use crate::node::{DynOp, Node};
use crate::type_token::{SourceOps, TypeTag};
use crate::{NodeId, Pipeline};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::Arc;

/// A finalized execution plan.
pub struct Plan {
    pub(crate) source: Arc<dyn SourceOps>,
    /// Element type of the source.
    pub source_tag: TypeTag,
    /// Operators to run, source -> terminal.
    pub(crate) ops: Vec<Arc<dyn DynOp>>,
    /// Id of the terminal stage the plan was built for.
    pub terminal: NodeId,
    /// Decisions made while planning.
    pub optimizations: Vec<OptimizationDecision>,
}

/// Represents an optimization decision made by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizationDecision {
    /// Adjacent stateless stages were fused into one operator list.
    FusedStateless {
        /// Number of stateless stages in the lineage.
        blocks_before: usize,
        /// Total number of operators after fusion.
        ops_count: usize,
    },
}

/// Build a plan for the lineage ending at `pipeline`'s terminal stage.
pub fn build_plan(pipeline: &Pipeline) -> Result<Plan> {
    let chain = pipeline.snapshot();
    let mut it = chain.into_iter();

    let Some((_, Node::Source { source, elem_tag })) = it.next() else {
        return Err(SeqError::TypeMismatch {
            stage: "planner",
            expected: "a Source node at the head of the lineage",
        });
    };

    let mut ops: Vec<Arc<dyn DynOp>> = Vec::new();
    let mut blocks = 0usize;
    for (_, node) in it {
        match node {
            Node::Stateless(more) => {
                blocks += 1;
                ops.extend(more);
            }
            Node::Source { .. } => {
                return Err(SeqError::TypeMismatch {
                    stage: "planner",
                    expected: "a single Source node per lineage",
                });
            }
        }
    }

    let mut optimizations = Vec::new();
    if blocks > 1 {
        optimizations.push(OptimizationDecision::FusedStateless {
            blocks_before: blocks,
            ops_count: ops.len(),
        });
    }

    Ok(Plan {
        source,
        source_tag: elem_tag,
        ops,
        terminal: pipeline.terminal(),
        optimizations,
    })
}

impl Plan {
    /// Number of elements in the source, if it can be determined.
    pub fn source_len(&self) -> Option<usize> {
        self.source.len()
    }

    /// Describe the plan step by step.
    pub fn explain(&self) -> ExecutionExplanation {
        let mut steps = Vec::with_capacity(self.ops.len() + 1);
        steps.push(ExplainStep {
            name: "source",
            detail: format!("{} x {}", self.source_len().unwrap_or(0), self.source_tag.name),
            is_barrier: false,
        });
        steps.extend(self.ops.iter().map(|op| ExplainStep {
            name: op.name(),
            detail: String::new(),
            is_barrier: op.is_barrier(),
        }));
        ExecutionExplanation {
            barriers: steps.iter().filter(|s| s.is_barrier).count(),
            total_ops: self.ops.len(),
            steps,
            optimizations: self.optimizations.clone(),
        }
    }
}

/// Human-readable description of a [`Plan`].
#[derive(Debug, Clone)]
pub struct ExecutionExplanation {
    /// The linearized chain, source first.
    pub steps: Vec<ExplainStep>,
    /// Operators after the source.
    pub total_ops: usize,
    /// Operators that must see the whole input before emitting (sort, distinct, ...).
    pub barriers: usize,
    /// Decisions the planner made.
    pub optimizations: Vec<OptimizationDecision>,
}

/// One line of an [`ExecutionExplanation`].
#[derive(Debug, Clone)]
pub struct ExplainStep {
    pub name: &'static str,
    pub detail: String,
    pub is_barrier: bool,
}

impl Display for ExecutionExplanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Execution plan ({} ops, {} barriers):", self.total_ops, self.barriers)?;
        for (i, step) in self.steps.iter().enumerate() {
            write!(f, "  {i}: {}", step.name)?;
            if !step.detail.is_empty() {
                write!(f, " [{}]", step.detail)?;
            }
            if step.is_barrier {
                write!(f, " (barrier)")?;
            }
            writeln!(f)?;
        }
        for opt in &self.optimizations {
            match opt {
                OptimizationDecision::FusedStateless { blocks_before, ops_count } => {
                    writeln!(f, "  fused {blocks_before} stateless stages into {ops_count} ops")?;
                }
            }
        }
        Ok(())
    }
}
