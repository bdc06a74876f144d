use anyhow::Result;
use seqflow::planner::OptimizationDecision;
use seqflow::testing::*;
use seqflow::*;

#[test]
fn node_ids_follow_lineage_depth() {
    let src = from_vec(sample_ints());
    let filtered = src.clone().filter(|n| *n > 3);
    let mapped = filtered.clone().map(|n| n * 2);

    assert_eq!(src.node_id().raw(), 0);
    assert_eq!(filtered.node_id().raw(), 1);
    assert_eq!(mapped.node_id().raw(), 2);
    assert_eq!(mapped.pipeline().len(), 3);
    assert!(!mapped.pipeline().is_empty());
}

#[test]
fn edges_run_source_to_terminal() {
    let seq = from_vec(sample_ints())
        .filter(|n| *n > 3)
        .map(|n| n * 2)
        .sorted();
    let edges: Vec<(u64, u64)> = seq
        .pipeline()
        .edges()
        .into_iter()
        .map(|(a, b)| (a.raw(), b.raw()))
        .collect();
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn branching_does_not_touch_the_parent_lineage() -> Result<()> {
    let base = from_vec(sample_ints()).filter(|n| *n > 3);
    let left = base.clone().map(|n| n + 1);
    let right = base.clone().sorted().limit(2)?;

    assert_eq!(base.pipeline().len(), 2);
    assert_eq!(base.pipeline().edges().len(), 1);
    assert_eq!(left.node_id().raw(), 2);
    assert_eq!(right.node_id().raw(), 3);

    assert_eq!(base.collect()?, vec![5, 4, 7, 9, 4]);
    assert_eq!(left.collect()?, vec![6, 5, 8, 10, 5]);
    assert_eq!(right.collect()?, vec![4, 4]);
    Ok(())
}

#[test]
fn plan_fuses_stateless_stages() -> Result<()> {
    let seq = from_vec(sample_ints()).filter(|n| *n > 3).map(|n| n * 2);
    let plan = build_plan(seq.pipeline())?;

    assert_eq!(plan.terminal, seq.node_id());
    assert_eq!(plan.source_len(), Some(7));
    assert_eq!(plan.source_tag.name, "i32");
    assert_eq!(
        plan.optimizations,
        vec![OptimizationDecision::FusedStateless {
            blocks_before: 2,
            ops_count: 2
        }]
    );
    Ok(())
}

#[test]
fn bare_source_has_no_ops() -> Result<()> {
    let explanation = from_vec(sample_ints()).explain()?;
    assert_eq!(explanation.total_ops, 0);
    assert_eq!(explanation.barriers, 0);
    assert!(explanation.optimizations.is_empty());
    assert_eq!(explanation.steps.len(), 1);
    Ok(())
}

#[test]
fn explain_lists_steps_and_barriers() -> Result<()> {
    let explanation = from_vec(sample_ints())
        .filter(|n| *n > 3)
        .map(|n| n * 2)
        .sorted()
        .explain()?;

    assert_eq!(explanation.total_ops, 3);
    assert_eq!(explanation.barriers, 1);
    let names: Vec<&str> = explanation.steps.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["source", "filter", "map", "sort"]);
    assert!(explanation.steps[3].is_barrier);

    assert_eq!(
        explanation.to_string(),
        "Execution plan (3 ops, 1 barriers):\n\
         \x20 0: source [7 x i32]\n\
         \x20 1: filter\n\
         \x20 2: map\n\
         \x20 3: sort (barrier)\n\
         \x20 fused 3 stateless stages into 3 ops\n"
    );
    Ok(())
}

#[test]
fn explain_does_not_evaluate() -> Result<()> {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let seq = from_vec(sample_ints()).inspect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let _ = seq.explain()?;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(seq.count()?, 7);
    assert_eq!(calls.load(Ordering::SeqCst), 7);
    Ok(())
}

#[test]
fn runner_can_be_driven_directly() -> Result<()> {
    let seq = from_vec(sample_strings()).filter(|s| s.starts_with('a'));
    let out: Vec<String> = Runner.run_collect(seq.pipeline())?;
    assert_eq!(out, vec!["a1", "a2"]);
    Ok(())
}

#[test]
fn runner_rejects_wrong_element_type() {
    let seq = from_vec(sample_ints());
    let err = Runner.run_collect::<String>(seq.pipeline()).unwrap_err();
    assert!(matches!(err, SeqError::TypeMismatch { .. }));
}
