use anyhow::Result;
use seqflow::testing::*;
use seqflow::*;

#[test]
fn sort_is_stable_for_equal_keys() -> Result<()> {
    let people = from_vec(sample_persons())
        .sorted_by_key(|p| p.age)
        .map(|p| p.name.clone())
        .collect()?;
    // Peter precedes Pamela in the input and shares her age.
    assert_eq!(people, vec!["David", "Max", "Peter", "Pamela"]);
    Ok(())
}

#[test]
fn sort_by_comparator_descending() -> Result<()> {
    let out = from_vec(sample_ints()).sorted_by(|a, b| b.cmp(a)).collect()?;
    assert_eq!(out, vec![9, 7, 5, 4, 4, 3, 2]);
    Ok(())
}

#[test]
fn stable_sort_keeps_tag_order_for_large_input() -> Result<()> {
    let input: Vec<(u8, usize)> = (0..500).map(|i| ((i % 7) as u8, i)).collect();
    let out = from_vec(input).sorted_by_key(|(k, _)| *k).collect()?;

    for w in out.windows(2) {
        let ((ka, ia), (kb, ib)) = (w[0], w[1]);
        assert!(ka < kb || (ka == kb && ia < ib), "order broken at {w:?}");
    }
    Ok(())
}

#[test]
fn collect_sorted_natural_order() -> Result<()> {
    assert_eq!(from_vec(vec![3, 1, 2]).collect_sorted()?, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn distinct_keeps_first_occurrence() -> Result<()> {
    let out = from_vec(vec!["b", "a", "b", "c", "a"]).distinct().collect()?;
    assert_eq!(out, vec!["b", "a", "c"]);
    Ok(())
}

#[test]
fn skip_and_sum() -> Result<()> {
    let ints = from_vec(sample_ints());
    assert_eq!(ints.clone().sum()?, 34);
    assert_eq!(ints.clone().skip(1)?.sum()?, 29);
    assert_eq!(ints.clone().skip(0)?.count()?, 7);
    assert_eq!(ints.skip(100)?.count()?, 0);
    Ok(())
}

#[test]
fn limit_truncates() -> Result<()> {
    let ints = from_vec(sample_ints());
    assert_eq!(ints.clone().limit(3)?.collect()?, vec![5, 4, 7]);
    assert_eq!(ints.clone().limit(0)?.count()?, 0);
    assert_eq!(ints.limit(50)?.count()?, 7);
    Ok(())
}

#[test]
fn slice_two_to_four() -> Result<()> {
    let sliced = from_vec(sample_ints()).slice(2, 4)?;
    assert_eq!(sliced.clone().collect()?, vec![7, 9]);
    assert_eq!(sliced.sum()?, 16);
    Ok(())
}

#[test]
fn slice_edges() -> Result<()> {
    assert_eq!(from_vec(sample_ints()).slice(3, 3)?.count()?, 0);
    assert_eq!(from_vec(sample_ints()).slice(0, 7)?.collect()?, sample_ints());
    Ok(())
}

#[test]
fn negative_counts_are_rejected_immediately() {
    let err = from_vec(sample_ints()).skip(-1).err();
    assert!(matches!(err, Some(SeqError::InvalidArgument { op: "skip", .. })));

    let err = from_vec(sample_ints()).limit(-5).err();
    assert!(matches!(err, Some(SeqError::InvalidArgument { op: "limit", .. })));

    let err = from_vec(sample_ints()).slice(-1, 2).err();
    assert!(matches!(err, Some(SeqError::InvalidArgument { op: "slice", .. })));
}

#[test]
fn slice_with_inverted_bounds_is_rejected() {
    let err = from_vec(sample_ints()).slice(4, 2).err();
    assert!(matches!(err, Some(SeqError::InvalidArgument { op: "slice", .. })));
}

#[test]
fn slice_past_end_fails_at_terminal() -> Result<()> {
    let seq = from_vec(sample_ints()).slice(2, 8)?;
    let err = seq.collect().unwrap_err();
    assert!(matches!(err, SeqError::InvalidArgument { op: "slice", .. }));
    assert!(err.to_string().contains("exceeds sequence length 7"));
    Ok(())
}

#[test]
fn slice_error_passes_through_later_stages() -> Result<()> {
    let err = from_vec(sample_ints())
        .slice(1, 20)?
        .skip(50)?
        .map(|n| n + 1)
        .count()
        .unwrap_err();
    assert!(matches!(err, SeqError::InvalidArgument { op: "slice", .. }));
    Ok(())
}

#[test]
fn slice_past_end_is_not_reached_by_a_shorter_limit() -> Result<()> {
    let out = from_vec(sample_ints()).slice(2, 8)?.limit(2)?.collect()?;
    assert_eq!(out, vec![7, 9]);
    Ok(())
}
