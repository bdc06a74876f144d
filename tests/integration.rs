//! End-to-end walk through the sequence API on the sample data sets.

use anyhow::Result;
use seqflow::combiners::Count;
use seqflow::testing::*;
use seqflow::*;

#[test]
fn tutorial_flow() -> Result<()> {
    // Codes starting with "c", upper-cased and sorted.
    let codes = from_vec(sample_strings())
        .filter(|s| s.starts_with('c'))
        .map(|s| s.to_uppercase())
        .sorted()
        .collect()?;
    assert_eq!(codes, vec!["C1", "C2"]);

    // First element of a literal sequence.
    assert_eq!(of(["a1", "a2", "a3"]).find_first()?, Some("a1"));

    // Integer range mapped to labels.
    let labels = range(1, 4).map(|i| format!("a{i}")).collect()?;
    assert_eq!(labels, vec!["a1", "a2", "a3"]);

    // Adults by name.
    let adults = from_vec(sample_persons())
        .filter(|p| p.name.starts_with('P'))
        .collect()?;
    assert_eq!(render::list(&adults), "[Peter, Pamela]");

    // Grouping and aggregation.
    let by_age = from_vec(sample_persons()).group_by(|p| p.age)?;
    assert_eq!(by_age.keys().copied().collect::<Vec<_>>(), vec![18, 23, 12]);

    let avg = from_vec(sample_persons()).average_by(|p| p.age)?;
    assert!((avg - 19.0).abs() < 1e-12);

    let stats = from_vec(sample_persons()).summarize_by(|p| p.age)?;
    assert_eq!((stats.count, stats.sum, stats.min, stats.max), (4, 76, 12, 23));

    let phrase = from_vec(sample_persons())
        .filter(|p| p.age >= 18)
        .map(|p| p.name.clone())
        .join(" and ", "In Germany ", " are of legal age.")?;
    assert_eq!(phrase, "In Germany Max and Peter and Pamela are of legal age.");

    let merged = from_vec(sample_persons()).to_map_with_merge(
        |p| p.age,
        |p| p.name.clone(),
        |a, b| format!("{a};{b}"),
    )?;
    assert_eq!(merged.to_string(), "{18=Max, 23=Peter;Pamela, 12=David}");

    let shouted = from_vec(sample_persons()).custom_collect(
        || StringJoiner::new(" | "),
        |j: &mut StringJoiner, p: Person| j.add(&p.name.to_uppercase()),
        |j: &mut StringJoiner, other: StringJoiner| j.merge(&other),
        |j: StringJoiner| j.to_string(),
    )?;
    assert_eq!(shouted, "MAX | PETER | PAMELA | DAVID");
    Ok(())
}

#[test]
fn skip_limit_slice_on_sample_ints() -> Result<()> {
    let ints = from_vec(sample_ints());
    assert_eq!(ints.clone().sum()?, 34);
    assert_eq!(ints.clone().skip(1)?.sum()?, 29);
    assert_eq!(ints.clone().skip(2)?.limit(2)?.sum()?, 16);
    assert_eq!(ints.slice(2, 4)?.sum()?, 16);
    Ok(())
}

#[test]
fn long_chain_over_a_range() -> Result<()> {
    let seq = range(0, 1_000)
        .filter(|n| n % 3 == 0)
        .map(|n| n * n)
        .skip(10)?
        .limit(100)?
        .sorted_by(|a, b| b.cmp(a));

    let out = seq.clone().collect()?;
    assert_eq!(out.len(), 100);
    assert_eq!(out.first(), Some(&(327 * 327)));
    assert_eq!(out.last(), Some(&(30 * 30)));

    let buckets = seq.group_by_with(|n| n % 2 == 0, Count)?;
    assert_eq!(buckets.values().sum::<u64>(), 100);
    Ok(())
}
