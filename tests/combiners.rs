
use anyhow::Result;
use seqflow::combiners::{Count, Max, Min, Sum, ToList};
use seqflow::testing::*;
use seqflow::*;

#[test]
fn sum_of_ints_and_empty_identity() -> Result<()> {
    assert_eq!(from_vec(sample_ints()).sum()?, 34);
    assert_eq!(from_vec(Vec::<i64>::new()).sum()?, 0);
    Ok(())
}

#[test]
fn average_of_ages() -> Result<()> {
    let avg = from_vec(sample_persons()).average_by(|p| p.age)?;
    assert_approx_eq!(avg, 19.0);

    let ints_avg = from_vec(vec![1u32, 2, 4]).average()?;
    assert_approx_eq!(ints_avg, 7.0 / 3.0, 1e-12);
    Ok(())
}

#[test]
fn average_of_empty_is_zero() -> Result<()> {
    assert_approx_eq!(from_vec(Vec::<i32>::new()).average()?, 0.0);
    Ok(())
}

#[test]
fn summary_statistics_of_ages() -> Result<()> {
    let stats = from_vec(sample_persons()).summarize_by(|p| p.age)?;
    assert_eq!(stats.count, 4);
    assert_eq!(stats.sum, 76);
    assert_eq!(stats.min, 12);
    assert_eq!(stats.max, 23);
    assert_approx_eq!(stats.average(), 19.0);
    Ok(())
}

#[test]
fn summary_statistics_empty_and_merge() -> Result<()> {
    let empty = from_vec(Vec::<i64>::new()).summary_statistics()?;
    assert_eq!(empty, SummaryStatistics::default());
    assert_eq!(empty.count, 0);
    assert_approx_eq!(empty.average(), 0.0);

    let mut left = from_vec(vec![3i64, 9]).summary_statistics()?;
    let right = from_vec(vec![-4i64, 1, 1]).summary_statistics()?;
    left.combine(&right);
    left.combine(&empty);
    assert_eq!(
        left,
        SummaryStatistics {
            count: 5,
            sum: 10,
            min: -4,
            max: 9
        }
    );
    Ok(())
}

#[test]
fn summary_sum_does_not_overflow_i64() -> Result<()> {
    let stats = from_vec(vec![i64::MAX, i64::MAX]).summary_statistics()?;
    assert_eq!(stats.sum, 2 * i128::from(i64::MAX));
    Ok(())
}

#[test]
fn min_and_max() -> Result<()> {
    assert_eq!(from_vec(sample_ints()).min()?, Some(2));
    assert_eq!(from_vec(sample_ints()).max()?, Some(9));
    assert_eq!(from_vec(Vec::<i32>::new()).max()?, None);
    Ok(())
}

#[test]
fn builtin_combiners_via_collect_with() -> Result<()> {
    let ints = from_vec(sample_ints());
    assert_eq!(ints.clone().collect_with(Count)?, 7);
    assert_eq!(ints.clone().collect_with(Sum::<i32>::new())?, 34);
    assert_eq!(ints.clone().collect_with(Min::<i32>::new())?, Some(2));
    assert_eq!(ints.clone().collect_with(Max::<i32>::new())?, Some(9));
    assert_eq!(ints.collect_with(ToList)?, sample_ints());
    Ok(())
}

#[test]
fn combiner_merge_matches_sequential_fold() {
    let sum = Sum::<i32>::new();
    let ints = sample_ints();
    let (left, right) = ints.split_at(3);

    let mut a = sum.create();
    for v in left {
        sum.add_input(&mut a, *v);
    }
    let mut b = sum.create();
    for v in right {
        sum.add_input(&mut b, *v);
    }
    sum.merge(&mut a, b);
    assert_eq!(sum.finish(a), 34);

    let min = Min::<i32>::new();
    let mut lo = min.create();
    min.merge(&mut lo, Some(4));
    min.merge(&mut lo, None);
    min.merge(&mut lo, Some(2));
    assert_eq!(min.finish(lo), Some(2));
}

#[test]
fn closure_collector_supplier_accumulator_combiner_finisher() {
    let collector = Collector::of(
        Vec::new,
        |acc: &mut Vec<i32>, v: i32| acc.push(v * 2),
        |acc: &mut Vec<i32>, other: Vec<i32>| acc.extend(other),
        |acc: Vec<i32>| acc.len(),
    );

    let mut a = collector.create();
    collector.add_input(&mut a, 1);
    collector.add_input(&mut a, 2);
    let mut b = collector.create();
    collector.add_input(&mut b, 3);
    collector.merge(&mut a, b);
    assert_eq!(a, vec![2, 4, 6]);
    assert_eq!(collector.clone().finish(a), 3);
}

#[test]
fn string_joiner_merge_and_empty() {
    let mut left = StringJoiner::with_affixes(", ", "<", ">");
    left.add("a");
    left.add("b");
    let mut right = StringJoiner::with_affixes(", ", "(", ")");
    right.add("c");

    left.merge(&right);
    assert_eq!(left.to_string(), "<a, b, c>");
    assert_eq!(left.len(), "<a, b, c>".len());

    let empty = StringJoiner::with_affixes(", ", "(", ")");
    left.merge(&empty);
    assert_eq!(left.to_string(), "<a, b, c>");
    assert_eq!(empty.to_string(), "()");
    assert!(StringJoiner::new("-").is_empty());
}

#[test]
fn custom_collect_uppercase_names() -> Result<()> {
    let names = from_vec(sample_persons()).custom_collect(
        || StringJoiner::new(" | "),
        |j: &mut StringJoiner, p: Person| j.add(&p.name.to_uppercase()),
        |j: &mut StringJoiner, other: StringJoiner| j.merge(&other),
        |j: StringJoiner| j.to_string(),
    )?;
    assert_eq!(names, "MAX | PETER | PAMELA | DAVID");
    Ok(())
}

#[test]
fn custom_collect_on_empty_runs_supplier_and_finisher() -> Result<()> {
    let out = from_vec(Vec::<Person>::new()).custom_collect(
        || StringJoiner::with_affixes(",", "{", "}"),
        |j: &mut StringJoiner, p: Person| j.add(&p.name),
        |j: &mut StringJoiner, other: StringJoiner| j.merge(&other),
        |j: StringJoiner| j.to_string(),
    )?;
    assert_eq!(out, "{}");
    Ok(())
}

#[test]
fn combine_globally_feeds_downstream_stages() -> Result<()> {
    let out = from_vec(sample_persons())
        .map(|p| p.age)
        .combine_globally(SummaryStats)
        .map(|s| s.max - s.min)
        .collect()?;
    assert_eq!(out, vec![11]);

    let empty = from_vec(Vec::<u32>::new())
        .combine_globally(Count)
        .collect()?;
    assert_eq!(empty, vec![0]);
    Ok(())
}
