//! A tour of sequence pipelines over small in-memory lists.
//!
//! Walks through filtering, mapping, sorting, slicing, grouping, reducing,
//! joining and a hand-built collector, printing each result.
//!
//! Run with: `cargo run --example streams_tour`
//! Set `RUST_LOG=seqflow=debug` to watch plans being executed.

use anyhow::Result;
use seqflow::combiners::StringJoiner;
use seqflow::render;
use seqflow::testing::{Person, sample_ints, sample_persons, sample_strings};
use seqflow::{from_vec, of, range};
use tracing_subscriber::EnvFilter;

fn print_spaced<T: std::fmt::Display>(items: &[T]) {
    for item in items {
        print!("{item} ");
    }
}

#[allow(clippy::too_many_lines)]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let my_list = from_vec(sample_strings());

    println!("Original List:");
    my_list.clone().for_each(|s| print!("{s} "))?;

    println!("\nFiltered uppercased:");
    let upper = my_list
        .clone()
        .filter(|s| s.starts_with('c'))
        .map(|s| s.to_uppercase())
        .sorted()
        .collect()?;
    print_spaced(&upper);

    println!("\nfindFirst:");
    if let Some(first) = my_list.find_first()? {
        print!("{first} ");
    }

    let my_ints = from_vec(sample_ints());
    println!("\n----------\nOriginal List:");
    print_spaced(&my_ints.clone().collect()?);

    println!("\nSum of entire Array: {}", my_ints.clone().sum()?);
    println!("Sum of Array with skip(1): {}", my_ints.clone().skip(1)?.sum()?);

    println!("Sliced Array [2..4]:");
    let sliced = my_ints.slice(2, 4)?;
    print_spaced(&sliced.clone().collect()?);
    println!("\nSum of sliced Array [2..4]: {}", sliced.sum()?);

    println!("----------\nDirect Stream.of:");
    of(["a1", "a2", "a3"]).for_each(|s| print!("{s} "))?;

    println!("\n----------\nrange(1, 21):");
    range(1, 21).for_each(|i| print!("{i} "))?;

    println!("\n----------\nrange(1, 6) with concatenation:");
    range(1, 6).map(|i| format!("Gaga{i} ")).for_each(|s| print!("{s}"))?;

    let persons = from_vec(sample_persons());

    println!("\n----------\nPersons List:");
    println!("{}", render::list(&persons.clone().collect()?));

    println!("----------\nFiltered list of Persons:");
    let filtered = persons.clone().filter(|p| p.name.starts_with('P')).collect()?;
    println!("{}", render::list(&filtered));

    println!("----------\nPersons grouped by Age into a map:");
    let by_age = persons.clone().group_by(|p| p.age)?;
    for (age, group) in by_age.iter() {
        println!("age {age}: {}", render::list(group));
    }

    let names_by_age = persons.clone().to_map_with_merge(
        |p| p.age,
        |p| p.name.clone(),
        |name1, name2| format!("{name1};{name2}"),
    )?;
    println!("{names_by_age}");

    println!("----------\nAverage Age:");
    println!("{:?}", persons.clone().average_by(|p| p.age)?);

    println!("----------\nSummary statistics:");
    let age_summary = persons.clone().summarize_by(|p| p.age)?;
    println!("{age_summary}");
    println!("{}", render::to_json(&age_summary)?);

    println!("----------\nString Concatenation (joining):");
    let adults = persons.clone().filter(|p| p.age >= 18).map(|p| p.name.clone());
    println!("{}", adults.clone().join(" and ", "In Germany ", " are of legal age.")?);
    println!("{}", adults.join("\", \"", "(\"", "\")")?);

    println!("----------\nOur own Collector:");
    let names = persons.custom_collect(
        || StringJoiner::new(" | "),
        |j: &mut StringJoiner, p: Person| j.add(&p.name.to_uppercase()),
        |j1: &mut StringJoiner, j2: StringJoiner| j1.merge(&j2),
        |j: StringJoiner| j.to_string(),
    )?;
    println!("{names}");
    println!();

    Ok(())
}
