use anyhow::Result;
use seqflow::render;
use seqflow::testing::*;
use seqflow::*;

#[test]
fn list_renders_display_forms() -> Result<()> {
    let adults = from_vec(sample_persons()).filter(|p| p.age >= 18).collect()?;
    assert_eq!(render::list(&adults), "[Max, Peter, Pamela]");
    assert_eq!(render::list::<Person>(&[]), "[]");
    Ok(())
}

#[test]
fn grouped_output_renders_in_first_seen_order() -> Result<()> {
    let by_age = from_vec(sample_persons()).group_by(|p| p.age)?;
    assert_eq!(
        render::grouped(&by_age),
        "{18=[Max], 23=[Peter, Pamela], 12=[David]}"
    );
    Ok(())
}

#[test]
fn map_with_custom_value_format() -> Result<()> {
    let ages = from_vec(sample_persons()).to_map(|p| p.name.clone(), |p| p.age)?;
    assert_eq!(
        render::map_with(&ages, |a| format!("{a}y")),
        "{Max=18y, Peter=23y, Pamela=23y, David=12y}"
    );
    Ok(())
}

#[test]
fn keyed_map_display() -> Result<()> {
    let empty = from_vec(Vec::<Person>::new()).to_map(|p| p.age, |p| p.name.clone())?;
    assert_eq!(empty.to_string(), "{}");
    Ok(())
}

#[test]
fn summary_statistics_display() -> Result<()> {
    let stats = from_vec(sample_persons()).summarize_by(|p| p.age)?;
    assert_eq!(
        stats.to_string(),
        "SummaryStatistics{count=4, sum=76, min=12, average=19.000000, max=23}"
    );
    Ok(())
}

#[cfg(feature = "json")]
#[test]
fn json_rendering_of_results() -> Result<()> {
    let stats = from_vec(sample_persons()).summarize_by(|p| p.age)?;
    let json = render::to_json(&stats)?;
    assert!(json.contains("\"count\": 4"));
    assert!(json.contains("\"sum\": 76"));

    let merged = from_vec(sample_persons()).to_map_with_merge(
        |p| p.age,
        |p| p.name.clone(),
        |a, b| format!("{a};{b}"),
    )?;
    let json = render::to_json(&merged)?;
    let back: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(back["23"], "Peter;Pamela");
    assert_eq!(back["12"], "David");

    let people = render::to_json(&sample_persons()[..1])?;
    assert!(people.contains("\"name\": \"Max\""));
    Ok(())
}
