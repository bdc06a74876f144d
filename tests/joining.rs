use anyhow::Result;
use seqflow::testing::*;
use seqflow::*;

#[test]
fn legal_age_phrase() -> Result<()> {
    let phrase = from_vec(sample_persons())
        .filter(|p| p.age >= 18)
        .map(|p| p.name.clone())
        .join(" and ", "In Germany ", " are of legal age.")?;
    assert_eq!(phrase, "In Germany Max and Peter and Pamela are of legal age.");
    Ok(())
}

#[test]
fn join_uses_display_of_elements() -> Result<()> {
    let people = from_vec(sample_persons()).join(", ", "[", "]")?;
    assert_eq!(people, "[Max, Peter, Pamela, David]");

    let nums = from_vec(vec![1, 2, 3]).join("-", "", "")?;
    assert_eq!(nums, "1-2-3");
    Ok(())
}

#[test]
fn join_empty_is_prefix_plus_suffix() -> Result<()> {
    let out = from_vec(sample_persons())
        .filter(|p| p.age > 100)
        .join(" and ", "pre<", ">post")?;
    assert_eq!(out, "pre<>post");
    Ok(())
}

#[test]
fn join_single_element_has_no_separator() -> Result<()> {
    let out = of(["solo"]).join(", ", "(", ")")?;
    assert_eq!(out, "(solo)");
    Ok(())
}
