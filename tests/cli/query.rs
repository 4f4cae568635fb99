use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, LIBRARY_DE, run};

#[test]
fn test_query_resolves_finished_translation() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let output = run(test
        .query_command()
        .args(["--context", "BaseSqlTableModel", "--source", "Artist"]))?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout.trim_end(), "Interpret");

    Ok(())
}

#[test]
fn test_query_contexts_resolve_independently() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let output = run(test
        .query_command()
        .args(["--context", "DlgTrackInfo", "--source", "Artist:"]))?;
    assert_eq!(output.stdout.trim_end(), "Interpret:");

    // "Artist:" was never extracted from BaseSqlTableModel, so the lookup
    // falls back to the source text.
    let output = run(test
        .query_command()
        .args(["--context", "BaseSqlTableModel", "--source", "Artist:"]))?;
    assert_eq!(output.stdout.trim_end(), "Artist:");

    Ok(())
}

#[test]
fn test_query_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let output = run(test.query_command().args([
        "--context",
        "DlgPrefControllersDlg",
        "--source",
        "Open Local Preset Folder",
    ]))?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout.trim_end(), "Open Local Preset Folder");

    Ok(())
}

#[test]
fn test_query_disambiguation_comment() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let output = run(test.query_command().args([
        "--context",
        "CrateFeature",
        "--source",
        "_copy",
        "--comment",
        "[noun]",
    ]))?;
    assert_eq!(output.stdout.trim_end(), "_Kopie");

    Ok(())
}

#[test]
fn test_query_numerus_count_selection() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let one = run(test.query_command().args([
        "--context",
        "CrateFeature",
        "--source",
        "%n hidden track(s)",
        "--count",
        "1",
    ]))?;
    assert_eq!(one.stdout.trim_end(), "%n versteckter Titel");

    let many = run(test.query_command().args([
        "--context",
        "CrateFeature",
        "--source",
        "%n hidden track(s)",
        "--count",
        "7",
    ]))?;
    assert_eq!(many.stdout.trim_end(), "%n versteckte Titel");

    Ok(())
}

#[test]
fn test_query_language_selection() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;
    test.write_file(
        "translations/fr.ts",
        r#"<TS language="fr"><context><name>BaseSqlTableModel</name>
<message><source>Artist</source><translation>Artiste</translation></message>
</context></TS>"#,
    )?;

    // Two catalogs loaded: the language must be picked explicitly.
    let ambiguous = run(test
        .query_command()
        .args(["--context", "BaseSqlTableModel", "--source", "Artist"]))?;
    assert_eq!(ambiguous.code, Some(2));
    assert!(ambiguous.stderr.contains("--language"), "{}", ambiguous.stderr);

    let fr = run(test.query_command().args([
        "--context",
        "BaseSqlTableModel",
        "--source",
        "Artist",
        "--language",
        "fr",
    ]))?;
    assert_eq!(fr.stdout.trim_end(), "Artiste");

    Ok(())
}

#[test]
fn test_query_unknown_language_is_an_error() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let output = run(test.query_command().args([
        "--context",
        "BaseSqlTableModel",
        "--source",
        "Artist",
        "--language",
        "nl",
    ]))?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("No catalog loaded"), "{}", output.stderr);

    Ok(())
}
