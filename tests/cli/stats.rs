use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, LIBRARY_DE, run};

const PARTIAL_FR: &str = r#"<TS version="2.1" language="fr" sourcelanguage="en">
<context>
    <name>BaseSqlTableModel</name>
    <message>
        <source>Artist</source>
        <translation>Artiste</translation>
    </message>
    <message>
        <source>Title</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Old Label</source>
        <translation type="vanished">Ancienne étiquette</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_stats_table_lists_each_catalog() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;
    test.write_file("translations/fr.ts", PARTIAL_FR)?;

    let output = run(&mut test.stats_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Language"), "{}", output.stdout);
    assert!(output.stdout.contains("de"), "{}", output.stdout);
    assert!(output.stdout.contains("fr"), "{}", output.stdout);
    // fr: 1 finished of 2 reachable messages.
    assert!(output.stdout.contains("50.0%"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_stats_verbose_adds_context_rows() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let output = run(test.stats_command().arg("--verbose"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("BaseSqlTableModel"), "{}", output.stdout);
    assert!(output.stdout.contains("DlgPrefControllersDlg"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_stats_json_output() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;
    test.write_file("translations/fr.ts", PARTIAL_FR)?;

    let output = run(test.stats_command().args(["--format", "json"]))?;
    assert_eq!(output.code, Some(0));

    let parsed: Value = serde_json::from_str(&output.stdout)?;
    let catalogs = parsed["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    let de = &catalogs[0];
    assert_eq!(de["language"], "de");
    assert_eq!(de["finished"], 4);
    assert_eq!(de["unfinished"], 1);
    assert_eq!(de["total"], 5);
    assert_eq!(de["completionPercent"], 80.0);

    let fr = &catalogs[1];
    assert_eq!(fr["language"], "fr");
    assert_eq!(fr["stale"], 1);
    assert_eq!(fr["contexts"][0]["name"], "BaseSqlTableModel");

    Ok(())
}

#[test]
fn test_stats_empty_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/.keep", "")?;

    let output = run(&mut test.stats_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No catalogs found"), "{}", output.stdout);

    Ok(())
}
