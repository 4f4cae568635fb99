use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, LIBRARY_DE, run};

#[test]
fn test_clean_catalog_passes() -> Result<()> {
    let test = CliTest::with_catalog(
        "de.ts",
        r#"<TS version="2.1" language="de" sourcelanguage="en">
<context>
    <name>CrateFeature</name>
    <message>
        <source>Remove</source>
        <translation>Entfernen</translation>
    </message>
</context>
</TS>"#,
    )?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_unfinished_is_a_warning_not_a_failure() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", LIBRARY_DE)?;

    let output = run(&mut test.check_command())?;
    // Warnings alone do not fail the check.
    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("warning: \"Open Local Preset Folder\"  unfinished"),
        "{}",
        output.stdout
    );
    assert!(output.stdout.contains("0 errors, 1 warning"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_empty_translation_fails() -> Result<()> {
    let test = CliTest::with_catalog(
        "de.ts",
        r#"<TS language="de"><context><name>WaveformWidget</name>
<message><source>Zoom</source><translation></translation></message>
</context></TS>"#,
    )?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"Zoom\"  empty"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_duplicate_message_fails_with_both_lines() -> Result<()> {
    let test = CliTest::with_catalog(
        "de.ts",
        "<TS language=\"de\"><context><name>CrateFeature</name>\n\
         <message><source>Lock</source><translation>Sperren</translation></message>\n\
         <message><source>Lock</source><translation>Verriegeln</translation></message>\n\
         </context></TS>",
    )?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"Lock\"  duplicate"), "{}", output.stdout);
    assert!(output.stdout.contains("shadows the message at line 2"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_placeholder_drift_fails() -> Result<()> {
    let test = CliTest::with_catalog(
        "de.ts",
        r#"<TS language="de"><context><name>TrackExportDlg</name>
<message><source>Exporting %1</source><translation>Exportiere Titel</translation></message>
</context></TS>"#,
    )?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("placeholders"), "{}", output.stdout);
    assert!(output.stdout.contains("missing %1"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_single_rule_selection() -> Result<()> {
    // Catalog with an unfinished entry and a duplicate; running only the
    // duplicate rule must not report the unfinished one.
    let test = CliTest::with_catalog(
        "de.ts",
        r#"<TS language="de"><context><name>CrateFeature</name>
<message><source>Lock</source><translation>Sperren</translation></message>
<message><source>Lock</source><translation>Verriegeln</translation></message>
<message><source>Rename</source><translation type="unfinished"></translation></message>
</context></TS>"#,
    )?;

    let output = run(test.check_command().arg("duplicate"))?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("duplicate"), "{}", output.stdout);
    assert!(!output.stdout.contains("unfinished"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_config_ignore_contexts() -> Result<()> {
    let test = CliTest::with_catalog(
        "de.ts",
        r#"<TS language="de"><context><name>QObject</name>
<message><source>Raw</source><translation type="unfinished"></translation></message>
</context></TS>"#,
    )?;
    test.write_file(
        ".lingorc.json",
        r#"{ "ignoreContexts": ["QObject"] }"#,
    )?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_config_ignores_skips_catalog_files() -> Result<()> {
    let test = CliTest::with_catalog(
        "de.ts",
        r#"<TS language="de"><context><name>A</name>
<message><source>Remove</source><translation>Entfernen</translation></message>
</context></TS>"#,
    )?;
    test.write_file("translations/draft/fr.ts", "<TS><context></broken></TS>")?;
    test.write_file(".lingorc.json", r#"{ "ignores": ["draft/**"] }"#)?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("1 catalog file"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_broken_catalog_reports_parse_error() -> Result<()> {
    let test = CliTest::with_catalog("de.ts", "<TS><context></wrong></TS>")?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_catalogs_root_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/de.ts",
        r#"<TS language="de"><context><name>A</name>
<message><source>Remove</source><translation>Entfernen</translation></message>
</context></TS>"#,
    )?;

    let output = run(test.check_command().args(["--catalogs-root", "i18n"]))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"), "{}", output.stdout);

    Ok(())
}

#[test]
fn test_missing_catalogs_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.check_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("does not exist"), "{}", output.stderr);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("check"), "{}", output.stdout);
    assert!(output.stdout.contains("query"), "{}", output.stdout);

    Ok(())
}
