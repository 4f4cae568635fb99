use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("catalogsRoot").is_some(),
        "Config should have 'catalogsRoot' field"
    );
    assert!(
        parsed.get("sourceLanguage").is_some(),
        "Config should have 'sourceLanguage' field"
    );
    assert!(
        parsed.get("ignores").is_some(),
        "Config should have 'ignores' field"
    );

    assert_eq!(parsed["catalogsRoot"], "./translations");
    assert_eq!(parsed["sourceLanguage"], "en");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .lingorc.json"), "{}", output.stdout);

    assert!(test.root().join(".lingorc.json").exists());

    let content = test.read_file(".lingorc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", "{}")?;

    let output = run(test.command().arg("init"))?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("already exists"), "{}", output.stderr);

    Ok(())
}
