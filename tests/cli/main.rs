use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use tempfile::TempDir;

mod check;
mod init;
mod query;
mod stats;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// New project with one catalog under the default catalogs root.
    pub fn with_catalog(name: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(&format!("translations/{}", name), content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lingo"));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn query_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("query");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub struct CmdOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(cmd: &mut Command) -> Result<CmdOutput> {
    let output = cmd.output().context("Failed to run the lingo binary")?;
    Ok(CmdOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Catalog fixture with the message shapes the checks care about: finished
/// singular entries, a disambiguated pair, a numerus message, and an
/// unfinished entry.
pub const LIBRARY_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de" sourcelanguage="en">
<context>
    <name>BaseSqlTableModel</name>
    <message>
        <location filename="../src/library/basesqltablemodel.cpp" line="63"/>
        <source>Artist</source>
        <translation>Interpret</translation>
    </message>
</context>
<context>
    <name>DlgTrackInfo</name>
    <message>
        <source>Artist:</source>
        <translation>Interpret:</translation>
    </message>
</context>
<context>
    <name>CrateFeature</name>
    <message>
        <source>_copy</source>
        <comment>[noun]</comment>
        <translation>_Kopie</translation>
    </message>
    <message numerus="yes">
        <source>%n hidden track(s)</source>
        <translation>
            <numerusform>%n versteckter Titel</numerusform>
            <numerusform>%n versteckte Titel</numerusform>
        </translation>
    </message>
</context>
<context>
    <name>DlgPrefControllersDlg</name>
    <message>
        <source>Open Local Preset Folder</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;
