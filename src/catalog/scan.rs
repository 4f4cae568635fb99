//! Discovery and parallel parsing of catalog files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::message::Catalog;
use super::ts::parse_ts_file;

/// A warning from scanning catalog files.
#[derive(Debug, Clone)]
pub struct CatalogScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    pub catalogs: Vec<Catalog>,
    pub warnings: Vec<CatalogScanWarning>,
}

/// Find every `.ts` file under `root` (minus the ignore patterns) and parse
/// them in parallel. A file that fails to parse becomes a warning, not a
/// hard error, so one broken catalog does not hide the others.
pub fn scan_catalog_files(root: impl AsRef<Path>, ignores: &[String]) -> Result<ScanCatalogsResult> {
    let root = root.as_ref();

    if !root.exists() {
        bail!(
            "Catalogs directory '{}' does not exist.\n\
             Hint: Check your .lingorc.json 'catalogsRoot' setting.",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let patterns = ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("ts"))
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            !patterns.iter().any(|p| p.matches_path(relative))
        })
        .collect();
    files.sort();

    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, parse_ts_file(path)))
        .collect();

    let mut scan = ScanCatalogsResult::default();
    for (path, result) in results {
        match result {
            Ok(catalog) => scan.catalogs.push(catalog),
            Err(e) => scan.warnings.push(CatalogScanWarning {
                file_path: path.to_string_lossy().to_string(),
                error: e.to_string(),
            }),
        }
    }

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MINIMAL_DE: &str = r#"<TS language="de"><context><name>A</name>
        <message><source>Remove</source><translation>Entfernen</translation></message>
        </context></TS>"#;

    #[test]
    fn test_scan_catalog_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("de.ts"), MINIMAL_DE).unwrap();
        fs::write(
            dir.path().join("fr.ts"),
            MINIMAL_DE.replace("language=\"de\"", "language=\"fr\""),
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();

        let result = scan_catalog_files(dir.path(), &[]).unwrap();
        assert_eq!(result.catalogs.len(), 2);
        assert!(result.warnings.is_empty());

        let languages: Vec<String> =
            result.catalogs.iter().map(|c| c.language_key()).collect();
        assert_eq!(languages, vec!["de".to_string(), "fr".to_string()]);
    }

    #[test]
    fn test_scan_finds_nested_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("res/lang")).unwrap();
        fs::write(dir.path().join("res/lang/de.ts"), MINIMAL_DE).unwrap();

        let result = scan_catalog_files(dir.path(), &[]).unwrap();
        assert_eq!(result.catalogs.len(), 1);
    }

    #[test]
    fn test_scan_respects_ignore_patterns() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("draft")).unwrap();
        fs::write(dir.path().join("de.ts"), MINIMAL_DE).unwrap();
        fs::write(dir.path().join("draft/de.ts"), MINIMAL_DE).unwrap();

        let result =
            scan_catalog_files(dir.path(), &["draft/**".to_string()]).unwrap();
        assert_eq!(result.catalogs.len(), 1);
        assert!(!result.catalogs[0].file_path.contains("draft"));
    }

    #[test]
    fn test_scan_collects_warnings_for_broken_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("de.ts"), MINIMAL_DE).unwrap();
        fs::write(dir.path().join("broken.ts"), "<TS><context></wrong></TS>").unwrap();

        let result = scan_catalog_files(dir.path(), &[]).unwrap();
        assert_eq!(result.catalogs.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].file_path.contains("broken.ts"));
    }

    #[test]
    fn test_scan_nonexistent_dir() {
        let result = scan_catalog_files(Path::new("/nonexistent/path"), &[]);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("does not exist"));
        assert!(err.contains("catalogsRoot"));
    }
}
