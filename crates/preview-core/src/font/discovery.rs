//! Filesystem font discovery
//!
//! Headless catalog source used by tests, benchmarks, and environments
//! without a toolkit font map: scans platform font directories, validates
//! candidate files with fontdue, and derives family/style names from the
//! file stem ("DejaVuSans-BoldOblique" -> family "DejaVuSans", style
//! "BoldOblique"). Name tables are deliberately not parsed; a GUI source
//! gives prettier names when one is available.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::traits::CatalogSource;

/// Catalog source backed by font files on disk
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource {
    families: BTreeMap<String, Vec<String>>,
}

impl FileSystemSource {
    /// Scan the platform's default font directories
    pub fn with_default_paths() -> Self {
        Self::scan(&default_search_paths())
    }

    /// Scan explicit directories (non-recursive). Unreadable directories
    /// and unparseable files are skipped with a log line, never an error.
    pub fn scan(search_paths: &[PathBuf]) -> Self {
        let mut families: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for search_path in search_paths {
            let entries = match std::fs::read_dir(search_path) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("skipping font directory {}: {}", search_path.display(), e);
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if !is_font_file(&path) {
                    continue;
                }
                match analyze_font_file(&path) {
                    Some((family, style)) => {
                        let styles = families.entry(family).or_default();
                        if let Some(style) = style {
                            if !styles.contains(&style) {
                                styles.push(style);
                            }
                        }
                    }
                    None => warn!("unreadable font file skipped: {}", path.display()),
                }
            }
        }

        debug!("filesystem scan found {} families", families.len());
        Self { families }
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}

impl CatalogSource for FileSystemSource {
    fn list_families(&self) -> Vec<String> {
        self.families.keys().cloned().collect()
    }

    fn list_styles(&self, family: &str) -> Vec<String> {
        self.families.get(family).cloned().unwrap_or_default()
    }
}

/// Platform-specific font search paths
fn default_search_paths() -> Vec<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        vec![
            "/usr/share/fonts".into(),
            "/usr/local/share/fonts".into(),
            "~/.fonts".into(),
        ]
    }

    #[cfg(target_os = "macos")]
    {
        vec![
            "/System/Library/Fonts".into(),
            "/Library/Fonts".into(),
            "~/Library/Fonts".into(),
        ]
    }

    #[cfg(target_os = "windows")]
    {
        vec![
            "C:\\Windows\\Fonts".into(),
            "C:\\Program Files\\Common Files\\microsoft shared\\Fonts".into(),
        ]
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        vec![]
    }
}

/// Check if a file is likely a font file
fn is_font_file(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf"),
        None => false,
    }
}

/// Validate a candidate with fontdue and name it from the file stem
fn analyze_font_file(path: &Path) -> Option<(String, Option<String>)> {
    let font_data = std::fs::read(path).ok()?;
    fontdue::Font::from_bytes(font_data, fontdue::FontSettings::default()).ok()?;

    let stem = path.file_stem()?.to_string_lossy();
    Some(split_stem(&stem))
}

/// "Family-Style" stems split at the last dash; a stem without one is a
/// bare family whose style enumeration will fall back to "Regular".
fn split_stem(stem: &str) -> (String, Option<String>) {
    match stem.rsplit_once('-') {
        Some((family, style)) if !family.is_empty() && !style.is_empty() => {
            (family.to_string(), Some(style.to_string()))
        }
        _ => (stem.to_string(), None),
    }
}
