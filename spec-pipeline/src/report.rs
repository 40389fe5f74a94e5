//! Saving the final specification to disk.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

pub const REPORT_FILE: &str = "specification.md";
/// Directory used when a title sanitizes to nothing.
const UNTITLED: &str = "untitled";

/// Directory name for a title: drop characters other than word characters, whitespace
/// and `-`, replace whitespace runs with `_`, lowercase.
pub fn sanitize_title(title: &str) -> String {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    let (disallowed, whitespace) = PATTERNS.get_or_init(|| {
        (
            Regex::new(r"[^\w\s-]").expect("valid pattern"),
            Regex::new(r"\s+").expect("valid pattern"),
        )
    });
    let kept = disallowed.replace_all(title, "");
    whitespace.replace_all(&kept, "_").to_lowercase()
}

/// Path of the report for `title` under `output_dir`.
pub fn report_path(output_dir: &Path, title: &str) -> PathBuf {
    let mut dir = sanitize_title(title);
    if dir.is_empty() {
        dir = UNTITLED.to_string();
    }
    output_dir.join(dir).join(REPORT_FILE)
}

/// Writes `markdown` to `{output_dir}/{sanitized title}/specification.md`, creating
/// directories as needed, and returns the file path.
pub async fn save_report(output_dir: &Path, title: &str, markdown: &str) -> std::io::Result<PathBuf> {
    let path = report_path(output_dir, title);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, markdown).await?;
    Ok(path)
}
