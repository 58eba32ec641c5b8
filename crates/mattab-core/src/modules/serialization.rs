use std::fs;
use std::path::Path;

/// Exactly one trailing newline on non-empty content. Line endings inside
/// the content are left alone: renderers emit `\n` themselves, and any
/// `\r` present comes from cell text.
pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.to_string();
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, normalize_text_artifact(content))
}

pub fn write_binary_artifact(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, bytes)
}

pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
