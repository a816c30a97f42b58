//! Export file writes using the write-rename pattern.
//!
//! Bytes go to a sibling `{name}.tmp`, are flushed with `sync_all()`, then
//! renamed over the destination, so a crash mid-export never leaves a
//! truncated layout or floorplan behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically writes `data` to `path`, creating parent directories.
pub fn atomic_write(path: impl AsRef<Path>, data: &[u8]) -> std::io::Result<()> {
    let final_path = path.as_ref();
    let tmp_path = tmp_path_for(final_path);

    if let Some(parent) = final_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&tmp_path, final_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("roomplan_atomic_write_test_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_atomic_write_creates_file() {
        let dir = test_dir("creates_file");
        let path = dir.join("layout.json");

        atomic_write(&path, b"{\"rooms\":[]}").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"{\"rooms\":[]}");
        assert!(!dir.join("layout.json.tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let dir = test_dir("overwrites");
        let path = dir.join("floorplan.svg");

        atomic_write(&path, b"<svg/>").unwrap();
        atomic_write(&path, b"<svg></svg>").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"<svg></svg>");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let dir = test_dir("parent_dirs");
        let path = dir.join("exports/2024/layout.json");

        atomic_write(&path, b"nested").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"nested");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_replaces_stale_tmp() {
        let dir = test_dir("stale_tmp");
        let path = dir.join("layout.json");
        let tmp = dir.join("layout.json.tmp");

        fs::write(&path, b"original").unwrap();
        fs::write(&tmp, b"partial garbage").unwrap();

        atomic_write(&path, b"fresh").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"fresh");
        assert!(!tmp.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
