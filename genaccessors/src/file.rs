//! Writing generated modules to disk.

use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to `path` unless the file already holds exactly that text.
///
/// Creates missing parent directories. Returns `true` when the file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> io::Result<bool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let unchanged = match fs::read_to_string(path) {
        Ok(existing) => existing == contents,
        Err(_) => false,
    };
    if unchanged {
        return Ok(false);
    }

    fs::write(path, contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_then_skips_identical_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("GenAccessors.elm");

        assert!(write_if_changed(&path, "module A\n").unwrap());
        assert!(!write_if_changed(&path, "module A\n").unwrap());
        assert!(write_if_changed(&path, "module B\n").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "module B\n");
    }
}
