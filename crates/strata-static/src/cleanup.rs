//! Output space cleanup.

use std::fs;
use std::path::Path;

use crate::builder::BuildError;

/// Remove stale generated output from the output root.
///
/// Every direct child of `root` whose basename is not in `permanent` is
/// removed: directories recursively, files individually. The allow-list is
/// consulted only at the root level; nothing below a removable directory is
/// inspected. The root itself must already exist and be listable.
pub fn clear_output(root: &Path, permanent: &[String]) -> Result<(), BuildError> {
    let entries = fs::read_dir(root).map_err(|e| {
        BuildError::Cleanup(format!("cannot list {}: {}", root.display(), e))
    })?;

    for entry in entries {
        let entry =
            entry.map_err(|e| BuildError::Cleanup(format!("cannot list {}: {}", root.display(), e)))?;

        let name = entry.file_name();
        if permanent.iter().any(|p| p.as_str() == name) {
            continue;
        }

        let path = entry.path();
        let result = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|e| {
            BuildError::Cleanup(format!("cannot remove {}: {}", path.display(), e))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(root: &Path) -> Vec<String> {
        let mut out: Vec<String> = fs::read_dir(root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn removes_files_and_directories_but_keeps_permanent() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "stale").unwrap();
        fs::write(temp.path().join("CNAME"), "example.com").unwrap();
        fs::create_dir_all(temp.path().join("about")).unwrap();
        fs::write(temp.path().join("about/index.html"), "stale").unwrap();
        fs::create_dir_all(temp.path().join("static")).unwrap();
        fs::write(temp.path().join("static/main.css"), "body{}").unwrap();

        let permanent = vec!["CNAME".to_string(), "static".to_string()];
        clear_output(temp.path(), &permanent).unwrap();

        assert_eq!(names(temp.path()), vec!["CNAME", "static"]);
        // Contents below a permanent directory are untouched
        assert!(temp.path().join("static/main.css").exists());
    }

    #[test]
    fn permanence_is_not_consulted_below_the_root() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("old/static")).unwrap();

        clear_output(temp.path(), &["static".to_string()]).unwrap();

        // "old" is removable, so the nested "static" goes with it
        assert!(names(temp.path()).is_empty());
    }

    #[test]
    fn clearing_an_already_clean_root_is_idempotent() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("CNAME"), "example.com").unwrap();
        let permanent = vec!["CNAME".to_string()];

        clear_output(temp.path(), &permanent).unwrap();
        clear_output(temp.path(), &permanent).unwrap();

        assert_eq!(names(temp.path()), vec!["CNAME"]);
    }

    #[test]
    fn missing_root_is_a_cleanup_error() {
        let temp = tempdir().unwrap();
        let err = clear_output(&temp.path().join("nope"), &[]).unwrap_err();
        assert!(matches!(err, BuildError::Cleanup(_)));
    }
}
