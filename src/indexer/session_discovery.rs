use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const SESSION_FILE_EXTENSION: &str = "jsonl";

/// Find every `*.jsonl` file below the sessions directory
///
/// Pi stores one directory per working directory, each holding one file per session,
/// but any nesting depth is accepted. Traversal is sorted by file name, so the result
/// is deterministic for an unchanged tree.
///
/// Returns an empty Vec if the directory doesn't exist (not an error). Unreadable
/// subdirectories are skipped, with a warning when `verbose` is set.
///
/// Symlinked directories are not descended into. Symlinks to regular files are kept.
pub fn discover_session_files(sessions_dir: &Path, verbose: bool) -> Vec<PathBuf> {
    if !sessions_dir.is_dir() {
        return Vec::new();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(sessions_dir).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if verbose {
                    eprintln!("Warning: Skipping unreadable path: {}", e);
                }
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        if entry.path().extension().is_some_and(|ext| ext == SESSION_FILE_EXTENSION) {
            files.push(entry.into_path());
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, "{}").expect("Failed to write file");
    }

    #[test]
    fn test_discover_nested_session_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("--home-u-proj--/2025-12-01_a.jsonl"));
        touch(&dir.path().join("--home-u-other--/2025-11-30_b.jsonl"));
        touch(&dir.path().join("deep/er/still/c.jsonl"));

        let files = discover_session_files(dir.path(), false);
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.extension().unwrap() == "jsonl"));
    }

    #[test]
    fn test_ignores_other_extensions_and_directories() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("proj/notes.txt"));
        touch(&dir.path().join("proj/session.jsonl.bak"));
        touch(&dir.path().join("proj/session.json"));
        fs::create_dir_all(dir.path().join("looks-like.jsonl")).unwrap();
        touch(&dir.path().join("proj/real.jsonl"));

        let files = discover_session_files(dir.path(), false);
        assert_eq!(files, vec![dir.path().join("proj/real.jsonl")]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(discover_session_files(&dir.path().join("nope"), false).is_empty());
    }

    #[test]
    fn test_root_that_is_a_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("sessions");
        touch(&file);
        assert!(discover_session_files(&file, false).is_empty());
    }

    #[test]
    fn test_order_is_deterministic() {
        let dir = TempDir::new().unwrap();
        for name in ["b/2.jsonl", "a/3.jsonl", "c/1.jsonl", "a/1.jsonl"] {
            touch(&dir.path().join(name));
        }

        let first = discover_session_files(dir.path(), false);
        let second = discover_session_files(dir.path(), false);
        assert_eq!(first, second);
        assert_eq!(first[0], dir.path().join("a/1.jsonl"));
        assert_eq!(first[3], dir.path().join("c/1.jsonl"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_included() {
        let dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("real.jsonl");
        touch(&target);
        fs::create_dir_all(dir.path().join("proj")).unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("proj/link.jsonl")).unwrap();

        let files = discover_session_files(dir.path(), false);
        assert_eq!(files, vec![dir.path().join("proj/link.jsonl")]);
    }
}
