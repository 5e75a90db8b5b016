//! Swift file discovery.

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects `.swift` files under `root`, honoring `.gitignore` files plus the
/// default and user-supplied folder exclusions. `include_folders` punches
/// holes in the exclusion list (e.g. force-include `vendor`).
pub(crate) fn collect_swift_files(
    root: &Path,
    exclude_folders: &[String],
    include_folders: &[String],
    verbose: bool,
) -> Vec<PathBuf> {
    if root.is_file() {
        return if root.extension().is_some_and(|ext| ext == "swift") {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        };
    }

    let mut excludes: Vec<String> = DEFAULT_EXCLUDE_FOLDERS()
        .iter()
        .map(|&s| s.to_owned())
        .collect();
    excludes.extend(exclude_folders.iter().cloned());
    excludes.retain(|e| !include_folders.contains(e));

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                let name = entry.file_name().to_string_lossy();
                return !excludes.iter().any(|ex| ex == name.as_ref());
            }
            true
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "swift") {
                    files.push(path.to_path_buf());
                }
            }
            Err(err) => {
                if verbose {
                    eprintln!("[VERBOSE] Skipping entry: {err}");
                }
            }
        }
    }
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project_tempdir() -> tempfile::TempDir {
        let target = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../target/tmp");
        fs::create_dir_all(&target).ok();
        tempfile::tempdir_in(target).unwrap()
    }

    #[test]
    fn collects_only_swift_files_and_prunes_excluded_dirs() {
        let dir = project_tempdir();
        fs::create_dir_all(dir.path().join("Sources")).unwrap();
        fs::create_dir_all(dir.path().join("Pods")).unwrap();
        fs::write(dir.path().join("Sources/App.swift"), "let a = 1\n").unwrap();
        fs::write(dir.path().join("Sources/README.md"), "docs\n").unwrap();
        fs::write(dir.path().join("Pods/Dep.swift"), "let b = 2\n").unwrap();

        let files = collect_swift_files(dir.path(), &[], &[], false);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Sources/App.swift"));
    }

    #[test]
    fn include_folders_override_default_exclusions() {
        let dir = project_tempdir();
        fs::create_dir_all(dir.path().join("Pods")).unwrap();
        fs::write(dir.path().join("Pods/Dep.swift"), "let b = 2\n").unwrap();

        let files = collect_swift_files(dir.path(), &[], &["Pods".to_owned()], false);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn single_file_path_is_returned_directly() {
        let dir = project_tempdir();
        let file = dir.path().join("One.swift");
        fs::write(&file, "let a = 1\n").unwrap();
        let files = collect_swift_files(&file, &[], &[], false);
        assert_eq!(files, vec![file]);
    }
}
