use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::source_files;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x = 1\n").unwrap();
}

fn collect(root: &Path, excludes: &[&str]) -> Vec<String> {
    let excludes: Vec<String> = excludes.iter().map(|s| s.to_string()).collect();
    let mut found: Vec<String> = source_files(root, &excludes)
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    found.sort();
    found
}

#[test]
fn finds_python_files_recursively() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a.py");
    touch(dir.path(), "pkg/b.py");
    touch(dir.path(), "pkg/sub/c.py");
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "pkg/data.json");

    assert_eq!(
        collect(dir.path(), &[]),
        ["a.py", "pkg/b.py", "pkg/sub/c.py"]
    );
}

#[test]
fn exclude_substring_prunes_directories() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "a.py");
    touch(dir.path(), ".venv/lib/site.py");
    touch(dir.path(), "src/__pycache__/a.cpython-312.py");
    touch(dir.path(), "node_modules/pkg/setup.py");

    let found = collect(dir.path(), &[".venv", "__pycache__", "node_modules"]);
    assert_eq!(found, ["a.py"]);
}

#[test]
fn exclude_matches_anywhere_in_path() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "keep/a.py");
    touch(dir.path(), "generated_stuff/b.py");

    let found = collect(dir.path(), &["generated"]);
    assert_eq!(found, ["keep/a.py"]);
}

#[test]
fn hidden_files_are_not_skipped() {
    // Standard filters are off, so dotfiles are regular candidates.
    let dir = TempDir::new().unwrap();
    touch(dir.path(), ".hidden.py");

    assert_eq!(collect(dir.path(), &[]), [".hidden.py"]);
}

#[test]
fn empty_directory_yields_nothing() {
    let dir = TempDir::new().unwrap();
    assert!(collect(dir.path(), &[]).is_empty());
}
