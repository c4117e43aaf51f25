use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Build a lazy iterator over Python source files under `root`.
///
/// Standard gitignore filters are disabled: exclusion is governed solely by
/// the configured path substrings, so the scan sees the same files a plain
/// recursive glob would. Excluded directories are pruned before descent.
///
/// The caller is expected to have validated that `root` exists and is a
/// directory; unreadable entries below it are logged and skipped.
pub fn source_files(root: &Path, excludes: &[String]) -> impl Iterator<Item = PathBuf> + use<> {
    let excludes = excludes.to_vec();
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let path = entry.path().to_string_lossy();
            !excludes.iter().any(|pattern| path.contains(pattern.as_str()))
        })
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("walk error: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
