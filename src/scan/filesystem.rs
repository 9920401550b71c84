use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regular files under `root`, ordered by file name at every level.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            extensions.iter().any(|wanted| {
                wanted
                    .trim()
                    .trim_start_matches('.')
                    .eq_ignore_ascii_case(extension)
            })
        })
        .unwrap_or(false)
}
