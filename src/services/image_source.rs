use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_SUFFIX: &str = ".png";

/// Resolve the `--images` argument to the list of images to process.
///
/// A directory yields the `.png` files directly inside it, sorted by path.
/// A regular file is taken as a single image whatever its extension. Any
/// other path yields no images.
pub fn resolve_images(path: &Path) -> Vec<PathBuf> {
    if path.is_dir() {
        return png_files_in_dir(path);
    }
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    tracing::warn!(path = %path.display(), "Image path is neither a file nor a directory");
    Vec::new()
}

/// Regular files ending in `.png` directly inside `dir`, sorted.
///
/// An unreadable directory yields an empty list.
pub fn png_files_in_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), %e, "Failed to read image directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(IMAGE_SUFFIX))
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "Found images");
    files
}
