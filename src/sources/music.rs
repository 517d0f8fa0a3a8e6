//! Music-library scan
//!
//! Yields every file and directory name under the music folder so the
//! script classifier can look for non-Latin writing systems in artist,
//! album, and track names.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Platform music directory (`XDG_MUSIC_DIR` / `~/Music`), overridable
/// via `--music-dir`.
pub fn default_dir() -> Option<PathBuf> {
    dirs::audio_dir().or_else(|| dirs::home_dir().map(|home| home.join("Music")))
}

/// Recursive entry names under `folder`, root excluded. Both directories
/// and files count, and names are not deduplicated across the tree: a
/// recurring artist name is a stronger signal. A missing folder is an
/// absent source: empty vec.
pub fn entry_names(folder: &Path) -> Vec<String> {
    if !folder.exists() {
        return Vec::new();
    }
    WalkDir::new(folder)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_folder_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(entry_names(&dir.path().join("no-music-here")).is_empty());
    }

    #[test]
    fn test_names_include_directories_and_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let artist = dir.path().join("Кино");
        fs::create_dir_all(&artist).expect("mkdir");
        fs::write(artist.join("Группа крови.mp3"), b"").expect("write");
        fs::write(dir.path().join("notes.txt"), b"").expect("write");

        let mut names = entry_names(dir.path());
        names.sort();
        assert_eq!(names, vec!["notes.txt", "Группа крови.mp3", "Кино"]);
    }

    #[test]
    fn test_root_itself_is_excluded() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(entry_names(dir.path()).is_empty());
    }
}
