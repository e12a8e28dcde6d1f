//! Candidate picture index
//!
//! Scans a flat picture directory once per run and maps each file's base
//! name (filename minus extension) to its path. Iteration is sorted by
//! base name so fuzzy-match tie-breaking is deterministic.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recognized picture extensions, in exact-match probe order.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Default)]
pub struct PictureIndex {
    entries: BTreeMap<String, PathBuf>,
}

impl PictureIndex {
    /// Build the index from the files directly inside `dir`.
    ///
    /// A missing directory yields an empty index. Two files sharing a base
    /// name (e.g. `Alice.jpg` and `Alice.png`) collapse to one entry; the
    /// later file in sorted filename order wins.
    pub fn build(dir: &Path) -> Self {
        let mut entries = BTreeMap::new();

        if !dir.exists() {
            return Self { entries };
        }

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.into_path())
            .collect();
        files.sort();

        for path in files {
            if let Some(base) = picture_base_name(&path) {
                entries.insert(base, path);
            }
        }

        Self { entries }
    }

    pub fn get(&self, base_name: &str) -> Option<&Path> {
        self.entries.get(base_name).map(|p| p.as_path())
    }

    /// Candidates in sorted base-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Base name of a picture file, or `None` if the extension is not a
/// recognized picture format (case-insensitive).
fn picture_base_name(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_picture_base_name() {
        assert_eq!(
            picture_base_name(Path::new("a/Maria Ressa.jpg")),
            Some("Maria Ressa".to_string())
        );
        assert_eq!(
            picture_base_name(Path::new("Jamal-Khashoggi.WEBP")),
            Some("Jamal-Khashoggi".to_string())
        );
        assert_eq!(picture_base_name(Path::new("notes.txt")), None);
        assert_eq!(picture_base_name(Path::new("no_extension")), None);
    }

    #[test]
    fn test_build_missing_directory_is_empty() {
        let index = PictureIndex::build(Path::new("/nonexistent/pictures"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_filters_and_sorts() {
        let dir = std::env::temp_dir().join("photo-roster-test-index");
        fs::create_dir_all(&dir).unwrap();

        File::create(dir.join("Charlie.png")).unwrap();
        File::create(dir.join("alice.jpg")).unwrap();
        File::create(dir.join("Bob.GIF")).unwrap();
        File::create(dir.join("readme.txt")).unwrap();

        let index = PictureIndex::build(&dir);
        assert_eq!(index.len(), 3);

        let names: Vec<&str> = index.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Bob", "Charlie", "alice"]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_base_name_collision_last_write_wins() {
        let dir = std::env::temp_dir().join("photo-roster-test-collision");
        fs::create_dir_all(&dir).unwrap();

        // Sorted order: Alice.jpg before Alice.png, so the .png entry wins
        File::create(dir.join("Alice.jpg")).unwrap();
        File::create(dir.join("Alice.png")).unwrap();

        let index = PictureIndex::build(&dir);
        assert_eq!(index.len(), 1);
        let path = index.get("Alice").unwrap();
        assert_eq!(path.extension().unwrap(), "png");

        fs::remove_dir_all(&dir).ok();
    }
}
