use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Recursively copies `source` into `destination`, creating directories as needed.
pub fn copy_dir_all(source: &Path, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = destination.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Directory entries sorted by file name, hidden entries skipped.
pub fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        entries.push(entry);
    }
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_dir_all_copies_nested_files() {
        let source = TempDir::new().unwrap();
        std::fs::create_dir_all(source.path().join("src/App")).unwrap();
        std::fs::write(source.path().join("src/App/main.cpp"), "int main() {}").unwrap();

        let target = TempDir::new().unwrap();
        let destination = target.path().join("copy");
        copy_dir_all(source.path(), &destination).unwrap();

        let copied = std::fs::read_to_string(destination.join("src/App/main.cpp")).unwrap();
        assert_eq!(copied, "int main() {}");
    }

    #[test]
    fn test_sorted_entries_skips_hidden() {
        let dir = TempDir::new().unwrap();
        for name in ["b", "a", ".git"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        let names: Vec<String> = sorted_entries(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
