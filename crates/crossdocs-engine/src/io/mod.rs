//! Reading markdown files from a notes folder.

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a markdown file below the notes root
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    read_markdown(&relative_path.to_path(notes_root))
}

/// Read a markdown file from an absolute or working-directory path
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Scan for markdown files in the notes directory, sorted
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Markdown files as paths relative to the notes root, sorted
pub fn list_markdown_files(notes_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    let files = scan_markdown_files(notes_root)?;
    Ok(files
        .iter()
        .filter_map(|path| path.strip_prefix(notes_root).ok())
        .filter_map(|path| RelativePathBuf::from_path(path).ok())
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_and_load_files() {
        // Given a notes directory with markdown files
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "tasks.md", "- [ ] wash dishes\n- [x] pay bills");
        create_test_file(&notes_dir, "glossary.md", "Term\n: Definition text");

        // When scanning for files
        let files = scan_markdown_files(notes_dir.path()).unwrap();

        // Then we find the expected files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "tasks.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "glossary.md"));
    }

    #[test]
    fn test_handle_invalid_notes_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_markdown_files(&nonexistent_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("notes directory"));
    }

    #[test]
    fn test_list_relative_paths_in_nested_directories() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "root.md", "# Root file");
        create_test_file(&notes_dir, "journal/2024/day.md", "# Nested file");
        create_test_file(&notes_dir, "journal/image.png", "fake image data");

        let files = list_markdown_files(notes_dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                RelativePathBuf::from("journal/2024/day.md"),
                RelativePathBuf::from("root.md"),
            ]
        );
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "document.md", "# Markdown");
        create_test_file(&notes_dir, "config.json", "{}");

        let files = scan_markdown_files(notes_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "document.md");
    }

    #[test]
    fn test_validate_notes_dir() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());

        let result = validate_notes_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_validate_notes_dir_rejects_file() {
        let notes_dir = create_test_notes_dir();
        let file = create_test_file(&notes_dir, "note.md", "text");
        assert!(validate_notes_dir(&file).is_err());
    }

    #[test]
    fn test_read_file_success() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "test.md", "# Test Content\n\nParagraph");

        let content = read_file(RelativePath::new("test.md"), notes_dir.path()).unwrap();
        assert_eq!(content, "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_file_not_found() {
        let notes_dir = create_test_notes_dir();
        let result = read_file(RelativePath::new("nonexistent.md"), notes_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_markdown_by_path() {
        let notes_dir = create_test_notes_dir();
        let path = create_test_file(&notes_dir, "direct.md", ":fire:");
        assert_eq!(read_markdown(&path).unwrap(), ":fire:");
    }
}
