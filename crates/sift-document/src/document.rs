//! Line-oriented text documents.

use std::{fs, ops::Range, path::Path};

use crate::DocumentError;

/// A text document split into lines.
///
/// Lines are indexed from zero internally; reported ranges are one-indexed. Line
/// terminators (`\n` or `\r\n`) are not part of the stored lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifying path or name.
    path: String,
    /// Full raw content.
    content: String,
    /// Content split into lines.
    lines: Vec<String>,
}

impl Document {
    /// Creates a document from raw content.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = content.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            content,
            lines,
        }
    }

    /// Creates a document from pre-split lines. The raw content is the lines joined
    /// with `\n`.
    pub fn from_lines<I, S>(path: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            path: path.into(),
            content: lines.join("\n"),
            lines,
        }
    }

    /// Reads a document from disk, using the path as its identifier.
    ///
    /// Files with a binary extension are rejected without being read. Invalid UTF-8
    /// is replaced rather than rejected.
    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        if is_binary_file(path) {
            return Err(DocumentError::BinaryFileType {
                path: path.to_path_buf(),
            });
        }
        let bytes = fs::read(path).map_err(|source| DocumentError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::new(path.display().to_string(), content))
    }

    /// Checks that the document can be scored.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.path.trim().is_empty() {
            return Err(DocumentError::MissingPath);
        }
        if self.content.contains('\0') {
            return Err(DocumentError::BinaryContent {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Identifying path or name.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines in a zero-indexed half-open range with `\n`.
    ///
    /// The range is clamped to the document bounds.
    pub fn join_lines(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        self.lines[start..end].join("\n")
    }
}

/// Checks if a file is likely binary based on its extension.
pub fn is_binary_file(path: &Path) -> bool {
    let binary_extensions = [
        // Compiled/executable
        "exe", "dll", "so", "dylib", "o", "a", "lib", "obj", "class", "pyc", "pyo", "wasm",
        // Archives
        "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "jar", "war", "ear", // Images
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "psd", // Audio/Video
        "mp3", "mp4", "wav", "flac", "ogg", "avi", "mkv", "mov", "wmv", "webm",
        // Documents (binary)
        "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", // Databases
        "db", "sqlite", "mdb", // Fonts
        "ttf", "otf", "woff", "woff2", "eot",
    ];

    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| binary_extensions.contains(&ext.to_lowercase().as_str()))
}
