// src/client/form.rs
//
// Multipart payload of an upload

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::DetectionMethod;

/// Form field carrying the audio file
pub const FILE_FIELD: &str = "file";
/// Form field carrying the method selection
pub const METHOD_FIELD: &str = "method";

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("Not a file path: {}", path.display()))?;
        let content = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self { file_name, content })
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// State of the upload form: at most one file, exactly one method
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file: Option<SelectedFile>,
    pub method: DetectionMethod,
}

impl UploadForm {
    pub fn new(method: DetectionMethod) -> Self {
        Self { file: None, method }
    }

    pub fn with_file(mut self, file: SelectedFile) -> Self {
        self.file = Some(file);
        self
    }
}
