// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary documents and databases
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create a DOCX container whose `word/document.xml` holds `document_xml`
    pub fn create_docx<P: AsRef<Path>>(&self, relative_path: P, document_xml: &str) -> PathBuf {
        self.create_zip(
            relative_path,
            &[
                ("[Content_Types].xml", "<Types/>"),
                ("word/document.xml", document_xml),
            ],
        )
    }

    /// Create a zip container with arbitrary parts
    pub fn create_zip<P: AsRef<Path>>(&self, relative_path: P, parts: &[(&str, &str)]) -> PathBuf {
        let file_path = self.prepare(relative_path);
        let file = File::create(&file_path).expect("Failed to create zip file");
        let mut writer = zip::ZipWriter::new(file);

        for (name, body) in parts {
            writer
                .start_file(*name, zip::write::SimpleFileOptions::default())
                .expect("Failed to start zip entry");
            writer.write_all(body.as_bytes()).expect("Failed to write zip entry");
        }

        writer.finish().expect("Failed to finish zip file");
        file_path
    }

    /// Create a plain file with given content
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.prepare(relative_path);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn prepare<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        file_path
    }
}
