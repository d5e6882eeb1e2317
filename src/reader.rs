// WHY: source readers for the two inputs of a review
// Documents are unpacked from DOCX containers, databases are read whole as UTF-8 text

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::ReaderConfig;
use crate::error::{Result, ReviewError};

/// Content part holding the body text of a DOCX container
pub const DOCUMENT_PART: &str = "word/document.xml";

const ZIP_MAGIC: &[u8; 4] = b"PK\x03\x04";

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Drop a leading UTF-8 byte order mark so the first line can anchor at `^`
pub(crate) fn strip_byte_order_mark(mut text: String) -> String {
    if text.starts_with(BYTE_ORDER_MARK) {
        text.drain(..BYTE_ORDER_MARK.len_utf8());
    }
    text
}

/// Statistics for a database import
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Return the raw markup text of a document's primary content part.
///
/// Zip containers (DOCX) yield their `word/document.xml` part. Any other file
/// is taken to be markup already (XML, HTML or plain text) and read as is.
pub fn read_document_markup<P: AsRef<Path>>(document: P) -> Result<String> {
    let path = document.as_ref();
    debug!("Reading document: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ReviewError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.starts_with(ZIP_MAGIC) {
        return read_container_part(path, bytes);
    }

    String::from_utf8(bytes).map_err(|_| ReviewError::DocumentEncoding { path: path.to_path_buf() })
}

fn read_container_part(path: &Path, bytes: Vec<u8>) -> Result<String> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).map_err(|source| {
        ReviewError::Container { path: path.to_path_buf(), source }
    })?;

    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ReviewError::MissingContentPart {
                path: path.to_path_buf(),
                part: DOCUMENT_PART,
            });
        }
        Err(source) => {
            return Err(ReviewError::Container { path: path.to_path_buf(), source });
        }
    };

    let mut raw = Vec::with_capacity(part.size() as usize);
    part.read_to_end(&mut raw).map_err(|source| ReviewError::DocumentRead {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Unpacked {} ({} bytes) from {}", DOCUMENT_PART, raw.len(), path.display());
    String::from_utf8(raw).map_err(|_| ReviewError::DocumentEncoding { path: path.to_path_buf() })
}

/// Reads abbreviation database files into memory
pub struct DatabaseReader {
    config: ReaderConfig,
}

impl DatabaseReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the full database text. Missing or non-UTF-8 files are fatal.
    pub fn read<P: AsRef<Path>>(&self, database: P) -> Result<(String, ReadStats)> {
        let path = database.as_ref();
        let start_time = Instant::now();

        let text = strip_byte_order_mark(if self.config.use_mmap {
            read_mapped(path)?
        } else {
            read_buffered(path)?
        });

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: text.lines().count() as u64,
            bytes_read: text.len() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        if stats.lines_read == 0 {
            warn!("Database {} is empty; every candidate will resolve to no matches", path.display());
        }

        info!(
            "Imported database {}: {} lines, {} bytes in {}ms",
            stats.file_path, stats.lines_read, stats.bytes_read, stats.duration_ms
        );

        Ok((text, stats))
    }
}

impl Default for DatabaseReader {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}

fn open_database(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| ReviewError::DatabaseRead { path: path.to_path_buf(), source })
}

fn read_buffered(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(open_database(path)?);
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .map_err(|source| ReviewError::DatabaseRead { path: path.to_path_buf(), source })?;

    String::from_utf8(raw).map_err(|_| ReviewError::DatabaseEncoding { path: path.to_path_buf() })
}

fn read_mapped(path: &Path) -> Result<String> {
    let file = open_database(path)?;
    let len = file
        .metadata()
        .map_err(|source| ReviewError::DatabaseRead { path: path.to_path_buf(), source })?
        .len();

    // zero-length files cannot be mapped on every platform
    if len == 0 {
        return Ok(String::new());
    }

    // SAFETY: the map is only read while `file` is open and is copied out before returning
    let mmap = unsafe { memmap2::Mmap::map(&file) }
        .map_err(|source| ReviewError::DatabaseRead { path: path.to_path_buf(), source })?;

    std::str::from_utf8(&mmap)
        .map(str::to_owned)
        .map_err(|_| ReviewError::DatabaseEncoding { path: path.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let file_path = dir.join(name);
        std::fs::write(&file_path, content).unwrap();
        file_path
    }

    fn create_docx(dir: &Path, name: &str, parts: &[(&str, &str)]) -> std::path::PathBuf {
        let file_path = dir.join(name);
        let file = File::create(&file_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (part, body) in parts {
            writer.start_file(*part, zip::write::SimpleFileOptions::default()).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        file_path
    }

    #[test]
    fn test_read_docx_document_part() {
        let temp_dir = TempDir::new().unwrap();
        let xml = "<w:body><w:t>the (MAB) pathway</w:t></w:body>";
        let path = create_docx(temp_dir.path(), "report.docx", &[("word/document.xml", xml)]);

        assert_eq!(read_document_markup(&path).unwrap(), xml);
    }

    #[test]
    fn test_docx_without_document_part() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_docx(temp_dir.path(), "bare.docx", &[("word/styles.xml", "<w:styles/>")]);

        let err = read_document_markup(&path).unwrap_err();
        assert!(matches!(err, ReviewError::MissingContentPart { part: DOCUMENT_PART, .. }));
    }

    #[test]
    fn test_corrupt_container() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "broken.docx", b"PK\x03\x04garbage");

        let err = read_document_markup(&path).unwrap_err();
        assert!(matches!(err, ReviewError::Container { .. }));
    }

    #[test]
    fn test_plain_markup_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "page.html", b"<p>Gene (GEF) found</p>");

        assert_eq!(read_document_markup(&path).unwrap(), "<p>Gene (GEF) found</p>");
    }

    #[test]
    fn test_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_document_markup(temp_dir.path().join("nope.docx")).unwrap_err();
        assert!(matches!(err, ReviewError::DocumentRead { .. }));
    }

    #[test]
    fn test_read_database_buffered_and_mapped() {
        let temp_dir = TempDir::new().unwrap();
        let content = "MAB\tMonoclonal Antibody\nGEF\tGuanine nucleotide exchange factor\n";
        let path = create_test_file(temp_dir.path(), "adam.txt", content.as_bytes());

        let (text, stats) = DatabaseReader::default().read(&path).unwrap();
        assert_eq!(text, content);
        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.bytes_read, content.len() as u64);

        let mapped = DatabaseReader::new(ReaderConfig { use_mmap: true });
        let (text, _) = mapped.read(&path).unwrap();
        assert_eq!(text, content);
    }

    #[test]
    fn test_database_byte_order_mark_is_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "bom.txt", "\u{FEFF}MAB\tMonoclonal Antibody\n".as_bytes());

        for use_mmap in [false, true] {
            let (text, stats) = DatabaseReader::new(ReaderConfig { use_mmap }).read(&path).unwrap();
            assert_eq!(text, "MAB\tMonoclonal Antibody\n");
            assert_eq!(stats.bytes_read, text.len() as u64);
        }
    }

    #[test]
    fn test_strip_byte_order_mark_only_at_start() {
        assert_eq!(strip_byte_order_mark("\u{FEFF}GEF".to_string()), "GEF");
        assert_eq!(strip_byte_order_mark("GEF\u{FEFF}".to_string()), "GEF\u{FEFF}");
        assert_eq!(strip_byte_order_mark(String::new()), "");
    }

    #[test]
    fn test_read_empty_database_mapped() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "empty.txt", b"");

        let reader = DatabaseReader::new(ReaderConfig { use_mmap: true });
        let (text, stats) = reader.read(&path).unwrap();
        assert!(text.is_empty());
        assert_eq!(stats.lines_read, 0);
    }

    #[test]
    fn test_missing_database() {
        let temp_dir = TempDir::new().unwrap();
        let err = DatabaseReader::default().read(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ReviewError::DatabaseRead { .. }));
    }

    #[test]
    fn test_database_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "bad.txt", &[0xFF, 0xFE, 0xFD]);

        let err = DatabaseReader::default().read(&path).unwrap_err();
        assert!(matches!(err, ReviewError::DatabaseEncoding { .. }));
    }
}
