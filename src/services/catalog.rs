use crate::models::{Catalog, ProviderField, ProviderRecord};
use chardetng::EncodingDetector;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// Errors that can occur while loading the provider catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Provider catalog not found, expected it at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read provider catalog: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse provider catalog: {0}")]
    CsvError(#[from] csv::Error),
}

/// Decode raw catalog bytes into text
///
/// A byte order mark wins; otherwise the encoding is guessed from the content.
/// Malformed sequences are replaced rather than rejected.
pub fn decode_catalog_bytes(bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guessed = detector.guess(None, true);

    // decode() sniffs the BOM itself and strips it from the output
    let (text, encoding, had_errors) = guessed.decode(bytes);

    if had_errors {
        tracing::warn!("Catalog contains bytes invalid in {}, replaced", encoding.name());
    } else {
        tracing::debug!("Decoded catalog as {}", encoding.name());
    }

    text.into_owned()
}

/// Parse catalog text into provider records
///
/// The first row is the header. Unknown columns are ignored, missing columns
/// and empty cells read as absent, short rows are padded. Records with every
/// attribute empty are dropped. Fields beyond the header are ignored.
pub fn parse_catalog(text: &str) -> Result<Vec<ProviderRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for field in ProviderField::ALL {
        if !headers.iter().any(|h| h == field.header()) {
            tracing::warn!("Catalog has no \"{}\" column, treating it as empty", field.header());
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;
    let mut row = csv::StringRecord::new();

    while reader.read_record(&mut row)? {
        // Pad short rows and cut long ones so every row lines up with the header
        while row.len() < headers.len() {
            row.push_field("");
        }
        row.truncate(headers.len());

        let record: ProviderRecord = row.deserialize(Some(&headers))?;
        if record.is_blank() {
            dropped += 1;
            continue;
        }
        records.push(record);
    }

    if dropped > 0 {
        tracing::debug!("Dropped {} blank catalog rows", dropped);
    }

    Ok(records)
}

/// Load a catalog snapshot from a file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::IoError(e),
    })?;

    let text = decode_catalog_bytes(&bytes);
    let records = parse_catalog(&text)?;

    tracing::info!("Loaded {} providers from {}", records.len(), path.display());

    Ok(Catalog::new(records))
}

/// Holds the current catalog snapshot
///
/// Readers take an `Arc` to the snapshot and keep it for the whole request.
/// A reload builds the new catalog completely before swapping it in, so a
/// reader sees either the old or the new catalog, never a mix.
pub struct CatalogStore {
    path: PathBuf,
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    /// Load the catalog at `path` and build a store around it
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, CatalogError> {
        let path = path.into();
        let catalog = load_catalog(&path)?;

        Ok(Self {
            path,
            current: RwLock::new(Arc::new(catalog)),
        })
    }

    /// Build a store around an already loaded catalog
    pub fn from_catalog<P: Into<PathBuf>>(path: P, catalog: Catalog) -> Self {
        Self {
            path: path.into(),
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current catalog snapshot
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Re-read the catalog file and swap it in
    ///
    /// On failure the previous snapshot stays in place.
    pub fn reload(&self) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = Arc::new(load_catalog(&self.path)?);
        self.replace(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Swap in a new snapshot
    pub fn replace(&self, catalog: Arc<Catalog>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = catalog;
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("path", &self.path)
            .field("providers", &self.snapshot().len())
            .finish()
    }
}
