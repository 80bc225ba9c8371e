//! The registry owning the active table and its reload lifecycle.
//!
//! A [`MimeRegistry`] holds exactly one piece of mutable state: the
//! pointer to the currently published [`MimeTable`]. Queries clone that
//! pointer under a brief read lock and run against the immutable snapshot,
//! so readers never block each other and never observe a table under
//! construction. A reload parses and builds the replacement completely off
//! to the side, then publishes it in a single pointer store; between
//! concurrent reloads, last writer wins.
//!
//! The module-level functions operate on a process-wide default registry,
//! populated on first use from the bundled `mime.types` snapshot.

use std::path::Path;
use std::sync::{Arc, RwLock};

use log::debug;
use once_cell::sync::Lazy;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::constants::APPLICATION_OCTET_STREAM;
use crate::error::{Error, Result};
use crate::parser::{parse_source, SourceEncoding};
use crate::suffix::{starts_with_ignore_case, suffix_of};
use crate::table::MimeTable;

const VIDEO_PREFIX: &str = "video/";
const AUDIO_PREFIX: &str = "audio/";
const IMAGE_PREFIX: &str = "image/";
const TEXT_PREFIX: &str = "text/";

/// Bundled default dataset: a snapshot of a standard system mime.types file.
static DEFAULT_DATASET: &[u8] = include_bytes!("../data/mime.types");

/// The process-wide registry backing the module-level functions.
static DEFAULT_REGISTRY: Lazy<MimeRegistry> = Lazy::new(MimeRegistry::with_default_dataset);

/// A replaceable, concurrently readable suffix/type lookup table.
pub struct MimeRegistry {
    /// The single mutable pointer: the currently published table.
    table: RwLock<Arc<MimeTable>>,
    /// Type returned when a file name resolves to no known suffix.
    fallback: RwLock<String>,
}

impl MimeRegistry {
    /// Creates a registry with an empty table.
    ///
    /// Until a reload populates it, every file-name lookup resolves to the
    /// fallback type.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Arc::new(MimeTable::empty())),
            fallback: RwLock::new(APPLICATION_OCTET_STREAM.to_string()),
        }
    }

    /// Creates a registry populated from the bundled mime.types snapshot.
    pub fn with_default_dataset() -> Self {
        let registry = Self::new();
        // The bundled snapshot is plain text; a damaged bundle degrades to
        // an empty, still usable table.
        if let Ok(raw) = parse_source(DEFAULT_DATASET, SourceEncoding::Plain) {
            registry.replace(MimeTable::build(&raw));
        }
        registry
    }

    /// Returns the currently published table.
    ///
    /// The snapshot is immutable; a concurrent reload publishes a new
    /// table without disturbing snapshots already handed out. Useful when
    /// several queries must see one consistent table.
    pub fn snapshot(&self) -> Arc<MimeTable> {
        self.table.read().unwrap().clone()
    }

    /// Publishes `table` as the active table in a single pointer store.
    fn replace(&self, table: MimeTable) {
        *self.table.write().unwrap() = Arc::new(table);
    }

    /// Replaces the active table from a byte source, auto-detecting gzip.
    ///
    /// The replacement is parsed and built completely before it is
    /// published; on error the previous table stays active.
    pub fn reload_from_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.reload_from_bytes_as(SourceEncoding::Auto, bytes)
    }

    /// Replaces the active table from a byte source with an explicit
    /// encoding hint.
    pub fn reload_from_bytes_as(&self, encoding: SourceEncoding, bytes: &[u8]) -> Result<()> {
        let raw = parse_source(bytes, encoding)?;
        let table = MimeTable::build(&raw);
        debug!(
            "reloaded mime table: {} suffixes, {} types",
            table.len(),
            table.all_types().len()
        );
        self.replace(table);
        Ok(())
    }

    /// Replaces the active table from an async byte reader.
    ///
    /// The reader is buffered in full before decoding so gzip-or-text
    /// detection can replay the source from its start.
    pub async fn reload_from_reader<R>(&self, mut reader: R) -> Result<()>
    where
        R: AsyncRead + Unpin,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        self.reload_from_bytes(&bytes)
    }

    /// Replaces the active table from a file, auto-detecting gzip.
    pub async fn reload_from_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = tokio::fs::read(path).await?;
        self.reload_from_bytes(&bytes)
    }

    /// The MIME type returned when no suffix match exists.
    pub fn fallback_mime_type(&self) -> String {
        self.fallback.read().unwrap().clone()
    }

    /// Overrides the fallback MIME type.
    pub fn set_fallback_mime_type(&self, mime_type: impl Into<String>) {
        *self.fallback.write().unwrap() = mime_type.into();
    }

    /// Returns the MIME types registered for a suffix (case-insensitive),
    /// in first-seen order, or `None` when the suffix is unknown.
    pub fn types_by_suffix(&self, suffix: &str) -> Option<Vec<String>> {
        self.snapshot().types_for_suffix(suffix).map(<[String]>::to_vec)
    }

    /// Returns the suffixes registered for a MIME type.
    ///
    /// An unknown type yields an empty vector; an empty `mime_type`
    /// argument is a caller error.
    pub fn extensions_by_type(&self, mime_type: &str) -> Result<Vec<String>> {
        if mime_type.is_empty() {
            return Err(Error::InvalidParameter(
                "mime type must not be empty".to_string(),
            ));
        }
        Ok(self.snapshot().suffixes_for_type(mime_type).to_vec())
    }

    /// Returns every distinct MIME type in the active table, in first-seen
    /// order.
    pub fn all_mime_types(&self) -> Vec<String> {
        self.snapshot().all_types().to_vec()
    }

    /// Returns the MIME types for a file name.
    ///
    /// The suffix is the substring strictly after the last `.`. A name
    /// with no dot, a dot-final name, or an unknown suffix resolves to a
    /// one-element vector holding the fallback type. An empty `file_name`
    /// argument is a caller error.
    pub fn types_by_file_name(&self, file_name: &str) -> Result<Vec<String>> {
        if file_name.is_empty() {
            return Err(Error::InvalidParameter(
                "file name must not be empty".to_string(),
            ));
        }
        Ok(self.resolve(file_name))
    }

    /// Returns the MIME types for a file name without applying the
    /// fallback: `None` when the name has no suffix or the suffix is
    /// unknown.
    pub fn try_types_by_file_name(&self, file_name: &str) -> Option<Vec<String>> {
        suffix_of(file_name).and_then(|suffix| self.types_by_suffix(suffix))
    }

    /// Fallback-inclusive resolution shared by the file-name lookup and
    /// the category predicates.
    fn resolve(&self, file_name: &str) -> Vec<String> {
        match self.try_types_by_file_name(file_name) {
            Some(types) => types,
            None => vec![self.fallback_mime_type()],
        }
    }

    fn is_category(&self, file_name: &str, prefix: &str) -> bool {
        self.resolve(file_name)
            .iter()
            .any(|mime_type| starts_with_ignore_case(mime_type, prefix))
    }

    /// True when at least one resolved type for the file name is `video/*`.
    pub fn is_video(&self, file_name: &str) -> bool {
        self.is_category(file_name, VIDEO_PREFIX)
    }

    /// True when at least one resolved type for the file name is `audio/*`.
    pub fn is_audio(&self, file_name: &str) -> bool {
        self.is_category(file_name, AUDIO_PREFIX)
    }

    /// True when at least one resolved type for the file name is `image/*`.
    pub fn is_image(&self, file_name: &str) -> bool {
        self.is_category(file_name, IMAGE_PREFIX)
    }

    /// True when at least one resolved type for the file name is `text/*`.
    pub fn is_text(&self, file_name: &str) -> bool {
        self.is_category(file_name, TEXT_PREFIX)
    }

    /// True when the file name resolves to a video, audio, or image type.
    pub fn is_media(&self, file_name: &str) -> bool {
        self.resolve(file_name).iter().any(|mime_type| {
            starts_with_ignore_case(mime_type, VIDEO_PREFIX)
                || starts_with_ignore_case(mime_type, AUDIO_PREFIX)
                || starts_with_ignore_case(mime_type, IMAGE_PREFIX)
        })
    }
}

impl Default for MimeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide default registry, populated from the bundled dataset
/// on first use.
pub fn default_registry() -> &'static MimeRegistry {
    &DEFAULT_REGISTRY
}

/// Returns the MIME types for a file name from the default registry.
///
/// # Examples
///
/// ```
/// use mime_db::types_by_file_name;
///
/// assert_eq!(types_by_file_name("photo.png").unwrap(), vec!["image/png".to_string()]);
/// assert_eq!(
///     types_by_file_name("noextension").unwrap(),
///     vec!["application/octet-stream".to_string()]
/// );
/// ```
pub fn types_by_file_name(file_name: &str) -> Result<Vec<String>> {
    DEFAULT_REGISTRY.types_by_file_name(file_name)
}

/// Returns the MIME types for a file name from the default registry,
/// without applying the fallback.
pub fn try_types_by_file_name(file_name: &str) -> Option<Vec<String>> {
    DEFAULT_REGISTRY.try_types_by_file_name(file_name)
}

/// Returns the MIME types registered for a suffix in the default registry.
pub fn types_by_suffix(suffix: &str) -> Option<Vec<String>> {
    DEFAULT_REGISTRY.types_by_suffix(suffix)
}

/// Returns the suffixes registered for a MIME type in the default registry.
///
/// # Examples
///
/// ```
/// use mime_db::extensions_by_type;
///
/// let exts = extensions_by_type("image/jpeg").unwrap();
/// assert!(exts.contains(&"jpg".to_string()));
/// assert!(exts.contains(&"jpeg".to_string()));
/// ```
pub fn extensions_by_type(mime_type: &str) -> Result<Vec<String>> {
    DEFAULT_REGISTRY.extensions_by_type(mime_type)
}

/// Returns every distinct MIME type in the default registry.
pub fn all_mime_types() -> Vec<String> {
    DEFAULT_REGISTRY.all_mime_types()
}

/// Replaces the default registry's table from a byte source.
pub fn reload_from_bytes(bytes: &[u8]) -> Result<()> {
    DEFAULT_REGISTRY.reload_from_bytes(bytes)
}

/// The default registry's fallback MIME type.
pub fn fallback_mime_type() -> String {
    DEFAULT_REGISTRY.fallback_mime_type()
}

/// Overrides the default registry's fallback MIME type.
pub fn set_fallback_mime_type(mime_type: impl Into<String>) {
    DEFAULT_REGISTRY.set_fallback_mime_type(mime_type)
}

/// True when the file name resolves to a `video/*` type in the default registry.
pub fn is_video(file_name: &str) -> bool {
    DEFAULT_REGISTRY.is_video(file_name)
}

/// True when the file name resolves to an `audio/*` type in the default registry.
pub fn is_audio(file_name: &str) -> bool {
    DEFAULT_REGISTRY.is_audio(file_name)
}

/// True when the file name resolves to an `image/*` type in the default registry.
pub fn is_image(file_name: &str) -> bool {
    DEFAULT_REGISTRY.is_image(file_name)
}

/// True when the file name resolves to a `text/*` type in the default registry.
pub fn is_text(file_name: &str) -> bool {
    DEFAULT_REGISTRY.is_text(file_name)
}

/// True when the file name resolves to a video, audio, or image type in
/// the default registry.
pub fn is_media(file_name: &str) -> bool {
    DEFAULT_REGISTRY.is_media(file_name)
}
