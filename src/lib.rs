//! Bidirectional lookup between MIME media types and file-name suffixes.
//!
//! The lookup table is built from `mime.types`-style databases:
//! line-oriented, comment-aware text, optionally gzip-compressed. A
//! bundled snapshot of a standard system `mime.types` file backs the
//! default registry, and the whole table can be replaced at runtime from a
//! new source without blocking concurrent readers.
//!
//! Queries and parsing are synchronous; file and stream I/O for reloads is
//! async-first using tokio.

pub mod constants;
pub mod error;
pub mod parser;
pub mod registry;
pub mod suffix;
pub mod table;

// Re-export commonly used types
pub use error::{Error, Result};
pub use parser::{parse_source, RawTable, SourceEncoding};
pub use registry::{
    all_mime_types, default_registry, extensions_by_type, fallback_mime_type, is_audio, is_image,
    is_media, is_text, is_video, reload_from_bytes, set_fallback_mime_type, try_types_by_file_name,
    types_by_file_name, types_by_suffix, MimeRegistry,
};
pub use suffix::suffix_of;
pub use table::MimeTable;
