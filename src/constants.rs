//! Named constants for well-known MIME types.

/// Default fallback type for unknown suffixes.
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

pub const APPLICATION_GZIP: &str = "application/gzip";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_PDF: &str = "application/pdf";
pub const APPLICATION_WASM: &str = "application/wasm";
pub const APPLICATION_XML: &str = "application/xml";
pub const APPLICATION_ZIP: &str = "application/zip";

pub const AUDIO_MPEG: &str = "audio/mpeg";
pub const AUDIO_OGG: &str = "audio/ogg";

pub const IMAGE_GIF: &str = "image/gif";
pub const IMAGE_JPEG: &str = "image/jpeg";
pub const IMAGE_PNG: &str = "image/png";
pub const IMAGE_SVG: &str = "image/svg+xml";
pub const IMAGE_WEBP: &str = "image/webp";

pub const TEXT_CSS: &str = "text/css";
pub const TEXT_CSV: &str = "text/csv";
pub const TEXT_HTML: &str = "text/html";
pub const TEXT_JAVASCRIPT: &str = "text/javascript";
pub const TEXT_PLAIN: &str = "text/plain";

pub const VIDEO_MP4: &str = "video/mp4";
pub const VIDEO_OGG: &str = "video/ogg";
pub const VIDEO_WEBM: &str = "video/webm";
