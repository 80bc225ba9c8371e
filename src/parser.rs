//! Parsing of `mime.types`-style association databases.
//!
//! The input is line-oriented text, optionally gzip-compressed:
//!
//! ```text
//! # comments run to end of line
//! image/jpeg jpeg jpg jpe
//! text/plain txt;text,log
//! video/jpg          # skipped: no suffix token
//! ```
//!
//! The first token on a line is a MIME type; every further token is a
//! suffix registered under it. Tokens are separated by any run of space,
//! tab, comma, or semicolon. Lines without at least one suffix contribute
//! nothing.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;

use flate2::read::GzDecoder;
use log::trace;

use crate::error::{Error, Result};
use crate::suffix::fold_key;

/// How a source byte sequence is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
    /// Try gzip first; fall back to plain text when the stream is not gzip.
    #[default]
    Auto,
    /// The source is a gzip stream; a decode failure is an error.
    Gzip,
    /// The source is plain text; no decompression attempt.
    Plain,
}

/// Reports whether the character separates tokens on a database line.
fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | ',' | ';')
}

/// Parser output: suffix keys mapped to the distinct MIME types seen for
/// them, both lowercased, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    types_by_suffix: HashMap<String, Vec<String>>,
    /// First-seen order of the suffix keys; keeps downstream index
    /// construction deterministic.
    order: Vec<String>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one (MIME type, suffix) association.
    ///
    /// Both identifiers are folded to lowercase; a stray leading dot on
    /// the suffix is stripped; duplicate pairs are suppressed.
    pub fn insert(&mut self, mime_type: &str, suffix: &str) {
        let suffix = fold_key(suffix.strip_prefix('.').unwrap_or(suffix));
        if suffix.is_empty() {
            return;
        }
        let mime_type = fold_key(mime_type);

        match self.types_by_suffix.entry(suffix.clone()) {
            Entry::Vacant(entry) => {
                self.order.push(suffix);
                entry.insert(vec![mime_type]);
            }
            Entry::Occupied(entry) => {
                let types = entry.into_mut();
                if !types.contains(&mime_type) {
                    types.push(mime_type);
                }
            }
        }
    }

    /// Types registered for a suffix (case-insensitive), in insertion order.
    pub fn get(&self, suffix: &str) -> Option<&[String]> {
        self.types_by_suffix.get(&fold_key(suffix)).map(Vec::as_slice)
    }

    /// Iterates suffix entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|suffix| (suffix.as_str(), self.types_by_suffix[suffix].as_slice()))
    }

    /// Number of distinct suffix keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Parses a byte source into a [`RawTable`].
///
/// With [`SourceEncoding::Auto`] the source is first treated as gzip; when
/// the stream is not valid gzip the original bytes are reinterpreted from
/// the start as plain text. The source is fully buffered, so nothing is
/// lost in the fallback. Bytes that decode neither way produce
/// [`Error::Source`].
///
/// # Examples
///
/// ```
/// use mime_db::{parse_source, SourceEncoding};
///
/// let raw = parse_source(b"image/jpeg jpg jpeg jpe", SourceEncoding::Auto).unwrap();
/// assert_eq!(raw.get("jpg"), Some(&["image/jpeg".to_string()][..]));
/// ```
pub fn parse_source(bytes: &[u8], encoding: SourceEncoding) -> Result<RawTable> {
    let text = decode_source(bytes, encoding)?;
    Ok(parse_text(&text))
}

/// Decodes the source bytes to text according to the encoding hint.
fn decode_source(bytes: &[u8], encoding: SourceEncoding) -> Result<String> {
    match encoding {
        SourceEncoding::Plain => text_of(bytes),
        SourceEncoding::Gzip => gunzip(bytes)
            .map_err(|err| Error::Source(format!("invalid gzip stream: {}", err))),
        SourceEncoding::Auto => match gunzip(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                trace!("gzip decode failed ({}), treating source as plain text", err);
                text_of(bytes)
            }
        },
    }
}

fn gunzip(bytes: &[u8]) -> std::io::Result<String> {
    let mut text = String::new();
    GzDecoder::new(bytes).read_to_string(&mut text)?;
    Ok(text)
}

fn text_of(bytes: &[u8]) -> Result<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => Err(Error::Source(
            "source is neither a gzip stream nor UTF-8 text".to_string(),
        )),
    }
}

/// Parses decoded database text, accumulating associations line by line.
fn parse_text(text: &str) -> RawTable {
    let mut table = RawTable::new();

    for line in text.lines() {
        // Truncate at the first '#': covers full-line and trailing comments
        let data = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };

        let mut tokens = data.split(is_delimiter).filter(|token| !token.is_empty());

        let mime_type = match tokens.next() {
            Some(token) => token,
            None => continue,
        };

        // A type with no suffix tokens contributes nothing
        for suffix in tokens {
            table.insert(mime_type, suffix);
        }
    }

    table
}
