//! The immutable active table: a bidirectional suffix/type index.

use std::collections::HashMap;

use crate::parser::RawTable;
use crate::suffix::fold_key;

/// A bidirectional index between file suffixes and MIME types.
///
/// Built once from parser output and never mutated afterwards; the
/// registry replaces whole tables on reload, so a published table can be
/// read without synchronization.
#[derive(Debug, Default)]
pub struct MimeTable {
    /// suffix -> MIME types, first-seen order, duplicate-free
    suffix_to_types: HashMap<String, Vec<String>>,
    /// MIME type -> suffixes, first-seen order, duplicate-free
    type_to_suffixes: HashMap<String, Vec<String>>,
    /// Every distinct MIME type, first-seen order
    all_types: Vec<String>,
}

impl MimeTable {
    /// An empty table: every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the bidirectional index from parser output.
    ///
    /// A pure in-memory construction: no I/O, deterministic for a given
    /// input. Suffix and type enumeration follow first-seen order of the
    /// raw table.
    pub fn build(raw: &RawTable) -> Self {
        let mut table = Self::default();

        for (suffix, types) in raw.iter() {
            table
                .suffix_to_types
                .insert(suffix.to_string(), types.to_vec());

            for mime_type in types {
                let suffixes = table
                    .type_to_suffixes
                    .entry(mime_type.clone())
                    .or_default();
                if !suffixes.iter().any(|s| s == suffix) {
                    suffixes.push(suffix.to_string());
                }

                if !table.all_types.contains(mime_type) {
                    table.all_types.push(mime_type.clone());
                }
            }
        }

        table
    }

    /// Types registered for a suffix (case-insensitive), in first-seen
    /// order. `None` when the suffix is not a key in the table.
    pub fn types_for_suffix(&self, suffix: &str) -> Option<&[String]> {
        self.suffix_to_types
            .get(&fold_key(suffix))
            .map(Vec::as_slice)
    }

    /// Suffixes registered for a MIME type (case-insensitive).
    ///
    /// Unknown types yield an empty slice, not an error.
    pub fn suffixes_for_type(&self, mime_type: &str) -> &[String] {
        self.type_to_suffixes
            .get(&fold_key(mime_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every distinct MIME type in the table, in first-seen order.
    pub fn all_types(&self) -> &[String] {
        &self.all_types
    }

    /// Number of suffix keys in the table.
    pub fn len(&self) -> usize {
        self.suffix_to_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix_to_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_source, SourceEncoding};

    fn sample() -> MimeTable {
        let input = b"video/ogg ogv ogg\n\
                      audio/ogg oga ogg spx\n\
                      image/jpeg jpeg jpg jpe\n\
                      video/mp4 mp4\n";
        MimeTable::build(&parse_source(input, SourceEncoding::Plain).unwrap())
    }

    #[test]
    fn test_build_forward_lookup() {
        let table = sample();
        assert_eq!(
            table.types_for_suffix("ogg"),
            Some(&["video/ogg".to_string(), "audio/ogg".to_string()][..])
        );
        assert_eq!(
            table.types_for_suffix("mp4"),
            Some(&["video/mp4".to_string()][..])
        );
        assert_eq!(table.types_for_suffix("bogus"), None);
    }

    #[test]
    fn test_build_reverse_lookup() {
        let table = sample();
        assert_eq!(
            table.suffixes_for_type("image/jpeg"),
            &["jpeg".to_string(), "jpg".to_string(), "jpe".to_string()]
        );
        assert_eq!(
            table.suffixes_for_type("audio/ogg"),
            &["oga".to_string(), "ogg".to_string(), "spx".to_string()]
        );
        assert!(table.suffixes_for_type("application/unknown").is_empty());
    }

    #[test]
    fn test_build_all_types_first_seen_order() {
        let table = sample();
        assert_eq!(
            table.all_types(),
            &[
                "video/ogg".to_string(),
                "audio/ogg".to_string(),
                "image/jpeg".to_string(),
                "video/mp4".to_string(),
            ]
        );
    }

    #[test]
    fn test_lookups_fold_case() {
        let table = sample();
        assert_eq!(
            table.types_for_suffix("JPG"),
            table.types_for_suffix("jpg")
        );
        assert_eq!(
            table.suffixes_for_type("IMAGE/JPEG"),
            table.suffixes_for_type("image/jpeg")
        );
    }

    #[test]
    fn test_bidirectional_consistency() {
        // typeToSuffixes[t] contains s iff suffixToTypes[s] contains t
        let table = sample();

        for mime_type in table.all_types() {
            let suffixes = table.suffixes_for_type(mime_type);
            assert!(!suffixes.is_empty());
            for suffix in suffixes {
                let types = table.types_for_suffix(suffix).unwrap();
                assert!(
                    types.contains(mime_type),
                    "{} missing from types of {}",
                    mime_type,
                    suffix
                );
            }
        }

        for suffix in ["ogv", "ogg", "oga", "spx", "jpeg", "jpg", "jpe", "mp4"] {
            let types = table.types_for_suffix(suffix).unwrap();
            assert!(!types.is_empty());
            for mime_type in types {
                assert!(table.all_types().contains(mime_type));
                assert!(
                    table.suffixes_for_type(mime_type).iter().any(|s| s == suffix),
                    "{} missing from suffixes of {}",
                    suffix,
                    mime_type
                );
            }
        }
    }

    #[test]
    fn test_empty_table() {
        let table = MimeTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.all_types().is_empty());
        assert_eq!(table.types_for_suffix("txt"), None);
        assert!(table.suffixes_for_type("text/plain").is_empty());
    }
}
