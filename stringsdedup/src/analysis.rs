//! One-pass duplicate-key analysis over a `.strings` file.
//!
//! A [`FileAnalysis`] owns everything produced by a single scan: the verbatim
//! line sequence, the per-key occurrence index, and the first-occurrence map.
//! Duplicate groups are derived views borrowed from the index.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::error::Error;
use crate::line::{self, Line};

/// One recognized key-value occurrence in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// The localization key, extracted verbatim.
    pub key: String,
    /// The localized text, extracted verbatim.
    pub value: String,
    /// 1-based position of the line in the source file.
    pub line: usize,
}

/// Whether a duplicate group repeats a single value or mixes several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKind {
    /// All occurrences carry the same value: file bloat, safe to clean.
    SameValue,
    /// At least two occurrences disagree: a localization conflict.
    Conflicting,
}

/// A key with two or more occurrences, borrowed from a [`FileAnalysis`].
#[derive(Debug, Clone, Copy)]
pub struct DuplicateGroup<'a> {
    pub key: &'a str,
    /// All occurrences of the key, in ascending line order. Never empty;
    /// always length two or more when produced by `duplicate_groups`.
    pub occurrences: &'a [Occurrence],
}

impl DuplicateGroup<'_> {
    /// Classifies the group by exact string comparison against the first
    /// occurrence's value. No whitespace, case, or Unicode normalization.
    pub fn kind(&self) -> DuplicateKind {
        let first = &self.occurrences[0].value;
        if self.occurrences.iter().all(|occ| occ.value == *first) {
            DuplicateKind::SameValue
        } else {
            DuplicateKind::Conflicting
        }
    }
}

/// The result of one linear scan over one file.
///
/// All structures live only as long as this value; nothing persists across
/// invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileAnalysis {
    raw_lines: Vec<String>,
    index: BTreeMap<String, Vec<Occurrence>>,
    first: BTreeMap<String, Occurrence>,
}

impl FileAnalysis {
    /// Scans the given content line by line with a 1-based counter.
    ///
    /// Passthrough and unrecognized lines contribute only to the raw line
    /// sequence; entry lines are also appended to their key's occurrence list
    /// and registered as the key's first occurrence on first sight.
    pub fn parse(content: &str) -> Self {
        let mut analysis = FileAnalysis::default();

        for (index, raw) in content.lines().enumerate() {
            let number = index + 1;
            if let Line::Entry { key, value } = line::classify(raw) {
                let occurrence = Occurrence {
                    key: key.clone(),
                    value,
                    line: number,
                };
                analysis
                    .first
                    .entry(key.clone())
                    .or_insert_with(|| occurrence.clone());
                analysis.index.entry(key).or_default().push(occurrence);
            }
            analysis.raw_lines.push(raw.to_string());
        }

        analysis
    }

    /// Reads and analyzes a file.
    ///
    /// BOM-aware: UTF-16 `.strings` exports are decoded transparently, plain
    /// UTF-8 passes through. Fails with [`Error::FileAccess`] if the file
    /// cannot be opened and [`Error::Read`] on an I/O failure mid-scan; no
    /// partial analysis is ever returned.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file_access(path, e))?;

        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut content = String::new();
        decoder
            .read_to_string(&mut content)
            .map_err(|e| Error::read(path, e))?;

        Ok(Self::parse(&content))
    }

    /// The complete verbatim line sequence of the source file.
    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// The full occurrence index: key to all occurrences in line order.
    pub fn occurrences(&self) -> &BTreeMap<String, Vec<Occurrence>> {
        &self.index
    }

    /// The first occurrence of each distinct key.
    pub fn first_occurrences(&self) -> &BTreeMap<String, Occurrence> {
        &self.first
    }

    /// All occurrences of one key, empty if the key never appears.
    pub fn occurrences_of(&self, key: &str) -> &[Occurrence] {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys with two or more occurrences, in key order.
    pub fn duplicate_groups(&self) -> Vec<DuplicateGroup<'_>> {
        self.index
            .iter()
            .filter(|(_, occurrences)| occurrences.len() >= 2)
            .map(|(key, occurrences)| DuplicateGroup { key, occurrences })
            .collect()
    }

    /// Total number of lines recognized as entries.
    pub fn entry_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    /// Number of distinct keys seen.
    pub fn unique_key_count(&self) -> usize {
        self.index.len()
    }

    /// Number of entries beyond the first occurrence of their key, i.e. how
    /// many lines a clean pass would remove.
    pub fn duplicate_entry_count(&self) -> usize {
        self.index
            .values()
            .map(|occurrences| occurrences.len() - 1)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_counts_and_first_occurrences() {
        let content = "\"A\" = \"1\";\n// note\n\"B\" = \"2\";\n\"A\" = \"3\";\n";
        let analysis = FileAnalysis::parse(content);

        assert_eq!(analysis.raw_lines().len(), 4);
        assert_eq!(analysis.entry_count(), 3);
        assert_eq!(analysis.unique_key_count(), 2);
        assert_eq!(analysis.duplicate_entry_count(), 1);

        let first = &analysis.first_occurrences()["A"];
        assert_eq!(first.line, 1);
        assert_eq!(first.value, "1");
    }

    #[test]
    fn test_occurrence_lines_are_ascending() {
        let content = "\"k\" = \"a\";\n\"k\" = \"b\";\n\"k\" = \"c\";\n";
        let analysis = FileAnalysis::parse(content);
        let lines: Vec<usize> = analysis.occurrences_of("k").iter().map(|o| o.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_groups_require_two_occurrences() {
        let content = "\"solo\" = \"x\";\n\"dup\" = \"y\";\n\"dup\" = \"y\";\n";
        let analysis = FileAnalysis::parse(content);
        let groups = analysis.duplicate_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "dup");
        assert_eq!(groups[0].occurrences.len(), 2);
    }

    #[test]
    fn test_same_value_classification() {
        let content = "\"A\" = \"1\";\n\"A\" = \"1\";\n";
        let analysis = FileAnalysis::parse(content);
        assert_eq!(analysis.duplicate_groups()[0].kind(), DuplicateKind::SameValue);
    }

    #[test]
    fn test_conflicting_classification() {
        let content = "\"Hi\" = \"Hello\";\n\"Hi\" = \"Hola\";\n";
        let analysis = FileAnalysis::parse(content);
        let groups = analysis.duplicate_groups();
        assert_eq!(groups[0].kind(), DuplicateKind::Conflicting);
        assert_eq!(groups[0].occurrences[0].line, 1);
        assert_eq!(groups[0].occurrences[1].line, 2);
    }

    #[test]
    fn test_missing_key_has_no_occurrences() {
        let analysis = FileAnalysis::parse("\"a\" = \"1\";\n");
        assert!(analysis.occurrences_of("missing").is_empty());
    }

    #[test]
    fn test_read_from_missing_file_is_file_access_error() {
        let error = FileAnalysis::read_from("definitely/not/here.strings").unwrap_err();
        assert!(matches!(error, Error::FileAccess { .. }));
    }

    #[test]
    fn test_read_from_utf16_file_with_bom() {
        let mut bytes: Vec<u8> = vec![0xFF, 0xFE];
        for unit in "\"hello\" = \"world\";\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        let analysis = FileAnalysis::read_from(file.path()).unwrap();
        assert_eq!(analysis.entry_count(), 1);
        assert_eq!(analysis.first_occurrences()["hello"].value, "world");
    }
}
