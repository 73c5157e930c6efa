//! Deduplicated output generation.
//!
//! The generator re-classifies every raw line independently and keeps an
//! emission set of keys already written, so only the first physical occurrence
//! of each key survives. Passthrough and unrecognized lines always survive.
//! The result is a strict subsequence of the input lines in original order.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::line::{self, Line};

/// Returns the lines that survive deduplication, borrowed from `raw_lines`.
///
/// An entry line is dropped entirely (the whole physical line, trailing
/// content included) when its key has already been emitted during this pass.
pub fn cleaned_lines(raw_lines: &[String]) -> Vec<&str> {
    let mut emitted: HashSet<String> = HashSet::new();
    let mut survivors = Vec::with_capacity(raw_lines.len());

    for raw in raw_lines {
        match line::classify(raw) {
            Line::Entry { key, .. } => {
                if emitted.insert(key) {
                    survivors.push(raw.as_str());
                }
            }
            Line::Passthrough | Line::Unrecognized => survivors.push(raw.as_str()),
        }
    }

    survivors
}

/// Writes the cleaned line sequence to `destination`, creating any missing
/// parent directories, and returns the number of duplicate lines removed.
///
/// The source file is never opened for writing; guarding against a
/// destination that aliases the source is the caller's responsibility.
pub fn write_cleaned<P: AsRef<Path>>(raw_lines: &[String], destination: P) -> Result<usize, Error> {
    let destination = destination.as_ref();

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::write(destination, e))?;
        }
    }

    let survivors = cleaned_lines(raw_lines);

    let file = File::create(destination).map_err(|e| Error::write(destination, e))?;
    let mut writer = BufWriter::new(file);
    for line in &survivors {
        writeln!(writer, "{line}").map_err(|e| Error::write(destination, e))?;
    }
    writer.flush().map_err(|e| Error::write(destination, e))?;

    Ok(raw_lines.len() - survivors.len())
}
