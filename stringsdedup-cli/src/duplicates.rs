//! The `duplicates` subcommand: report duplicate keys and optionally write a
//! cleaned copy in the same invocation.

use std::fmt::Write as _;
use std::fs;

use serde_json::json;
use stringsdedup::{DuplicateKind, Error, FileAnalysis, write_cleaned};

use crate::validation::ensure_clean_destination;

#[derive(Debug, Clone)]
pub struct DuplicatesOptions {
    pub input: String,
    /// Write the report here instead of stdout.
    pub output: Option<String>,
    /// Write a cleaned copy (duplicates removed) here.
    pub clean: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

pub fn run(options: &DuplicatesOptions) -> Result<(), Error> {
    // A clean destination aliasing the input is a configuration error;
    // reject it before anything is read or written.
    if let Some(clean) = &options.clean {
        ensure_clean_destination(&options.input, clean)?;
    }

    let analysis = FileAnalysis::read_from(&options.input)?;

    let report = if options.json {
        render_json(&options.input, &analysis)
    } else {
        render_text(&analysis)
    };

    match &options.output {
        Some(path) => fs::write(path, &report).map_err(|e| Error::write(path, e))?,
        None => print!("{report}"),
    }

    // Cleaning runs after the report so a write failure here cannot take an
    // already-emitted analysis down with it.
    if let Some(clean) = &options.clean {
        let removed = write_cleaned(analysis.raw_lines(), clean)?;
        println!("Created cleaned file at {clean}");
        println!("Removed {removed} duplicate key entries.");
    }

    if options.output.is_some() || options.verbose {
        print_summary(options, &analysis);
    }

    Ok(())
}

fn render_text(analysis: &FileAnalysis) -> String {
    let groups = analysis.duplicate_groups();
    if groups.is_empty() {
        return "No duplicate keys found.\n".to_string();
    }

    let mut report = String::new();
    let _ = writeln!(report, "Duplicate keys found: {}", groups.len());
    let _ = writeln!(report, "====================");

    for group in &groups {
        let _ = writeln!(
            report,
            "Key: \"{}\" appears {} times:",
            group.key,
            group.occurrences.len()
        );

        let kind = group.kind();
        match kind {
            DuplicateKind::SameValue => {
                let _ = writeln!(
                    report,
                    "  All entries have the same value: \"{}\"",
                    group.occurrences[0].value
                );
            }
            DuplicateKind::Conflicting => {
                let _ = writeln!(
                    report,
                    "  WARNING: Key has different values (localization conflict)!"
                );
            }
        }

        let _ = writeln!(report, "  Found at lines:");
        for occurrence in group.occurrences {
            match kind {
                DuplicateKind::SameValue => {
                    let _ = writeln!(report, "    Line {}", occurrence.line);
                }
                DuplicateKind::Conflicting => {
                    let _ = writeln!(
                        report,
                        "    Line {}: \"{}\"",
                        occurrence.line, occurrence.value
                    );
                }
            }
        }
        report.push('\n');
    }

    report
}

fn render_json(input: &str, analysis: &FileAnalysis) -> String {
    let groups: Vec<_> = analysis
        .duplicate_groups()
        .iter()
        .map(|group| {
            json!({
                "key": group.key,
                "count": group.occurrences.len(),
                "kind": group.kind(),
                "occurrences": group.occurrences,
            })
        })
        .collect();

    let body = json!({
        "file": input,
        "duplicate_keys": analysis.duplicate_groups().len(),
        "duplicate_entries": analysis.duplicate_entry_count(),
        "groups": groups,
    });
    let mut rendered = serde_json::to_string_pretty(&body).unwrap();
    rendered.push('\n');
    rendered
}

fn print_summary(options: &DuplicatesOptions, analysis: &FileAnalysis) {
    let groups = analysis.duplicate_groups();
    if groups.is_empty() {
        println!("No duplicate keys found.");
        return;
    }

    println!(
        "Analysis complete. Found {} duplicate keys with {} total duplicated entries.",
        groups.len(),
        analysis.duplicate_entry_count()
    );
    if let Some(output) = &options.output {
        println!("Results written to {output}");
    }
    if options.clean.is_none() {
        println!("Use --clean <file> to create a cleaned version with duplicates removed.");
    }
}
