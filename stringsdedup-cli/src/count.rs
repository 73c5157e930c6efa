//! The `count` subcommand: entry, unique-key, and duplicate totals.

use serde_json::json;
use stringsdedup::{Error, FileAnalysis};

pub fn run(input: &str, json_output: bool) -> Result<(), Error> {
    let analysis = FileAnalysis::read_from(input)?;
    let total = analysis.entry_count();
    let unique = analysis.unique_key_count();
    let duplicates = analysis.duplicate_entry_count();

    if json_output {
        let body = json!({
            "file": input,
            "total_entries": total,
            "unique_keys": unique,
            "duplicate_entries": duplicates,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap());
        return Ok(());
    }

    println!("File: {input}");
    println!("Total Entries: {total}");
    println!("Unique Keys: {unique}");

    if duplicates > 0 {
        let percentage = duplicates as f64 / total as f64 * 100.0;
        println!("Duplicate Entries: {duplicates} ({percentage:.1}%)");
    } else {
        println!("No duplicate keys found.");
    }

    Ok(())
}
