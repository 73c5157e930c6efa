//! The `check` subcommand: look up every occurrence of a single key.

use stringsdedup::{DuplicateGroup, DuplicateKind, Error, FileAnalysis};

pub fn run(input: &str, key: &str) -> Result<(), Error> {
    let analysis = FileAnalysis::read_from(input)?;
    let occurrences = analysis.occurrences_of(key);

    if occurrences.is_empty() {
        println!("Key \"{key}\" not found in {input}");
        return Ok(());
    }

    println!(
        "Key \"{key}\" found in {input} ({} occurrences):",
        occurrences.len()
    );
    for occurrence in occurrences {
        println!("  Line {}: \"{}\"", occurrence.line, occurrence.value);
    }

    if occurrences.len() > 1 {
        let group = DuplicateGroup { key, occurrences };
        match group.kind() {
            DuplicateKind::SameValue => println!("All occurrences have the same value."),
            DuplicateKind::Conflicting => println!(
                "WARNING: Key has different values in different occurrences (localization conflict)!"
            ),
        }
    }

    Ok(())
}
