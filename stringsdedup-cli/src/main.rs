use clap::{Parser, Subcommand};

use stringsdedup_cli::{check, count, duplicates, duplicates::DuplicatesOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Report duplicate keys, optionally writing a cleaned copy.
    Duplicates {
        /// The localization file to analyze
        input: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Create a cleaned version (without duplicates) at the given path
        #[arg(long)]
        clean: Option<String>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Print the summary even when the report goes to stdout
        #[arg(short, long)]
        verbose: bool,
    },

    /// Look up every occurrence of one key.
    Check {
        /// The localization file to search
        input: String,

        /// The key to look for
        key: String,
    },

    /// Count entries, unique keys, and duplicates.
    Count {
        /// The localization file to count
        input: String,

        /// Emit the counts as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Duplicates {
            input,
            output,
            clean,
            json,
            verbose,
        } => duplicates::run(&DuplicatesOptions {
            input,
            output,
            clean,
            json,
            verbose,
        }),
        Commands::Check { input, key } => check::run(&input, &key),
        Commands::Count { input, json } => count::run(&input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
