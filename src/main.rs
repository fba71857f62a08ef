//! Wordpack - CLI
//!
//! Packs a leveled wordlist into the two artifacts a dictionary compressor's
//! native build consumes: a binary blob of concatenated word bytes and a C
//! header with the offset index.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wordpack::{
    commands::{DEFAULT_BLOB_PATH, DEFAULT_INDEX_PATH, GenerateConfig, generate},
    core::Wordlist,
    output::print_generate_result,
    wordlists::{WORDLIST, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordpack",
    about = "Pack a leveled wordlist into a byte blob and a C offset index",
    version,
    author
)]
struct Cli {
    /// Wordlist: 'embedded' (default) or path to a leveled wordlist file
    #[arg(short = 'w', long, default_value = "embedded")]
    wordlist: String,

    /// Index header destination
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    index: PathBuf,

    /// Blob destination
    #[arg(long, default_value = DEFAULT_BLOB_PATH)]
    blob: PathBuf,

    /// Suppress the diagnostic summary
    #[arg(short, long)]
    quiet: bool,
}

/// Load the wordlist based on the -w flag
///
/// "embedded" uses the table compiled into the binary; anything else is
/// treated as a path to a leveled wordlist file.
fn load_wordlist(wordlist_mode: &str) -> Result<Wordlist> {
    match wordlist_mode {
        "embedded" => Ok(Wordlist::from_slices(WORDLIST)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let wordlist = load_wordlist(&cli.wordlist)?;

    let config = GenerateConfig {
        index_path: cli.index,
        blob_path: cli.blob,
    };
    let stats = generate(&config, &wordlist)?;

    if !cli.quiet {
        print_generate_result(&stats);
    }

    Ok(())
}
