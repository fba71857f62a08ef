//! Build script to generate the embedded wordlist
//!
//! Reads the leveled wordlist file and generates Rust source code with a
//! nested const array (one inner slice per level).

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_wordlist(
        "data/wordlist.txt",
        &Path::new(&out_dir).join("wordlist.rs"),
        "WORDLIST",
        "Default leveled wordlist (levels separated by blank lines in the source file)",
    );

    // Rebuild if the wordlist changes
    println!("cargo:rerun-if-changed=data/wordlist.txt");
}

fn generate_wordlist(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines delimit levels; consecutive blanks do not create empty levels
    let mut levels: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                levels.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        levels.push(current);
    }

    let level_count = levels.len();
    let word_count: usize = levels.iter().map(Vec::len).sum();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated wordlist").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&[&str]] = &[").unwrap();

    for level in &levels {
        writeln!(output, "    &[").unwrap();
        for word in level {
            writeln!(output, "        \"{word}\",").unwrap();
        }
        writeln!(output, "    ],").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of levels in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_LEVELS: usize = {level_count};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Total number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_WORDS: usize = {word_count};").unwrap();
}
