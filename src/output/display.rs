//! Display functions for command results
//!
//! Diagnostic output only: nothing downstream consumes this, and the format
//! is not a stability contract.

use crate::packer::PackStats;
use colored::Colorize;

/// Print the per-level breakdown and summary for a generate run
pub fn print_generate_result(stats: &PackStats) {
    println!("{}", "─".repeat(60).cyan());
    for (i, count) in stats.level_words.iter().enumerate() {
        println!("level {} len {count}", i + 1);
    }
    println!("{}", "─".repeat(60).cyan());

    println!(
        "total_lvl={} total_n={} total_bytes={} str_max_len={}",
        format!("{}", stats.level_count()).bright_yellow(),
        format!("{}", stats.total_words).bright_yellow(),
        format!("{}", stats.total_bytes).bright_yellow(),
        format!("{}", stats.max_word_bytes).bright_yellow()
    );
}
