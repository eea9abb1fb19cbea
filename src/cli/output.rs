//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::WordCount;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Format one ranking line: position, word padded to `width`, count.
pub fn format_ranked(position: usize, entry: &WordCount, width: usize) -> String {
    format!("{position:>4}. {:<width$}  {}", entry.word, entry.freq)
}

/// Print ranked words, one per line, aligned on the longest word.
pub fn ranked(entries: &[WordCount]) {
    let width = entries.iter().map(|e| e.word.len()).max().unwrap_or(0);
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", format_ranked(i + 1, entry, width));
    }
}
