//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Top-K word frequency ranking backed by an AVL tree
#[derive(Parser, Debug)]
#[command(name = "wordrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log to stderr: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Suppress status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the most frequent words of a text file
    Top {
        /// Text file to analyze
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Number of words to show; zero or negative shows none (default: config top_k)
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        top: Option<i64>,
        /// Minimum word length after cleaning (default: config min_word_len)
        #[arg(long)]
        min_len: Option<usize>,
    },

    /// Print the AVL tree built from a text file
    Tree {
        /// Text file to analyze
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Minimum word length after cleaning (default: config min_word_len)
        #[arg(long)]
        min_len: Option<usize>,
        /// Verify ordering, balance and heights of every node
        #[arg(long)]
        check: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file location
    Path,
    /// Write a commented template to the global config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_negative_k_when_parsing_then_accepted() {
        let cli = Cli::try_parse_from(["wordrank", "top", "words.txt", "-k", "-3"]).unwrap();
        match cli.command {
            Some(Commands::Top { top, .. }) => assert_eq!(top, Some(-3)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counted() {
        let cli = Cli::try_parse_from(["wordrank", "-ddd", "tree", "words.txt", "--check"]).unwrap();
        assert_eq!(cli.debug, 3);
        assert!(matches!(cli.command, Some(Commands::Tree { check: true, .. })));
    }
}
