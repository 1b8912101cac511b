//! Command-line interface parsing for Urban Dict CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them
//! into the action to run.

use std::path::PathBuf;

use clap::Parser;

use crate::cache::fold_key;
use crate::data::urban::URBAN_DICTIONARY_BASE_URL;

/// Urban Dict CLI - Look up Urban Dictionary definitions from the terminal
#[derive(Parser, Debug)]
#[command(name = "urban-dict")]
#[command(about = "Look up Urban Dictionary definitions, cached in a local database")]
#[command(version)]
pub struct Cli {
    /// Delete the word's cached definitions instead of looking it up
    #[arg(short, long)]
    pub delete: bool,

    /// Path to the cache database (must already exist)
    #[arg(long, env = "DB_PATH", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Base URL of the define endpoint
    #[arg(long, env = "URBAN_DICT_API_URL", default_value = URBAN_DICTIONARY_BASE_URL, hide = true)]
    pub api_url: String,

    /// The word or phrase to look up
    ///
    /// Multiple words are joined with spaces into a single query. Words that
    /// start with `-` are taken literally unless they are one of the flags.
    #[arg(value_name = "WORD", allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// What a single invocation should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print usage and exit
    Usage,
    /// Look up the normalized query
    Lookup(String),
    /// Delete cached definitions for the normalized query
    Delete(String),
}

/// Joins query words with single spaces and case-folds the result
pub fn normalize_query<S: AsRef<str>>(words: &[S]) -> String {
    let joined = words.iter().map(|w| w.as_ref()).collect::<Vec<_>>().join(" ");
    fold_key(&joined)
}

impl Cli {
    /// Determines the action for the parsed arguments
    ///
    /// Without any words there is nothing to look up or delete, so usage is
    /// shown instead.
    pub fn action(&self) -> Action {
        if self.words.is_empty() {
            return Action::Usage;
        }
        let query = normalize_query(&self.words);
        if self.delete {
            Action::Delete(query)
        } else {
            Action::Lookup(query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_joins_and_lowercases() {
        assert_eq!(normalize_query(&["Hello", "WORLD"]), "hello world");
        assert_eq!(normalize_query(&["Test"]), "test");
    }

    #[test]
    fn test_normalize_query_folds_non_ascii() {
        assert_eq!(normalize_query(&["Éclair"]), "éclair");
    }

    #[test]
    fn test_cli_hyphen_term_is_a_word() {
        let cli = Cli::parse_from(["urban-dict", "-_-"]);
        assert!(!cli.delete);
        assert_eq!(cli.action(), Action::Lookup("-_-".to_string()));
    }

    #[test]
    fn test_cli_delete_hyphen_term() {
        let cli = Cli::parse_from(["urban-dict", "-d", "-_-"]);
        assert_eq!(cli.action(), Action::Delete("-_-".to_string()));
    }

    #[test]
    fn test_normalize_query_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(normalize_query(&empty), "");
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["urban-dict"]);
        assert!(!cli.delete);
        assert!(cli.words.is_empty());
        assert_eq!(cli.action(), Action::Usage);
    }

    #[test]
    fn test_cli_parse_words() {
        let cli = Cli::parse_from(["urban-dict", "Big", "Mood"]);
        assert_eq!(cli.words, vec!["Big", "Mood"]);
        assert_eq!(cli.action(), Action::Lookup("big mood".to_string()));
    }

    #[test]
    fn test_cli_parse_short_delete() {
        let cli = Cli::parse_from(["urban-dict", "-d", "Yeet"]);
        assert!(cli.delete);
        assert_eq!(cli.action(), Action::Delete("yeet".to_string()));
    }

    #[test]
    fn test_cli_parse_long_delete_multiple_words() {
        let cli = Cli::parse_from(["urban-dict", "--delete", "big", "mood"]);
        assert_eq!(cli.action(), Action::Delete("big mood".to_string()));
    }

    #[test]
    fn test_cli_delete_without_words_is_usage() {
        let cli = Cli::parse_from(["urban-dict", "--delete"]);
        assert_eq!(cli.action(), Action::Usage);
    }

    #[test]
    fn test_cli_parse_db_flag() {
        let cli = Cli::parse_from(["urban-dict", "--db", "/tmp/dict.db", "word"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/dict.db")));
    }

    #[test]
    fn test_cli_api_url_flag() {
        let cli = Cli::parse_from(["urban-dict", "--api-url", "http://localhost:1/define", "w"]);
        assert_eq!(cli.api_url, "http://localhost:1/define");
    }
}
