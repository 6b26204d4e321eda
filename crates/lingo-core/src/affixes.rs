//! Affix pattern compilation for tokenizer data.
//!
//! Data packages ship prefix, suffix, and infix pattern lists as plain text
//! files, one entry per line. These helpers combine a list into a single
//! alternation so a whole family of patterns compiles to one regex.

use std::path::Path;

use regex::Regex;

use lingo_util::errors::LingoError;

/// Read a file of literal entries (one per line) into a regex matching any
/// entry at the start of a string.
///
/// Entries are escaped before joining, so regex metacharacters in the data
/// match literally. Blank lines are dropped.
pub fn read_regex_file(path: &Path) -> miette::Result<Regex> {
    let content = std::fs::read_to_string(path).map_err(|e| LingoError::Pattern {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    let pieces: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("^{}", regex::escape(line)))
        .collect();
    compile(&pieces.join("|"))
}

/// Combine prefix pattern pieces into one regex anchored at string start.
///
/// Pieces are raw regex fragments; blank ones are dropped.
pub fn compile_prefix_regex(entries: &[&str]) -> miette::Result<Regex> {
    let pieces: Vec<String> = non_blank(entries).map(|e| format!("^{e}")).collect();
    compile(&pieces.join("|"))
}

/// Combine suffix pattern pieces into one regex anchored at string end.
pub fn compile_suffix_regex(entries: &[&str]) -> miette::Result<Regex> {
    let pieces: Vec<String> = non_blank(entries).map(|e| format!("{e}$")).collect();
    compile(&pieces.join("|"))
}

/// Combine infix pattern pieces into one unanchored regex.
pub fn compile_infix_regex(entries: &[&str]) -> miette::Result<Regex> {
    let pieces: Vec<String> = non_blank(entries).map(|e| e.to_string()).collect();
    compile(&pieces.join("|"))
}

fn non_blank<'a>(entries: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
    entries
        .iter()
        .copied()
        .filter(|entry| !entry.trim().is_empty())
}

fn compile(expression: &str) -> miette::Result<Regex> {
    Regex::new(expression).map_err(|e| {
        LingoError::Pattern {
            message: format!("Failed to compile affix pattern: {e}"),
        }
        .into()
    })
}
