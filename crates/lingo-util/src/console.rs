use std::io::Write;

use console::Style;

/// Wrapped lines fit in an 80-column terminal with a little margin.
const WRAP_WIDTH: usize = 76;
const INDENT: &str = "    ";

/// Print a Cargo-style status line: `     Package en_core 1.2.0`
///
/// The `label` is right-padded to 12 characters and printed in bold green,
/// followed by the `message` in the default terminal colour.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        green_bold.apply_to(label),
    );
}

/// Print a warning-style status line (bold yellow label).
pub fn status_warn(label: &str, message: &str) {
    let yellow_bold = Style::new().yellow().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        yellow_bold.apply_to(label),
    );
}

/// Print a formatted user-facing message.
///
/// The optional title is printed in bold yellow; the paragraphs follow,
/// separated by blank lines. Everything is wrapped and indented via [`wrap`]
/// so longer guidance stays readable.
pub fn message(title: Option<&str>, paragraphs: &[&str]) {
    println!();
    if let Some(title) = title {
        let yellow_bold = Style::new().yellow().bold();
        println!("{}", yellow_bold.apply_to(wrap(title)));
    }
    if !paragraphs.is_empty() {
        println!();
        let body: Vec<String> = paragraphs.iter().map(|p| wrap(p)).collect();
        println!("{}", body.join("\n\n"));
    }
    println!();
}

/// Re-flow `text` into indented lines at most 76 columns wide.
///
/// Words are never split; a word longer than the width gets a line of its
/// own. Whitespace-only input yields an empty string.
pub fn wrap(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = format!("{INDENT}{word}");
        } else if current.len() + 1 + word.len() <= WRAP_WIDTH {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = format!("{INDENT}{word}");
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
