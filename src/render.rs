//! Terminal output for looked-up definitions
//!
//! Formats definitions as a numbered list under the primary word, wrapping
//! long lines to a fixed column width.

use std::io::{self, IsTerminal, Write};

use crossterm::style::Stylize;

use crate::data::Definition;

/// Column width that definition text is wrapped to
pub const LINE_WIDTH: usize = 49;

/// Padding after the entry number on an entry's first line
const FIRST_LINE_PADDING: &str = "  ";

/// Indent for every other line of an entry
const CONTINUATION_INDENT: &str = "    ";

/// Greedily wraps a single line of text into lines of at most `width` columns.
///
/// Whitespace runs collapse to a single space and tokens are never split, so a
/// line only exceeds `width` when it holds one token that is longer by itself.
/// Blank input gives one empty line.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for token in text.split_whitespace() {
        let token_width = token.chars().count();
        if current_width == 0 {
            current.push_str(token);
            current_width = token_width;
        } else if current_width + 1 + token_width <= width {
            current.push(' ');
            current.push_str(token);
            current_width += 1 + token_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(token);
            current_width = token_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders definitions for display
///
/// The first definition's word is the header (bold blue when `color` is set),
/// followed by each definition numbered from 1. Embedded newlines in the
/// definition text are kept as hard breaks.
pub fn render(definitions: &[Definition], width: usize, color: bool) -> String {
    let mut out = String::new();
    let Some(primary) = definitions.first() else {
        return out;
    };

    if color {
        out.push_str(&primary.word.as_str().bold().blue().to_string());
    } else {
        out.push_str(&primary.word);
    }
    out.push_str("\n\n");

    for (i, def) in definitions.iter().enumerate() {
        out.push_str(&format!("{}.", i + 1));
        let mut padding = FIRST_LINE_PADDING;
        for paragraph in def.definition.split('\n') {
            let wrapped = wrap_line(paragraph, width);
            out.push_str(padding);
            out.push_str(&wrapped.join(&format!("\n{}", CONTINUATION_INDENT)));
            out.push('\n');
            padding = CONTINUATION_INDENT;
        }
        out.push('\n');
    }
    out
}

/// Prints definitions to stdout, colored only when stdout is a terminal
pub fn print_definitions(definitions: &[Definition], width: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut handle = stdout.lock();
    handle.write_all(render(definitions, width, color).as_bytes())?;
    handle.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(word: &str, text: &str) -> Definition {
        Definition {
            word: word.to_string(),
            definition: text.to_string(),
            author: "tester".to_string(),
            written_on: "2020-01-01 10:00:00.000".to_string(),
            thumbs_up: 1,
        }
    }

    const LONG_TEXT: &str = "The quick brown fox jumps over the lazy dog while the \
        five boxing wizards jump quickly and a wizard's job is to vex chumps quickly in fog";

    #[test]
    fn test_wrap_short_line_unchanged() {
        assert_eq!(wrap_line("hello world", LINE_WIDTH), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_empty_line() {
        assert_eq!(wrap_line("", LINE_WIDTH), vec![""]);
        assert_eq!(wrap_line("   \t ", LINE_WIDTH), vec![""]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_line("  a   b\tc\r", LINE_WIDTH), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_line(LONG_TEXT, LINE_WIDTH);

        assert!(lines.len() > 1, "Long text should wrap");
        for line in &lines {
            assert!(
                line.chars().count() <= LINE_WIDTH,
                "Line too long ({}): {:?}",
                line.chars().count(),
                line
            );
        }
    }

    #[test]
    fn test_wrap_never_splits_tokens() {
        let lines = wrap_line(LONG_TEXT, 10);

        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        let original: Vec<&str> = LONG_TEXT.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_wrap_fills_line_exactly_to_width() {
        // "aaaa bbbb" is 9 columns
        assert_eq!(wrap_line("aaaa bbbb cccc", 9), vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn test_wrap_overlong_token_gets_own_line() {
        let long = "x".repeat(60);
        let text = format!("short {} tail", long);

        let lines = wrap_line(&text, LINE_WIDTH);

        assert_eq!(lines, vec!["short".to_string(), long, "tail".to_string()]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // 5 two-byte chars + space + 5 two-byte chars = 11 columns
        let text = "ééééé ààààà";
        assert_eq!(wrap_line(text, 11), vec![text]);
    }

    #[test]
    fn test_render_empty_is_empty() {
        assert_eq!(render(&[], LINE_WIDTH, false), "");
    }

    #[test]
    fn test_render_single_definition() {
        let defs = vec![definition("Test", "a short one")];

        let out = render(&defs, LINE_WIDTH, false);

        assert_eq!(out, "Test\n\n1.  a short one\n\n");
    }

    #[test]
    fn test_render_numbers_entries_and_uses_primary_word() {
        let defs = vec![definition("Rust", "first"), definition("rust", "second")];

        let out = render(&defs, LINE_WIDTH, false);

        assert_eq!(out, "Rust\n\n1.  first\n\n2.  second\n\n");
    }

    #[test]
    fn test_render_keeps_hard_breaks() {
        let defs = vec![definition("w", "line one\r\nline two")];

        let out = render(&defs, LINE_WIDTH, false);

        assert_eq!(out, "w\n\n1.  line one\n    line two\n\n");
    }

    #[test]
    fn test_render_indents_wrapped_lines() {
        let defs = vec![definition("w", "aaaa bbbb cccc")];

        let out = render(&defs, 9, false);

        assert_eq!(out, "w\n\n1.  aaaa bbbb\n    cccc\n\n");
    }

    #[test]
    fn test_render_color_styles_header() {
        let defs = vec![definition("Test", "a")];

        let out = render(&defs, LINE_WIDTH, true);

        assert!(out.contains("\u{1b}["), "Colored header should contain ANSI codes");
        assert!(out.contains("Test"));
        assert!(out.ends_with("1.  a\n\n"));
    }
}
