//! Board heuristic.
//!
//! The engine does not tag its own output, so the frontend has to guess
//! whether a block of text is a rendered board (worth structural coloring)
//! or a plain status/log line. This is an ordered set of independent
//! pattern checks, any match wins; it is deliberately not a parser of the
//! board layout.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any one of these marks a text block as boardish:
/// a whitespace-flanked mine count (1-8), a whitespace-flanked cell or
/// separator marker (`#`, `*`, `|`), a row label (1-2 digits at the start
/// of a line, then a column separator), or a whitespace-flanked border
/// character (`+`, `-`).
static BOARDISH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(\s[1-8]\s)|(\s[#*|]\s)|(^\s{0,2}\d{1,2}\s*\|)|(\s[+\-]\s)")
        .expect("boardish pattern is valid")
});

/// Heuristic: does this text look like a board dump?
///
/// ```
/// assert!(mines_front::render::is_boardish("  3 | 4 | 5\n"));
/// assert!(!mines_front::render::is_boardish("Welcome to the game\n"));
/// ```
pub fn is_boardish(text: &str) -> bool {
    BOARDISH.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine_count_cell_is_boardish() {
        assert!(is_boardish("a 3 b"));
        assert!(is_boardish("\n8\t"));
    }

    #[test]
    fn zero_and_nine_are_not_mine_counts() {
        assert!(!is_boardish(" 0 "));
        assert!(!is_boardish(" 9 "));
    }

    #[test]
    fn cell_markers_are_boardish() {
        assert!(is_boardish(" # "));
        assert!(is_boardish(" * "));
        assert!(is_boardish(" | "));
    }

    #[test]
    fn border_characters_are_boardish() {
        assert!(is_boardish("+ - + - +"));
        assert!(is_boardish(" + "));
    }

    #[test]
    fn row_label_line_is_boardish() {
        assert!(is_boardish(" 1 |#  #  #|"));
        assert!(is_boardish("10 |#  #  #|"));
        assert!(is_boardish("log line\n 7 | rest"));
    }

    #[test]
    fn plain_log_lines_are_not_boardish() {
        assert!(!is_boardish("Welcome to the game\n"));
        assert!(!is_boardish("Instructions: flag with F, reveal with R\n"));
        assert!(!is_boardish(""));
    }
}
