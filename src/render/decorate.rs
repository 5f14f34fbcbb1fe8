//! Structural coloring for boardish text.
//!
//! Two independent substitutions over already-escaped text: mine-count
//! digits get a per-value style class, row labels get a label class. Each
//! substitution runs once, left to right, and never touches text inside a
//! tag the other pass produced.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::render::escape::escape_markup;

/// Row label: an optionally-indented 1-2 digit sequence at the start of a
/// line, immediately followed by the column separator. Leading whitespace
/// is preserved outside the tag.
static ROW_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(\s*)(\d{1,2})(\s*\|)").expect("row label pattern is valid")
});

/// Escape `text` and wrap board structure in style tags.
///
/// Digits 1-8 flanked by whitespace on both sides become
/// `<span class="numN">N</span>`; row labels become
/// `<span class="label">N</span>`. A digit the first pass already wrapped
/// no longer sits at the start of its line, so the label pass skips it on
/// its own.
pub fn decorate_board_text(text: &str) -> String {
    let escaped = escape_markup(text);
    let numbered = wrap_mine_counts(&escaped);

    ROW_LABEL
        .replace_all(&numbered, |caps: &Captures| {
            format!("{}<span class=\"label\">{}</span>{}", &caps[1], &caps[2], &caps[3])
        })
        .into_owned()
}

/// Single left-to-right pass wrapping every whitespace-flanked digit 1-8.
///
/// Flanking characters stay outside the tag, so adjacent cells like
/// `" 1 2 3 "` each keep their own surrounding whitespace and all three
/// digits are wrapped.
fn wrap_mine_counts(escaped: &str) -> String {
    let chars: Vec<char> = escaped.chars().collect();
    let mut out = String::with_capacity(escaped.len());

    for (i, &ch) in chars.iter().enumerate() {
        let flanked = ('1'..='8').contains(&ch)
            && i > 0
            && chars[i - 1].is_whitespace()
            && i + 1 < chars.len()
            && chars[i + 1].is_whitespace();

        if flanked {
            out.push_str("<span class=\"num");
            out.push(ch);
            out.push_str("\">");
            out.push(ch);
            out.push_str("</span>");
        } else {
            out.push(ch);
        }
    }

    out
}
