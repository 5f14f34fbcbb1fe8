//! Markup sanitizer.

/// Escape the three characters that would otherwise be read as markup.
///
/// Ampersand is replaced first so already-escaped sequences are not
/// double-escaped. Total: never fails, and leaves everything else intact.
///
/// ```
/// assert_eq!(mines_front::render::escape_markup("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_three_markup_characters() {
        assert_eq!(escape_markup("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn ampersand_first_avoids_double_escaping() {
        // If '<' were replaced before '&', the '&' in "&lt;" would be
        // escaped again.
        assert_eq!(escape_markup("<"), "&lt;");
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(
            escape_markup("Board: 10x10 (mines: 12)\n"),
            "Board: 10x10 (mines: 12)\n"
        );
    }
}
