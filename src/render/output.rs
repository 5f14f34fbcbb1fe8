//! The output sink and its single writer.
//!
//! `OutputBuffer` is the append-only record of everything shown to the
//! user. It is owned by `Renderer`; other components submit text through
//! `Renderer::write` and never touch the buffer directly.

use crate::render::classify::is_boardish;
use crate::render::decorate::decorate_board_text;
use crate::render::escape::escape_markup;

/// Append-only markup sink with a scroll position.
///
/// The scroll offset is pinned to the end after every append so the host
/// view follows new output, and rewound to the start when the buffer is
/// cleared for a new session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    markup: String,
    scroll: usize,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&mut self, markup: &str) {
        self.markup.push_str(markup);
        self.scroll = self.markup.len();
    }

    fn clear(&mut self) {
        self.markup.clear();
        self.scroll = 0;
    }

    /// Everything written so far, as markup
    pub fn contents(&self) -> &str {
        &self.markup
    }

    /// Byte offset the host view should be scrolled to
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

/// Sole writer of the output buffer.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    buffer: OutputBuffer,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one chunk of raw text to markup and append it.
    ///
    /// Boardish text gets structural coloring; everything else is escaped
    /// verbatim. Classification happens on the raw text, before escaping.
    pub fn write(&mut self, text: &str) {
        let markup = if is_boardish(text) {
            decorate_board_text(text)
        } else {
            escape_markup(text)
        };
        self.buffer.append(&markup);
    }

    /// Empty the sink for a new session.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }
}
