//! Paragraph accumulator.
//!
//! A paragraph is built line by line. Every appended line ends with `\n`;
//! the accumulator keeps that newline as a sentinel meaning "the last line
//! ended here" and inserts a space before it so words never run together
//! across a line wrap. The driver later retracts the sentinel (and the
//! space) when it decides the next line continues the same word or sentence.

use std::sync::LazyLock;

use regex::Regex;

/// Word character, hyphen or tilde, optional spaces, then the line end.
static LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S(-|~)\s*\n$").expect("valid line ending regex"));

/// Last line did not end on terminal punctuation.
static SAME_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?\s]\s*\n$").expect("valid continuation regex"));

/// How many trailing characters the line-end heuristics inspect.
const TAIL_LEN: usize = 5;

/// Mutable text buffer for one paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    buffer: String,
}

impl Paragraph {
    pub fn new(text: &str) -> Self {
        let mut paragraph = Self {
            buffer: text.to_string(),
        };
        paragraph.add_space();
        paragraph
    }

    /// Appends a line and re-normalizes the trailing newline.
    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.add_space();
    }

    /// Removes the last `k` characters.
    ///
    /// # Panics
    /// Panics when asked to remove more characters than the buffer holds.
    pub fn pop(&mut self, k: usize) {
        for _ in 0..k {
            if self.buffer.pop().is_none() {
                panic!("popped past the start of a paragraph");
            }
        }
    }

    pub fn ends_with(&self, c: char) -> bool {
        self.buffer.ends_with(c)
    }

    /// Removes a line-final hyphenation marker.
    ///
    /// When the buffer ends in a word character followed by `-` or `~`,
    /// optional spaces and the newline, everything after the word character
    /// is deleted so the next line merges into the same word. Returns whether
    /// a marker was removed.
    pub fn remove_hyphen(&mut self) -> bool {
        let removed = match LINE_ENDING.find(self.tail()) {
            Some(m) => m.as_str().chars().count() - 1,
            None => return false,
        };
        self.pop(removed);
        true
    }

    /// Returns true if `next_line` reads as a continuation of this paragraph:
    /// it starts lowercase, or the buffered line did not end a sentence.
    pub fn same_paragraph(&self, next_line: &str) -> bool {
        next_line.chars().next().is_some_and(char::is_lowercase)
            || SAME_PARAGRAPH.is_match(self.tail())
    }

    /// Buffer contents including the trailing separator and newline.
    pub fn raw_text(&self) -> &str {
        &self.buffer
    }

    /// Paragraph text as consumers see it, without the trailing separator.
    pub fn text(&self) -> &str {
        self.buffer.trim_end()
    }

    /// Number of buffered characters.
    pub fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn tail(&self) -> &str {
        let start = self
            .buffer
            .char_indices()
            .rev()
            .nth(TAIL_LEN - 1)
            .map_or(0, |(i, _)| i);
        &self.buffer[start..]
    }

    fn add_space(&mut self) {
        if !self.buffer.ends_with('\n') {
            return;
        }
        let newline_at = self.buffer.len() - 1;
        let prev = self.buffer[..newline_at].chars().next_back();
        if !prev.is_some_and(char::is_whitespace) {
            self.buffer.insert(newline_at, ' ');
        }
    }
}

impl std::fmt::Display for Paragraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
