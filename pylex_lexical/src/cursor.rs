//! Contains the [`Cursor`], the character level scanner the tokenizer reads the source through.

use std::sync::Arc;

use getset::{CopyGetters, Getters};
use pylex_base::source_file::{ByteIndex, SourceFile, Span, SENTINEL};

/// Is a bounds-checked scanning position over the content of a [`SourceFile`].
///
/// The content of a source file always ends with a line terminator. The cursor treats that last
/// character as the end of the input: it can stand on it but never moves past it, and
/// [`Cursor::has_more`] is `false` there.
#[derive(Debug, Getters, CopyGetters)]
pub struct Cursor {
    /// Gets the source file the cursor scans.
    #[get = "pub"]
    source_file: Arc<SourceFile>,

    /// Gets the byte index of the current character.
    #[get_copy = "pub"]
    position: ByteIndex,
}

impl Cursor {
    /// Creates a cursor standing on the first character of the source file.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>) -> Self {
        Self {
            source_file,
            position: 0,
        }
    }

    fn content(&self) -> &str { self.source_file.content() }

    fn rest(&self) -> &str { &self.content()[self.position..] }

    /// Gets the byte index right after the `count` characters starting at the current one.
    fn offset_after(&self, count: usize) -> Option<ByteIndex> {
        if count == 0 {
            return Some(self.position);
        }

        self.rest()
            .char_indices()
            .nth(count - 1)
            .map(|(index, character)| self.position + index + character.len_utf8())
    }

    /// Gets the character the cursor stands on.
    #[must_use]
    pub fn peek_current(&self) -> char { self.rest().chars().next().unwrap_or(SENTINEL) }

    /// Gets the character right after the current one.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> { self.rest().chars().nth(1) }

    /// Gets the `count` characters starting at the current one.
    ///
    /// Returns an empty string if the window would reach the final line terminator.
    #[must_use]
    pub fn peek_window(&self, count: usize) -> &str {
        match self.offset_after(count) {
            Some(end) if end < self.content().len() => &self.content()[self.position..end],
            _ => "",
        }
    }

    /// Checks if there is a character after the current one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.offset_after(1)
            .map_or(false, |next| next < self.content().len())
    }

    /// Moves the cursor `count` characters forward.
    ///
    /// Does nothing if the cursor would land past the final line terminator.
    pub fn advance(&mut self, count: usize) {
        if let Some(target) = self.offset_after(count) {
            if target < self.content().len() {
                self.position = target;
            }
        }
    }

    fn step(&mut self) { self.position += self.peek_current().len_utf8(); }

    /// Consumes characters while they satisfy the predicate and returns the consumed run.
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &str {
        let start = self.position;

        while self.has_more() && predicate(self.peek_current()) {
            self.step();
        }

        &self.content()[start..self.position]
    }

    /// Consumes one character at a time while the `count` characters window starting at the
    /// cursor satisfies the predicate, and returns the consumed run.
    pub fn consume_while_window(&mut self, count: usize, predicate: impl Fn(&str) -> bool) -> &str {
        let start = self.position;

        while self.has_more() && predicate(self.peek_window(count)) {
            self.step();
        }

        &self.content()[start..self.position]
    }

    /// Checks if the current character is any of the given characters.
    #[must_use]
    pub fn current_is_any_of(&self, characters: &[char]) -> bool {
        characters.contains(&self.peek_current())
    }

    /// Creates a span from the given start byte index to the current position of the cursor.
    #[must_use]
    pub fn span_from(&self, start: ByteIndex) -> Span {
        Span::new(self.source_file.clone(), start, self.position).unwrap()
    }
}

#[cfg(test)]
mod tests;
