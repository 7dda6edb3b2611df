//! The input cursor.
//!
//! Wikicode is tokenized over Unicode scalar values, not bytes: names,
//! look-ahead, and the safety checks in [`crate::safety`] all reason about
//! whole characters. The cursor pre-decodes the input into a `Vec<char>` so
//! that relative reads in either direction are O(1), which the dispatch
//! loop and the construct handlers lean on heavily (they routinely peek
//! two or three characters ahead before committing to an interpretation).

/// A read past either end of the input, represented simply as `None`.
pub(crate) type MaybeChar = Option<char>;

/// Position + backing storage for the character stream being tokenized.
#[derive(Clone, Debug)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    /// Index of the next character to be read.
    head: usize,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `text`.
    pub(crate) fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            head: 0,
        }
    }

    /// Current head position.
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    /// Resets the head to a previously saved position.
    ///
    /// Used after a failed route to discard whatever look-ahead was
    /// consumed while speculatively parsing.
    pub(crate) fn reset_to(&mut self, head: usize) {
        self.head = head;
    }

    /// Advances the head by one character.
    pub(crate) fn advance(&mut self) {
        self.head += 1;
    }

    /// Advances the head by `n` characters.
    pub(crate) fn advance_by(&mut self, n: usize) {
        self.head += n;
    }

    /// Steps the head back by one character.
    ///
    /// Used by the literal-brace fallback when a run of braces overshoots
    /// every construct it could open, where a single surplus `{` must be
    /// re-examined by the dispatch loop as a fresh character instead of
    /// being silently skipped.
    pub(crate) fn step_back(&mut self) {
        debug_assert!(self.head > 0, "cannot step back past the start");
        self.head -= 1;
    }

    /// Reads the character at `head + delta`, or `None` if out of bounds.
    pub(crate) fn read(&self, delta: usize) -> MaybeChar {
        self.chars.get(self.head + delta).copied()
    }

    /// Reads the character at `head - delta`, or `None` if out of bounds
    /// (including when `delta > head`).
    pub(crate) fn read_backwards(&self, delta: usize) -> MaybeChar {
        self.head.checked_sub(delta).and_then(|i| self.chars.get(i)).copied()
    }

    /// The character at the head, equivalent to `read(0)`.
    pub(crate) fn current(&self) -> MaybeChar {
        self.read(0)
    }

    /// True once every character has been read.
    pub(crate) fn at_end(&self) -> bool {
        self.head >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_forward_and_backward() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.read(0), Some('a'));
        assert_eq!(cursor.read(1), Some('b'));
        assert_eq!(cursor.read(2), None);
        assert_eq!(cursor.read_backwards(1), None);
    }

    #[test]
    fn backwards_read_at_head_returns_empty_sentinel() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.read_backwards(1), Some('a'));
        cursor.advance();
        assert_eq!(cursor.read_backwards(1), Some('b'));
        // Reading past the left edge from head == 0 is EMPTY.
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.read_backwards(1), None);
    }

    #[test]
    fn reset_and_step_back_move_head_directly() {
        let mut cursor = Cursor::new("abc");
        cursor.advance_by(3);
        assert!(cursor.at_end());
        cursor.reset_to(1);
        assert_eq!(cursor.current(), Some('b'));
        cursor.step_back();
        assert_eq!(cursor.current(), Some('a'));
    }

    #[test]
    fn handles_multibyte_scalars_as_single_units() {
        let cursor = Cursor::new("a\u{1F600}b");
        assert_eq!(cursor.read(0), Some('a'));
        assert_eq!(cursor.read(1), Some('\u{1F600}'));
        assert_eq!(cursor.read(2), Some('b'));
    }
}
