//! Token object definitions for wikicode.
//!
//! This crate is the "external token library" that `wikicode-tokenizer`
//! treats as an opaque collaborator: it owns the [`Token`] type and the
//! named constructors that build each kind, and exposes just enough surface
//! back to the tokenizer for splicing adjacent text runs together.
//!
//! Everything else about a token, matching on its kind, walking a tree of
//! them, rendering them back to wikicode, belongs to a higher-level
//! consumer, not here and not in the tokenizer core.

#![deny(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

/// A single emitted wikicode token.
///
/// Construct these with the functions in this module (`text`,
/// `template_open`, and so on) rather than the variants directly: the
/// variant list is not guaranteed to stay a 1:1 match with the constructor
/// names forever, and going through the constructors is what keeps the
/// tokenizer core decoupled from this crate's internal representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A run of literal text.
    Text(String),
    /// `{{`
    TemplateOpen,
    /// `|` inside a template, before the next key.
    TemplateParamSeparator,
    /// `=` inside a template parameter key.
    TemplateParamEquals,
    /// `}}`
    TemplateClose,
    /// `{{{`
    ArgumentOpen,
    /// `|` inside a template argument.
    ArgumentSeparator,
    /// `}}}`
    ArgumentClose,
    /// `[[`
    WikilinkOpen,
    /// `|` inside a wikilink.
    WikilinkSeparator,
    /// `]]`
    WikilinkClose,
    /// `&`
    HTMLEntityStart,
    /// The digits of a `&#NNN;` numeric entity.
    HTMLEntityNumeric(char),
    /// The digits of a `&#xHH;` hexadecimal entity.
    HTMLEntityHex(char),
    /// `;` terminating an HTML entity, carrying the decoded named entity
    /// when the entity was named (`&amp;` and friends) rather than numeric.
    HTMLEntityEnd(Option<char>),
    /// `=` opening a heading, carrying its outline level (1-6).
    HeadingStart(u8),
    /// `=` closing a heading.
    HeadingEnd,
    /// `<!--`
    CommentStart,
    /// `-->`
    CommentEnd,
}

impl Token {
    /// True if this is a [`Token::Text`] token.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// The text content, if this is a [`Token::Text`] token.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Mutable access to the text content, if this is a [`Token::Text`]
    /// token.
    ///
    /// The tokenizer uses this to merge a spliced-in token list's leading
    /// `Text` into a parent's pending buffer without allocating an
    /// intermediate token.
    pub fn as_text_mut(&mut self) -> Option<&mut String> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Builds a [`Token::Text`].
#[must_use]
pub fn text(content: impl Into<String>) -> Token {
    Token::Text(content.into())
}

/// Builds a [`Token::TemplateOpen`].
#[must_use]
pub fn template_open() -> Token {
    Token::TemplateOpen
}

/// Builds a [`Token::TemplateParamSeparator`].
#[must_use]
pub fn template_param_separator() -> Token {
    Token::TemplateParamSeparator
}

/// Builds a [`Token::TemplateParamEquals`].
#[must_use]
pub fn template_param_equals() -> Token {
    Token::TemplateParamEquals
}

/// Builds a [`Token::TemplateClose`].
#[must_use]
pub fn template_close() -> Token {
    Token::TemplateClose
}

/// Builds a [`Token::ArgumentOpen`].
#[must_use]
pub fn argument_open() -> Token {
    Token::ArgumentOpen
}

/// Builds a [`Token::ArgumentSeparator`].
#[must_use]
pub fn argument_separator() -> Token {
    Token::ArgumentSeparator
}

/// Builds a [`Token::ArgumentClose`].
#[must_use]
pub fn argument_close() -> Token {
    Token::ArgumentClose
}

/// Builds a [`Token::WikilinkOpen`].
#[must_use]
pub fn wikilink_open() -> Token {
    Token::WikilinkOpen
}

/// Builds a [`Token::WikilinkSeparator`].
#[must_use]
pub fn wikilink_separator() -> Token {
    Token::WikilinkSeparator
}

/// Builds a [`Token::WikilinkClose`].
#[must_use]
pub fn wikilink_close() -> Token {
    Token::WikilinkClose
}

/// Builds a [`Token::HTMLEntityStart`].
#[must_use]
pub fn html_entity_start() -> Token {
    Token::HTMLEntityStart
}

/// Builds a [`Token::HTMLEntityNumeric`].
#[must_use]
pub fn html_entity_numeric(value: char) -> Token {
    Token::HTMLEntityNumeric(value)
}

/// Builds a [`Token::HTMLEntityHex`].
#[must_use]
pub fn html_entity_hex(value: char) -> Token {
    Token::HTMLEntityHex(value)
}

/// Builds a [`Token::HTMLEntityEnd`].
#[must_use]
pub fn html_entity_end(named_value: Option<char>) -> Token {
    Token::HTMLEntityEnd(named_value)
}

/// Builds a [`Token::HeadingStart`].
///
/// # Panics
///
/// Panics if `level` is not in `1..=6`. The tokenizer always clamps before
/// calling this, so this is an internal contract check, not user-facing
/// validation.
#[must_use]
pub fn heading_start(level: u8) -> Token {
    assert!((1..=6).contains(&level), "heading level out of range");
    Token::HeadingStart(level)
}

/// Builds a [`Token::HeadingEnd`].
#[must_use]
pub fn heading_end() -> Token {
    Token::HeadingEnd
}

/// Builds a [`Token::CommentStart`].
#[must_use]
pub fn comment_start() -> Token {
    Token::CommentStart
}

/// Builds a [`Token::CommentEnd`].
#[must_use]
pub fn comment_end() -> Token {
    Token::CommentEnd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips_through_as_text() {
        let token = text("hello");
        assert_eq!(token.as_text(), Some("hello"));
        assert!(token.is_text());
    }

    #[test]
    fn non_text_tokens_are_not_text() {
        assert!(!template_open().is_text());
        assert_eq!(template_open().as_text(), None);
    }

    #[test]
    fn as_text_mut_allows_merging() {
        let mut token = text("foo");
        if let Some(buf) = token.as_text_mut() {
            buf.push_str("bar");
        }
        assert_eq!(token.as_text(), Some("foobar"));
    }

    #[test]
    #[should_panic(expected = "heading level out of range")]
    fn heading_start_rejects_out_of_range_level() {
        heading_start(7);
    }
}
