//! The main dispatch loop and the `Tokenizer` that owns all parse state.
//!
//! `tokenize` sets up a cursor, a frame stack, and the single global flag,
//! then runs the dispatch loop against the outermost (empty) context.
//! Construct handlers recurse back into [`Tokenizer::parse`] with a
//! narrower context to parse the body of a sub-construct.

use log::trace;
use wikicode_tokens::Token;

use crate::config::Config;
use crate::construct;
use crate::context::Context;
use crate::cursor::Cursor;
use crate::frame::FrameStack;
use crate::route::{RouteFailure, RouteResult};
use crate::safety;

/// Characters the dispatch cascade ever branches on. Anything else is
/// always literal and skips the cascade entirely.
const MARKERS: &[char] = &[
    '{', '}', '[', ']', '<', '>', '|', '=', '&', '#', '*', ';', ':', '/', '-', '!', '\n',
];

fn is_marker(ch: char) -> bool {
    MARKERS.contains(&ch)
}

/// The result of a heading-body sub-parse: unlike every other construct, a
/// closed heading reports the clamped level it closed at alongside its
/// title tokens, because the enclosing `parse_heading` needs the level to
/// decide how many surplus `=` to re-emit as literal text.
#[derive(Debug)]
pub(crate) struct HeadingEnd {
    pub(crate) level: u8,
    pub(crate) tokens: Vec<Token>,
}

/// What a completed frame handed back to the dispatch loop that pushed it.
enum Outcome {
    Tokens(Vec<Token>),
    Heading(HeadingEnd),
}

/// Owns every piece of mutable state a single `tokenize` call needs.
pub(crate) struct Tokenizer {
    pub(crate) cursor: Cursor,
    pub(crate) frames: FrameStack,
    /// `GL_HEADING`, the lone global flag. Sits outside the per-frame
    /// `Context` because it must survive across the frames a heading's
    /// own title sub-parse pushes and pops.
    pub(crate) gl_heading: bool,
    pub(crate) config: Config,
}

impl Tokenizer {
    fn new(text: &str, config: Config) -> Self {
        Self {
            cursor: Cursor::new(text),
            frames: FrameStack::new(),
            gl_heading: false,
            config,
        }
    }

    /// Pushes a frame with `context`, runs the dispatch loop against it,
    /// and returns its tokens once that frame's parse concludes.
    ///
    /// Enforces the recursion-depth cap (see [`Config`]): a frame stack
    /// already at `max_depth` fails the route instead of pushing further,
    /// so pathologically nested input degrades to literal text rather than
    /// overflowing the native stack.
    pub(crate) fn parse(&mut self, context: Context) -> RouteResult<Vec<Token>> {
        match self.parse_frame(context)? {
            Outcome::Tokens(tokens) => Ok(tokens),
            Outcome::Heading(ending) => Ok(ending.tokens),
        }
    }

    /// Like [`Tokenizer::parse`], but for a heading frame specifically:
    /// returns the closing level alongside the title tokens.
    pub(crate) fn parse_heading(&mut self, context: Context) -> RouteResult<HeadingEnd> {
        match self.parse_frame(context)? {
            Outcome::Heading(ending) => Ok(ending),
            Outcome::Tokens(tokens) => Ok(HeadingEnd { level: 0, tokens }),
        }
    }

    fn parse_frame(&mut self, context: Context) -> RouteResult<Outcome> {
        if self.frames.depth() >= self.config.max_depth {
            trace!("max_depth {} reached, failing route", self.config.max_depth);
            return Err(RouteFailure);
        }
        self.frames.push(context);
        self.dispatch_loop()
    }

    fn dispatch_loop(&mut self) -> RouteResult<Outcome> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Runs one iteration of the main dispatch loop against the active
    /// frame. `Ok(None)` means keep looping; `Ok(Some(_))` means the
    /// active frame's parse is complete.
    fn step(&mut self) -> RouteResult<Option<Outcome>> {
        let context = self.frames.top_context();

        if context.contains(Context::COMMENT) {
            return self.step_comment();
        }

        if context.is_name_like() {
            if let Some(ch) = self.cursor.current() {
                let mut updated = context;
                safety::verify(&mut updated, ch)?;
                self.frames.top().set_context(updated);
            }
        }
        let context = self.frames.top_context();

        let this = match self.cursor.current() {
            Some(ch) => ch,
            None => {
                return if context.fails_at_eof() {
                    Err(RouteFailure)
                } else {
                    Ok(Some(Outcome::Tokens(self.frames.pop())))
                };
            }
        };

        if !is_marker(this) {
            self.frames.top().write_char(this);
            self.cursor.advance();
            return Ok(None);
        }

        let next = self.cursor.read(1);

        // 1. `{{` -> parse_template_or_argument.
        if this == '{' && next == Some('{') {
            construct::template_or_argument::parse(self);
            let cleared = self.frames.top_context() - Context::FAIL_NEXT;
            self.frames.top().set_context(cleared);
            return Ok(None);
        }

        // 2. `|` in TEMPLATE -> handle_template_param.
        if this == '|' && context.contains(Context::TEMPLATE) {
            construct::template::param(self);
            self.cursor.advance();
            return Ok(None);
        }

        // 3. `=` in TEMPLATE_PARAM_KEY -> handle_template_param_value.
        if this == '=' && context.contains(Context::TEMPLATE_PARAM_KEY) {
            construct::template::param_value(self);
            self.cursor.advance();
            return Ok(None);
        }

        // 4. `}}` in TEMPLATE -> return handle_template_end.
        if this == '}' && next == Some('}') && context.contains(Context::TEMPLATE) {
            return Ok(Some(Outcome::Tokens(construct::template::end(self))));
        }

        // 5. `|` in ARGUMENT_NAME -> handle_argument_separator.
        if this == '|' && context.contains(Context::ARGUMENT_NAME) {
            construct::argument::separator(self);
            self.cursor.advance();
            return Ok(None);
        }

        // 6. `}}}` in ARGUMENT -> return handle_argument_end; else literal.
        if this == '}' && next == Some('}') && context.contains(Context::ARGUMENT) {
            if self.cursor.read(2) == Some('}') {
                return Ok(Some(Outcome::Tokens(construct::argument::end(self))));
            }
            self.frames.top().write_char(this);
            self.cursor.advance();
            return Ok(None);
        }

        // 7. `[[` -> parse_wikilink, unless already inside a title.
        if this == '[' && next == Some('[') {
            if !context.contains(Context::WIKILINK_TITLE) {
                construct::wikilink::parse(self);
                return Ok(None);
            }
            self.frames.top().write_char(this);
            self.cursor.advance();
            return Ok(None);
        }

        // 8. `|` in WIKILINK_TITLE -> handle_wikilink_separator.
        if this == '|' && context.contains(Context::WIKILINK_TITLE) {
            construct::wikilink::separator(self);
            self.cursor.advance();
            return Ok(None);
        }

        // 9. `]]` in WIKILINK -> return handle_wikilink_end.
        if this == ']' && next == Some(']') && context.contains(Context::WIKILINK) {
            return Ok(Some(Outcome::Tokens(construct::wikilink::end(self))));
        }

        // 10. `=` at start-of-line, outside GL_HEADING -> parse_heading.
        if this == '='
            && !self.gl_heading
            && matches!(self.cursor.read_backwards(1), None | Some('\n'))
        {
            construct::heading::parse(self);
            return Ok(None);
        }

        // 11. `=` in HEADING -> return handle_heading_end.
        if this == '=' && context.contains(Context::HEADING) {
            let ending = construct::heading::end(self);
            return Ok(Some(Outcome::Heading(ending)));
        }

        // 12. `\n` in HEADING -> fail route.
        if this == '\n' && context.contains(Context::HEADING) {
            return Err(RouteFailure);
        }

        // 13. `&` -> parse_entity.
        if this == '&' {
            construct::entity::parse(self);
            return Ok(None);
        }

        // 14. `<!--` -> parse_comment.
        if this == '<'
            && next == Some('!')
            && self.cursor.read(2) == Some('-')
            && self.cursor.read(3) == Some('-')
        {
            construct::comment::parse(self);
            return Ok(None);
        }

        // 15. Otherwise: literal.
        self.frames.top().write_char(this);
        self.cursor.advance();
        Ok(None)
    }

    /// Inside a `COMMENT` frame the loop short-circuits. Every character
    /// is literal unless `-->` starts at the head.
    fn step_comment(&mut self) -> RouteResult<Option<Outcome>> {
        if self.cursor.read(0) == Some('-') && self.cursor.read(1) == Some('-') && self.cursor.read(2) == Some('>')
        {
            return Ok(Some(Outcome::Tokens(construct::comment::end(self))));
        }
        match self.cursor.current() {
            Some(ch) => {
                self.frames.top().write_char(ch);
                self.cursor.advance();
                Ok(None)
            }
            None => Err(RouteFailure),
        }
    }
}

/// Tokenizes `text` into a flat token stream.
#[must_use]
pub fn tokenize(text: &str, config: Config) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(text, config);
    tokenizer
        .parse(Context::empty())
        .expect("the outermost parse never fails its route: the empty context never fails at EOF")
}
