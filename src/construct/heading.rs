//! Heading.
//!
//! Two things guarantee this handler always terminates:
//!
//! - On a failed heading attempt, the cursor is rewound past the *entire*
//!   `=` run before the literal fallback is written, not to one character
//!   short of it. Leaving the run's last `=` unconsumed would put the
//!   cursor right back at a still-start-of-line `=` with `GL_HEADING`
//!   already cleared. The next dispatch iteration would retry the exact
//!   same heading attempt and fail it the exact same way, forever.
//! - The same full-consumption rule applies to the nested "look for a
//!   further terminator" attempt in [`end`].
//!
//! Both functions still snapshot the cursor position right *after* that
//! fixed consumption and restore it on failure, undoing only whatever the
//! speculative sub-parse itself advanced past. For example the `" more"`
//! in `== Title == more\n` must remain for the enclosing context to see
//! once `end`'s deeper lookahead decides the first `==` was the real
//! close.

use crate::context::Context;
use crate::tokenizer::{HeadingEnd, Tokenizer};

fn count_equals(tokenizer: &Tokenizer) -> usize {
    let mut best = 0usize;
    while tokenizer.cursor.read(best) == Some('=') {
        best += 1;
    }
    best
}

/// Entry `=` at start-of-line.
pub(crate) fn parse(tokenizer: &mut Tokenizer) {
    tokenizer.gl_heading = true;

    let best = count_equals(tokenizer);
    let level = best.min(6) as u8;
    tokenizer.cursor.advance_by(best);
    let reset = tokenizer.cursor.head();
    let depth = tokenizer.frames.depth();

    match tokenizer.parse_heading(Context::heading_level(level)) {
        Ok(ending) => {
            tokenizer.frames.top().push_token(wikicode_tokens::heading_start(ending.level));
            if best > usize::from(ending.level) {
                let extra: String =
                    std::iter::repeat('=').take(best - usize::from(ending.level)).collect();
                tokenizer.frames.top().write_str(&extra);
            }
            tokenizer.frames.top().splice(ending.tokens);
            tokenizer.frames.top().push_token(wikicode_tokens::heading_end());
        }
        Err(_) => {
            tokenizer.frames.unwind_to(depth);
            tokenizer.cursor.reset_to(reset);
            let literal: String = std::iter::repeat('=').take(best).collect();
            tokenizer.frames.top().write_str(&literal);
        }
    }

    tokenizer.gl_heading = false;
}

/// `=` inside `HEADING` (heading end).
pub(crate) fn end(tokenizer: &mut Tokenizer) -> HeadingEnd {
    let context = tokenizer.frames.top_context();
    let current = context.current_heading_level().unwrap_or(1);

    let best = count_equals(tokenizer);
    let level = best.min(usize::from(current)).min(6) as u8;
    tokenizer.cursor.advance_by(best);
    let reset = tokenizer.cursor.head();
    let depth = tokenizer.frames.depth();

    match tokenizer.parse_heading(context) {
        Ok(inner) => {
            // This run wasn't the real terminator after all: a deeper `=`
            // run closed the heading, so this one is absorbed as literal
            // title content and the inner level bubbles outward.
            let literal: String = std::iter::repeat('=').take(best).collect();
            tokenizer.frames.top().write_str(&literal);
            tokenizer.frames.top().splice(inner.tokens);
            HeadingEnd {
                level: inner.level,
                tokens: tokenizer.frames.pop(),
            }
        }
        Err(_) => {
            // The lookahead may have consumed real content before failing
            // (e.g. " more" in "== Title == more\n"); that content belongs
            // to whatever comes after this heading, not to this frame.
            tokenizer.frames.unwind_to(depth);
            tokenizer.cursor.reset_to(reset);
            if best > usize::from(level) {
                let surplus: String =
                    std::iter::repeat('=').take(best - usize::from(level)).collect();
                tokenizer.frames.top().write_str(&surplus);
            }
            HeadingEnd {
                level,
                tokens: tokenizer.frames.pop(),
            }
        }
    }
}
