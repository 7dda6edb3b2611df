//! Wikilink.
//!
//! On a failed title parse the cursor is left just past the already-
//! consumed `[[`, not rewound before it: `[[` has no alternative
//! interpretation to retry (unlike `{{`), so leaving it for the next
//! dispatch iteration to reprocess would just re-trigger this same parse
//! and fail identically, forever. The title sub-parse's own look-ahead may
//! have consumed real content before failing (e.g. the `name` in
//! `[[bad\nname]]`); that's discarded along with the failed frame, and the
//! `[[` stands as the only literal output for what was consumed here.

use wikicode_tokens::Token;

use crate::context::Context;
use crate::tokenizer::Tokenizer;

/// Entry `[[`.
pub(crate) fn parse(tokenizer: &mut Tokenizer) {
    tokenizer.cursor.advance_by(2);
    let reset = tokenizer.cursor.head();
    let depth = tokenizer.frames.depth();

    match tokenizer.parse(Context::wikilink_title()) {
        Ok(tokens) => {
            tokenizer.frames.top().push_token(wikicode_tokens::wikilink_open());
            tokenizer.frames.top().splice(tokens);
            tokenizer.frames.top().push_token(wikicode_tokens::wikilink_close());
        }
        Err(_) => {
            tokenizer.frames.unwind_to(depth);
            tokenizer.cursor.reset_to(reset);
            tokenizer.frames.top().write_str("[[");
        }
    }
}

/// `|` inside `WIKILINK_TITLE`.
pub(crate) fn separator(tokenizer: &mut Tokenizer) {
    let mut context = tokenizer.frames.top_context();
    context.remove(Context::WIKILINK_TITLE);
    context.insert(Context::WIKILINK_TEXT);
    tokenizer.frames.top().push_token(wikicode_tokens::wikilink_separator());
    tokenizer.frames.top().set_context(context);
}

/// `]]` inside `WIKILINK`.
pub(crate) fn end(tokenizer: &mut Tokenizer) -> Vec<Token> {
    tokenizer.cursor.advance_by(2);
    tokenizer.frames.pop()
}
