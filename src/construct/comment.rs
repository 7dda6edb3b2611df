//! Comment.
//!
//! Unlike every other construct, a `COMMENT` frame's body isn't parsed
//! through the ordinary dispatch cascade at all.
//! [`crate::tokenizer::Tokenizer::step_comment`] short-circuits it: every
//! character is literal until `-->` appears at the head. Comments cannot
//! nest and contain no sub-constructs.
//!
//! On an unclosed comment (route fails at EOF, see
//! [`crate::context::Context::fails_at_eof`]), the cursor is left just
//! past the already-consumed `<!--`, mirroring [`super::wikilink`]. There
//! is no alternative interpretation to retry, so rewinding before the
//! delimiter would just re-trigger the same failing parse forever.

use wikicode_tokens::Token;

use crate::context::Context;
use crate::tokenizer::Tokenizer;

/// Entry `<!--`.
pub(crate) fn parse(tokenizer: &mut Tokenizer) {
    tokenizer.cursor.advance_by(4);
    let reset = tokenizer.cursor.head();
    let depth = tokenizer.frames.depth();

    match tokenizer.parse(Context::COMMENT) {
        Ok(tokens) => {
            tokenizer.frames.top().push_token(wikicode_tokens::comment_start());
            tokenizer.frames.top().splice(tokens);
            tokenizer.frames.top().push_token(wikicode_tokens::comment_end());
        }
        Err(_) => {
            tokenizer.frames.unwind_to(depth);
            tokenizer.cursor.reset_to(reset);
            tokenizer.frames.top().write_str("<!--");
        }
    }
}

/// `-->` inside `COMMENT`.
pub(crate) fn end(tokenizer: &mut Tokenizer) -> Vec<Token> {
    tokenizer.cursor.advance_by(3);
    tokenizer.frames.pop()
}
