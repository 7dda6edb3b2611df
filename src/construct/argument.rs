//! Argument. Same shape as [`super::template`], with context
//! `ARGUMENT_NAME` and sentinel tokens `ArgumentOpen`/`ArgumentClose` in
//! place of the template ones, and no parameter key/value distinction.

use wikicode_tokens::Token;

use crate::context::Context;
use crate::route::RouteResult;
use crate::tokenizer::Tokenizer;

/// Entry inside `{{{`.
pub(crate) fn parse(tokenizer: &mut Tokenizer) -> RouteResult<()> {
    let reset = tokenizer.cursor.head();
    let depth = tokenizer.frames.depth();

    match tokenizer.parse(Context::argument_name()) {
        Ok(tokens) => {
            tokenizer.frames.top().push_token(wikicode_tokens::argument_open());
            tokenizer.frames.top().splice(tokens);
            tokenizer.frames.top().push_token(wikicode_tokens::argument_close());
            Ok(())
        }
        Err(failure) => {
            tokenizer.frames.unwind_to(depth);
            tokenizer.cursor.reset_to(reset);
            Err(failure)
        }
    }
}

/// `|` inside `ARGUMENT_NAME`.
pub(crate) fn separator(tokenizer: &mut Tokenizer) {
    let mut context = tokenizer.frames.top_context();
    context.remove(Context::ARGUMENT_NAME);
    context.insert(Context::ARGUMENT_DEFAULT);
    tokenizer.frames.top().push_token(wikicode_tokens::argument_separator());
    tokenizer.frames.top().set_context(context);
}

/// `}}}` inside `ARGUMENT`.
///
/// Consumes all three closing braces: the entry check (dispatch rule 6)
/// already confirmed `this`, `this+1`, and `this+2` are all `}`.
pub(crate) fn end(tokenizer: &mut Tokenizer) -> Vec<Token> {
    tokenizer.cursor.advance_by(3);
    tokenizer.frames.pop()
}
