//! Template.

use wikicode_tokens::Token;

use crate::context::Context;
use crate::route::RouteResult;
use crate::tokenizer::Tokenizer;

/// Entry inside `{{`. Parses the name, then wraps it with
/// `TemplateOpen`/`TemplateClose` in the current (already-pushed) frame.
///
/// On failure the caller tries the next interpretation; the cursor and
/// frame stack are left exactly as they were on entry.
pub(crate) fn parse(tokenizer: &mut Tokenizer) -> RouteResult<()> {
    let reset = tokenizer.cursor.head();
    let depth = tokenizer.frames.depth();

    match tokenizer.parse(Context::template_name()) {
        Ok(tokens) => {
            tokenizer.frames.top().push_token(wikicode_tokens::template_open());
            tokenizer.frames.top().splice(tokens);
            tokenizer.frames.top().push_token(wikicode_tokens::template_close());
            Ok(())
        }
        Err(failure) => {
            tokenizer.frames.unwind_to(depth);
            tokenizer.cursor.reset_to(reset);
            Err(failure)
        }
    }
}

/// `|` inside `TEMPLATE`.
pub(crate) fn param(tokenizer: &mut Tokenizer) {
    let before = tokenizer.frames.top_context();
    let mut after = before - (Context::TEMPLATE_NAME | Context::TEMPLATE_PARAM_VALUE);

    if before.contains(Context::TEMPLATE_PARAM_KEY) {
        tokenizer.frames.top().set_context(after);
        let tokens = tokenizer.frames.pop_keeping_context();
        tokenizer.frames.top().splice(tokens);
        after = tokenizer.frames.top_context();
    }

    after.insert(Context::TEMPLATE_PARAM_KEY);
    tokenizer.frames.top().push_token(wikicode_tokens::template_param_separator());
    tokenizer.frames.top().set_context(after);
    tokenizer.frames.push(after);
}

/// `=` inside `TEMPLATE_PARAM_KEY`.
pub(crate) fn param_value(tokenizer: &mut Tokenizer) {
    let tokens = tokenizer.frames.pop_keeping_context();
    tokenizer.frames.top().splice(tokens);

    let mut context = tokenizer.frames.top_context();
    context.remove(Context::TEMPLATE_PARAM_KEY);
    context.insert(Context::TEMPLATE_PARAM_VALUE);
    tokenizer.frames.top().push_token(wikicode_tokens::template_param_equals());
    tokenizer.frames.top().set_context(context);
}

/// `}}` inside `TEMPLATE`.
pub(crate) fn end(tokenizer: &mut Tokenizer) -> Vec<Token> {
    if tokenizer.frames.top_context().contains(Context::TEMPLATE_PARAM_KEY) {
        let tokens = tokenizer.frames.pop_keeping_context();
        tokenizer.frames.top().splice(tokens);
    }
    tokenizer.cursor.advance_by(2);
    tokenizer.frames.pop()
}
