//! The safety verifier.
//!
//! Rejects forbidden characters inside name-like contexts (template
//! names, wikilink titles, template parameter keys, argument names). This
//! runs once per character, ahead of the main dispatch cascade, whenever
//! the active frame's context is [`Context::is_name_like`].
//!
//! The single-brace/bracket arming applies to `TEMPLATE_NAME`,
//! `WIKILINK_TITLE`, and `ARGUMENT_NAME` alike: a name cannot contain a
//! significant mid-name brace or bracket. Leaving `ARGUMENT_NAME` out
//! would let a lone unpaired `{` at the start of an argument name pass as
//! ordinary name text instead of failing the route, so a 3-brace argument
//! attempt could win over a 2-brace template attempt it should lose to
//! (see `{{{{x}}}}` in `tests/scenarios.rs`).

use crate::context::Context;
use crate::route::{RouteFailure, RouteResult};

/// Checks one character against the armed/pending safety state in
/// `context`, mutating that state as needed.
///
/// Returns `Err(RouteFailure)` the moment a character makes the enclosing
/// name invalid; callers must fail the route immediately rather than
/// continue dispatching.
pub(crate) fn verify(context: &mut Context, ch: char) -> RouteResult<()> {
    if context.contains(Context::FAIL_NEXT) {
        return Err(RouteFailure);
    }

    if context.intersects(Context::TEMPLATE_NAME | Context::WIKILINK_TITLE | Context::ARGUMENT_NAME)
        && matches!(ch, '{' | '}' | '[' | ']')
    {
        context.insert(Context::FAIL_NEXT);
    }

    if context.intersects(Context::TEMPLATE_PARAM_KEY) {
        if ch == '{' {
            if context.contains(Context::FAIL_ON_LBRACE) {
                return Err(RouteFailure);
            }
            context.insert(Context::FAIL_ON_LBRACE);
        } else {
            context.remove(Context::FAIL_ON_LBRACE);
        }

        if ch == '}' {
            if context.contains(Context::FAIL_ON_RBRACE) {
                return Err(RouteFailure);
            }
            context.insert(Context::FAIL_ON_RBRACE);
        } else {
            context.remove(Context::FAIL_ON_RBRACE);
        }
    }

    if !context.contains(Context::HAS_TEXT) && !ch.is_whitespace() {
        context.insert(Context::HAS_TEXT);
    }
    if context.contains(Context::HAS_TEXT) && ch == '\n' {
        context.insert(Context::FAIL_ON_TEXT);
    }
    if context.contains(Context::FAIL_ON_TEXT) && !ch.is_whitespace() {
        return Err(RouteFailure);
    }

    Ok(())
}
