//! The route-failure channel.
//!
//! A speculative parse either returns a token list or signals that this
//! interpretation didn't pan out. Route failure is a zero-sized marker
//! error that composes with `?`, so a failed sub-parse can propagate
//! straight up through however many construct handlers called into it
//! without a side channel on `Tokenizer` that every caller has to
//! remember to check.
//!
//! A [`RouteFailure`] never escapes `tokenize`; every caller of
//! [`crate::tokenizer::Tokenizer::parse`] either recovers by falling back
//! to literal text or propagates the failure to its own caller, who will.

/// Marker error: the current speculative parse failed and its frame has
/// already been discarded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RouteFailure;

/// Shorthand for the result of a speculative parse.
pub(crate) type RouteResult<T> = Result<T, RouteFailure>;
