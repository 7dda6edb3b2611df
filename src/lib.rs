//! A context-driven recursive tokenizer for MediaWiki wikicode.
//!
//! Given a Unicode input string, [`tokenize`] produces a flat stream of
//! [`wikicode_tokens::Token`] values describing templates (`{{...}}`),
//! template arguments (`{{{...}}}`), internal wikilinks (`[[...]]`),
//! section headings (`== ... ==`), HTML comments (`<!-- ... -->`), HTML
//! character entities (`&amp;`), and the literal text between them.
//!
//! The hard part is that these constructs nest arbitrarily and overlap
//! ambiguously: `{{{` might open a 3-brace argument or a template whose
//! body happens to start with a literal `{`. Their validity can only be
//! confirmed by parsing further ahead and potentially backing out. The
//! tokenizer handles this with speculative parsing: a construct handler
//! pushes a frame, recursively re-enters the dispatch loop with a
//! narrower [`Context`](context::Context), and either splices the result
//! back in on success or unwinds the frame and falls back to literal text
//! on failure. See `DESIGN.md` for how each piece is grounded.
//!
//! This crate does no I/O and performs no template expansion, link
//! rendering, or tag-extension handling. It only tokenizes.

#![deny(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

mod config;
mod construct;
mod context;
mod cursor;
mod entities;
mod frame;
mod route;
mod safety;
mod tokenizer;

pub use config::Config;
pub use tokenizer::tokenize;
