//! HTML entity.
//!
//! Unlike the bracket/brace constructs, an entity's grammar is fixed-shape
//! enough (`&name;`, `&#NNN;`, `&#xHH;`) that it doesn't need a recursive
//! sub-parse through the dispatch loop. `try_entity` scans the run
//! directly off the cursor and only touches the frame stack to stage the
//! tokens it emits on success.

use crate::context::Context;
use crate::entities;
use crate::tokenizer::Tokenizer;

/// Entry `&`.
pub(crate) fn parse(tokenizer: &mut Tokenizer) {
    let start = tokenizer.cursor.head();
    let depth = tokenizer.frames.depth();
    tokenizer.frames.push(Context::empty());

    if try_entity(tokenizer) {
        let tokens = tokenizer.frames.pop();
        tokenizer.frames.top().splice(tokens);
    } else {
        tokenizer.frames.unwind_to(depth);
        tokenizer.cursor.reset_to(start);
        tokenizer.frames.top().write_char('&');
        tokenizer.cursor.advance();
    }
}

/// Tries to consume a whole `&...;` entity at the cursor (already on `&`),
/// pushing `HTMLEntityStart`/`HTMLEntityNumeric`/`HTMLEntityHex`/
/// `HTMLEntityEnd` onto the current (already-pushed) frame on success.
/// Leaves the cursor untouched on failure.
fn try_entity(tokenizer: &mut Tokenizer) -> bool {
    if tokenizer.cursor.read(1) == Some('#') {
        parse_numeric(tokenizer)
    } else {
        parse_named(tokenizer)
    }
}

fn parse_numeric(tokenizer: &mut Tokenizer) -> bool {
    let hex = matches!(tokenizer.cursor.read(2), Some('x' | 'X'));
    let digits_at = if hex { 3 } else { 2 };

    let mut len = 0usize;
    let is_digit = |c: char| if hex { c.is_ascii_hexdigit() } else { c.is_ascii_digit() };
    while tokenizer.cursor.read(digits_at + len).is_some_and(is_digit) {
        len += 1;
    }
    if len == 0 || tokenizer.cursor.read(digits_at + len) != Some(';') {
        return false;
    }

    let digits: String = (0..len).map(|i| tokenizer.cursor.read(digits_at + i).unwrap()).collect();
    let radix = if hex { 16 } else { 10 };
    let Ok(value) = u32::from_str_radix(&digits, radix) else {
        return false;
    };
    let Some(decoded) = char::from_u32(value) else {
        return false;
    };

    tokenizer.cursor.advance_by(digits_at + len + 1);
    tokenizer.frames.top().push_token(wikicode_tokens::html_entity_start());
    let token = if hex {
        wikicode_tokens::html_entity_hex(decoded)
    } else {
        wikicode_tokens::html_entity_numeric(decoded)
    };
    tokenizer.frames.top().push_token(token);
    tokenizer.frames.top().push_token(wikicode_tokens::html_entity_end(None));
    true
}

fn parse_named(tokenizer: &mut Tokenizer) -> bool {
    let mut len = 0usize;
    while tokenizer.cursor.read(1 + len).is_some_and(|c| c.is_ascii_alphanumeric()) {
        len += 1;
    }
    if len == 0 || tokenizer.cursor.read(1 + len) != Some(';') {
        return false;
    }

    let name: String = (0..len).map(|i| tokenizer.cursor.read(1 + i).unwrap()).collect();
    let Some(decoded) = entities::lookup(&name) else {
        return false;
    };

    tokenizer.cursor.advance_by(1 + len + 1);
    tokenizer.frames.top().push_token(wikicode_tokens::html_entity_start());
    tokenizer.frames.top().push_token(wikicode_tokens::html_entity_end(Some(decoded)));
    true
}
