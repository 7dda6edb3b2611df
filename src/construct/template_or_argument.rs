//! Template-or-argument, entry `{{`.
//!
//! The crux of the tokenizer: `{{{foo}}}` is an argument, `{{{{foo}}}}` is
//! a template wrapping a braced literal, and so on. Consecutive `{` are
//! consumed from the front in groups of 3 (argument) or 2 (template),
//! trying argument first since it accounts for more braces per success.
//! Whatever a successful attempt doesn't already consume recursively (via
//! this same function firing again through the ordinary dispatch cascade
//! while parsing the construct's name) is re-scanned on the next loop
//! iteration rather than tracked by a running counter. A fixed brace
//! count decremented ahead of time can't account for a nested construct
//! swallowing more of the run than its own opening delimiter, which is
//! exactly what happens when this function recurses into itself while
//! parsing a name.

use super::{argument, template};
use crate::context::Context;
use crate::tokenizer::Tokenizer;

pub(crate) fn parse(tokenizer: &mut Tokenizer) {
    tokenizer.frames.push(Context::empty());

    loop {
        let mut braces = 0usize;
        while tokenizer.cursor.read(braces) == Some('{') {
            braces += 1;
        }
        if braces == 0 {
            break;
        }

        if braces == 1 {
            tokenizer.cursor.advance();
            tokenizer.frames.top().write_str("{");
            break;
        }

        if braces == 2 {
            tokenizer.cursor.advance_by(2);
            match template::parse(tokenizer) {
                Ok(()) => break,
                Err(_) => {
                    tokenizer.frames.top().write_str("{{");
                    break;
                }
            }
        }

        // braces >= 3: argument first, template as fallback.
        let start = tokenizer.cursor.head();
        tokenizer.cursor.advance_by(3);
        match argument::parse(tokenizer) {
            Ok(()) => continue,
            Err(_) => {
                tokenizer.cursor.reset_to(start);
                tokenizer.cursor.advance_by(2);
                match template::parse(tokenizer) {
                    Ok(()) => continue,
                    Err(_) => {
                        tokenizer.cursor.reset_to(start);
                        let literal: String = std::iter::repeat('{').take(braces).collect();
                        tokenizer.frames.top().write_str(&literal);
                        tokenizer.cursor.advance_by(braces);
                        break;
                    }
                }
            }
        }
    }

    let tokens = tokenizer.frames.pop();
    tokenizer.frames.top().splice(tokens);
}
