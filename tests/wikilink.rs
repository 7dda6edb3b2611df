//! Wikilink parsing.

use pretty_assertions::assert_eq;
use wikicode_tokenizer::{tokenize, Config};
use wikicode_tokens::{text, wikilink_close, wikilink_open, wikilink_separator, Token};

fn run(text: &str) -> Vec<Token> {
    tokenize(text, Config::default())
}

#[test]
fn wikilink_without_display_text() {
    assert_eq!(
        run("[[Page]]"),
        vec![wikilink_open(), text("Page"), wikilink_close()]
    );
}

#[test]
fn unclosed_wikilink_is_entirely_literal() {
    assert_eq!(run("[[Page"), vec![text("[[Page")]);
}

#[test]
fn bracket_in_title_must_be_paired_or_the_whole_thing_is_literal() {
    assert_eq!(run("[[a[b]]"), vec![text("[[a[b]]")]);
}

#[test]
fn nested_double_bracket_inside_a_title_is_literal_not_a_new_wikilink() {
    // Once inside WIKILINK_TITLE, a further `[[` does not recurse, but a
    // lone unpaired `[` still fails the name, so this whole attempt falls
    // back to literal text.
    assert_eq!(run("[[a[[b]]"), vec![text("[[a[[b]]")]);
}

#[test]
fn surrounding_text_is_preserved() {
    assert_eq!(
        run("see [[Page|here]] for more"),
        vec![
            text("see "),
            wikilink_open(),
            text("Page"),
            wikilink_separator(),
            text("here"),
            wikilink_close(),
            text(" for more"),
        ]
    );
}
