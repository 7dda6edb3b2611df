//! Heading parsing.

use pretty_assertions::assert_eq;
use wikicode_tokenizer::{tokenize, Config};
use wikicode_tokens::{heading_end, heading_start, text, Token};

fn run(text: &str) -> Vec<Token> {
    tokenize(text, Config::default())
}

#[test]
fn level_one_at_start_of_input() {
    assert_eq!(
        run("= Title =\n"),
        vec![heading_start(1), text(" Title "), heading_end(), text("\n")]
    );
}

#[test]
fn level_clamps_at_six() {
    assert_eq!(
        run("======= Title =======\n"),
        vec![heading_start(6), text(" Title "), heading_end(), text("\n")]
    );
}

#[test]
fn mismatched_opening_and_closing_run_uses_the_smaller() {
    // 3 opening `=`, 2 closing `=`: level = min(3, 2, 6) = 2, and the
    // surplus opening `=` is re-emitted as literal text before the title.
    assert_eq!(
        run("=== Title ==\n"),
        vec![heading_start(2), text("= Title "), heading_end(), text("\n")]
    );
}

#[test]
fn unterminated_heading_is_entirely_literal() {
    assert_eq!(run("== Title\n"), vec![text("== Title\n")]);
}

#[test]
fn single_equals_does_not_infinite_loop_when_unterminated() {
    // Regression case for the termination fix in construct::heading: a
    // failed single-`=` attempt must not leave the cursor back at the
    // same `=` with GL_HEADING cleared, or this would hang forever.
    assert_eq!(run("= no close\n"), vec![text("= no close\n")]);
}

#[test]
fn content_after_the_true_closing_run_is_preserved() {
    assert_eq!(
        run("== Title == trailing\n"),
        vec![
            heading_start(2),
            text(" Title "),
            heading_end(),
            text(" trailing\n"),
        ]
    );
}

#[test]
fn heading_cannot_start_mid_line() {
    assert_eq!(run("not a = heading = here"), vec![text("not a = heading = here")]);
}

#[test]
fn an_unterminated_heading_does_not_suppress_a_valid_one_on_the_next_line() {
    // The first line's heading attempt fails at its embedded newline and
    // falls back to literal text; GL_HEADING is cleared once that attempt
    // gives up, so the second line's own `=` run is free to start (and
    // successfully close) an independent heading.
    assert_eq!(
        run("== a\n== b ==\n"),
        vec![
            text("== a\n"),
            heading_start(2),
            text(" b "),
            heading_end(),
            text("\n"),
        ]
    );
}
