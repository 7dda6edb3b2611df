//! The context bitset.
//!
//! Roughly twenty flags that fit in one machine word, used for
//! constant-time subset checks throughout the dispatch cascade. A
//! textbook fit for [`bitflags`]: every check below is a single AND
//! against a packed integer instead of a struct of booleans.

use bitflags::bitflags;

bitflags! {
    /// Context flags for the frame currently being parsed.
    ///
    /// The "parent" bits (`TEMPLATE`, `ARGUMENT`, `WIKILINK`, `HEADING`,
    /// `COMMENT`) describe which construct a frame belongs to. The
    /// sub-bits narrow that further (e.g. `TEMPLATE_NAME` vs
    /// `TEMPLATE_PARAM_KEY`); constructors below always set the sub-bit
    /// together with its implied parent bit; they are never sent out alone.
    ///
    /// The safety-state bits (`FAIL_NEXT` and friends) are only meaningful
    /// while one of the name-like sub-bits is also set; see
    /// [`crate::safety`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub(crate) struct Context: u32 {
        const TEMPLATE              = 1 << 0;
        const TEMPLATE_NAME         = 1 << 1;
        const TEMPLATE_PARAM_KEY    = 1 << 2;
        const TEMPLATE_PARAM_VALUE  = 1 << 3;

        const ARGUMENT              = 1 << 4;
        const ARGUMENT_NAME         = 1 << 5;
        const ARGUMENT_DEFAULT      = 1 << 6;

        const WIKILINK              = 1 << 7;
        const WIKILINK_TITLE        = 1 << 8;
        const WIKILINK_TEXT         = 1 << 9;

        const HEADING               = 1 << 10;
        const HEADING_LEVEL_1       = 1 << 11;
        const HEADING_LEVEL_2       = 1 << 12;
        const HEADING_LEVEL_3       = 1 << 13;
        const HEADING_LEVEL_4       = 1 << 14;
        const HEADING_LEVEL_5       = 1 << 15;
        const HEADING_LEVEL_6       = 1 << 16;

        const COMMENT                = 1 << 17;

        const FAIL_NEXT             = 1 << 18;
        const FAIL_ON_LBRACE        = 1 << 19;
        const FAIL_ON_RBRACE        = 1 << 20;
        const HAS_TEXT              = 1 << 21;
        const FAIL_ON_TEXT          = 1 << 22;
    }
}

/// Constructs that can trigger an unclosed-construct route failure at
/// end-of-input.
const FAIL_AT_EOF: Context = Context::TEMPLATE
    .union(Context::ARGUMENT)
    .union(Context::WIKILINK)
    .union(Context::HEADING)
    .union(Context::COMMENT);

/// The six heading-level bits, in order, lowest level first.
const HEADING_LEVELS: [Context; 6] = [
    Context::HEADING_LEVEL_1,
    Context::HEADING_LEVEL_2,
    Context::HEADING_LEVEL_3,
    Context::HEADING_LEVEL_4,
    Context::HEADING_LEVEL_5,
    Context::HEADING_LEVEL_6,
];

impl Context {
    /// Context for parsing a template name.
    pub(crate) fn template_name() -> Self {
        Self::TEMPLATE | Self::TEMPLATE_NAME
    }

    /// Context for parsing a template argument name.
    pub(crate) fn argument_name() -> Self {
        Self::ARGUMENT | Self::ARGUMENT_NAME
    }

    /// Context for parsing a wikilink title.
    pub(crate) fn wikilink_title() -> Self {
        Self::WIKILINK | Self::WIKILINK_TITLE
    }

    /// Context for parsing a heading at outline `level`.
    ///
    /// `level` is clamped to `1..=6` by callers before reaching here.
    pub(crate) fn heading_level(level: u8) -> Self {
        let bit = HEADING_LEVELS[usize::from(level.clamp(1, 6) - 1)];
        Self::HEADING | bit
    }

    /// The outline level implied by a `HEADING_LEVEL_N` bit, if any is set.
    pub(crate) fn current_heading_level(self) -> Option<u8> {
        HEADING_LEVELS
            .iter()
            .position(|bit| self.contains(*bit))
            .map(|index| (index + 1) as u8)
    }

    /// True while inside any construct that fails its route at EOF rather
    /// than simply running out of input cleanly.
    pub(crate) fn fails_at_eof(self) -> bool {
        self.intersects(FAIL_AT_EOF)
    }

    /// True while a name-like safety-checked context is active.
    pub(crate) fn is_name_like(self) -> bool {
        self.intersects(
            Self::TEMPLATE_NAME | Self::WIKILINK_TITLE | Self::TEMPLATE_PARAM_KEY | Self::ARGUMENT_NAME,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_bits_imply_their_parent() {
        assert!(Context::template_name().contains(Context::TEMPLATE));
        assert!(Context::argument_name().contains(Context::ARGUMENT));
        assert!(Context::wikilink_title().contains(Context::WIKILINK));
    }

    #[test]
    fn heading_level_round_trips() {
        for level in 1..=6u8 {
            let context = Context::heading_level(level);
            assert_eq!(context.current_heading_level(), Some(level));
            assert!(context.contains(Context::HEADING));
        }
    }

    #[test]
    fn fails_at_eof_matches_fail_contexts() {
        assert!(Context::template_name().fails_at_eof());
        assert!(Context::COMMENT.fails_at_eof());
        assert!(!Context::empty().fails_at_eof());
    }
}
