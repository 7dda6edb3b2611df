//! Tokenizer configuration.
//!
//! Every construct this tokenizer recognizes is always recognized; there
//! is no way to turn one off. The one knob that does exist is the
//! recursion-depth cap a speculative, recursive-descent tokenizer needs
//! regardless: how deep nested constructs are allowed to go before the
//! tokenizer gives up and falls back to literal text.

/// Tokenizer configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Maximum nesting depth of speculative sub-parses
    /// (`parse_template_or_argument`, `parse_wikilink`, `parse_heading`,
    /// `parse_comment`, `parse_entity`, and the template/argument body
    /// parses they call into).
    ///
    /// Caps recursive descent comfortably below a native stack overflow
    /// while still allowing realistic nesting depths.
    pub max_depth: usize,
}

impl Config {
    /// The default nesting-depth limit.
    pub const DEFAULT_MAX_DEPTH: usize = 40;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
