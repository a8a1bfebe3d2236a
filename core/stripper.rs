pub mod common;
pub mod lexical;
pub mod literal;
pub mod two_pass;

pub use common::{CommentKind, CommentMatch, remove_matches};
pub use literal::{LiteralSpan, find_literal_spans};

/// How comments are located in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Regex pass for `/* */` over the whole file, then `//` per line with
    /// per-line literal shielding.
    #[default]
    TwoPass,
    /// Single scan that tracks string literals across the whole file.
    Lexical,
}

/// Removes `/* */` and `//` comments from `content` and drops the lines left
/// blank. Never fails; malformed input is handled on a best-effort basis.
pub fn strip(content: &str) -> String {
    two_pass::strip(content)
}

pub fn strip_with(content: &str, strategy: Strategy) -> String {
    match strategy {
        Strategy::TwoPass => two_pass::strip(content),
        Strategy::Lexical => lexical::strip(content),
    }
}
