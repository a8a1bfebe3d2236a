use super::common::{cut_line_comment, drop_blank_lines, normalize_newlines};
use super::literal;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern compiles"));

/// Removes every `/* ... */` span, newlines included, without looking at
/// string literals. An unterminated `/*` is left as is.
pub fn remove_block_comments(content: &str) -> Cow<'_, str> {
    BLOCK_COMMENT.replace_all(content, "")
}

/// Cuts the line comment off a single line, leaving `//` sequences that sit
/// inside a closed literal span alone.
pub fn remove_line_comment(line: &str) -> Cow<'_, str> {
    if !line.contains(['"', '\'']) {
        return Cow::Borrowed(cut_line_comment(line));
    }

    let spans = literal::find_literal_spans(line);
    if spans.is_empty() {
        return Cow::Borrowed(cut_line_comment(line));
    }

    let shielded = literal::shield(line, &spans);
    Cow::Owned(literal::unshield(cut_line_comment(&shielded), line, &spans))
}

/// Block comments first over the whole text, then line comments per line,
/// then blank lines. Line endings come out as `\n`.
pub fn strip(content: &str) -> String {
    let content = normalize_newlines(content);
    let without_blocks = remove_block_comments(&content);
    let lines: Vec<Cow<'_, str>> = without_blocks.split('\n').map(remove_line_comment).collect();
    drop_blank_lines(&lines.join("\n"))
}
