use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

/// Byte range `[from, to)` of a document covered by a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMatch {
    pub from: usize,
    pub to: usize,
    pub kind: CommentKind,
}

pub trait Start: Sized {
    fn start() -> Self;
}

pub trait End: Sized {
    fn end() -> Self;
}

/// Drives a character-level state machine over `input`.
///
/// `state_transition` maps the current parse state and the next character
/// (`None` once the input is exhausted) to the following state and an action.
/// `do_action` folds that action into the bookkeeping state, pushing any
/// completed matches. Positions handed to `do_action` are byte offsets of the
/// character being consumed, or `input.len()` for the final `None` step.
pub fn scan_impl<ParseState, ParseAction, Bookkeeping, Match, StateTransitionFn, DoActionFn>(
    input: &str,
    state_transition: StateTransitionFn,
    do_action: DoActionFn,
) -> Vec<Match>
where
    ParseState: Start + End + Copy + Eq,
    ParseAction: Copy + Eq,
    Bookkeeping: Start + Copy + Eq,
    StateTransitionFn: Fn(ParseState, Option<char>) -> (ParseState, ParseAction),
    DoActionFn: Fn(ParseAction, Bookkeeping, usize, &mut Vec<Match>) -> Bookkeeping,
{
    let mut matches = Vec::new();
    let mut parse_state = ParseState::start();
    let mut bookkeeping = Bookkeeping::start();

    for (position, current_char) in input.char_indices() {
        let (next_parse_state, action) = state_transition(parse_state, Some(current_char));
        bookkeeping = do_action(action, bookkeeping, position, &mut matches);
        parse_state = next_parse_state;
    }

    if parse_state != ParseState::end() {
        let (_, final_action) = state_transition(parse_state, None);
        do_action(final_action, bookkeeping, input.len(), &mut matches);
    }

    matches
}

/// Removes every match from `input`. Matches may come in any order but must
/// not overlap.
pub fn remove_matches(mut input: String, mut matches: Vec<CommentMatch>) -> String {
    if matches.is_empty() {
        return input;
    }

    matches.sort_by_key(|m| m.from);
    debug_assert!(
        check_sorted_matches(&input, &matches),
        "comment matches out of bounds or overlapping"
    );

    for m in matches.into_iter().rev() {
        if m.from <= m.to && m.to <= input.len() {
            input.drain(m.from..m.to);
        } else {
            tracing::warn!(from = m.from, to = m.to, len = input.len(), "skipping invalid comment range");
        }
    }
    input
}

fn check_sorted_matches(input: &str, matches: &[CommentMatch]) -> bool {
    let mut last_to = 0;
    for m in matches {
        if m.from > m.to || m.to > input.len() || m.from < last_to {
            return false;
        }
        last_to = m.to;
    }
    true
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Keeps only lines with non-whitespace content, joined by `\n`.
pub fn drop_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cuts `line` at its first `//`, dropping the whitespace that preceded it.
pub fn cut_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => line[..idx].trim_end_matches([' ', '\t']),
        None => line,
    }
}
