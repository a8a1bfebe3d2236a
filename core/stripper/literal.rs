//! Per-line detection of quoted string literals.
//!
//! Quote tracking is shallow: a quote is disqualified as a
//! boundary whenever the character right before it is a backslash, so `\\"`
//! reads as an escaped quote. Literals never span lines.

use super::common::{End, Start, scan_impl};

/// Byte offsets of a quoted literal within one line. `end` is the offset of
/// the closing quote, so the literal text is `line[start..=end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan {
    pub start: usize,
    pub end: usize,
}

impl LiteralSpan {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..=self.end]
    }

    fn placeholder(&self) -> String {
        format!("\u{0}STRING_{}\u{0}", self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Outside,
    OutsideAfterBackslash,
    Inside(char),
    InsideAfterBackslash(char),
    End,
}
impl Start for ParseState {
    fn start() -> Self {
        ParseState::Outside
    }
}
impl End for ParseState {
    fn end() -> Self {
        ParseState::End
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralAction {
    Nothing,
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotInString,
    InString { start: usize },
}
impl Start for State {
    fn start() -> Self {
        State::NotInString
    }
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn literal_state_transition(
    from: ParseState,
    current_char: Option<char>,
) -> (ParseState, LiteralAction) {
    let Some(c) = current_char else {
        return (ParseState::End, LiteralAction::Nothing);
    };
    match from {
        ParseState::Outside => match c {
            '\\' => (ParseState::OutsideAfterBackslash, LiteralAction::Nothing),
            q if is_quote(q) => (ParseState::Inside(q), LiteralAction::Open),
            _ => (ParseState::Outside, LiteralAction::Nothing),
        },
        ParseState::OutsideAfterBackslash => match c {
            '\\' => (ParseState::OutsideAfterBackslash, LiteralAction::Nothing),
            _ => (ParseState::Outside, LiteralAction::Nothing),
        },
        ParseState::Inside(quote) => match c {
            '\\' => (ParseState::InsideAfterBackslash(quote), LiteralAction::Nothing),
            q if q == quote => (ParseState::Outside, LiteralAction::Close),
            _ => (ParseState::Inside(quote), LiteralAction::Nothing),
        },
        ParseState::InsideAfterBackslash(quote) => match c {
            '\\' => (ParseState::InsideAfterBackslash(quote), LiteralAction::Nothing),
            _ => (ParseState::Inside(quote), LiteralAction::Nothing),
        },
        ParseState::End => (ParseState::End, LiteralAction::Nothing),
    }
}

fn literal_do_action(
    action: LiteralAction,
    state: State,
    position: usize,
    spans: &mut Vec<LiteralSpan>,
) -> State {
    match (action, state) {
        (LiteralAction::Open, State::NotInString) => State::InString { start: position },
        (LiteralAction::Close, State::InString { start }) => {
            spans.push(LiteralSpan {
                start,
                end: position,
            });
            State::NotInString
        }
        (_, state) => state,
    }
}

/// Finds the closed literal spans of a single line, ordered by start offset.
/// A quote that is never closed produces no span.
pub fn find_literal_spans(line: &str) -> Vec<LiteralSpan> {
    scan_impl(line, literal_state_transition, literal_do_action)
}

/// Replaces each span's text with a placeholder token keyed on its start
/// offset. Spans are substituted rightmost first so earlier offsets stay valid.
pub fn shield(line: &str, spans: &[LiteralSpan]) -> String {
    let mut shielded = line.to_string();
    for span in spans.iter().rev() {
        shielded.replace_range(span.start..=span.end, &span.placeholder());
    }
    shielded
}

/// Puts the original literal text back in place of every placeholder still
/// present in `shielded`.
pub fn unshield(shielded: &str, line: &str, spans: &[LiteralSpan]) -> String {
    let mut restored = shielded.to_string();
    for span in spans {
        restored = restored.replacen(&span.placeholder(), span.text(line), 1);
    }
    restored
}
