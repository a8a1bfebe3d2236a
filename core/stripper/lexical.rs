use super::common::{
    CommentKind, CommentMatch, End, Start, drop_blank_lines, normalize_newlines, remove_matches,
    scan_impl,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseState {
    Start,
    Normal,
    FirstSlash,
    SingleLineComment,
    MultiLineComment,
    MultiLineCommentSawStar,
    StringDoubleQuotesOpened,
    StringDoubleQuotes,
    StringDoubleQuotesEscaped,
    EmptyDoubleQuotes,
    TextBlock,
    TextBlockEscaped,
    TextBlockOneQuote,
    TextBlockTwoQuotes,
    StringSingleQuotes,
    StringSingleQuotesEscaped,
    End,
}
impl Start for ParseState {
    fn start() -> Self {
        ParseState::Start
    }
}
impl End for ParseState {
    fn end() -> Self {
        ParseState::End
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexParseAction {
    Nothing,
    CommentMightStart,
    ConfirmLineComment,
    ConfirmBlockComment,
    DismissPotential,
    LineCommentEnd,
    BlockCommentEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    NotIn,
    SawFirstSlash { slash_idx: usize },
    InLine { start_idx: usize },
    InBlock { start_idx: usize },
}
impl Start for State {
    fn start() -> Self {
        State::NotIn
    }
}

pub(crate) fn lex_state_transition(
    from: ParseState,
    current_char: Option<char>,
) -> (ParseState, LexParseAction) {
    match current_char {
        Some(c) => match from {
            ParseState::Start | ParseState::Normal => match c {
                '/' => (ParseState::FirstSlash, LexParseAction::CommentMightStart),
                '"' => (ParseState::StringDoubleQuotesOpened, LexParseAction::Nothing),
                '\'' => (ParseState::StringSingleQuotes, LexParseAction::Nothing),
                '\n' => (ParseState::Start, LexParseAction::Nothing),
                _ => (ParseState::Normal, LexParseAction::Nothing),
            },
            ParseState::FirstSlash => match c {
                '/' => (
                    ParseState::SingleLineComment,
                    LexParseAction::ConfirmLineComment,
                ),
                '*' => (
                    ParseState::MultiLineComment,
                    LexParseAction::ConfirmBlockComment,
                ),
                _ => {
                    let (next, _) = lex_state_transition(ParseState::Normal, Some(c));
                    (next, LexParseAction::DismissPotential)
                }
            },
            ParseState::SingleLineComment => match c {
                '\n' => (ParseState::Start, LexParseAction::LineCommentEnd),
                _ => (ParseState::SingleLineComment, LexParseAction::Nothing),
            },
            ParseState::MultiLineComment => match c {
                '*' => (ParseState::MultiLineCommentSawStar, LexParseAction::Nothing),
                _ => (ParseState::MultiLineComment, LexParseAction::Nothing),
            },
            ParseState::MultiLineCommentSawStar => match c {
                '/' => (ParseState::Normal, LexParseAction::BlockCommentEnd),
                '*' => (ParseState::MultiLineCommentSawStar, LexParseAction::Nothing),
                _ => (ParseState::MultiLineComment, LexParseAction::Nothing),
            },
            ParseState::StringDoubleQuotesOpened => match c {
                '"' => (ParseState::EmptyDoubleQuotes, LexParseAction::Nothing),
                _ => lex_state_transition(ParseState::StringDoubleQuotes, Some(c)),
            },
            ParseState::StringDoubleQuotes => match c {
                '"' => (ParseState::Normal, LexParseAction::Nothing),
                '\\' => (ParseState::StringDoubleQuotesEscaped, LexParseAction::Nothing),
                '\n' => (ParseState::Start, LexParseAction::Nothing),
                _ => (ParseState::StringDoubleQuotes, LexParseAction::Nothing),
            },
            ParseState::StringDoubleQuotesEscaped => match c {
                '\n' => (ParseState::Start, LexParseAction::Nothing),
                _ => (ParseState::StringDoubleQuotes, LexParseAction::Nothing),
            },
            ParseState::EmptyDoubleQuotes => match c {
                '"' => (ParseState::TextBlock, LexParseAction::Nothing),
                _ => lex_state_transition(ParseState::Normal, Some(c)),
            },
            ParseState::TextBlock => match c {
                '"' => (ParseState::TextBlockOneQuote, LexParseAction::Nothing),
                '\\' => (ParseState::TextBlockEscaped, LexParseAction::Nothing),
                _ => (ParseState::TextBlock, LexParseAction::Nothing),
            },
            ParseState::TextBlockEscaped => (ParseState::TextBlock, LexParseAction::Nothing),
            ParseState::TextBlockOneQuote => match c {
                '"' => (ParseState::TextBlockTwoQuotes, LexParseAction::Nothing),
                _ => lex_state_transition(ParseState::TextBlock, Some(c)),
            },
            ParseState::TextBlockTwoQuotes => match c {
                '"' => (ParseState::Normal, LexParseAction::Nothing),
                _ => lex_state_transition(ParseState::TextBlock, Some(c)),
            },
            ParseState::StringSingleQuotes => match c {
                '\'' => (ParseState::Normal, LexParseAction::Nothing),
                '\\' => (ParseState::StringSingleQuotesEscaped, LexParseAction::Nothing),
                '\n' => (ParseState::Start, LexParseAction::Nothing),
                _ => (ParseState::StringSingleQuotes, LexParseAction::Nothing),
            },
            ParseState::StringSingleQuotesEscaped => match c {
                '\n' => (ParseState::Start, LexParseAction::Nothing),
                _ => (ParseState::StringSingleQuotes, LexParseAction::Nothing),
            },
            ParseState::End => (ParseState::End, LexParseAction::Nothing),
        },
        None => match from {
            ParseState::FirstSlash => (ParseState::End, LexParseAction::DismissPotential),
            ParseState::SingleLineComment => (ParseState::End, LexParseAction::LineCommentEnd),
            ParseState::MultiLineComment | ParseState::MultiLineCommentSawStar => {
                (ParseState::End, LexParseAction::DismissPotential)
            }
            _ => (ParseState::End, LexParseAction::Nothing),
        },
    }
}

pub(crate) fn lex_do_action(
    action: LexParseAction,
    comment_state: State,
    position: usize,
    matches: &mut Vec<CommentMatch>,
) -> State {
    match action {
        LexParseAction::Nothing => comment_state,
        LexParseAction::CommentMightStart => match comment_state {
            State::NotIn => State::SawFirstSlash {
                slash_idx: position,
            },
            other => other,
        },
        LexParseAction::ConfirmLineComment => match comment_state {
            State::SawFirstSlash { slash_idx } => State::InLine {
                start_idx: slash_idx,
            },
            _ => State::NotIn,
        },
        LexParseAction::ConfirmBlockComment => match comment_state {
            State::SawFirstSlash { slash_idx } => State::InBlock {
                start_idx: slash_idx,
            },
            _ => State::NotIn,
        },
        LexParseAction::DismissPotential => State::NotIn,
        LexParseAction::LineCommentEnd => {
            if let State::InLine { start_idx } = comment_state {
                matches.push(CommentMatch {
                    from: start_idx,
                    to: position,
                    kind: CommentKind::Line,
                });
            }
            State::NotIn
        }
        LexParseAction::BlockCommentEnd => {
            if let State::InBlock { start_idx } = comment_state {
                matches.push(CommentMatch {
                    from: start_idx,
                    to: position + 1,
                    kind: CommentKind::Block,
                });
            }
            State::NotIn
        }
    }
}

pub fn find_comments(input: &str) -> Vec<CommentMatch> {
    scan_impl(input, lex_state_transition, lex_do_action)
}

/// Extends each line comment backwards over the spaces and tabs in front of
/// it, stopping at the end of the previous match.
fn absorb_leading_blanks(input: &str, matches: &mut [CommentMatch]) {
    let bytes = input.as_bytes();
    let mut floor = 0;
    for m in matches.iter_mut() {
        if m.kind == CommentKind::Line {
            while m.from > floor && matches!(bytes[m.from - 1], b' ' | b'\t') {
                m.from -= 1;
            }
        }
        floor = m.to;
    }
}

/// Removes comments in a single pass that tracks string literals across the
/// whole document, so markers inside `"..."`, `'...'` and `"""` text blocks
/// are never touched. Lines left blank are dropped and line endings come out
/// as `\n`.
pub fn strip(content: &str) -> String {
    let content = normalize_newlines(content);
    let mut matches = find_comments(&content);
    absorb_leading_blanks(&content, &mut matches);
    let stripped = remove_matches(content.to_string(), matches);
    drop_blank_lines(&stripped)
}
