//! Compact prefix notation for pane trees
//!
//! A split encodes as a direction character (`h` or `v`), the ratio times
//! 100 as exactly two digits, then both children; a leaf encodes as one
//! bracketed token: `[s:ID]` for a terminal session, `[t:SRC]` for a text
//! preview, `[m:SRC]` for a markdown preview. `]` and `\` inside a token
//! are escaped with `\`.
//!
//! Example: `v50[s:build]h33[s:repl][m:notes.md]` is a vertical 50/50 split
//! whose right side is a horizontal 33/67 split of a terminal over a
//! markdown preview.
//!
//! Decoding is all-or-nothing: any malformed input rejects the whole
//! string rather than producing a partially valid tree.

use thiserror::Error;

use crate::pane::{Pane, PaneContent, PaneId, PaneNode, PreviewKind, SplitDirection};

/// Reasons a tree notation string fails to decode
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    /// Input ended in the middle of a node
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A byte that can't start or continue the expected construct
    #[error("unexpected character {found:?} at offset {offset}")]
    Unexpected { offset: usize, found: char },
    /// The two ratio digits decode outside the clamped range
    #[error("split ratio {0} outside 10..=90")]
    RatioOutOfRange(u32),
    /// A leaf token starts with a tag other than `s`, `t`, or `m`
    #[error("unknown leaf tag {0:?}")]
    UnknownLeafTag(char),
    /// A leaf token is missing its closing bracket
    #[error("unterminated leaf token")]
    UnterminatedToken,
    /// Valid tree followed by leftover input
    #[error("trailing input after tree")]
    TrailingInput,
}

/// Encode a pane tree to its compact prefix notation
pub fn encode_tree(node: &PaneNode) -> String {
    let mut out = String::new();
    encode_node(node, &mut out);
    out
}

fn encode_node(node: &PaneNode, out: &mut String) {
    match node {
        PaneNode::Leaf(pane) => {
            out.push('[');
            match &pane.content {
                PaneContent::Terminal { session_id } => {
                    out.push_str("s:");
                    escape_into(session_id, out);
                }
                PaneContent::Preview { kind, source } => {
                    out.push(match kind {
                        PreviewKind::Text => 't',
                        PreviewKind::Markdown => 'm',
                    });
                    out.push(':');
                    escape_into(source, out);
                }
            }
            out.push(']');
        }
        PaneNode::Split {
            direction,
            ratio,
            first,
            second,
        } => {
            out.push(match direction {
                SplitDirection::Horizontal => 'h',
                SplitDirection::Vertical => 'v',
            });
            // Clamping keeps this in 10..=90, always two digits
            let percent = (ratio.clamp(0.1, 0.9) * 100.0).round() as u32;
            out.push_str(&format!("{percent:02}"));
            encode_node(first, out);
            encode_node(second, out);
        }
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        if ch == ']' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Decode a pane tree from its compact prefix notation
///
/// Pane ids are allocated from `next_pane_id`, which is advanced past every
/// leaf. All-or-nothing: on error the counter may have advanced but no tree
/// is produced.
pub fn decode_tree(input: &str, next_pane_id: &mut PaneId) -> Result<PaneNode, NotationError> {
    let mut cursor = Cursor::new(input);
    let node = parse_node(&mut cursor, next_pane_id)?;
    if cursor.peek().is_some() {
        return Err(NotationError::TrailingInput);
    }
    Ok(node)
}

/// Char-level cursor tracking the byte offset for error reporting
struct Cursor<'a> {
    rest: std::str::Chars<'a>,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input.chars(),
            offset: 0,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.rest.next()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.rest.clone().next()
    }
}

fn parse_node(cursor: &mut Cursor, next_pane_id: &mut PaneId) -> Result<PaneNode, NotationError> {
    let offset = cursor.offset;
    match cursor.next_char().ok_or(NotationError::UnexpectedEnd)? {
        '[' => parse_leaf(cursor, next_pane_id),
        'h' => parse_split(cursor, next_pane_id, SplitDirection::Horizontal),
        'v' => parse_split(cursor, next_pane_id, SplitDirection::Vertical),
        found => Err(NotationError::Unexpected { offset, found }),
    }
}

fn parse_split(
    cursor: &mut Cursor,
    next_pane_id: &mut PaneId,
    direction: SplitDirection,
) -> Result<PaneNode, NotationError> {
    let percent = parse_ratio_digit(cursor)? * 10 + parse_ratio_digit(cursor)?;
    if !(10..=90).contains(&percent) {
        return Err(NotationError::RatioOutOfRange(percent));
    }
    let first = parse_node(cursor, next_pane_id)?;
    let second = parse_node(cursor, next_pane_id)?;
    Ok(PaneNode::split(
        direction,
        percent as f32 / 100.0,
        first,
        second,
    ))
}

fn parse_ratio_digit(cursor: &mut Cursor) -> Result<u32, NotationError> {
    let offset = cursor.offset;
    let ch = cursor.next_char().ok_or(NotationError::UnexpectedEnd)?;
    ch.to_digit(10)
        .ok_or(NotationError::Unexpected { offset, found: ch })
}

fn parse_leaf(cursor: &mut Cursor, next_pane_id: &mut PaneId) -> Result<PaneNode, NotationError> {
    let tag = cursor.next_char().ok_or(NotationError::UnexpectedEnd)?;
    let offset = cursor.offset;
    match cursor.next_char().ok_or(NotationError::UnexpectedEnd)? {
        ':' => {}
        found => return Err(NotationError::Unexpected { offset, found }),
    }

    let mut token = String::new();
    loop {
        match cursor.next_char().ok_or(NotationError::UnterminatedToken)? {
            ']' => break,
            '\\' => token.push(cursor.next_char().ok_or(NotationError::UnterminatedToken)?),
            ch => token.push(ch),
        }
    }

    let content = match tag {
        's' => PaneContent::Terminal { session_id: token },
        't' => PaneContent::Preview {
            kind: PreviewKind::Text,
            source: token,
        },
        'm' => PaneContent::Preview {
            kind: PreviewKind::Markdown,
            source: token,
        },
        other => return Err(NotationError::UnknownLeafTag(other)),
    };

    let id = *next_pane_id;
    *next_pane_id += 1;
    Ok(PaneNode::Leaf(Pane { id, content }))
}
