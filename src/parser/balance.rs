//! Bracket balance check.
//!
//! The CSS tokenizer closes any block still open at end of input, which
//! would turn `QMenu { color: red;` into a valid rule. Sheets are checked
//! here first so a missing `}` is reported at the `{` that opened it.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{ParseError, ParseErrorKind, ParseResult};

struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 0,
        }
    }

    /// Advances one char; afterwards `line`/`column` point at it.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line, self.column)
    }
}

fn closer(open: char) -> char {
    match open {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

/// Fails on unclosed or stray brackets, unterminated comments and
/// unterminated strings. Brackets inside comments and strings are ignored.
pub(crate) fn check(source: &str) -> ParseResult<()> {
    let mut cursor = Cursor::new(source);
    let mut open: Vec<(char, u32, u32)> = Vec::new();

    while let Some(c) = cursor.bump() {
        match c {
            '/' if cursor.peek() == Some('*') => {
                let start = (cursor.line, cursor.column);
                cursor.bump();
                let mut prev = '\0';
                loop {
                    match cursor.bump() {
                        Some('/') if prev == '*' => break,
                        Some(ch) => prev = ch,
                        None => {
                            return Err(ParseError::new(
                                ParseErrorKind::UnterminatedComment,
                                start.0,
                                start.1,
                            ))
                        }
                    }
                }
            }
            '"' | '\'' => {
                let start = (cursor.line, cursor.column);
                loop {
                    match cursor.bump() {
                        Some('\\') => {
                            cursor.bump();
                        }
                        Some(ch) if ch == c => break,
                        Some('\n') | None => {
                            return Err(ParseError::new(
                                ParseErrorKind::UnterminatedString,
                                start.0,
                                start.1,
                            ))
                        }
                        Some(_) => {}
                    }
                }
            }
            '\\' => {
                cursor.bump();
            }
            '{' | '[' | '(' => open.push((c, cursor.line, cursor.column)),
            '}' | ']' | ')' => match open.pop() {
                Some((o, _, _)) if closer(o) == c => {}
                _ => return Err(cursor.error(ParseErrorKind::UnexpectedClose { close: c })),
            },
            _ => {}
        }
    }

    match open.pop() {
        Some((o, line, column)) => Err(ParseError::new(
            ParseErrorKind::UnclosedBlock { open: o },
            line,
            column,
        )),
        None => Ok(()),
    }
}
