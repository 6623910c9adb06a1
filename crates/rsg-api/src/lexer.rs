//! Tokenizer for `.spec` files.
//!
//! Newlines are significant: each statement inside an api block ends at the
//! end of its line. `#` and `//` start comments that run to end of line.

use crate::{Result, SpecError};

/// A token with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    LBrace,
    RBrace,
    Star,
    Newline,
    Eof,
}

impl TokenKind {
    /// Source spelling, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Ident(s) => s.clone(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::Star => "*".to_string(),
            Self::Newline => "end of line".to_string(),
            Self::Eof => "end of input".to_string(),
        }
    }
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize spec source text. Always ends with an `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1usize;

    while let Some(&ch) = chars.peek() {
        match ch {
            '#' => skip_line(&mut chars),
            '/' => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    skip_line(&mut chars);
                } else {
                    return Err(SpecError::UnexpectedChar { line, ch });
                }
            }
            '\n' => {
                // Collapse blank lines
                if tokens
                    .last()
                    .is_some_and(|t: &Token| t.kind != TokenKind::Newline)
                {
                    tokens.push(Token {
                        kind: TokenKind::Newline,
                        line,
                    });
                }
                chars.next();
                line += 1;
            }
            ' ' | '\t' | '\r' => {
                chars.next();
            }
            '{' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::LBrace,
                    line,
                });
            }
            '}' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::RBrace,
                    line,
                });
            }
            '*' => {
                chars.next();
                tokens.push(Token {
                    kind: TokenKind::Star,
                    line,
                });
            }
            c if is_ident_start(c) => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_ident_continue(c) {
                        break;
                    }
                    ident.push(c);
                    chars.next();
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(ident),
                    line,
                });
            }
            _ => return Err(SpecError::UnexpectedChar { line, ch }),
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        line,
    });
    Ok(tokens)
}

fn skip_line(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while let Some(&c) = chars.peek() {
        if c == '\n' {
            break;
        }
        chars.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn ident(s: &str) -> TokenKind {
        TokenKind::Ident(s.to_string())
    }

    #[test]
    fn test_param_line() {
        assert_eq!(
            kinds("param const void *data\n"),
            vec![
                ident("param"),
                ident("const"),
                ident("void"),
                TokenKind::Star,
                ident("data"),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert_eq!(
            kinds("# header\n\n\nA { // trailing\n}\n"),
            vec![
                ident("A"),
                TokenKind::LBrace,
                TokenKind::Newline,
                TokenKind::RBrace,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("A {\n  sync\n}").unwrap();
        let sync = tokens.iter().find(|t| t.kind == ident("sync")).unwrap();
        assert_eq!(sync.line, 2);
        assert_eq!(tokens.last().unwrap().line, 3);
    }

    #[test]
    fn test_unexpected_char() {
        assert_eq!(
            tokenize("A {\n  param int32_t x;\n}").unwrap_err(),
            SpecError::UnexpectedChar { line: 2, ch: ';' }
        );
        assert_eq!(
            tokenize("/ x").unwrap_err(),
            SpecError::UnexpectedChar { line: 1, ch: '/' }
        );
    }
}
