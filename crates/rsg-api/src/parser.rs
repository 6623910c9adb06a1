//! Parser for the `.spec` api description format.
//!
//! ```text
//! AllocationData1D {
//!     param RsAllocation va
//!     param uint32_t xoff
//!     param const void *data
//!     param size_t data_length
//! }
//!
//! ContextGetMessage {
//!     direct
//!     param void *data
//!     ret RsMessageToClientType
//! }
//! ```
//!
//! Every pointer parameter is paired with a `size_t <name>_length` byte
//! count. When the spec does not declare it, the parser appends it right
//! after the pointer.

use rustc_hash::FxHashSet;

use crate::lexer::{Token, TokenKind, tokenize};
use crate::{ApiEntry, ApiTable, BaseType, Result, SpecError, VarType};

/// Flags accepted for compatibility but not used by any emitter.
const IGNORED_FLAGS: &[&str] = &["handcodePlay", "togglePlay"];

/// Parse spec source text into an api table.
///
/// # Errors
///
/// Returns a [`SpecError`] describing the first malformed construct, or
/// [`SpecError::DuplicateApi`] when two blocks share a name.
pub fn parse_spec(source: &str) -> Result<ApiTable> {
    let tokens = tokenize(source)?;
    let entries = Parser::new(tokens).parse()?;
    ApiTable::new(entries)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(&mut self) -> Result<Vec<ApiEntry>> {
        let mut entries = Vec::new();
        loop {
            self.skip_newlines();
            let tok = self.next();
            match tok.kind {
                TokenKind::Eof => break,
                TokenKind::Ident(name) => entries.push(self.parse_block(name, tok.line)?),
                other => {
                    return Err(SpecError::UnexpectedToken {
                        line: tok.line,
                        found: other.describe(),
                        expected: "api name",
                    });
                }
            }
        }
        Ok(entries)
    }

    fn parse_block(&mut self, name: String, start_line: usize) -> Result<ApiEntry> {
        self.skip_newlines();
        self.expect(&TokenKind::LBrace, "`{`")?;

        let mut api = ApiEntry::new(name);
        loop {
            self.skip_newlines();
            let tok = self.next();
            let keyword = match tok.kind {
                TokenKind::RBrace => break,
                TokenKind::Eof => {
                    return Err(SpecError::UnterminatedBlock {
                        line: start_line,
                        api: api.name,
                    });
                }
                TokenKind::Ident(keyword) => keyword,
                other => {
                    return Err(SpecError::UnexpectedToken {
                        line: tok.line,
                        found: other.describe(),
                        expected: "keyword or `}`",
                    });
                }
            };

            match keyword.as_str() {
                "param" => {
                    let param = self.parse_param(&api.name)?;
                    api.params.push(param);
                }
                "ret" => api.ret = self.parse_ret(&api.name)?,
                "sync" => api.sync = true,
                "direct" => api.direct = true,
                "nocontext" => api.no_context = true,
                "handcodeApi" => api.handcode_api = true,
                k if IGNORED_FLAGS.contains(&k) => {
                    tracing::debug!(api = %api.name, flag = k, "ignoring flag");
                }
                _ => {
                    return Err(SpecError::UnknownKeyword {
                        line: tok.line,
                        api: api.name,
                        keyword,
                    });
                }
            }
            self.expect_end_of_statement()?;
        }

        api.params = with_length_params(api.params);
        tracing::trace!(api = %api.name, params = api.params.len(), "parsed api");
        Ok(api)
    }

    /// `[const] <type> [*...]`
    fn parse_type(&mut self) -> Result<VarType> {
        let mut is_const = false;
        let mut tok = self.next();
        if tok.kind == TokenKind::Ident("const".to_string()) {
            is_const = true;
            tok = self.next();
        }
        let TokenKind::Ident(ident) = &tok.kind else {
            return Err(unexpected(&tok, "type name"));
        };

        let mut ty = VarType::new(BaseType::from_ident(ident));
        ty.is_const = is_const;
        while self.peek().kind == TokenKind::Star {
            let star = self.next();
            if ty.ptr_level == u8::MAX {
                return Err(SpecError::UnexpectedToken {
                    line: star.line,
                    found: star.kind.describe(),
                    expected: "at most 255 pointer levels",
                });
            }
            ty = ty.pointer();
        }
        Ok(ty)
    }

    fn parse_param(&mut self, api: &str) -> Result<VarType> {
        let ty = self.parse_type()?;
        let tok = self.next();
        match tok.kind {
            TokenKind::Ident(name) => Ok(ty.named(name)),
            TokenKind::Newline | TokenKind::RBrace | TokenKind::Eof => {
                Err(SpecError::MissingParamName {
                    line: tok.line,
                    api: api.to_string(),
                })
            }
            _ => Err(unexpected(&tok, "parameter name")),
        }
    }

    fn parse_ret(&mut self, api: &str) -> Result<VarType> {
        let ty = self.parse_type()?;
        let tok = self.peek();
        if matches!(tok.kind, TokenKind::Ident(_)) {
            return Err(SpecError::NamedReturn {
                line: tok.line,
                api: api.to_string(),
            });
        }
        Ok(ty)
    }

    /// A statement ends at a newline or at the block's closing brace.
    fn expect_end_of_statement(&mut self) -> Result<()> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::Newline => {
                self.pos += 1;
                Ok(())
            }
            TokenKind::RBrace | TokenKind::Eof => Ok(()),
            _ => Err(unexpected(&tok, "end of line")),
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<()> {
        let tok = self.next();
        if &tok.kind == kind {
            Ok(())
        } else {
            Err(unexpected(&tok, expected))
        }
    }

    fn skip_newlines(&mut self) {
        while self.peek().kind == TokenKind::Newline {
            self.pos += 1;
        }
    }

    fn peek(&self) -> &Token {
        // The tokenizer always terminates the stream with Eof.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn next(&mut self) -> Token {
        let tok = self.peek().clone();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }
}

fn unexpected(tok: &Token, expected: &'static str) -> SpecError {
    if tok.kind == TokenKind::Eof {
        SpecError::UnexpectedEof {
            line: tok.line,
            expected,
        }
    } else {
        SpecError::UnexpectedToken {
            line: tok.line,
            found: tok.kind.describe(),
            expected,
        }
    }
}

/// Append a `size_t <name>_length` after each pointer parameter that has no
/// declared byte count.
fn with_length_params(params: Vec<VarType>) -> Vec<VarType> {
    let declared: FxHashSet<String> = params.iter().map(|p| p.name.clone()).collect();
    let mut out = Vec::with_capacity(params.len());
    for param in params {
        let companion = (param.is_pointer() && !declared.contains(&param.length_name()))
            .then(|| VarType::named_type("size_t").named(param.length_name()));
        out.push(param);
        out.extend(companion);
    }
    out
}
