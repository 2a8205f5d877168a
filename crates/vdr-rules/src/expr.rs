//! # Stored Expression Predicates
//!
//! Parser and evaluator for the restricted expression form of conditional
//! rule predicates, e.g. `sponsorType !== 'self' && isMinor === true`.
//!
//! ## Grammar
//!
//! ```text
//! expr    := clause ( "&&" clause )*
//! clause  := field op literal
//! op      := "===" | "!=="
//! literal := 'string' | "string" | true | false | integer
//! ```
//!
//! Deliberately smaller than the stored-data superset it descends from: no
//! `||`, no parentheses, no function calls, no property traversal. A field
//! name must resolve through the [`ContextField`] whitelist or the whole
//! expression is rejected at parse time. Evaluation is fail-closed: an
//! `Absent` field value or a type-mismatched comparison makes the clause
//! false regardless of operator.

use thiserror::Error;

use vdr_core::{CanonicalApplicantContext, ContextField, FieldValue};

/// Why an expression failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{ch}' at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unterminated string literal starting at byte {pos}")]
    UnterminatedString { pos: usize },
    #[error("field '{0}' is not a whitelisted context field")]
    UnknownField(String),
    #[error("expected a field name")]
    ExpectedField,
    #[error("expected '===' or '!==' after field '{0}'")]
    ExpectedOperator(String),
    #[error("expected a string, boolean, or integer literal")]
    ExpectedLiteral,
    #[error("unexpected trailing tokens after expression")]
    TrailingTokens,
}

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
}

/// A literal a clause compares a field against.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Bool(bool),
    Int(i64),
}

/// One `field op literal` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: ContextField,
    pub op: CmpOp,
    pub literal: Literal,
}

impl Clause {
    /// Evaluate against a concrete field value.
    ///
    /// `Absent` and type-mismatched comparisons are false for BOTH
    /// operators: an unknowable clause must never fire a rule.
    fn matches(&self, value: &FieldValue) -> bool {
        let eq = match (&self.literal, value) {
            (Literal::Str(lit), FieldValue::Str(v)) => lit == v,
            (Literal::Str(lit), FieldValue::Code(v)) => lit.eq_ignore_ascii_case(v),
            (Literal::Bool(lit), FieldValue::Bool(v)) => lit == v,
            (Literal::Int(lit), FieldValue::Int(v)) => lit == v,
            _ => return false,
        };
        match self.op {
            CmpOp::Eq => eq,
            CmpOp::Ne => !eq,
        }
    }
}

/// A parsed expression: the conjunction of its clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    clauses: Vec<Clause>,
}

impl Expression {
    /// Parse an expression string.
    pub fn parse(src: &str) -> Result<Self, ExprError> {
        let tokens = lex(src)?;
        let mut parser = Parser {
            tokens: &tokens,
            pos: 0,
        };
        let expr = parser.expression()?;
        if parser.pos != tokens.len() {
            return Err(ExprError::TrailingTokens);
        }
        Ok(expr)
    }

    /// Evaluate against a canonical context. All clauses must match.
    pub fn evaluate(&self, ctx: &CanonicalApplicantContext) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.matches(&clause.field.value_in(ctx)))
    }

    /// The whitelisted fields this expression reads.
    pub fn referenced_fields(&self) -> impl Iterator<Item = ContextField> + '_ {
        self.clauses.iter().map(|c| c.field)
    }
}

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Str(String),
    Int(i64),
    EqEq,
    NotEq,
    AndAnd,
}

fn lex(src: &str) -> Result<Vec<Token>, ExprError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'\'' | b'"' => {
                let quote = b;
                let start = i;
                i += 1;
                let lit_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                if i >= bytes.len() {
                    return Err(ExprError::UnterminatedString { pos: start });
                }
                tokens.push(Token::Str(src[lit_start..i].to_string()));
                i += 1;
            }
            b'=' => {
                if bytes[i..].starts_with(b"===") {
                    tokens.push(Token::EqEq);
                    i += 3;
                } else {
                    return Err(ExprError::UnexpectedChar { ch: '=', pos: i });
                }
            }
            b'!' => {
                if bytes[i..].starts_with(b"!==") {
                    tokens.push(Token::NotEq);
                    i += 3;
                } else {
                    return Err(ExprError::UnexpectedChar { ch: '!', pos: i });
                }
            }
            b'&' => {
                if bytes[i..].starts_with(b"&&") {
                    tokens.push(Token::AndAnd);
                    i += 2;
                } else {
                    return Err(ExprError::UnexpectedChar { ch: '&', pos: i });
                }
            }
            b'0'..=b'9' | b'-' => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let text = &src[start..i];
                let value = text.parse::<i64>().map_err(|_| ExprError::UnexpectedChar {
                    ch: '-',
                    pos: start,
                })?;
                tokens.push(Token::Int(value));
            }
            _ if b.is_ascii_alphabetic() || b == b'_' => {
                let start = i;
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_')
                {
                    i += 1;
                }
                tokens.push(Token::Ident(src[start..i].to_string()));
            }
            _ => {
                // Byte offset is enough for diagnostics; expressions are
                // short admin-entered strings.
                let ch = src[i..].chars().next().unwrap_or('?');
                return Err(ExprError::UnexpectedChar { ch, pos: i });
            }
        }
    }

    Ok(tokens)
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn expression(&mut self) -> Result<Expression, ExprError> {
        if self.tokens.is_empty() {
            return Err(ExprError::Empty);
        }
        let mut clauses = vec![self.clause()?];
        while self.peek() == Some(&Token::AndAnd) {
            self.pos += 1;
            clauses.push(self.clause()?);
        }
        Ok(Expression { clauses })
    }

    fn clause(&mut self) -> Result<Clause, ExprError> {
        let name = match self.next() {
            Some(Token::Ident(name)) => name.clone(),
            _ => return Err(ExprError::ExpectedField),
        };
        let field =
            ContextField::parse(&name).ok_or_else(|| ExprError::UnknownField(name.clone()))?;
        let op = match self.next() {
            Some(Token::EqEq) => CmpOp::Eq,
            Some(Token::NotEq) => CmpOp::Ne,
            _ => return Err(ExprError::ExpectedOperator(name)),
        };
        let literal = match self.next() {
            Some(Token::Str(s)) => Literal::Str(s.clone()),
            Some(Token::Int(n)) => Literal::Int(*n),
            Some(Token::Ident(word)) if word == "true" => Literal::Bool(true),
            Some(Token::Ident(word)) if word == "false" => Literal::Bool(false),
            _ => return Err(ExprError::ExpectedLiteral),
        };
        Ok(Clause { field, op, literal })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }
}
