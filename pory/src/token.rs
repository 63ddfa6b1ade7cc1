use core::fmt;

use pory_common::Span;
use smol_str::SmolStr;

use crate::condition::{ComparisonOperator, ConditionKind};

/// The token that introduced a node
///
/// Tokens are produced by the scanner and are immutable facts about the source,
/// so every node stores its own copy.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: SmolStr,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<SmolStr>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let start = self.span.start();
        let end = self.span.end();
        write!(f, "{}@{start}..{end}", self.kind)
    }
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum TokenKind {
    Script,
    Raw,
    Text,
    If,
    Elif,
    Else,

    Flag,
    Var,
    Defeated,

    Ident,
    Int,
    String,

    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    Comma,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,

    Illegal,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    #[allow(clippy::use_debug)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl TokenKind {
    /// Returns the kind of condition test this keyword starts, if any
    pub fn condition_kind(self) -> Option<ConditionKind> {
        let kind = match self {
            TokenKind::Flag => ConditionKind::Flag,
            TokenKind::Var => ConditionKind::Var,
            TokenKind::Defeated => ConditionKind::Defeated,
            _ => return None,
        };
        Some(kind)
    }

    pub fn comparison_operator(self) -> Option<ComparisonOperator> {
        let operator = match self {
            TokenKind::Equal => ComparisonOperator::Eq,
            TokenKind::NotEqual => ComparisonOperator::Ne,
            TokenKind::Less => ComparisonOperator::Lt,
            TokenKind::LessEqual => ComparisonOperator::Le,
            TokenKind::Greater => ComparisonOperator::Gt,
            TokenKind::GreaterEqual => ComparisonOperator::Ge,
            _ => return None,
        };
        Some(operator)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Script
                | TokenKind::Raw
                | TokenKind::Text
                | TokenKind::If
                | TokenKind::Elif
                | TokenKind::Else
                | TokenKind::Flag
                | TokenKind::Var
                | TokenKind::Defeated
        )
    }
}
