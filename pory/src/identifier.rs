use std::fmt;

use pory_common::Span;
use pory_error::{AstError, Result};
use smol_str::SmolStr;

use crate::{node::token_node, token::Token};

/// A named reference, like the name of a script or of a command
///
/// The name is never empty.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct Identifier {
    token: Token,
    value: SmolStr,
}

impl Identifier {
    /// Creates a new identifier
    ///
    /// # Panics
    /// Panics if `value` is empty
    pub fn new(token: Token, value: impl Into<SmolStr>) -> Self {
        let value = value.into();
        assert!(!value.is_empty(), "An identifier must not be empty");
        Identifier { token, value }
    }

    /// Like [`Identifier::new`], but returns an error for an empty name
    pub fn try_new(token: Token, value: impl Into<SmolStr>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(AstError::EmptyIdentifier { span: token.span });
        }
        Ok(Identifier { token, value })
    }

    /// Creates an identifier whose name is the literal of its token
    pub fn from_token(token: Token) -> Result<Self> {
        let value = token.literal.clone();
        Identifier::try_new(token, value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn span(&self) -> Span {
        self.token.span
    }
}

token_node!(Identifier);

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<Identifier> for &str {
    fn eq(&self, other: &Identifier) -> bool {
        other == self
    }
}
