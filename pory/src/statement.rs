//! Defines every statement of the ast

use std::fmt;

use pory_common::Span;
use smol_str::SmolStr;

use crate::{
    condition::ConditionExpression,
    identifier::Identifier,
    node::{token_node, Node},
    token::Token,
};

/// Any statement
///
/// This set is closed, consumers are expected to match on every variant.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Statement {
    /// A script definition, for example `script Main { ... }`
    Script(ScriptStatement),
    /// A bare block of statements
    Block(BlockStatement),
    /// An engine command, for example `msgbox("Hello")`
    Command(CommandStatement),
    /// Text that gets inlined into the output
    Raw(RawStatement),
    /// A complete if/elif/else chain
    If(IfStatement),
}

/// The kind of a [`Statement`], without any of its data
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum StatementKind {
    Script,
    Block,
    Command,
    Raw,
    If,
}

impl fmt::Display for StatementKind {
    #[allow(clippy::use_debug)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Script(_) => StatementKind::Script,
            Statement::Block(_) => StatementKind::Block,
            Statement::Command(_) => StatementKind::Command,
            Statement::Raw(_) => StatementKind::Raw,
            Statement::If(_) => StatementKind::If,
        }
    }

    pub fn token(&self) -> &Token {
        match self {
            Statement::Script(script) => &script.token,
            Statement::Block(block) => &block.token,
            Statement::Command(command) => &command.token,
            Statement::Raw(raw) => &raw.token,
            Statement::If(if_statement) => &if_statement.token,
        }
    }

    pub fn span(&self) -> Span {
        self.token().span
    }

    pub fn as_script(&self) -> Option<&ScriptStatement> {
        match self {
            Statement::Script(script) => Some(script),
            _ => None,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        self.token().literal()
    }
}

/// A complete script definition.
/// Every script becomes one runnable event script.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ScriptStatement {
    pub token: Token,
    pub name: Identifier,
    pub body: BlockStatement,
}

impl ScriptStatement {
    pub fn new(token: Token, name: Identifier, body: BlockStatement) -> Self {
        ScriptStatement { token, name, body }
    }
}

/// A sequence of statements, executed in order.
/// Blocks do not introduce any scope.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(token: Token, statements: Vec<Statement>) -> Self {
        BlockStatement { token, statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A call of an engine command
///
/// The arguments are opaque strings and get passed through as they are.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct CommandStatement {
    pub token: Token,
    pub name: Identifier,
    pub args: Vec<SmolStr>,
}

impl CommandStatement {
    pub fn new<I>(token: Token, name: Identifier, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        CommandStatement {
            token,
            name,
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw text that is copied verbatim into the target script
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct RawStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: String,
    /// Whether this text is placed at the top level instead of where it appears.
    /// The emitter decides what that means.
    pub is_global: bool,
}

impl RawStatement {
    pub fn new(token: Token, name: Identifier, value: impl Into<String>, is_global: bool) -> Self {
        RawStatement {
            token,
            name,
            value: value.into(),
            is_global,
        }
    }
}

/// A whole if/elif/else chain
///
/// The arms are tested in order and the first one that holds wins:
/// first the `consequence`, then every elif in the order in which it is stored.
/// If no arm holds, the `else_consequence` runs.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct IfStatement {
    pub token: Token,
    pub consequence: Box<ConditionExpression>,
    pub elif_consequences: Vec<ConditionExpression>,
    pub else_consequence: Option<Box<BlockStatement>>,
}

impl IfStatement {
    pub fn new(
        token: Token,
        consequence: ConditionExpression,
        elif_consequences: Vec<ConditionExpression>,
        else_consequence: Option<BlockStatement>,
    ) -> Self {
        IfStatement {
            token,
            consequence: Box::new(consequence),
            elif_consequences,
            else_consequence: else_consequence.map(Box::new),
        }
    }

    /// Every arm, in the order in which it has to be tested
    pub fn arms(&self) -> impl Iterator<Item = &ConditionExpression> + '_ {
        std::iter::once(self.consequence.as_ref()).chain(&self.elif_consequences)
    }

    /// The bodies of [`IfStatement::arms`]
    pub fn candidate_bodies(&self) -> impl Iterator<Item = &BlockStatement> + '_ {
        self.arms().map(|arm| &arm.body)
    }

    /// The block that runs if no arm holds
    pub fn fallback(&self) -> Option<&BlockStatement> {
        self.else_consequence.as_deref()
    }
}

token_node!(
    ScriptStatement,
    BlockStatement,
    CommandStatement,
    RawStatement,
    IfStatement
);

impl From<ScriptStatement> for Statement {
    fn from(value: ScriptStatement) -> Self {
        Statement::Script(value)
    }
}

impl From<BlockStatement> for Statement {
    fn from(value: BlockStatement) -> Self {
        Statement::Block(value)
    }
}

impl From<CommandStatement> for Statement {
    fn from(value: CommandStatement) -> Self {
        Statement::Command(value)
    }
}

impl From<RawStatement> for Statement {
    fn from(value: RawStatement) -> Self {
        Statement::Raw(value)
    }
}

impl From<IfStatement> for Statement {
    fn from(value: IfStatement) -> Self {
        Statement::If(value)
    }
}
