//! The abstract syntax tree of poryscript
//!
//! The parser builds a [`Program`] bottom-up and hands it to the emitter, which only ever reads it.
//! The tree is a strict tree: every node owns its children and nothing points back up,
//! so any number of readers can walk a finished program at the same time.
//!
//! This crate does not validate anything. The opt-in [`LabelIndex`] reports colliding
//! labels for collaborators that care about them.

mod condition;
mod display;
mod identifier;
mod labels;
pub mod node;
mod program;
mod statement;
pub mod token;
pub mod visitor;

pub use condition::{ComparisonOperator, ConditionExpression, ConditionKind};
pub use display::ProgramDisplay;
pub use identifier::Identifier;
pub use labels::{Label, LabelIndex};
pub use node::Node;
pub use program::{Program, Text};
pub use statement::{
    BlockStatement, CommandStatement, IfStatement, RawStatement, ScriptStatement, Statement,
    StatementKind,
};

pub use pory_common::{Config, LabelNamespace, Span};
pub use pory_error::{AstError, LabelKind};
