//! The condition of a single if/elif arm

use std::fmt;

use smol_str::SmolStr;

use crate::{node::token_node, statement::BlockStatement, token::Token};

/// What kind of value a condition tests
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum ConditionKind {
    /// `flag(FLAG_NAME)`
    Flag,
    /// `var(VAR_NAME)`
    Var,
    /// `defeated(TRAINER_NAME)`
    Defeated,
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionKind::Flag => write!(f, "flag"),
            ConditionKind::Var => write!(f, "var"),
            ConditionKind::Defeated => write!(f, "defeated"),
        }
    }
}

/// Any supported comparison operator
///
/// The ast never evaluates comparisons, it only records them.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl ComparisonOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Ne => "!=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Ge => ">=",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One arm of an if statement: a test and the block that runs when the test holds
///
/// This is not a statement, it only ever appears inside of an [`IfStatement`](crate::IfStatement).
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ConditionExpression {
    pub token: Token,
    pub kind: ConditionKind,
    /// The symbolic name of the tested value
    pub operand: SmolStr,
    pub operator: ComparisonOperator,
    /// The right hand side, either a literal or a symbolic name
    pub comparison_value: SmolStr,
    pub body: BlockStatement,
}

impl ConditionExpression {
    pub fn new(
        token: Token,
        kind: ConditionKind,
        operand: impl Into<SmolStr>,
        operator: ComparisonOperator,
        comparison_value: impl Into<SmolStr>,
        body: BlockStatement,
    ) -> Self {
        ConditionExpression {
            token,
            kind,
            operand: operand.into(),
            operator,
            comparison_value: comparison_value.into(),
            body,
        }
    }
}

token_node!(ConditionExpression);

impl fmt::Display for ConditionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {} {}",
            self.kind, self.operand, self.operator, self.comparison_value
        )
    }
}
