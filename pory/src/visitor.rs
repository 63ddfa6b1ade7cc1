//! Read-only traversal of the ast
//!
//! Every hook is called before the children of its node are visited.
//! Returning [`ControlFlow::Break`] from any hook stops the whole walk.

use std::ops::ControlFlow;

use crate::{
    condition::ConditionExpression,
    identifier::Identifier,
    program::{Program, Text},
    statement::{
        BlockStatement, CommandStatement, IfStatement, RawStatement, ScriptStatement, Statement,
    },
};

pub type AstFlow = ControlFlow<()>;

pub trait AstVisitor {
    #[must_use]
    fn visit_program(&mut self, #[allow(unused)] program: &Program) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_statement(&mut self, #[allow(unused)] statement: &Statement) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_script(&mut self, #[allow(unused)] script: &ScriptStatement) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_block(&mut self, #[allow(unused)] block: &BlockStatement) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_command(&mut self, #[allow(unused)] command: &CommandStatement) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_raw(&mut self, #[allow(unused)] raw: &RawStatement) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_if(&mut self, #[allow(unused)] if_statement: &IfStatement) -> AstFlow {
        ControlFlow::Continue(())
    }
    /// Called for the primary condition and every elif, in order
    #[must_use]
    fn visit_condition(&mut self, #[allow(unused)] condition: &ConditionExpression) -> AstFlow {
        ControlFlow::Continue(())
    }
    /// Called for the else block of an if statement, before the block itself is visited
    #[must_use]
    fn visit_else(&mut self, #[allow(unused)] block: &BlockStatement) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_identifier(&mut self, #[allow(unused)] ident: &Identifier) -> AstFlow {
        ControlFlow::Continue(())
    }
    #[must_use]
    fn visit_text(&mut self, #[allow(unused)] text: &Text) -> AstFlow {
        ControlFlow::Continue(())
    }
}

impl Statement {
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_statement(self)?;
        match self {
            Statement::Script(script) => script.visit(visitor),
            Statement::Block(block) => block.visit(visitor),
            Statement::Command(command) => command.visit(visitor),
            Statement::Raw(raw) => raw.visit(visitor),
            Statement::If(if_statement) => if_statement.visit(visitor),
        }
    }
}

impl ScriptStatement {
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_script(self)?;
        visitor.visit_identifier(&self.name)?;
        self.body.visit(visitor)
    }
}

impl BlockStatement {
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_block(self)?;
        for statement in &self.statements {
            statement.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl CommandStatement {
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_command(self)?;
        visitor.visit_identifier(&self.name)
    }
}

impl RawStatement {
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_raw(self)?;
        visitor.visit_identifier(&self.name)
    }
}

impl IfStatement {
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_if(self)?;
        for arm in self.arms() {
            arm.visit(visitor)?;
        }
        if let Some(block) = self.fallback() {
            visitor.visit_else(block)?;
            block.visit(visitor)?;
        }
        ControlFlow::Continue(())
    }
}

impl ConditionExpression {
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_condition(self)?;
        self.body.visit(visitor)
    }
}
