use pory_error::{AstError, Result};
use smol_str::SmolStr;

use crate::{
    display::ProgramDisplay,
    node::Node,
    statement::{ScriptStatement, Statement},
    visitor::{AstFlow, AstVisitor},
};

/// A text resource, for example `text Greeting { "Hello!" }`
///
/// Other statements refer to a text by its name.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct Text {
    name: SmolStr,
    value: String,
}

impl Text {
    /// # Panics
    /// Panics if `name` is empty
    pub fn new(name: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "A text name must not be empty");
        Text {
            name,
            value: value.into(),
        }
    }

    pub fn try_new(name: impl Into<SmolStr>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AstError::EmptyTextName);
        }
        Ok(Text {
            name,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The root of every ast
///
/// A program only ever grows: statements and texts can be appended,
/// but never removed or reordered.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Program {
    top_level_statements: Vec<Statement>,
    texts: Vec<Text>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn push_statement(&mut self, statement: impl Into<Statement>) {
        let statement = statement.into();
        tracing::trace!(
            kind = %statement.kind(),
            literal = statement.token_literal(),
            index = self.top_level_statements.len(),
            "append top-level statement"
        );
        self.top_level_statements.push(statement);
    }

    pub fn push_text(&mut self, text: Text) {
        tracing::trace!(
            name = text.name(),
            index = self.texts.len(),
            "append text"
        );
        self.texts.push(text);
    }

    /// The top-level statements, in declaration order
    pub fn statements(&self) -> &[Statement] {
        &self.top_level_statements
    }

    /// The texts, in declaration order
    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    /// Returns whether this program has neither statements nor texts
    pub fn is_empty(&self) -> bool {
        self.top_level_statements.is_empty() && self.texts.is_empty()
    }

    /// Every top-level script, in declaration order
    pub fn scripts(&self) -> impl Iterator<Item = &ScriptStatement> + '_ {
        self.top_level_statements
            .iter()
            .filter_map(Statement::as_script)
    }

    /// Walks the whole program, depth first
    ///
    /// The statements get visited before the texts.
    pub fn visit(&self, visitor: &mut impl AstVisitor) -> AstFlow {
        visitor.visit_program(self)?;
        for statement in &self.top_level_statements {
            statement.visit(visitor)?;
        }
        for text in &self.texts {
            visitor.visit_text(text)?;
        }
        AstFlow::Continue(())
    }

    /// Returns a value that prints this program as an indented tree
    pub fn debug_fmt(&self) -> ProgramDisplay<'_> {
        ProgramDisplay { program: self }
    }
}

impl Node for Program {
    /// The literal of the first top-level statement, or an empty string
    fn token_literal(&self) -> &str {
        self.top_level_statements
            .first()
            .map_or("", Node::token_literal)
    }
}

impl Extend<Statement> for Program {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        for statement in iter {
            self.push_statement(statement);
        }
    }
}

impl Extend<Text> for Program {
    fn extend<T: IntoIterator<Item = Text>>(&mut self, iter: T) {
        for text in iter {
            self.push_text(text);
        }
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        let mut program = Program::new();
        program.extend(iter);
        program
    }
}
