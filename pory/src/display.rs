use core::fmt;
use std::fmt::Display;

use itertools::Itertools;

use crate::{
    program::Program,
    statement::{BlockStatement, Statement},
};

/// Prints a [`Program`] as an indented tree, one node per line
pub struct ProgramDisplay<'a> {
    pub(super) program: &'a Program,
}

fn writeln_indented(f: &mut fmt::Formatter<'_>, value: impl Display, indent: usize) -> fmt::Result {
    writeln!(f, "{:indent$}{}", "", value, indent = indent * 2)
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.escape_default())
}

fn fmt_block(f: &mut fmt::Formatter<'_>, block: &BlockStatement, indent: usize) -> fmt::Result {
    writeln_indented(f, "Block", indent)?;
    for statement in &block.statements {
        fmt_statement(f, statement, indent + 1)?;
    }
    Ok(())
}

fn fmt_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, indent: usize) -> fmt::Result {
    match statement {
        Statement::Script(script) => {
            writeln_indented(f, format_args!("Script {}", script.name), indent)?;
            fmt_block(f, &script.body, indent + 1)
        }
        Statement::Block(block) => fmt_block(f, block, indent),
        Statement::Command(command) => writeln_indented(
            f,
            format_args!(
                "Command {}({})",
                command.name,
                command.args.iter().map(|arg| quoted(arg)).join(", ")
            ),
            indent,
        ),
        Statement::Raw(raw) => {
            let placement = if raw.is_global { "global" } else { "local" };
            writeln_indented(
                f,
                format_args!("Raw {} ({placement}) {}", raw.name, quoted(&raw.value)),
                indent,
            )
        }
        Statement::If(if_statement) => {
            writeln_indented(f, "IfStatement", indent)?;
            for (index, arm) in if_statement.arms().enumerate() {
                let keyword = if index == 0 { "If" } else { "Elif" };
                writeln_indented(f, format_args!("{keyword} {arm}"), indent + 1)?;
                fmt_block(f, &arm.body, indent + 2)?;
            }
            if let Some(block) = if_statement.fallback() {
                writeln_indented(f, "Else", indent + 1)?;
                fmt_block(f, block, indent + 2)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for ProgramDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln_indented(f, "Program", 0)?;
        for statement in self.program.statements() {
            fmt_statement(f, statement, 1)?;
        }
        for text in self.program.texts() {
            writeln_indented(
                f,
                format_args!("Text {} {}", text.name(), quoted(text.value())),
                1,
            )?;
        }
        Ok(())
    }
}
