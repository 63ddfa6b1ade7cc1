use std::ops::ControlFlow;

use pory_ast::{
    token::{Token, TokenKind},
    visitor::{AstFlow, AstVisitor},
    BlockStatement, CommandStatement, ComparisonOperator, ConditionExpression, ConditionKind,
    Identifier, IfStatement, Node, Program, RawStatement, ScriptStatement, Span, Statement, Text,
};
use pretty_assertions::assert_eq;

/// Hands out tokens with increasing, non-overlapping spans
#[derive(Default)]
struct Tokens {
    offset: usize,
}

impl Tokens {
    fn next(&mut self, kind: TokenKind, literal: &str) -> Token {
        let span = Span::new(self.offset, literal.len());
        self.offset += literal.len() + 1;
        Token::new(kind, literal, span)
    }

    fn ident(&mut self, name: &str) -> Identifier {
        Identifier::new(self.next(TokenKind::Ident, name), name)
    }

    fn block(&mut self, statements: Vec<Statement>) -> BlockStatement {
        BlockStatement::new(self.next(TokenKind::LeftBrace, "{"), statements)
    }

    fn command(&mut self, name: &str, args: &[&str]) -> CommandStatement {
        let token = self.next(TokenKind::Ident, name);
        let name = Identifier::new(token.clone(), name);
        CommandStatement::new(token, name, args.iter().copied())
    }

    fn flag_equals(&mut self, value: &str, body: BlockStatement) -> ConditionExpression {
        ConditionExpression::new(
            self.next(TokenKind::Flag, "flag"),
            ConditionKind::Flag,
            "flag",
            ComparisonOperator::Eq,
            value,
            body,
        )
    }
}

#[test]
fn entry_point_script() {
    let mut tokens = Tokens::default();
    let script_token = tokens.next(TokenKind::Script, "script");
    let name = tokens.ident("EntryPoint");
    let command = tokens.command("msgbox", &["$intro"]);
    let body = tokens.block(vec![command.clone().into()]);

    let mut program = Program::new();
    program.push_statement(ScriptStatement::new(script_token.clone(), name, body));

    assert_eq!(program.token_literal(), script_token.literal());
    assert_eq!(program.statements().len(), 1);

    let Statement::Script(script) = &program.statements()[0] else {
        panic!("Expected a script statement");
    };
    assert_eq!(script.name, "EntryPoint");
    assert_eq!(script.body.statements, [Statement::Command(command)]);
}

#[test]
fn if_chain_yields_bodies_in_order() {
    let mut tokens = Tokens::default();
    let one = tokens.command("msgbox", &["$one"]);
    let b0 = tokens.block(vec![one.into()]);
    let two = tokens.command("msgbox", &["$two"]);
    let b1 = tokens.block(vec![two.into()]);
    let other = tokens.command("msgbox", &["$other"]);
    let b2 = tokens.block(vec![other.into()]);

    let if_token = tokens.next(TokenKind::If, "if");
    let consequence = tokens.flag_equals("1", b0.clone());
    let elif = tokens.flag_equals("2", b1.clone());
    let if_statement = IfStatement::new(if_token, consequence, vec![elif], Some(b2.clone()));

    let candidates = if_statement.candidate_bodies().collect::<Vec<_>>();
    assert_eq!(candidates, [&b0, &b1]);
    assert_eq!(if_statement.fallback(), Some(&b2));

    let values = if_statement
        .arms()
        .map(|arm| arm.comparison_value.as_str())
        .collect::<Vec<_>>();
    assert_eq!(values, ["1", "2"]);
}

/// Records the order in which the visitor sees the nodes
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    stop_at: Option<&'static str>,
}

impl Recorder {
    fn record(&mut self, event: String) -> AstFlow {
        let stop = self.stop_at.is_some_and(|stop_at| event == stop_at);
        self.events.push(event);
        if stop {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl AstVisitor for Recorder {
    fn visit_script(&mut self, script: &ScriptStatement) -> AstFlow {
        self.record(format!("script {}", script.name))
    }

    fn visit_block(&mut self, block: &BlockStatement) -> AstFlow {
        self.record(format!("block {}", block.len()))
    }

    fn visit_command(&mut self, command: &CommandStatement) -> AstFlow {
        self.record(format!("command {} {}", command.name, command.args.join(" ")))
    }

    fn visit_raw(&mut self, raw: &RawStatement) -> AstFlow {
        self.record(format!("raw {} {}", raw.name, raw.is_global))
    }

    fn visit_if(&mut self, _: &IfStatement) -> AstFlow {
        self.record("if".to_string())
    }

    fn visit_condition(&mut self, condition: &ConditionExpression) -> AstFlow {
        self.record(format!("condition {condition}"))
    }

    fn visit_else(&mut self, _: &BlockStatement) -> AstFlow {
        self.record("else".to_string())
    }

    fn visit_text(&mut self, text: &Text) -> AstFlow {
        self.record(format!("text {}", text.name()))
    }
}

fn sample_program() -> Program {
    let mut tokens = Tokens::default();

    let setflag = tokens.command("setflag", &["FLAG_2"]);
    let b0 = tokens.block(vec![setflag.into()]);
    let b1 = tokens.block(vec![]);
    let clearflag = tokens.command("clearflag", &["FLAG_2"]);
    let b2 = tokens.block(vec![clearflag.into()]);
    let if_token = tokens.next(TokenKind::If, "if");
    let consequence = tokens.flag_equals("1", b0);
    let elif = tokens.flag_equals("2", b1);
    let if_statement = IfStatement::new(if_token, consequence, vec![elif], Some(b2));

    let lock = tokens.command("lock", &[]);
    let body = tokens.block(vec![lock.into(), if_statement.into()]);
    let script_token = tokens.next(TokenKind::Script, "script");
    let script = ScriptStatement::new(script_token, tokens.ident("Main"), body);

    let raw_token = tokens.next(TokenKind::Raw, "raw");
    let raw = RawStatement::new(
        raw_token,
        tokens.ident("Movement"),
        "Movement:\n\twalk_up\n\tstep_end",
        true,
    );

    let mut program = Program::new();
    program.push_statement(script);
    program.push_statement(raw);
    program.push_text(Text::new("Greeting", "Hello!"));
    program
}

#[test]
fn visitor_walks_depth_first_in_order() {
    let program = sample_program();
    let mut recorder = Recorder::default();

    assert_eq!(program.visit(&mut recorder), ControlFlow::Continue(()));
    assert_eq!(
        recorder.events,
        [
            "script Main",
            "block 2",
            "command lock ",
            "if",
            "condition flag(flag) == 1",
            "block 1",
            "command setflag FLAG_2",
            "condition flag(flag) == 2",
            "block 0",
            "else",
            "block 1",
            "command clearflag FLAG_2",
            "raw Movement true",
            "text Greeting",
        ]
    );
}

#[test]
fn visitor_stops_on_break() {
    let program = sample_program();
    let mut recorder = Recorder {
        stop_at: Some("condition flag(flag) == 2"),
        ..Default::default()
    };

    assert_eq!(program.visit(&mut recorder), ControlFlow::Break(()));
    assert_eq!(
        recorder.events.last().map(String::as_str),
        Some("condition flag(flag) == 2")
    );
    assert_eq!(recorder.events.len(), 8);
}

#[test]
fn concurrent_reads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Program>();

    let program = sample_program();
    let expected = program.debug_fmt().to_string();

    let results = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut recorder = Recorder::default();
                    let _ = program.visit(&mut recorder);
                    (recorder.events.len(), program.debug_fmt().to_string())
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    for (events, dump) in results {
        assert_eq!(events, 14);
        assert_eq!(dump, expected);
    }
}
