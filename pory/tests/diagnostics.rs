use pory_ast::{
    token::{Token, TokenKind},
    BlockStatement, Config, Identifier, LabelIndex, Program, RawStatement, ScriptStatement, Span,
};
use pory_common::{Code, InputFiles};
use pory_error::{AsAnnotationSnippet, AstError, LabelKind};

const SOURCE: &str = "script Intro {\n}\n\nraw `Intro:: .byte 0`\n";

/// Builds the token that covers `literal` at `start` and checks that it matches the source
fn token_at(files: &InputFiles, kind: TokenKind, start: usize, literal: &str) -> Token {
    let span = Span::new(start, literal.len());
    assert_eq!(files.get_span_str(span), Some(literal));
    Token::new(kind, literal, span)
}

fn parse_by_hand(files: &InputFiles) -> Program {
    let script_token = token_at(files, TokenKind::Script, 0, "script");
    let script_name = token_at(files, TokenKind::Ident, 7, "Intro");
    let brace = token_at(files, TokenKind::LeftBrace, 13, "{");
    let raw_token = token_at(files, TokenKind::Raw, 18, "raw");
    let raw_name = token_at(files, TokenKind::Ident, 23, "Intro");

    let mut program = Program::new();
    program.push_statement(ScriptStatement::new(
        script_token,
        Identifier::from_token(script_name).unwrap(),
        BlockStatement::new(brace, vec![]),
    ));
    program.push_statement(RawStatement::new(
        raw_token,
        Identifier::from_token(raw_name).unwrap(),
        "Intro:: .byte 0",
        true,
    ));
    program
}

#[test]
fn duplicate_label_points_at_both_definitions() {
    let mut files = InputFiles::new();
    files.add_input(Code {
        source: SOURCE.to_string(),
        path: Some("intro.pory".to_string()),
    });

    let program = parse_by_hand(&files);
    let errors = LabelIndex::collect(&program, &Config::default())
        .into_result()
        .unwrap_err();

    assert_eq!(
        errors,
        [AstError::DuplicateLabel {
            name: "Intro".into(),
            kind: LabelKind::Raw,
            span: Some(Span::new(23, 5)),
            first_kind: LabelKind::Script,
            first_span: Some(Span::new(7, 5)),
        }]
    );

    let rendered = errors[0].render(&files, false);
    assert!(rendered.contains("Duplicate label `Intro`"), "{rendered}");
    assert!(rendered.contains("intro.pory"), "{rendered}");
    assert!(rendered.contains("First defined here as script"), "{rendered}");
    assert!(rendered.contains("Defined again here as raw label"), "{rendered}");
}

#[test]
fn empty_identifier_points_at_token() {
    let mut files = InputFiles::new();
    files.add_input(Code {
        source: SOURCE.to_string(),
        path: None,
    });

    let token = Token::new(TokenKind::Ident, "", Span::new(7, 0));
    let error = Identifier::from_token(token).unwrap_err();

    assert_eq!(error.span(), Some(Span::new(7, 0)));
    let rendered = error.render(&files, false);
    assert!(rendered.contains("Empty identifier"), "{rendered}");
    assert!(rendered.contains("Expected a name here"), "{rendered}");
}
