//! Unit tests for TokenStream

use super::tokenize::{ScanState, Token, TokenStream};

fn names(text: &str) -> Vec<&str> {
    TokenStream::new(text).map(|t| t.name).collect()
}

#[test]
fn test_scan_state_construction() {
    assert_eq!(ScanState::Normal, ScanState::Normal);
    assert_eq!(
        ScanState::InToken {
            start: 3,
            content_start: 5,
            line: 1
        },
        ScanState::InToken {
            start: 3,
            content_start: 5,
            line: 1
        }
    );
}

#[test]
fn test_single_token_position() {
    let tokens: Vec<Token> = TokenStream::new("Hello {{name}}!").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].name, "name");
    assert_eq!(tokens[0].start, 6);
    assert_eq!(tokens[0].length, 8);
    assert_eq!(tokens[0].end(), 14);
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_multiple_tokens_in_order() {
    assert_eq!(names("{{b}} x {{a}} y {{b}}"), vec!["b", "a", "b"]);
}

#[test]
fn test_name_is_not_trimmed() {
    assert_eq!(names("{{ nome }}"), vec![" nome "]);
}

#[test]
fn test_unclosed_token_is_not_matched() {
    assert!(names("Nome: {{nome").is_empty());
    assert!(names("Nome: {{nome}").is_empty());
}

#[test]
fn test_single_braces_are_literal() {
    assert!(names("{nome} and {x}").is_empty());
}

#[test]
fn test_lone_rbrace_is_part_of_name() {
    assert_eq!(names("{{a}b}}"), vec!["a}b"]);
}

#[test]
fn test_nested_open_restarts_token() {
    let tokens: Vec<Token> = TokenStream::new("{{ {{nome}}").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].name, "nome");
    assert_eq!(tokens[0].start, 3);
}

#[test]
fn test_triple_brace_keeps_inner_brace_in_name() {
    assert_eq!(names("{{{a}}}"), vec!["{a"]);
}

#[test]
fn test_newline_aborts_token() {
    assert!(names("{{no\nme}}").is_empty());
}

#[test]
fn test_newline_abort_does_not_hide_following_token() {
    assert_eq!(names("{{broken\n{{ok}}"), vec!["ok"]);
}

#[test]
fn test_line_numbers() {
    let tokens: Vec<Token> = TokenStream::new("a\nb {{x}}\n\n{{y}}").collect();
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].line, 4);
}

#[test]
fn test_empty_token() {
    let tokens: Vec<Token> = TokenStream::new("{{}} {{  }}").collect();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.is_empty()));
}

#[test]
fn test_multibyte_text_around_tokens() {
    assert_eq!(
        names("<p>Certidão de {{nome_completo}} — Goiânia {{uf}}</p>"),
        vec!["nome_completo", "uf"]
    );
}

#[test]
fn test_markup_inside_placeholder_is_captured() {
    assert_eq!(names("{{<b>nome</b>}}"), vec!["<b>nome</b>"]);
}

#[test]
fn test_stream_line_tracks_whole_input() {
    let mut stream = TokenStream::new("a\nb\nc");
    assert!(stream.next().is_none());
    assert_eq!(stream.line(), 3);
}
