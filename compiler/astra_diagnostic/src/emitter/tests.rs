use astra_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(emitter: TerminalEmitter<Vec<u8>>, diagnostic: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_emit_without_source_prints_spans() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("unexpected input after a complete condition")
        .with_label(Span::new(4, 9), "here");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);

    assert_eq!(
        render(emitter, &diag),
        "error[E1002]: unexpected input after a complete condition\n  --> 4..9: here\n\n"
    );
}

#[test]
fn test_emit_with_source_renders_snippet() {
    let source = "ownedby affiliation = bogus";
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected an empire affiliation")
        .with_label(Span::new(22, 27), "unexpected input here")
        .with_note("while parsing an `ownedby` condition");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("test.inf", source);

    let expected = format!(
        "error[E1001]: expected an empire affiliation\n \
         --> test.inf:1:23\n  |\n1 | {source}\n  |{}^^^^^ unexpected input here\n   \
         = note: while parsing an `ownedby` condition\n\n",
        " ".repeat(23)
    );
    assert_eq!(render(emitter, &diag), expected);
}

#[test]
fn test_emit_with_colors_wraps_header() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("bad");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let out = render(emitter, &diag);
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn test_caret_follows_tabs_in_the_source_line() {
    let source = "\townedby affiliation = bogus";
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected an empire affiliation")
        .with_label(Span::new(23, 28), "unexpected input here");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("test.inf", source);

    let out = render(emitter, &diag);
    let caret_line = out
        .lines()
        .find(|line| line.contains('^'))
        .unwrap_or_default();
    assert_eq!(
        caret_line,
        format!("  | \t{}^^^^^ unexpected input here", " ".repeat(22))
    );
}

#[test]
fn test_emit_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        out,
        "error: aborting due to 2 errors\nerror: aborting due to 1 error\n"
    );
}
