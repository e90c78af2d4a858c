// Unit tests for the echo renderer.
//
// Every renderer here writes into a Vec<u8>, so these tests check exact
// bytes: option composition order, the plain-text path, style-name
// validation and chaining.

use console_reporter::output::style::StyleKind;
use console_reporter::{EchoError, EchoOptions, Renderer, ReporterConfig};

fn plain() -> Renderer<Vec<u8>> {
    Renderer::with_target(ReporterConfig::new(true, false), Vec::new())
}

fn styled() -> Renderer<Vec<u8>> {
    // Force escapes even though the test target is not a terminal
    colored::control::set_override(true);
    Renderer::with_target(ReporterConfig::default(), Vec::new())
}

fn output(renderer: Renderer<Vec<u8>>) -> String {
    String::from_utf8(renderer.into_target()).unwrap()
}

/// Split "\x1b[1;44;32mtext\x1b[0m" into its sorted SGR codes.
fn sgr_codes(rendered: &str) -> Vec<String> {
    let start = rendered.find("\x1b[").expect("no escape sequence") + 2;
    let end = start + rendered[start..].find('m').unwrap();
    let mut codes: Vec<String> = rendered[start..end].split(';').map(String::from).collect();
    codes.sort();
    codes
}

// ============================================================
// Color disabled: plain text, every option combination
// ============================================================

#[test]
fn disabled_color_ignores_all_style_names() {
    let styled_options = [
        EchoOptions::new().foreground("green"),
        EchoOptions::new().style("bold"),
        EchoOptions::new().background("bgRed"),
        EchoOptions::new()
            .foreground("not-a-color")
            .style("not-a-style")
            .background("not-a-bg"),
    ];

    for options in &styled_options {
        let mut r = plain();
        r.echo("done", options).unwrap();
        let out = output(r);
        assert_eq!(out, "done\n", "options {options:?}");
        assert!(!out.contains('\x1b'));
    }
}

#[test]
fn disabled_color_still_applies_layout() {
    let mut r = plain();
    r.echo(
        "step",
        &EchoOptions::new()
            .blank_line_before()
            .indent(4)
            .trailing_space()
            .foreground("cyan"),
    )
    .unwrap();
    assert_eq!(output(r), "\n    step \n");
}

// ============================================================
// Write primitives
// ============================================================

#[test]
fn no_newline_writes_exactly_the_message() {
    let mut r = plain();
    r.echo("pending", &EchoOptions::new().no_newline()).unwrap();
    assert_eq!(output(r), "pending");
}

#[test]
fn preceding_blank_line_writes_two_lines() {
    let mut r = plain();
    r.echo("x", &EchoOptions::new().blank_line_before()).unwrap();
    assert_eq!(output(r), "\nx\n");
}

#[test]
fn blank_line_then_no_newline() {
    let mut r = plain();
    r.echo("waiting", &EchoOptions::new().blank_line_before().no_newline())
        .unwrap();
    assert_eq!(output(r), "\nwaiting");
}

#[test]
fn trailing_space_is_a_single_space() {
    let mut r = plain();
    r.echo("a ", &EchoOptions::new().trailing_space().no_newline())
        .unwrap();
    assert_eq!(output(r), "a  ");
}

#[test]
fn indent_is_proportional() {
    let mut r = plain();
    r.echo("one", &EchoOptions::new().indent(1))
        .unwrap()
        .echo("three", &EchoOptions::new().indent(3))
        .unwrap();
    assert_eq!(output(r), " one\n   three\n");
}

// ============================================================
// Color enabled
// ============================================================

#[test]
fn green_foreground_wraps_message() {
    let mut r = styled();
    r.echo("done", &EchoOptions::new().foreground("green")).unwrap();
    assert_eq!(output(r), "\x1b[32mdone\x1b[0m\n");
}

#[test]
fn no_options_is_plain_even_with_color() {
    let mut r = styled();
    r.echo("plain", &EchoOptions::new()).unwrap();
    assert_eq!(output(r), "plain\n");
}

#[test]
fn foreground_style_and_background_compose() {
    let mut r = styled();
    r.echo(
        "alert",
        &EchoOptions::new()
            .foreground("green")
            .style("bold")
            .background("bgBlue"),
    )
    .unwrap();
    let out = output(r);
    assert!(out.contains("alert"));
    assert!(out.ends_with("\x1b[0m\n"));
    assert_eq!(sgr_codes(&out), vec!["1", "32", "44"]);
}

#[test]
fn indentation_is_inside_the_styling() {
    let mut r = styled();
    r.echo("nested", &EchoOptions::new().foreground("red").indent(2))
        .unwrap();
    assert_eq!(output(r), "\x1b[31m  nested\x1b[0m\n");
}

#[test]
fn bright_background_name() {
    let mut r = styled();
    r.echo("hi", &EchoOptions::new().background("bgRedBright").no_newline())
        .unwrap();
    assert_eq!(sgr_codes(&output(r)), vec!["101"]);
}

// ============================================================
// Invalid style names
// ============================================================

#[test]
fn unknown_foreground_fails_without_writing() {
    let mut r = Renderer::with_target(ReporterConfig::default(), Vec::new());
    let result = r.echo(
        "x",
        &EchoOptions::new()
            .foreground("not-a-color")
            .blank_line_before(),
    );
    match result {
        Err(EchoError::InvalidStyleName { kind, name }) => {
            assert_eq!(kind, StyleKind::Foreground);
            assert_eq!(name, "not-a-color");
        }
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("expected InvalidStyleName"),
    }
    assert!(output(r).is_empty());
}

#[test]
fn unknown_background_is_reported_as_background() {
    let mut r = Renderer::with_target(ReporterConfig::default(), Vec::new());
    let err = r
        .echo("x", &EchoOptions::new().foreground("red").background("bgPlaid"))
        .err()
        .unwrap();
    assert!(matches!(
        err,
        EchoError::InvalidStyleName {
            kind: StyleKind::Background,
            ..
        }
    ));
}

// ============================================================
// Chaining
// ============================================================

#[test]
fn echo_returns_the_same_renderer() {
    let mut r = plain();
    let before: *const Renderer<Vec<u8>> = &r;
    let returned = r.echo("first", &EchoOptions::new()).unwrap();
    assert!(std::ptr::eq(before, returned));
}

#[test]
fn chained_calls_write_in_order() {
    let mut r = plain();
    r.echo("a", &EchoOptions::new().no_newline())
        .unwrap()
        .echo("b", &EchoOptions::new().no_newline())
        .unwrap()
        .echo("c", &EchoOptions::new())
        .unwrap();
    assert_eq!(output(r), "abc\n");
}
