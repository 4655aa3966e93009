//! Snapshot tests for output renderers.
//!
//! Each test renders the demo report through a renderer and compares the
//! output against the expected fixture.

use serde_json::json;

use cline_test::hello_world;
use cline_test::models::{OutputFormat, Report};
use cline_test::output::OutputRenderer;
use cline_test::output::json::JsonRenderer;
use cline_test::output::terminal::TerminalRenderer;

/// The report the `demo` command produces.
fn demo_report() -> Report {
    Report::demo().unwrap()
}

#[test]
fn snapshot_json_renderer() {
    let output = JsonRenderer.render(&demo_report());

    let actual: serde_json::Value = serde_json::from_str(&output).unwrap();
    let expected_str =
        std::fs::read_to_string("tests/fixtures/expected_demo_report.json").unwrap();
    let expected: serde_json::Value = serde_json::from_str(&expected_str).unwrap();

    assert_eq!(
        actual, expected,
        "JSON renderer output does not match snapshot.\nActual:\n{output}"
    );
}

#[test]
fn snapshot_terminal_renderer() {
    colored::control::set_override(false);
    let output = TerminalRenderer.render(&demo_report());

    let expected = std::fs::read_to_string("tests/fixtures/expected_demo_report.txt").unwrap();
    assert_eq!(output, expected);
}

#[test]
fn render_dispatches_on_format() {
    let report = Report::default().with_greeting(hello_world());
    colored::control::set_override(false);

    assert_eq!(
        cline_test::output::render(OutputFormat::Terminal, &report),
        "Hello from Python Cline Test!\n"
    );
    assert!(
        cline_test::output::render(OutputFormat::Json, &report)
            .contains("\"greeting\": \"Hello from Python Cline Test!\"")
    );
}

#[test]
fn sum_report_shows_wide_numbers() {
    let value: serde_json::Value = serde_json::from_str("[9223372036854775808, -1]").unwrap();
    let report = Report::sum_of(&value).unwrap();

    colored::control::set_override(false);
    assert_eq!(
        TerminalRenderer.render(&report),
        "Sum of [9223372036854775808, -1]: 9223372036854775807\n"
    );

    let parsed: serde_json::Value =
        serde_json::from_str(&JsonRenderer.render(&report)).unwrap();
    assert_eq!(parsed["sum"]["total"], json!(i64::MAX));
    assert_eq!(parsed["sum"]["numbers"][1], json!(-1));
}
