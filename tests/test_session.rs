//! Tests for the interactive session state machine
//!
//! These drive `Session` directly with in-memory buffers; no terminal is
//! involved.

mod common;

use std::io::Cursor;

use base_convert::cli::{run_lines, Flow, ReplTheme, Session, SessionConfig};
use dialoguer::theme::Theme;
use base_convert::converter::{ConversionOptions, Converter};
use common::{plain_output, utf8};

fn session(from: i64, to: i64) -> Session {
    plain_output();
    Session::new(ConversionOptions::new(from, to).into(), Converter::new())
}

fn feed(session: &mut Session, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = session.handle_line(line, &mut out).unwrap();
    (flow, utf8(out))
}

#[test]
fn test_conversion_uses_current_bases() {
    let mut s = session(10, 16);
    let (flow, out) = feed(&mut s, "255");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "ff\n");
}

#[test]
fn test_blank_line_is_ignored() {
    let mut s = session(10, 2);
    let (flow, out) = feed(&mut s, "   ");
    assert_eq!(flow, Flow::Continue);
    assert!(out.is_empty());
}

#[test]
fn test_prompt_renders_with_angle_bracket() {
    let mut prompt = String::new();
    ReplTheme
        .format_input_prompt(&mut prompt, "base-convert", None)
        .unwrap();
    assert_eq!(prompt, "base-convert> ");

    let mut echoed = String::new();
    ReplTheme
        .format_input_prompt_selection(&mut echoed, "base-convert", "ff")
        .unwrap();
    assert_eq!(echoed, "base-convert> ff");
}

#[test]
fn test_negative_base_reported_on_next_conversion() {
    let mut s = session(10, 2);
    let (_, out) = feed(&mut s, ":from -4");
    assert_eq!(out, "Source base set to -4\n");
    let (_, out) = feed(&mut s, "10");
    assert_eq!(out, "Error: Base must be between 2 and 62\n");
}

#[test]
fn test_run_lines_survives_invalid_utf8() {
    let mut s = session(10, 2);
    let mut out = Vec::new();
    run_lines(&mut s, Cursor::new(b"\xff\n10\n:quit\n".to_vec()), &mut out).unwrap();
    let out = utf8(out);
    assert!(out.contains("Error: Invalid digit '\u{FFFD}' for base 10\n"));
    assert!(out.contains("1010\n"));
}

#[test]
fn test_set_bases() {
    let mut s = session(10, 10);

    let (_, out) = feed(&mut s, ":from 16");
    assert_eq!(out, "Source base set to 16\n");
    let (_, out) = feed(&mut s, ":to 2");
    assert_eq!(out, "Target base set to 2\n");
    assert_eq!(s.config().from_base, 16);
    assert_eq!(s.config().to_base, 2);

    let (_, out) = feed(&mut s, "f");
    assert_eq!(out, "1111\n");
}

#[test]
fn test_base_command_without_argument_is_ignored() {
    let mut s = session(10, 2);
    let (_, out) = feed(&mut s, ":from");
    assert!(out.is_empty());
    assert_eq!(s.config().from_base, 10);
}

#[test]
fn test_non_numeric_base_keeps_previous_value() {
    let mut s = session(10, 2);
    let (flow, out) = feed(&mut s, ":to hex");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "Invalid base: hex\n");
    assert_eq!(s.config().to_base, 2);
}

#[test]
fn test_out_of_range_base_reported_on_next_conversion() {
    let mut s = session(10, 2);
    feed(&mut s, ":to 99");
    let (flow, out) = feed(&mut s, "10");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "Error: Base must be between 2 and 62\n");
}

#[test]
fn test_invalid_digit_reported_and_session_continues() {
    let mut s = session(2, 10);
    let (flow, out) = feed(&mut s, "102");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "Error: Invalid digit '2' for base 2\n");

    let (_, out) = feed(&mut s, "101");
    assert_eq!(out, "5\n");
}

#[test]
fn test_toggle_steps() {
    let mut s = session(10, 2);
    let (_, out) = feed(&mut s, ":steps");
    assert_eq!(out, "Steps enabled\n");
    assert!(s.config().show_steps);

    let (_, out) = feed(&mut s, "2");
    assert!(out.starts_with("10\n"));
    assert!(out.contains("Steps:"));
    assert!(out.contains("  2 * 10^0 = 2"));
    assert!(out.contains("  Result: 10"));

    let (_, out) = feed(&mut s, ":steps");
    assert_eq!(out, "Steps disabled\n");
    let (_, out) = feed(&mut s, "2");
    assert_eq!(out, "10\n");
}

#[test]
fn test_toggle_uppercase() {
    let mut s = session(10, 16);
    let (_, out) = feed(&mut s, ":upper");
    assert_eq!(out, "Uppercase enabled\n");
    let (_, out) = feed(&mut s, "255");
    assert_eq!(out, "FF\n");
}

#[test]
fn test_help_lists_commands() {
    let mut s = session(10, 2);
    let (_, out) = feed(&mut s, ":help");
    for cmd in [":from <base>", ":to <base>", ":steps", ":upper", ":help", ":quit"] {
        assert!(out.contains(cmd), "help should mention {cmd}");
    }
}

#[test]
fn test_unknown_command() {
    let mut s = session(10, 2);
    let (flow, out) = feed(&mut s, ":frobnicate 3");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "Unknown command: :frobnicate\n");
}

#[test]
fn test_quit_and_exit() {
    let mut s = session(10, 2);
    assert_eq!(feed(&mut s, ":quit").0, Flow::Quit);
    assert_eq!(feed(&mut s, ":exit").0, Flow::Quit);
}

#[test]
fn test_run_lines_stops_at_quit() {
    let mut s = session(10, 2);
    let mut out = Vec::new();
    let input = Cursor::new("3\n:quit\n4\n");
    run_lines(&mut s, input, &mut out).unwrap();

    let out = utf8(out);
    assert!(out.starts_with("11\n"));
    assert!(!out.contains("100"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_run_lines_ends_at_eof() {
    let mut s = session(16, 10);
    let mut out = Vec::new();
    run_lines(&mut s, Cursor::new("ff\n-10"), &mut out).unwrap();

    let out = utf8(out);
    assert!(out.contains("255\n"));
    assert!(out.contains("-16\n"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_session_config_from_options() {
    let options = ConversionOptions::new(8, 36).with_steps(true);
    let config = SessionConfig::from(options);
    assert_eq!(config.options(), options);
}
