#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use traceback_decoder::{
    CapturedError, DecodeOptions, ErrorCategory, FailureKind, Language, NO_INPUT_CLASS, Token,
    decode_error_object, decode_file, decode_file_with, decode_text, extract, list_all, lookup,
    search_by_tag,
};

fn fixture_path(filename: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    format!("{manifest_dir}/tests/fixtures/{filename}")
}

fn load_fixture(filename: &str) -> String {
    let path = fixture_path(filename);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1);
    *state
}

// ──────────────────── Fixture tracebacks ────────────────────

#[test]
fn name_error_fixture_decodes() {
    let decoded = decode_file(fixture_path("name_error.txt"));
    assert_eq!(decoded.class_name, "NameError");
    assert_eq!(decoded.message, "name 'x' is not defined");
    assert_eq!(decoded.line_number, Some(5));
    assert_eq!(decoded.file_name.as_deref(), Some("test.py"));
    assert!(decoded.tags.iter().any(|t| t == "name"));
    assert!(!decoded.success);
}

#[test]
fn nested_frames_report_innermost_and_keep_stack() {
    let decoded = decode_text(load_fixture("nested_zero_division.txt").as_str());
    assert_eq!(decoded.class_name, "ZeroDivisionError");
    assert_eq!(decoded.message, "division by zero");
    assert_eq!(decoded.file_name.as_deref(), Some("/home/user/app/stats.py"));
    assert_eq!(decoded.line_number, Some(7));
    assert_eq!(decoded.category, ErrorCategory::Arithmetic);

    let stack: Vec<(&str, u32)> = decoded
        .location_frames
        .iter()
        .map(|f| (f.file.as_str(), f.line))
        .collect();
    assert_eq!(
        stack,
        vec![
            ("/home/user/app/main.py", 22),
            ("/home/user/app/main.py", 18),
            ("/home/user/app/stats.py", 7),
        ]
    );
}

#[test]
fn syntax_error_fixture_points_at_broken_source() {
    let decoded = decode_file(fixture_path("syntax_error.txt"));
    assert_eq!(decoded.class_name, "SyntaxError");
    assert_eq!(decoded.message, "expected ':'");
    assert_eq!(decoded.file_name.as_deref(), Some("broken.py"));
    assert_eq!(decoded.line_number, Some(10));
    assert!(decoded.tags.iter().any(|t| t == "syntax"));
    assert_eq!(decoded.location_frames.len(), 3);
}

#[test]
fn chained_traceback_uses_final_summary() {
    let decoded = decode_file(fixture_path("chained_key_error.txt"));
    assert_eq!(decoded.class_name, "RuntimeError");
    assert_eq!(decoded.message, "config: missing key: port");
    assert_eq!(decoded.file_name.as_deref(), Some("config.py"));
    assert_eq!(decoded.line_number, Some(14));
    assert_eq!(decoded.location_frames.len(), 3);
}

#[test]
fn colored_crlf_fixture_decodes() {
    let decoded = decode_file(fixture_path("colored_file_not_found.txt"));
    assert_eq!(decoded.class_name, "FileNotFoundError");
    assert_eq!(
        decoded.message,
        "[Errno 2] No such file or directory: 'data.csv'"
    );
    assert_eq!(decoded.file_name.as_deref(), Some("app.py"));
    assert_eq!(decoded.line_number, Some(3));
    assert_eq!(decoded.emoji, "📁");
}

#[test]
fn non_utf8_file_is_read_failure() {
    let decoded = decode_file(fixture_path("not_utf8.txt"));
    assert_eq!(decoded.failure_kind(), Some(FailureKind::ReadFailure));
    assert_eq!(decoded.class_name, "ReadFailure");
    assert!(!decoded.success);
}

#[test]
fn missing_file_is_file_not_found() {
    let decoded = decode_file(fixture_path("does_not_exist.txt"));
    assert_eq!(decoded.failure_kind(), Some(FailureKind::FileNotFound));
    assert!(decoded.tags.iter().any(|t| t == "not-found"));
    assert_eq!(decoded.line_number, None);
}

#[test]
fn file_options_apply_to_decoded_text() {
    let options = DecodeOptions {
        language: Language::Hi,
        include_tokens: true,
    };
    let decoded = decode_file_with(fixture_path("name_error.txt"), &options);
    assert!(decoded.translated_explanation.is_some());
    let tokens = decoded.tokens.unwrap();
    assert!(tokens.contains(&Token::LineNumber("5".to_string())));
    assert!(tokens.contains(&Token::FileName("test.py".to_string())));
}

// ──────────────────── Serialized shape ────────────────────

#[test]
fn decoded_result_serializes_absent_location_as_null() {
    let value = serde_json::to_value(decode_text("ValueError: bad literal")).unwrap();
    assert_eq!(value["class_name"], "ValueError");
    assert_eq!(value["message"], "bad literal");
    assert_eq!(value["line_number"], serde_json::Value::Null);
    assert_eq!(value["file_name"], serde_json::Value::Null);
    assert_eq!(value["location_frames"], serde_json::json!([]));
    assert_eq!(value["category"], "Type");
    assert_eq!(value["success"], false);
    assert!(value.get("translated_explanation").is_none());
    assert!(value.get("tokens").is_none());
}

#[test]
fn invalid_input_serializes_with_sentinel() {
    let value = serde_json::to_value(decode_text(None::<&str>)).unwrap();
    assert_eq!(value["class_name"], NO_INPUT_CLASS);
    assert_eq!(value["tags"], serde_json::json!(["invalid-input"]));
    assert_eq!(value["success"], false);
}

// ──────────────────── Error objects ────────────────────

#[test]
fn captured_error_json_decodes_through_cause_chain() {
    let err: CapturedError = serde_json::from_value(serde_json::json!({
        "class_name": "RuntimeError",
        "message": "request failed",
        "frames": [{ "file": "handler.py", "line": 20 }],
        "cause": {
            "class_name": "ConnectionRefusedError",
            "message": "[Errno 111] Connection refused",
            "frames": [
                { "file": "client.py", "line": 5 },
                { "file": "socket.py", "line": 88 }
            ]
        }
    }))
    .unwrap();

    let decoded = decode_error_object(&err);
    assert_eq!(decoded.class_name, "RuntimeError");
    assert_eq!(decoded.file_name.as_deref(), Some("socket.py"));
    assert_eq!(decoded.line_number, Some(88));
    assert_eq!(decoded.category, ErrorCategory::Runtime);
}

// ──────────────────── Catalog surface ────────────────────

#[test]
fn every_listed_class_has_a_full_record() {
    let names = list_all();
    assert!(!names.is_empty());
    for name in names {
        let record = lookup(name);
        assert!(!record.explanation.is_empty(), "{name}");
        assert!(!record.fix_suggestion.is_empty(), "{name}");
        assert!(!record.tags.is_empty(), "{name}");
        assert!(!record.emoji.is_empty(), "{name}");
        assert!(!record.tags.contains(&"unknown"), "{name}");
    }
}

#[test]
fn tag_search_is_case_insensitive() {
    let syntax = search_by_tag("syntax");
    assert!(syntax.contains(&"SyntaxError"));
    assert!(syntax.contains(&"IndentationError"));
    assert_eq!(search_by_tag("SYNTAX"), syntax);
    assert!(search_by_tag("no-such-tag").is_empty());
    assert!(lookup("TotallyUnregisteredName").tags.contains(&"unknown"));
}

// ──────────────────── Randomized parsing properties ────────────────────

#[test]
fn last_marker_wins_for_randomized_stacks() {
    let mut seed = 0x00C0_FFEE_u64;
    for _ in 0..2_000 {
        let depth = (lcg_next(&mut seed) % 6) as usize;
        let mut text = String::from("Traceback (most recent call last):\n");
        let mut expected = Vec::with_capacity(depth);
        for i in 0..depth {
            let line = (lcg_next(&mut seed) % 10_000) as u32;
            let file = format!("mod_{i}_{}.py", lcg_next(&mut seed) % 100);
            text.push_str(&format!("  File \"{file}\", line {line}, in f{i}\n    call()\n"));
            expected.push((file, line));
        }
        text.push_str("IndexError: list index out of range");

        let parsed = extract(&text);
        assert_eq!(parsed.class_name, "IndexError");
        assert_eq!(parsed.location_frames.len(), depth);
        match expected.last() {
            Some((file, line)) => {
                assert_eq!(parsed.file_name.as_deref(), Some(file.as_str()));
                assert_eq!(parsed.line_number, Some(*line));
            }
            None => {
                assert_eq!(parsed.file_name, None);
                assert_eq!(parsed.line_number, None);
            }
        }
    }
}

#[test]
fn first_colon_split_for_randomized_messages() {
    let mut seed = 0xDEAD_BEEF_u64;
    let pieces = ["a", "b c", "", "x=1", "'quoted'", " padded "];
    for _ in 0..2_000 {
        let count = 1 + (lcg_next(&mut seed) % 4) as usize;
        let parts: Vec<&str> = (0..count)
            .map(|_| pieces[(lcg_next(&mut seed) % pieces.len() as u64) as usize])
            .collect();
        let message = parts.join(":");
        let parsed = extract(&format!("CustomError: {message}"));
        assert_eq!(parsed.class_name, "CustomError");
        assert_eq!(parsed.message, message.trim());
    }
}
