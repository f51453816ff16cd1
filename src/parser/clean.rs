use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("ansi pattern compiles")
});

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static EXCEPTION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-zA-Z]*(?:Error|Exception|Warning))\b")
        .expect("exception name pattern compiles")
});

/// Removes terminal color and cursor escape sequences.
pub fn strip_ansi_codes(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Strips ANSI codes, normalizes line endings to `\n`, collapses runs of blank
/// lines to a single one and trims the ends.
pub fn clean_traceback_text(text: &str) -> String {
    let stripped = strip_ansi_codes(text);
    let normalized = stripped.replace("\r\n", "\n").replace('\r', "\n");

    let mut kept: Vec<&str> = Vec::new();
    let mut prev_blank = false;
    for line in normalized.split('\n') {
        let blank = line.trim().is_empty();
        if blank && prev_blank {
            continue;
        }
        kept.push(line);
        prev_blank = blank;
    }

    kept.join("\n").trim().to_string()
}

/// Last exception-looking word (`...Error`, `...Exception`, `...Warning`) in
/// arbitrary text such as a log line.
pub fn extract_exception_name(text: &str) -> Option<String> {
    EXCEPTION_NAME
        .captures_iter(text)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Shortens `message` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate_message(message: &str, max_chars: usize) -> Cow<'_, str> {
    if message.chars().count() <= max_chars {
        return Cow::Borrowed(message);
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = message.chars().take(keep).collect();
    out.push_str("...");
    Cow::Owned(out)
}
