pub mod clean;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::{Frame, Location, ParsedError};

/// The one class whose location marker gets a second, anchored scan.
pub const SYNTAX_ERROR_CLASS: &str = "SyntaxError";

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static FILE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"File "([^"]+)", line ([0-9]+)"#).expect("file/line pattern compiles")
});

/// Parses free-form traceback text into its class name, message and frames.
///
/// The summary is the last non-empty line: text before its first colon is the
/// class name, everything after is the message, verbatim apart from trimming.
/// Every `File "<path>", line <n>` marker becomes a frame; the last one wins
/// for `file_name` / `line_number`. Empty or blank text yields
/// [`ParsedError::no_input`] rather than an error.
pub fn extract(text: &str) -> ParsedError {
    let lines: Vec<&str> = text.lines().collect();

    let Some(summary) = lines
        .iter()
        .rev()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
    else {
        debug!("traceback text is empty");
        return ParsedError::no_input();
    };

    let (class_name, message) = split_summary(summary);
    let location_frames: Vec<Frame> = lines.iter().filter_map(|line| frame_on(line)).collect();
    let mut location = location_frames.last().map(Frame::location);

    if class_name == SYNTAX_ERROR_CLASS
        && let Some(anchored) = last_anchored_location(&lines)
    {
        debug!(file = %anchored.file, line = anchored.line, "syntax error location override");
        location = Some(anchored);
    }

    debug!(
        class_name,
        frames = location_frames.len(),
        has_location = location.is_some(),
        "parsed traceback"
    );

    let (file_name, line_number) = match location {
        Some(Location { file, line }) => (Some(file), Some(line)),
        None => (None, None),
    };

    ParsedError {
        class_name: class_name.to_string(),
        message: message.to_string(),
        line_number,
        file_name,
        location_frames,
    }
}

/// Splits `"Class: message"` on the first colon only.
pub fn split_summary(summary: &str) -> (&str, &str) {
    match summary.split_once(':') {
        Some((class_name, message)) => (class_name.trim(), message.trim()),
        None => (summary.trim(), ""),
    }
}

fn frame_on(line: &str) -> Option<Frame> {
    let caps = FILE_LINE.captures(line)?;
    let file = caps.get(1)?.as_str();
    let digits = caps.get(2)?.as_str();
    let Ok(line_number) = digits.parse::<u32>() else {
        debug!(digits, "line number out of range, skipping frame");
        return None;
    };
    Some(Frame {
        file: file.to_string(),
        line: line_number,
        raw_text: line.trim().to_string(),
    })
}

/// Syntax errors print their marker on a line of its own, so only lines that
/// start with `File "` count here.
fn last_anchored_location(lines: &[&str]) -> Option<Location> {
    lines
        .iter()
        .rev()
        .filter(|line| line.trim_start().starts_with("File \""))
        .find_map(|line| frame_on(line))
        .map(|frame| frame.location())
}
