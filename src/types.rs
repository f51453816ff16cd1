use serde::{Deserialize, Serialize};

/// Class name reported when there was nothing to decode.
pub const NO_INPUT_CLASS: &str = "InvalidInput";

/// A single source position: the file a frame ran in and its line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

/// One `File "<path>", line <n>` marker found in traceback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub file: String,
    pub line: u32,
    /// The traceback line the marker was found on, trimmed.
    pub raw_text: String,
}

impl Frame {
    pub fn location(&self) -> Location {
        Location {
            file: self.file.clone(),
            line: self.line,
        }
    }
}

/// Everything the parser could pull out of one traceback.
///
/// `file_name` and `line_number` describe the most recent frame only and stay
/// `None` when the text carried no location marker at all. The complete stack,
/// outermost first, is kept in `location_frames`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedError {
    /// Exception class name from the summary line (e.g. `"ValueError"`).
    pub class_name: String,
    /// Summary-line text after the first colon; empty when there was none.
    pub message: String,
    pub line_number: Option<u32>,
    pub file_name: Option<String>,
    pub location_frames: Vec<Frame>,
}

impl ParsedError {
    /// The well-formed result for empty input.
    pub fn no_input() -> Self {
        Self {
            class_name: NO_INPUT_CLASS.to_string(),
            message: String::new(),
            line_number: None,
            file_name: None,
            location_frames: Vec::new(),
        }
    }

    pub fn is_no_input(&self) -> bool {
        self.class_name == NO_INPUT_CLASS
    }
}
