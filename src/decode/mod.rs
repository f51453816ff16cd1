pub mod error_like;
pub mod handler;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::category::ErrorCategory;
use crate::catalog::{self, ExceptionRecord};
use crate::error::Error;
use crate::i18n::{self, Language};
use crate::parser::{self, clean};
use crate::tokens::{self, Token};
use crate::types::{Frame, ParsedError};

pub use error_like::{CapturedError, ErrorLike};

/// Caller-supplied knobs for one decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Adds `translated_explanation` when not English.
    pub language: Language,
    /// Adds the display token stream to the result.
    pub include_tokens: bool,
}

/// Failures that are reported as data instead of decoded tracebacks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
pub enum FailureKind {
    /// Missing, blank or wrong-shape input.
    InvalidInput,
    FileNotFound,
    /// Any other I/O problem, including non-UTF-8 content.
    ReadFailure,
}

impl FailureKind {
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Self::InvalidInput => &["invalid-input"],
            Self::FileNotFound => &["file", "not-found"],
            Self::ReadFailure => &["file", "read-error"],
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::InvalidInput => "❓",
            Self::FileNotFound | Self::ReadFailure => "📁",
        }
    }
}

/// A parsed error merged with its catalog explanation.
///
/// `success` is false for everything this crate produces: a decoded fault and
/// an input failure are both unsuccessful outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedResult {
    pub class_name: String,
    pub message: String,
    pub explanation: String,
    pub fix_suggestion: String,
    pub line_number: Option<u32>,
    pub file_name: Option<String>,
    pub location_frames: Vec<Frame>,
    pub tags: Vec<String>,
    pub emoji: String,
    pub category: ErrorCategory,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
    /// Set only by the failure constructors, never from a parsed class name.
    #[serde(skip)]
    failure: Option<FailureKind>,
}

impl DecodedResult {
    fn from_parsed(
        parsed: ParsedError,
        record: &ExceptionRecord,
        options: &DecodeOptions,
    ) -> Self {
        let category = ErrorCategory::of(&parsed.class_name);
        Self {
            class_name: parsed.class_name,
            message: parsed.message,
            explanation: record.explanation.to_string(),
            fix_suggestion: record.fix_suggestion.to_string(),
            line_number: parsed.line_number,
            file_name: parsed.file_name,
            location_frames: parsed.location_frames,
            tags: record.tags.iter().map(|t| (*t).to_string()).collect(),
            emoji: record.emoji.to_string(),
            category,
            success: false,
            translated_explanation: None,
            tokens: None,
            failure: None,
        }
        .finish(options)
    }

    fn failure(
        kind: FailureKind,
        message: String,
        explanation: String,
        fix_suggestion: String,
    ) -> Self {
        Self {
            class_name: kind.to_string(),
            message,
            explanation,
            fix_suggestion,
            line_number: None,
            file_name: None,
            location_frames: Vec::new(),
            tags: kind.tags().iter().map(|t| (*t).to_string()).collect(),
            emoji: kind.emoji().to_string(),
            category: ErrorCategory::Other,
            success: false,
            translated_explanation: None,
            tokens: None,
            failure: Some(kind),
        }
    }

    fn invalid_input(message: impl Into<String>) -> Self {
        Self::failure(
            FailureKind::InvalidInput,
            message.into(),
            "No error information was provided to decode.".to_string(),
            "Pass a traceback string or an error object that reports its class name".to_string(),
        )
    }

    /// Converts an internal failure into the record callers receive.
    pub fn from_failure(err: &Error) -> Self {
        match err {
            Error::FileNotFound { path } => Self::failure(
                FailureKind::FileNotFound,
                format!("File not found: {}", path.display()),
                "The traceback file you specified doesn't exist.".to_string(),
                format!("Check if the file path '{}' is correct", path.display()),
            ),
            Error::Read { source, .. } => Self::failure(
                FailureKind::ReadFailure,
                source.to_string(),
                format!("Could not read the file: {source}"),
                "Check file permissions and format".to_string(),
            ),
            Error::InvalidInput { reason } => Self::invalid_input(reason.clone()),
            Error::Json(e) => Self::invalid_input(format!("malformed error description: {e}")),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure
    }

    fn finish(mut self, options: &DecodeOptions) -> Self {
        if options.language != Language::En {
            self.translated_explanation = Some(i18n::translate_explanation(
                &self.explanation,
                options.language,
            ));
        }
        if options.include_tokens {
            self.tokens = Some(tokens::tokenize(&self));
        }
        self
    }
}

/// Decodes raw traceback text. `None`, empty and blank input are reported as
/// [`FailureKind::InvalidInput`].
pub fn decode_text<'a>(raw: impl Into<Option<&'a str>>) -> DecodedResult {
    decode_text_with(raw, &DecodeOptions::default())
}

pub fn decode_text_with<'a>(
    raw: impl Into<Option<&'a str>>,
    options: &DecodeOptions,
) -> DecodedResult {
    let text = raw.into().map(clean::strip_ansi_codes);
    let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
        debug!("no traceback text to decode");
        return DecodedResult::invalid_input("No traceback provided").finish(options);
    };

    let parsed = parser::extract(&text);
    let record = catalog::find(&parsed.class_name).unwrap_or_else(|| {
        debug!(class_name = %parsed.class_name, "class not in catalog, using fallback");
        &catalog::FALLBACK
    });
    DecodedResult::from_parsed(parsed, record, options)
}

/// Decodes an error value directly, using its innermost location.
pub fn decode_error_object(err: &dyn ErrorLike) -> DecodedResult {
    decode_error_object_with(err, &DecodeOptions::default())
}

pub fn decode_error_object_with(err: &dyn ErrorLike, options: &DecodeOptions) -> DecodedResult {
    let class_name = err.class_name().trim();
    if class_name.is_empty() {
        debug!("error object has no class name");
        return DecodedResult::invalid_input("Not a valid exception object").finish(options);
    }

    let location = err.innermost_location();
    let location_frames = location
        .iter()
        .map(|loc| Frame {
            file: loc.file.clone(),
            line: loc.line,
            raw_text: format!("File \"{}\", line {}", loc.file, loc.line),
        })
        .collect();
    let (file_name, line_number) = match location {
        Some(loc) => (Some(loc.file), Some(loc.line)),
        None => (None, None),
    };

    let parsed = ParsedError {
        class_name: class_name.to_string(),
        message: err.message(),
        line_number,
        file_name,
        location_frames,
    };
    DecodedResult::from_parsed(parsed, catalog::lookup(class_name), options)
}

/// Reads a saved traceback (e.g. a log file) and decodes it. I/O problems come
/// back as `FileNotFound` / `ReadFailure` records, never as `Err`.
pub fn decode_file(path: impl AsRef<Path>) -> DecodedResult {
    decode_file_with(path, &DecodeOptions::default())
}

pub fn decode_file_with(path: impl AsRef<Path>, options: &DecodeOptions) -> DecodedResult {
    match read_traceback(path.as_ref()) {
        Ok(text) => decode_text_with(text.as_str(), options),
        Err(err) => {
            warn!(error = %err, "could not read traceback file");
            DecodedResult::from_failure(&err).finish(options)
        }
    }
}

pub fn read_traceback(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::from_io(path, source))
}

/// `"<emoji> <explanation>"`, the quick one-line answer.
pub fn explain(decoded: &DecodedResult) -> String {
    format!("{} {}", decoded.emoji, decoded.explanation)
}
