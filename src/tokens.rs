use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::decode::DecodedResult;

#[expect(clippy::expect_used, reason = "patterns are compile-time literals")]
static IMAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[IMG:([^\]]+)\]").expect("image marker pattern compiles"));

#[expect(clippy::expect_used, reason = "patterns are compile-time literals")]
static AUDIO_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[AUDIO:([^\]]+)\]").expect("audio marker pattern compiles"));

/// One piece of a decoded result for rich renderers, serialized as
/// `{"type": "...", "content": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Token {
    Emoji(String),
    ErrorType(String),
    OriginalMessage(String),
    Explanation(String),
    Image(String),
    Audio(String),
    FixSuggestion(String),
    LineNumber(String),
    FileName(String),
    Tags(Vec<String>),
}

/// Flattens a result into display order, skipping empty and absent fields.
pub fn tokenize(decoded: &DecodedResult) -> Vec<Token> {
    let mut tokens = vec![
        Token::Emoji(decoded.emoji.clone()),
        Token::ErrorType(decoded.class_name.clone()),
    ];

    if !decoded.message.is_empty() {
        tokens.push(Token::OriginalMessage(decoded.message.clone()));
    }

    if !decoded.explanation.is_empty() {
        tokens.push(Token::Explanation(decoded.explanation.clone()));
        tokens.extend(
            IMAGE_MARKER
                .captures_iter(&decoded.explanation)
                .filter_map(|caps| caps.get(1))
                .map(|m| Token::Image(m.as_str().to_string())),
        );
        tokens.extend(
            AUDIO_MARKER
                .captures_iter(&decoded.explanation)
                .filter_map(|caps| caps.get(1))
                .map(|m| Token::Audio(m.as_str().to_string())),
        );
    }

    if !decoded.fix_suggestion.is_empty() {
        tokens.push(Token::FixSuggestion(decoded.fix_suggestion.clone()));
    }
    if let Some(line) = decoded.line_number {
        tokens.push(Token::LineNumber(line.to_string()));
    }
    if let Some(file) = &decoded.file_name {
        tokens.push(Token::FileName(file.clone()));
    }
    if !decoded.tags.is_empty() {
        tokens.push(Token::Tags(decoded.tags.clone()));
    }

    tokens
}
