#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod catalog;
pub mod decode;
pub mod error;
pub mod i18n;
pub mod parser;
pub mod tokens;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use catalog::category::{ErrorCategory, is_syntax_error};
pub use catalog::{ExceptionRecord, all_tags, list_all, lookup, search_by_tag};
pub use decode::handler::{
    ReportHandler, has_handler, install_default_handler, report, set_handler,
    uninstall_default_handler,
};
pub use decode::{
    CapturedError, DecodeOptions, DecodedResult, ErrorLike, FailureKind, decode_error_object,
    decode_error_object_with, decode_file, decode_file_with, decode_text, decode_text_with,
    explain,
};
pub use error::Error;
pub use i18n::{Language, translate_explanation};
pub use parser::extract;
pub use tokens::{Token, tokenize};
pub use types::{Frame, Location, NO_INPUT_CLASS, ParsedError};
