use std::io;

use serde::{Deserialize, Serialize};

use crate::types::Location;

/// What the decoder needs from a host error value.
///
/// Implementors walk their own cause chain: `innermost_location` must report
/// the position of the deepest cause that has one, which is where the fault
/// was actually raised.
pub trait ErrorLike {
    fn class_name(&self) -> &str;
    fn message(&self) -> String;
    fn innermost_location(&self) -> Option<Location>;
}

/// An error captured from a runtime, with its stack and the error it was raised from.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{class_name}: {message}")]
pub struct CapturedError {
    pub class_name: String,
    #[serde(default)]
    pub message: String,
    /// Stack positions, outermost first.
    #[serde(default)]
    pub frames: Vec<Location>,
    #[serde(default)]
    #[source]
    pub cause: Option<Box<CapturedError>>,
}

impl CapturedError {
    pub fn new(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: message.into(),
            frames: Vec::new(),
            cause: None,
        }
    }

    pub fn with_frame(mut self, file: impl Into<String>, line: u32) -> Self {
        self.frames.push(Location {
            file: file.into(),
            line,
        });
        self
    }

    pub fn caused_by(mut self, cause: CapturedError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

impl ErrorLike for CapturedError {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn innermost_location(&self) -> Option<Location> {
        self.cause
            .as_deref()
            .and_then(|cause| cause.innermost_location())
            .or_else(|| self.frames.last().cloned())
    }
}

impl ErrorLike for io::Error {
    fn class_name(&self) -> &str {
        io_error_class(self.kind())
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn innermost_location(&self) -> Option<Location> {
        None
    }
}

/// Runtime class name for an OS-level failure kind.
pub fn io_error_class(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::NotFound => "FileNotFoundError",
        io::ErrorKind::PermissionDenied => "PermissionError",
        io::ErrorKind::AlreadyExists => "FileExistsError",
        io::ErrorKind::IsADirectory => "IsADirectoryError",
        io::ErrorKind::NotADirectory => "NotADirectoryError",
        io::ErrorKind::ConnectionRefused => "ConnectionRefusedError",
        io::ErrorKind::ConnectionReset => "ConnectionResetError",
        io::ErrorKind::ConnectionAborted => "ConnectionAbortedError",
        io::ErrorKind::BrokenPipe => "BrokenPipeError",
        io::ErrorKind::TimedOut => "TimeoutError",
        io::ErrorKind::Interrupted => "InterruptedError",
        io::ErrorKind::WouldBlock => "BlockingIOError",
        io::ErrorKind::UnexpectedEof => "EOFError",
        io::ErrorKind::InvalidData => "UnicodeDecodeError",
        io::ErrorKind::OutOfMemory => "MemoryError",
        _ => "OSError",
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn innermost_location_follows_the_cause_chain() {
        let err = CapturedError::new("RuntimeError", "wrapper")
            .with_frame("app.py", 3)
            .caused_by(
                CapturedError::new("KeyError", "'id'")
                    .with_frame("app.py", 10)
                    .with_frame("store.py", 42),
            );
        assert_eq!(
            err.innermost_location(),
            Some(Location {
                file: "store.py".to_string(),
                line: 42
            })
        );
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "RuntimeError: wrapper");
    }

    #[test]
    fn cause_without_frames_falls_back_outward() {
        let err = CapturedError::new("ValueError", "outer")
            .with_frame("main.py", 8)
            .caused_by(CapturedError::new("OSError", "inner"));
        assert_eq!(err.innermost_location().map(|l| l.line), Some(8));
        assert_eq!(CapturedError::new("ValueError", "x").innermost_location(), None);
    }

    #[test]
    fn io_errors_map_to_os_error_family() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(ErrorLike::class_name(&err), "FileNotFoundError");
        assert_eq!(io_error_class(io::ErrorKind::PermissionDenied), "PermissionError");
        assert_eq!(io_error_class(io::ErrorKind::Other), "OSError");
        assert_eq!(err.innermost_location(), None);
    }

    #[test]
    fn captured_error_deserializes_with_defaults() {
        let err: CapturedError =
            serde_json::from_value(serde_json::json!({ "class_name": "TypeError" })).unwrap();
        assert_eq!(err, CapturedError::new("TypeError", ""));
    }
}
