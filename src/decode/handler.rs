use std::sync::{Arc, PoisonError, RwLock};

use tracing::error;

use super::{DecodedResult, ErrorLike, decode_error_object};

pub type ReportHandler = Arc<dyn Fn(&DecodedResult) + Send + Sync>;

// Empty until a host opts in with `install_default_handler` or `set_handler`.
static HANDLER: RwLock<Option<ReportHandler>> = RwLock::new(None);

/// Installs the tracing-backed default, replacing any current handler.
pub fn install_default_handler() {
    set_handler(Arc::new(log_report));
}

/// Stores `handler` and returns the one it replaced.
pub fn set_handler(handler: ReportHandler) -> Option<ReportHandler> {
    HANDLER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(handler)
}

/// Empties the slot. Returns whether a handler was installed.
pub fn uninstall_default_handler() -> bool {
    HANDLER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .is_some()
}

pub fn has_handler() -> bool {
    HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Decodes `err` and hands the result to the installed handler, if any.
pub fn report(err: &dyn ErrorLike) -> DecodedResult {
    let decoded = decode_error_object(err);
    // Clone out so a handler may swap the slot without deadlocking.
    let handler = HANDLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    if let Some(handler) = handler {
        handler(&decoded);
    }
    decoded
}

fn log_report(decoded: &DecodedResult) {
    error!(
        class_name = %decoded.class_name,
        message = %decoded.message,
        file = decoded.file_name.as_deref(),
        line = decoded.line_number,
        fix = %decoded.fix_suggestion,
        "{} {}",
        decoded.emoji,
        decoded.explanation
    );
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::decode::CapturedError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // The slot is process-wide; tests that touch it take turns.
    static SLOT_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn nothing_is_installed_until_asked() {
        let _guard = SLOT_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        uninstall_default_handler();
        assert!(!has_handler());
        let decoded = report(&CapturedError::new("ValueError", "bad"));
        assert_eq!(decoded.class_name, "ValueError");
    }

    #[test]
    fn install_and_uninstall_default() {
        let _guard = SLOT_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        install_default_handler();
        assert!(has_handler());
        report(&CapturedError::new("KeyError", "'k'"));
        assert!(uninstall_default_handler());
        assert!(!uninstall_default_handler());
        assert!(!has_handler());
    }

    #[test]
    fn custom_handler_receives_decoded_result() {
        let _guard = SLOT_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        let (seen_in, calls_in) = (Arc::clone(&seen), Arc::clone(&calls));
        set_handler(Arc::new(move |decoded: &DecodedResult| {
            calls_in.fetch_add(1, Ordering::SeqCst);
            seen_in.lock().unwrap().push(decoded.class_name.clone());
        }));

        let err = CapturedError::new("IndexError", "list index out of range").with_frame("a.py", 4);
        let decoded = report(&err);

        assert_eq!(decoded.line_number, Some(4));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec!["IndexError".to_string()]);
        assert!(uninstall_default_handler());
    }

    #[test]
    fn set_handler_returns_previous() {
        let _guard = SLOT_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        uninstall_default_handler();
        assert!(set_handler(Arc::new(|_: &DecodedResult| {})).is_none());
        assert!(set_handler(Arc::new(|_: &DecodedResult| {})).is_some());
        assert!(uninstall_default_handler());
    }
}
