//! User-facing notifications
//!
//! The pipeline reports transient outcomes (send failed, trade logged)
//! through the `Notifier` trait so the state machine stays independent of
//! the terminal. The interactive session uses `TerminalNotifier`; tests
//! use `MemoryNotifier` to assert on what was surfaced.

use colored::Colorize;
use std::sync::Mutex;

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Sink for transient notifications
pub trait Notifier: Send + Sync {
    /// Surface a notification to the user
    fn notify(&self, notice: Notice);
}

/// Prints notifications to the terminal with colors
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Info => println!("{}", notice.text.cyan()),
            NoticeKind::Success => println!("{}", notice.text.green()),
            NoticeKind::Error => eprintln!("{}", notice.text.red()),
        }
    }
}

/// Records notifications for assertions in tests
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices surfaced so far, in order
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notifier lock poisoned")
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::info("a").kind, NoticeKind::Info);
        assert_eq!(Notice::success("b").kind, NoticeKind::Success);
        assert_eq!(Notice::error("c").kind, NoticeKind::Error);
    }

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notice::error("first"));
        notifier.notify(Notice::success("second"));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].text, "first");
        assert_eq!(notices[1].kind, NoticeKind::Success);
    }

    #[test]
    fn test_memory_notifier_starts_empty() {
        let notifier = MemoryNotifier::new();
        assert!(notifier.notices().is_empty());
    }
}
