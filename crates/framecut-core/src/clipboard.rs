//! Copy capability.
//!
//! A [`Clipboard`] attempts to place text somewhere the user can paste it
//! from. [`FallbackClipboard`] pairs two back-ends and only tries the second
//! when the first fails; callers see a single merged [`CopyOutcome`].

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard back-end is available")]
    Unavailable,

    #[error("failed to run `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Exit { command: String, status: String },

    #[error("copy rejected: {0}")]
    Rejected(String),

    #[error("{primary}; fallback: {fallback}")]
    Exhausted {
        primary: Box<ClipboardError>,
        fallback: Box<ClipboardError>,
    },
}

impl ClipboardError {
    pub fn io(command: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            command: command.into(),
            source,
        }
    }
}

/// A way to copy text.
pub trait Clipboard {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn attempt_copy(&self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attempt_copy(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).attempt_copy(text)
    }
}

impl<C: Clipboard + ?Sized> Clipboard for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attempt_copy(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).attempt_copy(text)
    }
}

/// Try `primary`, then `fallback` only if `primary` fails.
#[derive(Debug, Clone)]
pub struct FallbackClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Clipboard, F: Clipboard> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Clipboard, F: Clipboard> Clipboard for FallbackClipboard<P, F> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn attempt_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let primary = match self.primary.attempt_copy(text) {
            Ok(()) => return Ok(()),
            Err(error) => error,
        };
        warn!(
            backend = self.primary.name(),
            fallback = self.fallback.name(),
            error = %primary,
            "clipboard back-end failed, trying fallback"
        );
        self.fallback
            .attempt_copy(text)
            .map_err(|fallback| ClipboardError::Exhausted {
                primary: Box::new(primary),
                fallback: Box::new(fallback),
            })
    }
}

/// Merged result of a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// Status text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Self::Copied => "Copied!",
            Self::Failed => "Copy failed.",
        }
    }
}

/// Copy `text`, logging any failure. Never fails outright.
pub fn copy_text<C: Clipboard + ?Sized>(clipboard: &C, text: &str) -> CopyOutcome {
    match clipboard.attempt_copy(text) {
        Ok(()) => {
            debug!(backend = clipboard.name(), bytes = text.len(), "copied export text");
            CopyOutcome::Copied
        }
        Err(error) => {
            warn!(backend = clipboard.name(), %error, "copy failed");
            CopyOutcome::Failed
        }
    }
}

/// Run [`copy_text`] on a worker thread so edits keep flowing while a slow
/// back-end works. The outcome arrives on the returned channel.
pub fn copy_in_background<C>(clipboard: Arc<C>, text: String) -> Receiver<CopyOutcome>
where
    C: Clipboard + Send + Sync + ?Sized + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone if the session ended first.
        let _ = sender.send(copy_text(clipboard.as_ref(), &text));
    });
    receiver
}

/// In-memory clipboard, optionally configured to fail.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every copy.
    pub fn failing() -> Self {
        Self {
            contents: Mutex::new(None),
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    fn attempt_copy(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Rejected("memory clipboard disabled".to_string()));
        }
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Rejected("clipboard lock poisoned".to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_success_skips_fallback() {
        let clipboard = FallbackClipboard::new(MemoryClipboard::new(), MemoryClipboard::new());
        assert_eq!(copy_text(&clipboard, "cut list"), CopyOutcome::Copied);
        assert_eq!(clipboard.primary.contents().as_deref(), Some("cut list"));
        assert_eq!(clipboard.fallback.contents(), None);
    }

    #[test]
    fn fallback_runs_after_primary_failure() {
        let clipboard = FallbackClipboard::new(MemoryClipboard::failing(), MemoryClipboard::new());
        assert_eq!(copy_text(&clipboard, "cut list"), CopyOutcome::Copied);
        assert_eq!(clipboard.fallback.contents().as_deref(), Some("cut list"));
    }

    #[test]
    fn both_failing_reports_failure() {
        let clipboard =
            FallbackClipboard::new(MemoryClipboard::failing(), MemoryClipboard::failing());
        let error = clipboard.attempt_copy("x").unwrap_err();
        assert!(matches!(error, ClipboardError::Exhausted { .. }));
        assert_eq!(copy_text(&clipboard, "x"), CopyOutcome::Failed);
    }

    #[test]
    fn background_copy_delivers_outcome() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let receiver = copy_in_background(Arc::clone(&clipboard), "async".to_string());
        assert_eq!(receiver.recv().unwrap(), CopyOutcome::Copied);
        assert_eq!(clipboard.contents().as_deref(), Some("async"));
    }
}
