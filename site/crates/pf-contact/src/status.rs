use crate::ContactFormView;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS modifier used by the page (`form-message success`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient feedback shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success<S: Into<String>>(text: S) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// Owns the status area's auto-hide timer.
///
/// Every `show` cancels the previously scheduled hide and tags its own timer
/// with a generation number, so a timer only ever hides the message it was
/// scheduled for. Must be used from within a tokio runtime.
pub struct StatusDisplay<V: ContactFormView> {
    view: Arc<V>,
    ttl: Duration,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<V: ContactFormView> StatusDisplay<V> {
    pub fn new(view: Arc<V>, ttl: Duration) -> Self {
        Self {
            view,
            ttl,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Render a message and schedule it to hide after the ttl.
    pub fn show(&self, message: &StatusMessage) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.show_status(message);

        let view = Arc::clone(&self.view);
        let current = Arc::clone(&self.generation);
        let ttl = self.ttl;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if current.load(Ordering::SeqCst) == generation {
                debug!("Auto-hiding status message #{}", generation);
                view.hide_status();
            }
        }));
    }

    /// Hide the current message now and drop its pending timer.
    pub fn hide(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        self.generation.fetch_add(1, Ordering::SeqCst);
        self.view.hide_status();
    }
}

impl<V: ContactFormView> Drop for StatusDisplay<V> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
