//! Transient user notifications for the transaction pipeline.
//!
//! A notifier renders toasts somewhere (terminal log, UI bridge) and hands back a
//! handle so an indefinite loading toast can be closed once the outcome is known.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

pub const SUCCESS_DURATION: Duration = Duration::from_secs(5);
pub const ERROR_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Loading,
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    /// `None` stays open until closed
    pub duration: Option<Duration>,
    pub explorer_link: Option<String>,
}

impl Toast {
    pub fn loading(title: &str, message: &str) -> Self {
        Self {
            kind: ToastKind::Loading,
            title: title.to_string(),
            message: Some(message.to_string()),
            duration: None,
            explorer_link: None,
        }
    }

    pub fn success(title: &str, message: Option<String>, explorer_link: Option<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.to_string(),
            message,
            duration: Some(SUCCESS_DURATION),
            explorer_link,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.to_string(),
            message: Some(message.to_string()),
            duration: Some(ERROR_DURATION),
            explorer_link: None,
        }
    }

    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    /// Title, message and link on one line
    pub fn render(&self) -> String {
        let mut line = self.title.clone();
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            line.push_str(": ");
            line.push_str(message);
        }
        if let Some(link) = &self.explorer_link {
            line.push_str(" (");
            line.push_str(link);
            line.push(')');
        }
        line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastHandle(pub Uuid);

impl ToastHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Notifier: Send + Sync {
    fn toast(&self, toast: Toast) -> ToastHandle;

    fn close(&self, handle: ToastHandle);
}

/// Renders toasts as log events
#[derive(Debug, Default)]
pub struct TracingNotifier {
    open: Mutex<HashSet<ToastHandle>>,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts shown without a duration and not yet closed
    pub fn open_count(&self) -> usize {
        self.open.lock().map(|open| open.len()).unwrap_or(0)
    }
}

impl Notifier for TracingNotifier {
    fn toast(&self, toast: Toast) -> ToastHandle {
        let handle = ToastHandle::new();
        let message = toast.message.as_deref().unwrap_or("");
        let link = toast.explorer_link.as_deref().unwrap_or("");

        match toast.kind {
            ToastKind::Error => warn!(title = %toast.title, link, "{}", message),
            kind => info!(?kind, title = %toast.title, link, "{}", message),
        }

        if toast.duration.is_none() {
            if let Ok(mut open) = self.open.lock() {
                open.insert(handle);
            }
        }
        handle
    }

    fn close(&self, handle: ToastHandle) {
        if let Ok(mut open) = self.open.lock() {
            open.remove(&handle);
        }
    }
}
