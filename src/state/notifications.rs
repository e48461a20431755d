//! Transient user notifications (toasts)

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual variant of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Sink for transient notifications. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Queue of visible toasts; the newest one is displayed
#[derive(Debug)]
pub struct ToastQueue {
    entries: VecDeque<(Toast, Instant)>,
    ttl: Duration,
}

impl ToastQueue {
    /// How long a toast stays visible
    pub const DEFAULT_TTL: Duration = Duration::from_secs(4);
    /// Older toasts are dropped beyond this many
    const MAX_VISIBLE: usize = 3;

    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            ttl,
        }
    }

    /// The toast to display, if any
    pub fn current(&self) -> Option<&Toast> {
        self.entries.back().map(|(toast, _)| toast)
    }

    /// Drop toasts older than the TTL
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|(_, shown_at)| now.saturating_duration_since(*shown_at) < ttl);
    }

    /// Dismiss the displayed toast
    pub fn dismiss(&mut self) {
        self.entries.pop_back();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_at(&mut self, toast: Toast, now: Instant) {
        self.entries.push_back((toast, now));
        while self.entries.len() > Self::MAX_VISIBLE {
            self.entries.pop_front();
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        tracing::debug!("Toast: {} - {}", toast.title, toast.description);
        self.push_at(toast, Instant::now());
    }
}
