use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Short-lived notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>, now: Duration) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            created_at: now,
        }
    }

    pub fn error(message: impl Into<String>, now: Duration) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            created_at: now,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Toasts in arrival order; each one expires `ttl` after it was created
#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: VecDeque::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
    }

    fn is_live(&self, toast: &Toast, now: Duration) -> bool {
        now < toast.created_at + self.ttl
    }

    /// Toasts still on screen at `now`, oldest first
    pub fn visible(&self, now: Duration) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| self.is_live(t, now))
    }

    /// Most recent live toast
    pub fn latest(&self, now: Duration) -> Option<&Toast> {
        self.toasts.iter().rev().find(|t| self.is_live(t, now))
    }

    /// Drop expired toasts, returning how many were removed
    pub fn prune(&mut self, now: Duration) -> usize {
        let before = self.toasts.len();
        let ttl = self.ttl;
        self.toasts.retain(|t| now < t.created_at + ttl);
        before - self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
