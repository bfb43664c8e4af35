use std::collections::VecDeque;
use std::time::{Duration, Instant};

const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
}

/// Short-lived notifications, oldest first.
#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    duration: Duration,
    max_visible: usize,
}

impl Toasts {
    pub fn new(duration: Duration, max_visible: usize) -> Self {
        Self {
            items: VecDeque::new(),
            duration,
            max_visible: max_visible.max(1),
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.items.push_back(Toast {
            kind,
            message: message.into(),
            created: now,
        });
        while self.items.len() > self.max_visible {
            self.items.pop_front();
        }
    }

    /// Drop every toast whose lifetime has passed.
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created) < duration);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Opacity in `0.0..=1.0`, fading during the last moments of the toast's life.
    pub fn opacity(&self, toast: &Toast, now: Instant) -> f32 {
        let age = now.saturating_duration_since(toast.created);
        let remaining = self.duration.saturating_sub(age);
        if remaining >= FADE_OUT {
            1.0
        } else {
            (remaining.as_secs_f32() / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}
