use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// The "new message" badge. Expires a fixed window after it was raised;
/// raising it again while it is showing does not extend the window.
#[derive(Debug, Clone)]
pub struct NewMessageSignal {
    window: Duration,
    raised_at: Option<Instant>,
}

impl NewMessageSignal {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            raised_at: None,
        }
    }

    pub fn raise(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.raised_at = Some(now);
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.raised_at
            .is_some_and(|raised_at| now.saturating_duration_since(raised_at) < self.window)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    shown_at: Instant,
}

/// Transient notifications, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>, now: Instant) {
        self.items.push(Toast {
            kind,
            text: text.into(),
            shown_at: now,
        });
    }

    /// Drop expired toasts and return the ones still visible.
    pub fn visible(&mut self, now: Instant) -> &[Toast] {
        self.items
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < TOAST_LIFETIME);
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(3);

    #[test]
    fn signal_starts_inactive() {
        let signal = NewMessageSignal::new(WINDOW);
        assert!(!signal.is_active(Instant::now()));
    }

    #[test]
    fn signal_clears_after_window() {
        let start = Instant::now();
        let mut signal = NewMessageSignal::new(WINDOW);
        signal.raise(start);

        assert!(signal.is_active(start));
        assert!(signal.is_active(start + Duration::from_millis(2_999)));
        assert!(!signal.is_active(start + WINDOW));
    }

    #[test]
    fn raising_again_does_not_extend_window() {
        let start = Instant::now();
        let mut signal = NewMessageSignal::new(WINDOW);
        signal.raise(start);
        signal.raise(start + Duration::from_secs(2));

        assert!(!signal.is_active(start + WINDOW));
    }

    #[test]
    fn signal_can_be_raised_after_expiry() {
        let start = Instant::now();
        let mut signal = NewMessageSignal::new(WINDOW);
        signal.raise(start);

        let later = start + Duration::from_secs(5);
        signal.raise(later);
        assert!(signal.is_active(later + Duration::from_secs(2)));
    }

    #[test]
    fn toasts_expire() {
        let start = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push(ToastKind::Info, "Name saved", start);
        toasts.push(ToastKind::Error, "Send failed", start + Duration::from_secs(2));

        assert_eq!(toasts.visible(start + Duration::from_secs(1)).len(), 2);
        let remaining = toasts.visible(start + TOAST_LIFETIME);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind, ToastKind::Error);

        assert!(toasts.visible(start + Duration::from_secs(10)).is_empty());
    }
}
