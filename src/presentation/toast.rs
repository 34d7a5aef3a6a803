// Toast notifications with fixed-delay auto-dismiss
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone)]
pub struct ToastTray {
    toasts: Arc<Mutex<Vec<Toast>>>,
    next_id: Arc<AtomicU64>,
    dismiss_after: Duration,
}

impl ToastTray {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            dismiss_after,
        }
    }

    /// Show a toast and arm its dismiss timer. The timer is fire-and-forget:
    /// there is no cancellation once armed.
    pub fn show(&self, message: &str, kind: ToastKind) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.toasts
            .lock()
            .expect("toast list lock poisoned")
            .push(Toast {
                id,
                kind,
                message: message.to_string(),
            });

        let toasts = Arc::clone(&self.toasts);
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            toasts
                .lock()
                .expect("toast list lock poisoned")
                .retain(|t| t.id != id);
        });

        id
    }

    pub fn active(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .expect("toast list lock poisoned")
            .clone()
    }
}
