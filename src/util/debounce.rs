// Trailing-edge debouncer for search boxes and the like
use std::time::Duration;
use tokio::task::JoinHandle;

/// Each call aborts the previous pending invocation, so only the last call
/// within the window runs, after the window elapses.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn test_three_calls_within_window_run_once_with_last_args() {
        let count = Arc::new(AtomicUsize::new(0));
        let last_arg = Arc::new(Mutex::new(String::new()));
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        for arg in ["ph", "phy", "physics"] {
            let count = Arc::clone(&count);
            let last_arg = Arc::clone(&last_arg);
            debouncer.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
                *last_arg.lock().unwrap() = arg.to_string();
            });
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(last_arg.lock().unwrap().as_str(), "physics");
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_outside_window_each_run() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(50));

        for _ in 0..2 {
            let count = Arc::clone(&count);
            debouncer.call(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(80)).await;
        }

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
