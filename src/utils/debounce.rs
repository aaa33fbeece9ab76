use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Trailing-edge debounce：每次呼叫都重設計時器，
/// 靜止 `wait` 之後才以最後一次的參數執行。
///
/// 需要在 tokio runtime 中呼叫 [`Debounced::call`]。
pub struct Debounced<A> {
    func: Arc<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

pub fn debounce<A, F>(func: F, wait: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced {
        func: Arc::new(func),
        wait,
        pending: Mutex::new(None),
    }
}

impl<A: Send + 'static> Debounced<A> {
    pub fn call(&self, args: A) {
        let mut pending = self.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let func = Arc::clone(&self.func);
        let wait = self.wait;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            func(args);
        }));
    }

    /// 取消尚未執行的呼叫
    pub fn cancel(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A> Drop for Debounced<A> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}
