use crate::config::NotificationConfig;
use crate::core::{Notifier, Severity};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

const TOAST_BASE_CLASS: &str = "fixed top-4 right-4";
const TOAST_TRAILING_CLASS: &str = "text-white px-6 py-3 rounded-lg shadow-lg z-50 fade-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub fade_after: Duration,
    pub remove_after: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            fade_after: Duration::from_millis(3000),
            remove_after: Duration::from_millis(300),
        }
    }
}

impl From<&NotificationConfig> for NotificationTiming {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            fade_after: Duration::from_millis(config.fade_after_ms),
            remove_after: Duration::from_millis(config.remove_after_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub class_name: String,
    pub fading: bool,
}

impl Toast {
    fn new(id: u64, message: &str, severity: Severity) -> Self {
        Self {
            id,
            message: message.to_string(),
            severity,
            class_name: format!(
                "{} {} {}",
                TOAST_BASE_CLASS,
                severity.color_class(),
                TOAST_TRAILING_CLASS
            ),
            fading: false,
        }
    }
}

/// 畫面上的提示訊息。
///
/// 每則訊息各自排程：`fade_after` 後開始淡出，再過 `remove_after` 移除。
/// 沒有佇列、上限或去重，多則訊息直接疊加。
#[derive(Clone, Default)]
pub struct ToastBoard {
    toasts: Arc<Mutex<Vec<Toast>>>,
    next_id: Arc<AtomicU64>,
    timing: NotificationTiming,
}

impl ToastBoard {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            timing,
        }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// 目前顯示中的訊息（依加入順序）
    pub fn toasts(&self) -> Vec<Toast> {
        lock(&self.toasts).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.toasts).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn show(&self, message: &str, severity: Severity) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.toasts).push(Toast::new(id, message, severity));

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("⚠️ No async runtime, toast {} will not be dismissed", id);
                return id;
            }
        };

        let toasts = Arc::clone(&self.toasts);
        let timing = self.timing;
        handle.spawn(async move {
            tokio::time::sleep(timing.fade_after).await;
            {
                let mut current = lock(&toasts);
                if let Some(toast) = current.iter_mut().find(|t| t.id == id) {
                    toast.fading = true;
                }
            }

            tokio::time::sleep(timing.remove_after).await;
            lock(&toasts).retain(|t| t.id != id);
        });

        id
    }
}

impl Notifier for ToastBoard {
    fn notify(&self, message: &str, severity: Severity) {
        self.show(message, severity);
    }
}

fn lock(toasts: &Mutex<Vec<Toast>>) -> MutexGuard<'_, Vec<Toast>> {
    toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 只寫日誌的通知器（CLI 使用）
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!(severity = %severity, "🔔 {}", message),
            Severity::Warning => tracing::warn!(severity = %severity, "🔔 {}", message),
            Severity::Success | Severity::Info => {
                tracing::info!(severity = %severity, "🔔 {}", message)
            }
        }
    }
}
