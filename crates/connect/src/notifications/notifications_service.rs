//! Notification store with cancellable auto-dismiss timers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;
use uuid::Uuid;

use foliotrack_core::constants::DEFAULT_NOTIFICATION_DURATION_MS;
use foliotrack_core::events::{StoreEvent, StoreEventSink};

use super::notifications_model::{Notification, NotificationLevel};

#[derive(Default)]
struct NotificationsInner {
    notifications: Vec<Notification>,
    timers: HashMap<String, AbortHandle>,
}

/// Store for transient banners.
///
/// Each pushed notification with a non-zero duration gets a fire-and-forget
/// dismiss timer; explicit dismissal aborts the timer so a re-used id can
/// never be dismissed twice. Must be used within a Tokio runtime.
pub struct NotificationStore {
    events: Arc<dyn StoreEventSink>,
    inner: Arc<Mutex<NotificationsInner>>,
}

impl NotificationStore {
    pub fn new(events: Arc<dyn StoreEventSink>) -> Self {
        Self {
            events,
            inner: Arc::new(Mutex::new(NotificationsInner::default())),
        }
    }

    /// Pushes a notification and returns its id.
    pub fn push(
        &self,
        level: NotificationLevel,
        message: impl Into<String>,
        title: Option<String>,
        duration: Duration,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let notification = Notification {
            id: id.clone(),
            title,
            message: message.into(),
            level,
            duration_ms: duration.as_millis() as u64,
        };

        {
            let mut inner = self.inner.lock().unwrap();
            inner.notifications.push(notification);

            if !duration.is_zero() {
                let inner_for_timer = Arc::clone(&self.inner);
                let events_for_timer = Arc::clone(&self.events);
                let timer_id = id.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(duration).await;
                    Self::remove(&inner_for_timer, events_for_timer.as_ref(), &timer_id);
                });
                inner.timers.insert(id.clone(), handle.abort_handle());
            }
        }

        self.events
            .emit(StoreEvent::NotificationPushed { id: id.clone() });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> String {
        self.push(NotificationLevel::Success, message, None, default_duration())
    }

    pub fn error(&self, message: impl Into<String>) -> String {
        self.push(NotificationLevel::Error, message, None, default_duration())
    }

    pub fn warning(&self, message: impl Into<String>) -> String {
        self.push(NotificationLevel::Warning, message, None, default_duration())
    }

    pub fn info(&self, message: impl Into<String>) -> String {
        self.push(NotificationLevel::Info, message, None, default_duration())
    }

    /// Dismisses a notification, cancelling its timer.
    pub fn dismiss(&self, id: &str) {
        let removed = {
            let mut inner = self.inner.lock().unwrap();
            if let Some(handle) = inner.timers.remove(id) {
                handle.abort();
            }
            let before = inner.notifications.len();
            inner.notifications.retain(|n| n.id != id);
            inner.notifications.len() != before
        };
        if removed {
            self.events.emit(StoreEvent::NotificationDismissed {
                id: id.to_string(),
            });
        }
    }

    /// Removes every notification and cancels all timers.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        for (_, handle) in inner.timers.drain() {
            handle.abort();
        }
        inner.notifications.clear();
    }

    /// Returns a copy of the visible notifications, oldest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().notifications.clone()
    }

    /// Timer-side removal; never aborts (the timer is already finishing).
    fn remove(inner: &Mutex<NotificationsInner>, events: &dyn StoreEventSink, id: &str) {
        let removed = {
            let mut inner = inner.lock().unwrap();
            inner.timers.remove(id);
            let before = inner.notifications.len();
            inner.notifications.retain(|n| n.id != id);
            inner.notifications.len() != before
        };
        if removed {
            events.emit(StoreEvent::NotificationDismissed { id: id.to_string() });
        }
    }
}

fn default_duration() -> Duration {
    Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)
}
