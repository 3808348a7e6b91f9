//! Notification state management
//!
//! Holds the current toast and its auto-dismiss timer. The timer is an owned
//! deadline: replacing it or dropping it is what cancels the old dismissal,
//! so a long toast can never hide a toast shown after it.

use std::time::Duration;

use tokio::time::Instant;

use crate::labels::Labels;

/// Auto-dismiss delay used when a caller does not pass one
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Notification type - determines icon and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
        }
    }
}

/// The toast as the rendering layer sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub visible: bool,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u64,
}

impl Default for NotificationRecord {
    fn default() -> Self {
        NotificationRecord {
            visible: false,
            kind: NotificationKind::Info,
            title: String::new(),
            message: String::new(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Parameters for [`NotificationState::show_notification`]
#[derive(Debug, Clone, Default)]
pub struct NotificationOptions {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Falls back to the configured default duration
    pub duration_ms: Option<u64>,
}

impl NotificationOptions {
    pub fn new(message: impl Into<String>) -> Self {
        NotificationOptions {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Pending auto-dismissal of the current toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Instant,
}

impl DismissTimer {
    fn start(duration: Duration) -> Self {
        Self {
            deadline: Instant::now() + duration,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Wait until `deadline`, or forever when there is none.
///
/// Meant for a `tokio::select!` arm in the UI loop, followed by
/// [`NotificationState::clear_if_expired`].
pub async fn sleep_until_dismissal(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Notification state manager for the application
#[derive(Debug)]
pub struct NotificationState {
    record: NotificationRecord,
    timer: Option<DismissTimer>,
    labels: Labels,
    default_duration_ms: u64,
    dirty: bool,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(Labels::default(), DEFAULT_DURATION_MS)
    }
}

impl NotificationState {
    pub fn new(labels: Labels, default_duration_ms: u64) -> Self {
        Self {
            record: NotificationRecord {
                duration_ms: default_duration_ms,
                ..Default::default()
            },
            timer: None,
            labels,
            default_duration_ms,
            dirty: false,
        }
    }

    /// Show a toast, superseding the current one and its timer
    pub fn show_notification(&mut self, options: NotificationOptions) {
        let duration_ms = options.duration_ms.unwrap_or(self.default_duration_ms);

        #[cfg(debug_assertions)]
        log::debug!(
            "Showing {} notification {:?} for {}ms",
            options.kind.as_str(),
            options.title,
            duration_ms
        );

        self.record = NotificationRecord {
            visible: true,
            kind: options.kind,
            title: options.title,
            message: options.message,
            duration_ms,
        };
        self.timer = Some(DismissTimer::start(Duration::from_millis(duration_ms)));
        self.dirty = true;
    }

    pub fn show_success_notification(&mut self, message: impl Into<String>) {
        let title = self.labels.success.clone();
        self.show_success_notification_titled(message, title);
    }

    pub fn show_success_notification_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.show_notification(
            NotificationOptions::new(message)
                .kind(NotificationKind::Success)
                .title(title),
        );
    }

    pub fn show_error_notification(&mut self, message: impl Into<String>) {
        let title = self.labels.error.clone();
        self.show_error_notification_titled(message, title);
    }

    pub fn show_error_notification_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.show_notification(
            NotificationOptions::new(message)
                .kind(NotificationKind::Error)
                .title(title),
        );
    }

    pub fn show_warning_notification(&mut self, message: impl Into<String>) {
        let title = self.labels.warning.clone();
        self.show_warning_notification_titled(message, title);
    }

    pub fn show_warning_notification_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.show_notification(
            NotificationOptions::new(message)
                .kind(NotificationKind::Warning)
                .title(title),
        );
    }

    pub fn show_info_notification(&mut self, message: impl Into<String>) {
        let title = self.labels.info.clone();
        self.show_info_notification_titled(message, title);
    }

    pub fn show_info_notification_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.show_notification(
            NotificationOptions::new(message)
                .kind(NotificationKind::Info)
                .title(title),
        );
    }

    /// Hide the toast and cancel its timer. Safe to call when nothing is shown.
    pub fn close_notification(&mut self) {
        self.record.visible = false;
        self.timer = None;
        self.dirty = true;
    }

    /// Dismiss the toast if its timer ran out, returns true if dismissed.
    ///
    /// Readers already see an expired toast as hidden; this settles the stored
    /// record, drops the timer and requests a render.
    pub fn clear_if_expired(&mut self) -> bool {
        if self.is_expired() {
            #[cfg(debug_assertions)]
            log::debug!("Notification {:?} expired", self.record.title);
            self.close_notification();
            return true;
        }
        false
    }

    /// When the current toast will dismiss itself, if one is scheduled
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.map(|timer| timer.deadline())
    }

    pub fn timer(&self) -> Option<&DismissTimer> {
        self.timer.as_ref()
    }

    /// Snapshot of the toast, with `visible` cleared once its timer ran out
    pub fn record(&self) -> NotificationRecord {
        NotificationRecord {
            visible: self.is_visible(),
            ..self.record.clone()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.record.visible && !self.is_expired()
    }

    /// Whether the timer ran out and the dismissal has not been applied yet
    pub fn is_expired(&self) -> bool {
        self.timer.is_some_and(|timer| timer.is_expired())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
