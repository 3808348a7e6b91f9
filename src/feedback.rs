//! Feedback context
//!
//! Owns the one alert dialog and the one toast of the application. The UI
//! loop holds the context and is its only writer; callers that want an answer
//! from the user keep the [`AlertResponse`](crate::AlertResponse) they were
//! handed and await it independently.

use tokio::time::Instant;

use crate::alert::AlertState;
use crate::config::Config;
use crate::notification::NotificationState;

/// User input the rendering layer routes back into the context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// Confirm button of the alert
    Confirm,
    /// Cancel button of the alert
    Cancel,
    /// Close button of the toast
    DismissNotification,
}

/// Shared alert and notification state
#[derive(Debug)]
pub struct Feedback {
    pub alert: AlertState,
    pub notification: NotificationState,
    /// Set when the context changed outside either store (e.g. on creation)
    pub needs_render: bool,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Feedback {
    pub fn new(config: &Config) -> Self {
        Self {
            alert: AlertState::new(config.labels.clone(), config.alert.replace_policy),
            notification: NotificationState::new(
                config.labels.clone(),
                config.notification.default_duration_ms,
            ),
            needs_render: true,
        }
    }

    pub fn handle_event(&mut self, event: FeedbackEvent) {
        #[cfg(debug_assertions)]
        log::debug!("Feedback event: {:?}", event);

        match event {
            FeedbackEvent::Confirm => self.alert.handle_confirm(),
            FeedbackEvent::Cancel => self.alert.handle_cancel(),
            FeedbackEvent::DismissNotification => self.notification.close_notification(),
        }
    }

    /// Apply a due auto-dismissal, returns true if the toast was hidden
    pub fn tick(&mut self) -> bool {
        self.notification.clear_if_expired()
    }

    /// Next instant at which [`Feedback::tick`] has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.notification.deadline()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
        self.alert.clear_dirty();
        self.notification.clear_dirty();
    }

    /// True when anything changed since the last frame, including a toast
    /// whose timer ran out before [`Feedback::tick`] got to it
    pub fn should_render(&self) -> bool {
        self.needs_render
            || self.alert.is_dirty()
            || self.notification.is_dirty()
            || self.notification.is_expired()
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod feedback_tests;
