//! berber-feedback - shared alert dialog and toast notification state
//!
//! The UI loop owns a single [`Feedback`] context. It draws from the current
//! [`AlertRecord`] and [`NotificationRecord`], routes user input back through
//! [`Feedback::handle_event`] and calls [`Feedback::tick`] so toasts dismiss
//! themselves once their timer runs out.

pub mod alert;
pub mod config;
pub mod error;
pub mod feedback;
pub mod labels;
pub mod notification;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use alert::{AlertKind, AlertRecord, AlertResponse, AlertState};
pub use config::Config;
pub use feedback::{Feedback, FeedbackEvent};
pub use notification::{NotificationKind, NotificationRecord, NotificationState};
