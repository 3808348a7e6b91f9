//! Notification module
//!
//! Transient toast messages that dismiss themselves after a timeout.
//! Only one toast is shown at a time; a new one always replaces the old one
//! together with its timer.

mod notification_state;

pub use notification_state::{
    DEFAULT_DURATION_MS, DismissTimer, NotificationKind, NotificationOptions, NotificationRecord,
    NotificationState, sleep_until_dismissal,
};
