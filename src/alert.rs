//! Alert module
//!
//! Modal alert and confirm dialogs. Showing a dialog hands the caller an
//! [`AlertResponse`] that completes once the user confirms or cancels.

mod alert_state;

pub use alert_state::{
    AlertKind, AlertOptions, AlertRecord, AlertResponse, AlertState, ConfirmOptions, ReplacePolicy,
};
