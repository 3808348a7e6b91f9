//! Alert state management
//!
//! Holds the single current dialog and the sender half of its pending
//! response. Every show call overwrites the record wholesale.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::FusedFuture;
use serde::Deserialize;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::labels::Labels;

/// Alert type - determines icon, styling and default texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
    Confirm,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Confirm => "confirm",
        }
    }
}

/// What happens to a pending response when another alert replaces it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplacePolicy {
    /// The replaced response never resolves.
    #[default]
    Orphan,
    /// The replaced response resolves with `false`.
    Cancel,
}

/// The dialog as the rendering layer sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub visible: bool,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl AlertRecord {
    fn hidden(labels: &Labels) -> Self {
        AlertRecord {
            visible: false,
            kind: AlertKind::Info,
            title: String::new(),
            message: String::new(),
            confirm_label: labels.confirm.clone(),
            cancel_label: labels.cancel.clone(),
        }
    }
}

/// Parameters for [`AlertState::show_alert`]
///
/// The cancel label is not configurable here; plain alerts always use the
/// localized cancel text.
#[derive(Debug, Clone, Default)]
pub struct AlertOptions {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    /// Falls back to the localized confirm text
    pub confirm_label: Option<String>,
}

impl AlertOptions {
    pub fn new(message: impl Into<String>) -> Self {
        AlertOptions {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: AlertKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }
}

/// Parameters for [`AlertState::show_confirm`]
///
/// Unset texts fall back to the localized confirm-dialog defaults.
#[derive(Debug, Clone)]
pub struct ConfirmOptions {
    pub kind: AlertKind,
    pub title: Option<String>,
    pub message: String,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
}

impl Default for ConfirmOptions {
    fn default() -> Self {
        ConfirmOptions {
            kind: AlertKind::Confirm,
            title: None,
            message: String::new(),
            confirm_label: None,
            cancel_label: None,
        }
    }
}

impl ConfirmOptions {
    pub fn new(message: impl Into<String>) -> Self {
        ConfirmOptions {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: AlertKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }
}

#[derive(Debug)]
enum ResponseState {
    Waiting(oneshot::Receiver<bool>),
    Ready(bool),
    /// Answer already yielded by `poll`
    Taken(bool),
    Orphaned,
}

/// The user's answer to an alert: `true` for confirm, `false` for cancel
///
/// Resolves at most once. If the alert is replaced under
/// [`ReplacePolicy::Orphan`], or the owning [`AlertState`] is dropped, the
/// response stays pending forever.
#[derive(Debug)]
#[must_use = "an alert response does nothing unless awaited or checked"]
pub struct AlertResponse {
    state: ResponseState,
}

impl AlertResponse {
    fn new(rx: oneshot::Receiver<bool>) -> Self {
        AlertResponse {
            state: ResponseState::Waiting(rx),
        }
    }

    /// Non-blocking check for the answer.
    ///
    /// Takes `&mut self` because a check moves an arrived answer out of the
    /// channel and into the response. Keeps returning the answer after the
    /// response has been polled to completion.
    pub fn try_result(&mut self) -> Option<bool> {
        if let ResponseState::Waiting(rx) = &mut self.state {
            match rx.try_recv() {
                Ok(confirmed) => self.state = ResponseState::Ready(confirmed),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => self.state = ResponseState::Orphaned,
            }
        }
        match self.state {
            ResponseState::Ready(confirmed) | ResponseState::Taken(confirmed) => Some(confirmed),
            ResponseState::Waiting(_) | ResponseState::Orphaned => None,
        }
    }

    /// Returns true once the alert behind this response can no longer be answered.
    ///
    /// Like [`AlertResponse::try_result`] this refreshes the response from its
    /// channel, hence `&mut self`.
    pub fn is_orphaned(&mut self) -> bool {
        self.try_result();
        matches!(self.state, ResponseState::Orphaned)
    }
}

impl Future for AlertResponse {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        let this = self.get_mut();
        match &mut this.state {
            ResponseState::Waiting(rx) => match Pin::new(rx).poll(cx) {
                Poll::Ready(Ok(confirmed)) => {
                    this.state = ResponseState::Taken(confirmed);
                    Poll::Ready(confirmed)
                }
                // Sender dropped without answering: never wake again
                Poll::Ready(Err(_)) => {
                    this.state = ResponseState::Orphaned;
                    Poll::Pending
                }
                Poll::Pending => Poll::Pending,
            },
            ResponseState::Ready(confirmed) => {
                let confirmed = *confirmed;
                this.state = ResponseState::Taken(confirmed);
                Poll::Ready(confirmed)
            }
            ResponseState::Taken(_) | ResponseState::Orphaned => Poll::Pending,
        }
    }
}

impl FusedFuture for AlertResponse {
    fn is_terminated(&self) -> bool {
        matches!(self.state, ResponseState::Taken(_) | ResponseState::Orphaned)
    }
}

/// Alert state manager for the application
#[derive(Debug)]
pub struct AlertState {
    record: AlertRecord,
    pending: Option<oneshot::Sender<bool>>,
    labels: Labels,
    replace_policy: ReplacePolicy,
    dirty: bool,
}

impl Default for AlertState {
    fn default() -> Self {
        Self::new(Labels::default(), ReplacePolicy::default())
    }
}

impl AlertState {
    pub fn new(labels: Labels, replace_policy: ReplacePolicy) -> Self {
        Self {
            record: AlertRecord::hidden(&labels),
            pending: None,
            labels,
            replace_policy,
            dirty: false,
        }
    }

    /// Show an alert with a confirm button and the localized cancel button
    pub fn show_alert(&mut self, options: AlertOptions) -> AlertResponse {
        let record = AlertRecord {
            visible: true,
            kind: options.kind,
            title: options.title,
            message: options.message,
            confirm_label: options
                .confirm_label
                .unwrap_or_else(|| self.labels.confirm.clone()),
            cancel_label: self.labels.cancel.clone(),
        };
        self.open(record)
    }

    /// Show a yes/no question
    pub fn show_confirm(&mut self, options: ConfirmOptions) -> AlertResponse {
        let record = AlertRecord {
            visible: true,
            kind: options.kind,
            title: options
                .title
                .unwrap_or_else(|| self.labels.confirm_title.clone()),
            message: options.message,
            confirm_label: options
                .confirm_label
                .unwrap_or_else(|| self.labels.yes.clone()),
            cancel_label: options.cancel_label.unwrap_or_else(|| self.labels.no.clone()),
        };
        self.open(record)
    }

    pub fn show_success(&mut self, message: impl Into<String>) -> AlertResponse {
        let title = self.labels.success.clone();
        self.show_success_titled(message, title)
    }

    pub fn show_success_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) -> AlertResponse {
        self.show_alert(AlertOptions::new(message).kind(AlertKind::Success).title(title))
    }

    pub fn show_error(&mut self, message: impl Into<String>) -> AlertResponse {
        let title = self.labels.error.clone();
        self.show_error_titled(message, title)
    }

    pub fn show_error_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) -> AlertResponse {
        self.show_alert(AlertOptions::new(message).kind(AlertKind::Error).title(title))
    }

    pub fn show_warning(&mut self, message: impl Into<String>) -> AlertResponse {
        let title = self.labels.warning.clone();
        self.show_warning_titled(message, title)
    }

    pub fn show_warning_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) -> AlertResponse {
        self.show_alert(AlertOptions::new(message).kind(AlertKind::Warning).title(title))
    }

    pub fn show_info(&mut self, message: impl Into<String>) -> AlertResponse {
        let title = self.labels.info.clone();
        self.show_info_titled(message, title)
    }

    pub fn show_info_titled(
        &mut self,
        message: impl Into<String>,
        title: impl Into<String>,
    ) -> AlertResponse {
        self.show_alert(AlertOptions::new(message).kind(AlertKind::Info).title(title))
    }

    /// Hide the dialog without answering it.
    ///
    /// The pending response stays answerable: a later confirm or cancel still
    /// resolves it.
    pub fn close_alert(&mut self) {
        self.record.visible = false;
        self.dirty = true;
    }

    /// Resolve the pending response with `true`, then close
    pub fn handle_confirm(&mut self) {
        self.resolve(true);
    }

    /// Resolve the pending response with `false`, then close
    pub fn handle_cancel(&mut self) {
        self.resolve(false);
    }

    pub fn record(&self) -> &AlertRecord {
        &self.record
    }

    pub fn is_visible(&self) -> bool {
        self.record.visible
    }

    /// Whether a shown alert is still waiting for its answer
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn replace_policy(&self) -> ReplacePolicy {
        self.replace_policy
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn open(&mut self, record: AlertRecord) -> AlertResponse {
        if let Some(previous) = self.pending.take() {
            match self.replace_policy {
                ReplacePolicy::Orphan => {
                    log::warn!(
                        "Alert {:?} replaced before it was answered; its response will never resolve",
                        self.record.title
                    );
                    drop(previous);
                }
                ReplacePolicy::Cancel => {
                    #[cfg(debug_assertions)]
                    log::debug!("Alert {:?} replaced, resolving as cancelled", self.record.title);
                    let _ = previous.send(false);
                }
            }
        }

        #[cfg(debug_assertions)]
        log::debug!("Showing {} alert {:?}", record.kind.as_str(), record.title);

        let (tx, rx) = oneshot::channel();
        self.record = record;
        self.pending = Some(tx);
        self.dirty = true;
        AlertResponse::new(rx)
    }

    fn resolve(&mut self, confirmed: bool) {
        if let Some(tx) = self.pending.take() {
            #[cfg(debug_assertions)]
            log::debug!("Alert {:?} answered: {}", self.record.title, confirmed);
            // The caller may have dropped its response; nothing to deliver then
            let _ = tx.send(confirmed);
        }
        self.close_alert();
    }
}

#[cfg(test)]
#[path = "alert_state_tests.rs"]
mod alert_state_tests;
