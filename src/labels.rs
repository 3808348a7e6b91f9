//! Default texts shown on dialogs and toasts
//!
//! The application ships a single locale. Individual strings can be replaced
//! through the `[labels]` config section.

use serde::Deserialize;

/// Localized default texts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Confirm button of a plain alert
    pub confirm: String,
    /// Cancel button of a plain alert
    pub cancel: String,
    /// Title of a confirm dialog
    pub confirm_title: String,
    /// Confirm button of a confirm dialog
    pub yes: String,
    /// Cancel button of a confirm dialog
    pub no: String,
    pub success: String,
    pub error: String,
    pub warning: String,
    pub info: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            confirm: "Tamam".to_string(),
            cancel: "İptal".to_string(),
            confirm_title: "Onay".to_string(),
            yes: "Evet".to_string(),
            no: "Hayır".to_string(),
            success: "Başarılı".to_string(),
            error: "Hata".to_string(),
            warning: "Uyarı".to_string(),
            info: "Bilgi".to_string(),
        }
    }
}
