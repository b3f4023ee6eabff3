use thiserror::Error;

use crate::budget::BudgetClassification;
use crate::constants::{APP_NAME, CURRENCY_SYMBOL};
use crate::users::User;

/// Outgoing mail options. Sending is disabled unless every field is set.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    pub username: String,
    pub password: String,
    pub sender: String,
}

impl MailConfig {
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty()
            && self.port != 0
            && !self.username.is_empty()
            && !self.password.is_empty()
            && !self.sender.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Mail delivery failed: {0}")]
    Delivery(String),
}

/// Builds the alert for a Nearing or Exceeded classification.
pub fn build_alert(
    user: &User,
    sender: &str,
    classification: BudgetClassification,
    total: i64,
    limit: i64,
) -> MailMessage {
    MailMessage {
        to: user.email.clone(),
        from: sender.to_string(),
        subject: format!("[{APP_NAME}] {} your daily budget", classification.label()),
        body: format!(
            "Hi {},\n\nYou've spent {CURRENCY_SYMBOL}{total} of your daily budget {CURRENCY_SYMBOL}{limit} today.\n\n— {APP_NAME}",
            user.name
        ),
    }
}
