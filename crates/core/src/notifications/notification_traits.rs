use async_trait::async_trait;

use crate::budget::BudgetClassification;
use crate::notifications::notification_model::{MailError, MailMessage};
use crate::users::User;

/// Delivers a single message. Implemented by the server's SMTP client.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: MailMessage) -> std::result::Result<(), MailError>;
}

/// Budget alert delivery. Never fails the caller; returns whether a message
/// was handed to the transport successfully.
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    async fn notify(
        &self,
        user: &User,
        classification: BudgetClassification,
        total: i64,
        limit: i64,
    ) -> bool;
}
