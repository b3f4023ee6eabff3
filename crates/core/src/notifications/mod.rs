//! Notifications module - best-effort budget alert mail.

mod notification_model;
mod notification_traits;
mod notifier;

pub use notification_model::{build_alert, MailConfig, MailError, MailMessage};
pub use notification_traits::{MailTransport, NotifierTrait};
pub use notifier::BudgetAlertNotifier;
