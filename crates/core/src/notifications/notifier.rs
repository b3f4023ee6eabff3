use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::notification_model::{build_alert, MailConfig};
use super::notification_traits::{MailTransport, NotifierTrait};
use crate::budget::BudgetClassification;
use crate::users::User;

pub struct BudgetAlertNotifier {
    transport: Option<Arc<dyn MailTransport>>,
    sender: String,
    timeout: Duration,
}

impl BudgetAlertNotifier {
    /// The transport is ignored when `config` is incomplete.
    pub fn new(
        config: &MailConfig,
        transport: Option<Arc<dyn MailTransport>>,
        timeout: Duration,
    ) -> Self {
        let transport = transport.filter(|_| config.is_configured());
        if transport.is_none() {
            info!("Mail is not configured; budget alerts will not be sent");
        }
        BudgetAlertNotifier {
            transport,
            sender: config.sender.trim().to_string(),
            timeout,
        }
    }

    /// A notifier that never sends.
    pub fn disabled() -> Self {
        BudgetAlertNotifier {
            transport: None,
            sender: String::new(),
            timeout: Duration::ZERO,
        }
    }
}

#[async_trait]
impl NotifierTrait for BudgetAlertNotifier {
    async fn notify(
        &self,
        user: &User,
        classification: BudgetClassification,
        total: i64,
        limit: i64,
    ) -> bool {
        if !classification.is_alert() {
            return false;
        }
        let Some(transport) = &self.transport else {
            debug!("Skipping budget alert for account {}: mail disabled", user.id);
            return false;
        };

        let message = build_alert(user, &self.sender, classification, total, limit);
        match tokio::time::timeout(self.timeout, transport.send(message)).await {
            Ok(Ok(())) => {
                debug!(
                    "Sent {} alert to account {}",
                    classification.label(),
                    user.id
                );
                true
            }
            Ok(Err(e)) => {
                warn!("Budget alert for account {} failed: {}", user.id, e);
                false
            }
            Err(_) => {
                warn!(
                    "Budget alert for account {} timed out after {:?}",
                    user.id, self.timeout
                );
                false
            }
        }
    }
}
