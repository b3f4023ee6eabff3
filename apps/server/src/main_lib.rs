use std::sync::Arc;

use crate::{auth::AuthManager, config::Config, mailer::SmtpMailTransport};
use dailycap_core::{
    budget::{BudgetService, BudgetServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    notifications::{BudgetAlertNotifier, MailTransport, NotifierTrait},
    users::{credentials, UserService, UserServiceTrait},
    utils::{Clock, SystemClock},
};
use dailycap_storage_sqlite::{
    db::{self, write_actor},
    expenses::ExpenseRepository,
    users::UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone())?;

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let transport: Option<Arc<dyn MailTransport>> = if config.mail.is_configured() {
        Some(Arc::new(SmtpMailTransport::new(
            &config.mail,
            config.mail_timeout,
        )?))
    } else {
        None
    };
    let notifier: Arc<dyn NotifierTrait> = Arc::new(BudgetAlertNotifier::new(
        &config.mail,
        transport,
        config.mail_timeout,
    ));

    if !credentials::prepare_dummy_hash() {
        tracing::warn!("Unknown-account password hash unavailable");
    }
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let budget_service: Arc<dyn BudgetServiceTrait> = Arc::new(BudgetService::new(
        user_repository.clone(),
        expense_repository.clone(),
        clock.clone(),
    ));
    let expense_service = Arc::new(ExpenseService::new(
        expense_repository,
        user_repository,
        budget_service.clone(),
        notifier,
        clock,
    ));

    Ok(Arc::new(AppState {
        user_service,
        budget_service,
        expense_service,
        auth: Arc::new(AuthManager::new(&config.auth)),
    }))
}
