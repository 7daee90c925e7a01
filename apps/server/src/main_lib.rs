use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use finbook_core::accounts::{AccountService, AccountServiceTrait};
use finbook_core::audit::AuditSinkTrait;
use finbook_core::classifier::{ClassifierService, ClassifierServiceTrait};
use finbook_core::operations::{OperationService, OperationServiceTrait};
use finbook_core::users::{NewUser, UserRole, UserService, UserServiceTrait, UserStatus};
use finbook_storage_sqlite::accounts::AccountRepository;
use finbook_storage_sqlite::audit::SqliteAuditSink;
use finbook_storage_sqlite::classifier::ClassifierRepository;
use finbook_storage_sqlite::db::{self, write_actor};
use finbook_storage_sqlite::operations::OperationRepository;
use finbook_storage_sqlite::users::UserRepository;

use crate::auth::{hash_password, AuthManager};
use crate::config::Config;

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub operation_service: Arc<dyn OperationServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub classifier_service: Arc<dyn ClassifierServiceTrait>,
    pub audit_sink: Arc<dyn AuditSinkTrait>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("FINBOOK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    // The audit sink goes first: the operation and user services append to
    // it after their admin mutations.
    let audit_sink: Arc<dyn AuditSinkTrait> =
        Arc::new(SqliteAuditSink::new(pool.clone(), writer.clone()));

    let account_repo = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let account_service: Arc<dyn AccountServiceTrait> = Arc::new(AccountService::new(account_repo));

    let operation_repo = Arc::new(OperationRepository::new(pool.clone(), writer.clone()));
    let operation_service: Arc<dyn OperationServiceTrait> =
        Arc::new(OperationService::new(operation_repo, audit_sink.clone()));

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service: Arc<dyn UserServiceTrait> =
        Arc::new(UserService::new(user_repo, audit_sink.clone()));

    let classifier_repo = Arc::new(ClassifierRepository::new(pool.clone(), writer.clone()));
    let classifier_service: Arc<dyn ClassifierServiceTrait> =
        Arc::new(ClassifierService::new(classifier_repo));

    let auth = Arc::new(AuthManager::new(&config.secret_key, config.token_ttl_secs));

    seed_admin(config, user_service.as_ref()).await?;

    Ok(Arc::new(AppState {
        account_service,
        operation_service,
        user_service,
        classifier_service,
        audit_sink,
        auth,
        db_path,
    }))
}

/// Creates the configured admin user when it does not exist yet, so a fresh
/// deployment has a way into the admin endpoints.
async fn seed_admin(config: &Config, user_service: &dyn UserServiceTrait) -> anyhow::Result<()> {
    let (Some(mail), Some(password)) = (&config.admin_mail, &config.admin_password) else {
        return Ok(());
    };

    if user_service.find_by_mail(mail)?.is_some() {
        return Ok(());
    }

    let password_hash = hash_password(password)?;
    let admin = user_service
        .register(NewUser {
            mail: mail.clone(),
            full_name: "Administrator".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Activated,
            password_hash,
        })
        .await?;
    tracing::info!("Seeded admin user {}", admin.mail);
    Ok(())
}
