// Application state (AppState)

use crate::core::config::Config;
use crate::models::user::User;
use crate::security::session::SessionStore;
use crate::stores::account_store::AccountStore;
use std::sync::Arc;

/// Shared application state
///
/// Holds the account and session stores accessed by request handlers.
/// All fields are wrapped in Arc for efficient cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Accounts provisioned from configuration
    pub accounts: Arc<AccountStore>,

    /// Active browser sessions
    pub sessions: Arc<SessionStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let accounts = AccountStore::new();

        for account in &config.accounts {
            accounts.add(User::new(
                account.username.clone(),
                account.password.clone(),
                account.roles.clone(),
            ));
        }

        let sessions = SessionStore::new(config.session.ttl_seconds);

        Self {
            accounts: Arc::new(accounts),
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}
