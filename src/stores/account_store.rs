use crate::models::user::User;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory store of provisioned accounts, keyed by username.
///
/// Seeded once from configuration at startup; reads are lock-free and safe
/// from any number of request tasks.
pub struct AccountStore {
    accounts: DashMap<String, Arc<User>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Add an account. An existing account with the same username is replaced.
    pub fn add(&self, user: User) {
        self.accounts.insert(user.username.clone(), Arc::new(user));
    }

    pub fn get(&self, username: &str) -> Option<Arc<User>> {
        self.accounts
            .get(username)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
