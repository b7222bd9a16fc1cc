/// An account as provisioned in the configuration file.
///
/// Accounts are demo fixtures loaded at startup; there is no registration
/// flow and no persistence. `password` is `None` for accounts that have not
/// completed registration.
#[derive(Clone, Debug)]
pub struct User {
    pub username: String,
    pub password: Option<String>,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(username: String, password: Option<String>, roles: Vec<String>) -> Self {
        Self {
            username,
            password,
            roles,
        }
    }

    /// Capture the fields relevant to registration-state classification.
    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            password: self.password.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// Request-scoped bundle of the fields needed to classify a user.
///
/// Built fresh per request from the authenticated account and discarded
/// after classification. An empty password string and an absent password
/// are equivalent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSnapshot {
    pub password: Option<String>,
    pub roles: Vec<String>,
}
