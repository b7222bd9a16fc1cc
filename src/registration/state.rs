use crate::models::user::UserSnapshot;

/// Classify a user's registration completeness.
///
/// Returns exactly one of:
/// - 3: password set and at least one role,
/// - 2: password set but no roles,
/// - 1: no password (absent or empty), regardless of roles.
///
/// The checks run in this order on purpose: the no-password check is last
/// and overrides the no-roles check, so a user with neither a password nor
/// roles classifies as 1, not 2. Do not reorder.
pub fn classify(snapshot: &UserSnapshot) -> u8 {
    let mut state = 3;

    if snapshot.roles.is_empty() {
        state = 2;
    }

    if snapshot.password.as_deref().unwrap_or("").is_empty() {
        state = 1;
    }

    state
}
