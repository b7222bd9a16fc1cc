use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs() as i64
}

/// A timestamp is expired once strictly more than `ttl` seconds have passed.
pub fn is_expired(timestamp: i64, ttl: i64, current_time: i64) -> bool {
    current_time - timestamp > ttl
}
