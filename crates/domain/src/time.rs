//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for record `created_at`/`updated_at` fields.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        assert!(ts >= before);
        assert!(ts <= Utc::now());
    }

    #[test]
    fn should_not_go_backwards_between_calls() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
