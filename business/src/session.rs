use chrono::{DateTime, Utc};
use ustr::Ustr;

/// The signed-in operator's session.
///
/// Passed down by reference from the app shell to whatever needs it; an
/// explicit value instead of an ambient token store, so tests can build
/// one directly and nothing reads global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: Ustr,
    pub token: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: &str, token: impl Into<String>, signed_in_at: DateTime<Utc>) -> Self {
        Self {
            username: Ustr::from(username),
            token: token.into(),
            signed_in_at,
        }
    }

    /// Local development session used until a login flow exists.
    pub fn local(now: DateTime<Utc>) -> Self {
        Self::new("admin", "local-session", now)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use chrono::{TimeZone, Utc};

    #[test]
    fn session_is_a_plain_value() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).single();
        let now = now.expect("fixed timestamp is valid");
        let session = Session::local(now);
        assert_eq!(session.username, "admin");
        assert_eq!(session.signed_in_at, now);
    }
}
