//! Session and alert capabilities injected into the controllers.
//!
//! Both are passed explicitly at construction instead of read from ambient
//! global state, so tests can run against fixture sessions and recorded
//! alerts.

use shared::SessionUser;

/// Read access to the connected user.
///
/// An external auth guard guarantees a connected Employee before either
/// controller runs; `None` only occurs outside that guard.
pub trait Session: Send + Sync {
    fn current_user(&self) -> Option<SessionUser>;
}

/// Session holding one fixed user.
pub struct FixedSession {
    user: SessionUser,
}

impl FixedSession {
    pub fn new(user: SessionUser) -> Self {
        Self { user }
    }

    /// Connected employee with the given email.
    pub fn employee(email: impl Into<String>) -> Self {
        Self::new(SessionUser {
            email: email.into(),
            user_type: "Employee".into(),
            status: "connected".into(),
        })
    }
}

impl Session for FixedSession {
    fn current_user(&self) -> Option<SessionUser> {
        Some(self.user.clone())
    }
}

/// End-user-visible alert channel for synchronous validation failures.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Alert sink that writes to the log, for hosts without a dialog surface.
pub struct LoggingAlerts;

impl AlertSink for LoggingAlerts {
    fn alert(&self, message: &str) {
        log::warn!("alert: {message}");
    }
}
