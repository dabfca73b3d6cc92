//! Bookkeeping for the most recent gateway failure.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use outreach_gateway::GatewayError;

#[derive(Debug, Default)]
struct Recorded {
    error: Option<Arc<GatewayError>>,
    at_millis: i64,
}

/// Records the most recent gateway error and when it occurred.
///
/// Last write wins; no history is retained. A passive display surface
/// polls [`get_within`](Self::get_within) with a fixed age limit and
/// auto-dismisses. One instance per application, injected by reference.
/// No operation ever fails.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    recorded: Mutex<Recorded>,
}

impl ErrorReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored error and timestamp.
    pub fn note(&self, error: Arc<GatewayError>) {
        self.note_at(error, Utc::now().timestamp_millis());
    }

    /// As [`note`](Self::note), with an explicit clock reading.
    pub fn note_at(&self, error: Arc<GatewayError>, now_millis: i64) {
        let mut recorded = self.lock();
        recorded.error = Some(error);
        recorded.at_millis = now_millis;
    }

    /// The stored error verbatim, or `None` if none was ever noted.
    #[must_use]
    pub fn get(&self) -> Option<Arc<GatewayError>> {
        self.lock().error.clone()
    }

    /// The stored error only while it is at most `age_limit_millis` old.
    /// Stale errors read as absent without being cleared.
    #[must_use]
    pub fn get_within(&self, age_limit_millis: i64) -> Option<Arc<GatewayError>> {
        self.get_within_at(age_limit_millis, Utc::now().timestamp_millis())
    }

    /// As [`get_within`](Self::get_within), with an explicit clock reading.
    #[must_use]
    pub fn get_within_at(&self, age_limit_millis: i64, now_millis: i64) -> Option<Arc<GatewayError>> {
        let recorded = self.lock();
        match &recorded.error {
            Some(error) if now_millis - recorded.at_millis <= age_limit_millis => {
                Some(Arc::clone(error))
            },
            _ => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
