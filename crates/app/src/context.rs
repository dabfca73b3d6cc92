//! Explicit dependency wiring, one instance per application run.

use std::sync::Arc;

use outreach_gateway::{AuthGateway, Gateway, GatewayResult, HttpGateway};
use outreach_session::SessionStore;

use crate::{ErrorReporter, GatewayCaller};

/// Everything the feature screens share: one gateway, one error reporter,
/// one call wrapper, one session store. Constructed at application start
/// and torn down with the process; no ambient singletons.
pub struct AppContext {
    pub gateway: Arc<dyn Gateway>,
    pub reporter: Arc<ErrorReporter>,
    pub caller: GatewayCaller,
    pub session: Arc<SessionStore>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").field("session", &self.session).finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire the shared pieces over the given gateway implementation.
    #[must_use]
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        let reporter = Arc::new(ErrorReporter::new());
        let caller = GatewayCaller::new(Arc::clone(&gateway), Arc::clone(&reporter));
        let auth: Arc<dyn AuthGateway> = gateway.clone();
        let session = Arc::new(SessionStore::new(auth));
        Self { gateway, reporter, caller, session }
    }

    /// Wire against the backend origin from `OUTREACH_GATEWAY_URL`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> GatewayResult<Self> {
        let gateway = HttpGateway::from_env()?;
        Ok(Self::new(Arc::new(gateway)))
    }
}

/// Install the process-wide tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
