//! Report-and-rethrow wrapper around gateway calls.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use outreach_gateway::{Gateway, GatewayError};

use crate::ErrorReporter;

/// The adapter every feature screen routes its gateway calls through.
///
/// A failing call is reported to the [`ErrorReporter`] exactly once and
/// then returned to the caller unchanged, so no screen has to remember to
/// report. Errors cross the wrapper as `Arc<GatewayError>`: the reporter
/// and the caller observe the very same value.
#[derive(Clone)]
pub struct GatewayCaller {
    gateway: Arc<dyn Gateway>,
    reporter: Arc<ErrorReporter>,
}

impl std::fmt::Debug for GatewayCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayCaller").finish_non_exhaustive()
    }
}

impl GatewayCaller {
    #[must_use]
    pub fn new(gateway: Arc<dyn Gateway>, reporter: Arc<ErrorReporter>) -> Self {
        Self { gateway, reporter }
    }

    /// Invoke `op` with the gateway; on rejection, note the error and
    /// return it.
    pub async fn call<T, F>(&self, op: F) -> Result<T, Arc<GatewayError>>
    where
        F: FnOnce(Arc<dyn Gateway>) -> BoxFuture<'static, Result<T, GatewayError>>,
    {
        match op(Arc::clone(&self.gateway)).await {
            Ok(value) => Ok(value),
            Err(error) => {
                let error = Arc::new(error);
                self.reporter.note(Arc::clone(&error));
                Err(error)
            },
        }
    }

    #[must_use]
    pub fn reporter(&self) -> &Arc<ErrorReporter> {
        &self.reporter
    }
}
