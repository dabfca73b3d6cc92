//! Authenticated session store
//!
//! Establishes and tears down the session over an injected
//! [`AuthGateway`], exposing the current user, readiness, the
//! pending-operation flag, and the last auth error to the rest of the
//! application. One instance lives for the process lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use outreach_core::IdentityUser;
use outreach_gateway::{AuthGateway, GatewayError, LoginArgs, RegisterArgs};

/// Where the session currently stands.
///
/// `Refreshing` covers startup until the initial auth determination
/// completes; afterwards the store moves between `Authenticated` and
/// `Anonymous` as login/logout succeed. No state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Refreshing,
    Authenticated,
    Anonymous,
}

#[derive(Default)]
struct SessionState {
    user: Option<IdentityUser>,
    ready: bool,
    error: Option<Arc<GatewayError>>,
}

/// Session state container over an injected gateway.
pub struct SessionStore {
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<SessionState>,
    pending: AtomicBool,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("phase", &self.phase())
            .field("pending", &self.pending_operation())
            .finish()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway, state: RwLock::new(SessionState::default()), pending: AtomicBool::new(false) }
    }

    /// Run the startup protocol once per application load: refresh the
    /// server-side session, then fetch the identity. `ready` signals that
    /// the initial auth determination is complete, not that a user is
    /// authenticated.
    pub async fn initialize(&self) {
        match self.gateway.refresh().await {
            Ok(_) => self.load_identity().await,
            Err(err) => {
                tracing::debug!(error = %err, "no existing session");
            },
        }
        self.write_state().ready = true;
    }

    /// Log in. A second auth operation issued while one is pending is
    /// silently ignored.
    pub async fn login(&self, username: &str, password: &str) {
        let args = LoginArgs { username: username.to_owned(), password: password.to_owned() };
        self.perform(async {
            self.gateway.login(args).await?;
            Ok(())
        })
        .await;
    }

    /// Register and log in. Subject to the same pending guard as `login`.
    pub async fn register(&self, username: &str, password: &str, name: &str) {
        let args = RegisterArgs {
            username: username.to_owned(),
            password: password.to_owned(),
            name: name.to_owned(),
            create_session: None,
        };
        self.perform(async {
            self.gateway.register(args).await?;
            Ok(())
        })
        .await;
    }

    /// Log out. The local user is cleared even when the remote call fails;
    /// dropping local credentials is the primary goal.
    pub async fn logout(&self) {
        if !self.begin_operation() {
            return;
        }
        let result = self.gateway.logout().await;
        {
            let mut state = self.write_state();
            state.user = None;
            if let Err(err) = result {
                state.error = Some(Arc::new(err));
            }
        }
        self.pending.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn user(&self) -> Option<IdentityUser> {
        self.read_state().user.clone()
    }

    /// Whether the initial auth determination has completed.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.read_state().ready
    }

    #[must_use]
    pub fn pending_operation(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// The last auth operation's error, for inline display next to the
    /// triggering form.
    #[must_use]
    pub fn error(&self) -> Option<Arc<GatewayError>> {
        self.read_state().error.clone()
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        let state = self.read_state();
        if !state.ready {
            AuthPhase::Refreshing
        } else if state.user.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }

    /// Token-acquiring operation envelope: clear the previous error, run
    /// the call, load the identity on success, record any failure, and
    /// always release the pending flag.
    async fn perform(&self, op: impl Future<Output = Result<(), GatewayError>>) {
        if !self.begin_operation() {
            return;
        }
        match op.await {
            Ok(()) => self.load_identity().await,
            Err(err) => self.write_state().error = Some(Arc::new(err)),
        }
        self.pending.store(false, Ordering::Release);
    }

    async fn load_identity(&self) {
        match self.gateway.identity().await {
            Ok(identity) => self.write_state().user = Some(identity),
            Err(err) => {
                tracing::warn!(error = %err, "identity fetch failed");
                self.write_state().error = Some(Arc::new(err));
            },
        }
    }

    fn begin_operation(&self) -> bool {
        let started =
            self.pending.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok();
        if started {
            self.write_state().error = None;
        }
        started
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
