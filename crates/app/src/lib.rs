//! Application-wide wiring for the outreach console client
//!
//! Holds the pieces every feature screen shares: the error reporter, the
//! gateway call wrapper that feeds it, and the context constructed once at
//! application start. All dependencies are passed explicitly so tests can
//! build isolated instances per case.

mod caller;
mod context;
mod error_reporter;

pub use caller::GatewayCaller;
pub use context::{AppContext, init_tracing};
pub use error_reporter::ErrorReporter;
