//! Invocation-layer error taxonomy.
//!
//! Two call-level failures exist: the service name did not resolve, or
//! the blocking call itself failed. A reply whose mandatory fields are
//! missing is *not* an error here — the domain record carries its own
//! `parsed_successfully` flag and the call is reported as completed.

use thiserror::Error;

use crate::bus::connection::CallError;

/// Call-level failure surfaced by [`invoke`](crate::bus::invoke::invoke).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// Name resolution failed; no call was issued.
    #[error("service `{service}` is not reachable on the bus")]
    ServiceNotFound {
        /// The service name that failed to resolve.
        service: String,
    },
    /// The blocking call failed (timeout, transport, or remote status).
    #[error("call to `{service}.{method}` failed: {source}")]
    CallFailed {
        /// Target service name.
        service: String,
        /// Target method name.
        method: String,
        /// Underlying call failure.
        #[source]
        source: CallError,
    },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, InvokeError>;
