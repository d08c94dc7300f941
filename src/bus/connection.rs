//! Connection port — the boundary between the invocation layer and the
//! bus transport.
//!
//! A concrete connection (netlink socket, unix socket, in-process test
//! double) implements [`BusConnection`]. The invocation layer treats the
//! handle as read-only shared state: it never mutates connection-level
//! state and never holds it across anything but the one blocking call.

use std::time::Duration;

use thiserror::Error;

use crate::msg::attr::Attr;

/// Opaque identifier a service name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceId(pub u32);

/// Failure while resolving a service name to an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No service with that name is currently registered on the bus.
    #[error("no such service on the bus")]
    NotFound,
    /// The transport failed before a lookup reply arrived.
    #[error("bus transport error: {0}")]
    Transport(String),
}

/// Failure during the blocking method call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// No reply within the caller-supplied timeout.
    #[error("call timed out")]
    Timeout,
    /// The remote side rejected the call with a bus status code.
    #[error("remote returned status {0}")]
    Remote(u32),
    /// The transport failed mid-call.
    #[error("bus transport error: {0}")]
    Transport(String),
}

/// Blocking bus connection.
///
/// Both operations suspend the calling thread; `call` is bounded by
/// `timeout`, after which implementations must return
/// [`CallError::Timeout`]. There is no cancel-in-flight primitive.
pub trait BusConnection {
    /// Resolve a service name to its current identifier.
    fn resolve(&self, service: &str) -> Result<ServiceId, ResolveError>;

    /// Call `method` on the resolved service with an optional request
    /// payload, blocking until the reply tree arrives or `timeout`
    /// elapses.
    fn call(
        &self,
        id: ServiceId,
        method: &str,
        request: Option<&Attr>,
        timeout: Duration,
    ) -> Result<Attr, CallError>;
}
