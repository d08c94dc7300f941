//! One-shot invoker: resolve → call → decode.
//!
//! Each invocation is a single atomic unit from the caller's view:
//!
//! ```text
//!   Idle → Resolving → Calling → Decoding → Succeeded(record)
//!                 │          │
//!                 ▼          ▼
//!         ServiceNotFound  CallFailed
//! ```
//!
//! Exactly one blocking call per invoke — no batching, no retry, no
//! circuit breaking. The reply is decoded synchronously before `invoke`
//! returns; a decoder that reports a partial record does so through the
//! record itself, never through the error channel.

use std::time::Duration;

use log::error;

use crate::bus::connection::BusConnection;
use crate::error::{InvokeError, Result};
use crate::msg::attr::Attr;

/// Issue one synchronous, timeout-bounded call and decode the reply.
///
/// The request payload is moved in and dropped on every exit path, so
/// the outbound buffer cannot outlive the call it was built for.
///
/// Resolve failure maps to [`InvokeError::ServiceNotFound`] without a
/// call being issued; a call failure maps to [`InvokeError::CallFailed`]
/// without the decoder running.
pub fn invoke<C, T, D>(
    conn: &C,
    service: &str,
    method: &str,
    request: Option<Attr>,
    decode: D,
    timeout: Duration,
) -> Result<T>
where
    C: BusConnection + ?Sized,
    D: FnOnce(&Attr) -> T,
{
    let id = conn.resolve(service).map_err(|e| {
        error!("BUS: resolving `{service}` failed: {e}");
        InvokeError::ServiceNotFound {
            service: service.to_owned(),
        }
    })?;

    let reply = conn
        .call(id, method, request.as_ref(), timeout)
        .map_err(|source| {
            error!("BUS: call `{service}.{method}` failed: {source}");
            InvokeError::CallFailed {
                service: service.to_owned(),
                method: method.to_owned(),
                source,
            }
        })?;

    Ok(decode(&reply))
}
