//! Bus access layer — connection port and the one-shot invoker.
//!
//! ```text
//!   ┌──────────────┐   ┌─────────────────────────────────────┐
//!   │ BusConnection │◀──│ invoke: resolve → call → decode     │
//!   │ (port trait)  │   │ (one blocking call, caller timeout) │
//!   └──────────────┘   └─────────────────────────────────────┘
//! ```
//!
//! The connection handle is long-lived and owned by the process
//! lifecycle; this layer only borrows it per call. Concrete transports
//! implement [`connection::BusConnection`], so the invocation logic
//! needs zero changes when one is swapped.

pub mod connection;
pub mod invoke;
