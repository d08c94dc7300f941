//! espbus — synchronous RPC invocation layer over the gateway bus.
//!
//! ```text
//!   domain record ──▶ encoder ──▶ invoke (resolve + call) ──▶ reply
//!        ▲                                                      │
//!        └───────── decoder ◀── FieldTable ◀── schema decode ◀──┘
//! ```
//!
//! The crate reconciles the bus's dynamically-typed attribute trees with
//! statically-shaped domain records: a declarative schema drives the
//! decode, missing fields become an explicit `parsed_successfully` flag,
//! and call-level failures (unresolvable service, timeout) stay on the
//! error channel. The connection handle itself is owned by the daemon's
//! process lifecycle and only borrowed here.

#![deny(unused_must_use)]

pub mod bus;
pub mod config;
pub mod domain;
pub mod msg;

mod error;

pub use error::{InvokeError, Result};
