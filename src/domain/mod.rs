//! Domain adapters — typed records on top of the invocation layer.
//!
//! Each operation pairs a request encoder (typed record → attribute
//! tree) with a response decoder (decoded field table → typed record).
//! Decoders flag incomplete replies via `parsed_successfully` instead of
//! erroring; callers must check the flag before trusting the payload.

pub mod esp;
pub mod system;
