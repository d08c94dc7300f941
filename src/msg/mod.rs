//! Schema-driven message layer for the bus's self-describing wire format.
//!
//! ```text
//!   ┌───────────┐   ┌──────────┐   ┌────────────────────────┐
//!   │ Attr tree │──▶│  decode  │──▶│ FieldTable (name → attr│
//!   │ (wire)    │   │ (schema) │   │  or absent)            │
//!   └───────────┘   └──────────┘   └────────────────────────┘
//! ```
//!
//! Replies arrive as nested attribute trees with named, typed fields.
//! A [`schema::Field`] slice declares the shape a caller expects; the
//! decoder matches the tree against it and reports every field as
//! present-or-absent. Absence is data, never an error — the domain
//! adapters decide what a missing field means.

pub mod attr;
pub mod decode;
pub mod schema;
