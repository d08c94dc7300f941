//! Schema-driven reply decoder.
//!
//! [`decode`] matches a reply tree against a declared schema and produces
//! a [`FieldTable`]: one slot per schema field, holding the matching
//! attribute or an absent marker. A field is present only when the tree
//! carries a top-level attribute with the same name *and* a kind that
//! satisfies the declared one — a type mismatch counts as absent. The
//! single exception is lossless widening: a 32-bit integer satisfies a
//! declared `Int64`, as peers assembling replies from JSON emit the
//! narrowest integer kind that holds the value.
//!
//! The decoder never recurses on its own. A `Table`-kinded field whose
//! internal shape is itself schema-described is decoded by a second,
//! explicit `decode` call on the extracted sub-tree.

use super::attr::Attr;
use super::schema::{Field, FieldKind};

/// Result of decoding one tree against one schema.
///
/// Borrows the tree; built fresh per decode call and not persisted.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldTable<'a> {
    slots: Vec<(&'static str, Option<&'a Attr>)>,
}

impl<'a> FieldTable<'a> {
    /// The attribute matched for `name`, or `None` when the field was
    /// absent or kind-mismatched (or not part of the schema at all).
    pub fn get(&self, name: &str) -> Option<&'a Attr> {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == name)
            .and_then(|(_, attr)| *attr)
    }

    /// Iterate the raw elements of an array-kinded field.
    ///
    /// Finite and forward-only: callers that need a bounded prefix chain
    /// `.take(n)` and stop early. Yields nothing when the field is absent.
    pub fn array(&self, name: &str) -> impl Iterator<Item = &'a Attr> + use<'a> {
        self.get(name)
            .and_then(Attr::items)
            .unwrap_or_default()
            .iter()
    }
}

/// Match `tree` against `schema`.
///
/// Every schema field gets a slot; lookup failures are recorded as absent
/// rather than raised. A non-table `tree` yields a table with every slot
/// absent.
pub fn decode<'a>(schema: &[Field], tree: &'a Attr) -> FieldTable<'a> {
    let entries = tree.entries().unwrap_or_default();
    let slots = schema
        .iter()
        .map(|field| {
            let found = entries
                .iter()
                .find(|(name, attr)| name == field.name && kind_satisfies(field.kind, attr.kind()))
                .map(|(_, attr)| attr);
            (field.name, found)
        })
        .collect();
    FieldTable { slots }
}

/// A wire kind satisfies a declared kind when they are identical, or
/// when a 32-bit integer arrives where a 64-bit integer was declared
/// (lossless widening; the reverse is rejected).
fn kind_satisfies(declared: FieldKind, wire: FieldKind) -> bool {
    declared == wire || (declared == FieldKind::Int64 && wire == FieldKind::Int32)
}
