//! Declarative field schemas.
//!
//! A schema is a plain `&[Field]` slice: one entry per expected top-level
//! field, each with a name and a fixed wire kind. The kind is set when the
//! schema is declared and is never inferred from incoming data.

/// Wire kind of a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string leaf.
    String,
    /// 32-bit integer leaf.
    Int32,
    /// 64-bit integer leaf.
    Int64,
    /// Named table of sub-attributes.
    Table,
    /// Ordered list of sub-attributes.
    Array,
}

/// One expected field: a name plus its declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name as it appears on the wire.
    pub name: &'static str,
    /// Declared kind; attributes of any other kind are treated as absent.
    pub kind: FieldKind,
}

impl Field {
    /// Declare a field.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Check the schema invariant: field names are unique.
///
/// Intended for tests and debug assertions; the decoder itself tolerates
/// duplicates by letting the first entry win.
pub fn names_unique(schema: &[Field]) -> bool {
    schema
        .iter()
        .enumerate()
        .all(|(i, f)| schema[..i].iter().all(|prev| prev.name != f.name))
}
