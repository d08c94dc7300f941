//! Attribute tree — the bus's self-describing wire value.
//!
//! An [`Attr`] is either a leaf (string, 32-bit or 64-bit integer) or a
//! container (ordered array, or ordered table of named sub-attributes).
//! Replies are read through the typed accessors, which return `None` on a
//! kind mismatch instead of panicking.
//!
//! Outbound request payloads are assembled with [`TableBuilder`]. The
//! built tree is an owned value, so it is released on every exit path of
//! a call — success or failure — without explicit cleanup.

use serde_json::Value;

use super::schema::FieldKind;

/// A node of the wire attribute tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// UTF-8 string leaf.
    Str(String),
    /// 32-bit integer leaf.
    Int32(i32),
    /// 64-bit integer leaf.
    Int64(i64),
    /// Ordered list of sub-attributes.
    Array(Vec<Attr>),
    /// Ordered table of named sub-attributes.
    Table(Vec<(String, Attr)>),
}

impl Attr {
    /// Wire kind of this node.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Str(_) => FieldKind::String,
            Self::Int32(_) => FieldKind::Int32,
            Self::Int64(_) => FieldKind::Int64,
            Self::Array(_) => FieldKind::Array,
            Self::Table(_) => FieldKind::Table,
        }
    }

    /// String payload, if this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Signed 32-bit payload.
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// 32-bit payload reinterpreted as unsigned, as the bus convention
    /// stores unsigned counters in the signed wire slot.
    pub const fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Int32(v) => Some(*v as u32),
            _ => None,
        }
    }

    /// Signed 64-bit payload. A 32-bit leaf widens losslessly, matching
    /// the decoder's acceptance of `Int32` where a schema declares
    /// `Int64`.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            Self::Int32(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// 64-bit payload reinterpreted as unsigned; 32-bit leaves widen
    /// (sign-extended) first.
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int64(v) => Some(*v as u64),
            Self::Int32(v) => Some(*v as i64 as u64),
            _ => None,
        }
    }

    /// Sub-attributes of an array node.
    pub fn items(&self) -> Option<&[Attr]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Named sub-attributes of a table node, in wire order.
    pub fn entries(&self) -> Option<&[(String, Attr)]> {
        match self {
            Self::Table(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a named sub-attribute of a table node (first match wins).
    pub fn get(&self, name: &str) -> Option<&Attr> {
        self.entries()?
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, attr)| attr)
    }

    /// Convert a JSON value into an attribute tree.
    ///
    /// Integers that fit in 32 bits map to [`Attr::Int32`], wider ones to
    /// [`Attr::Int64`]; booleans map to `Int32` 0/1 as the bus has no
    /// boolean kind. The narrowing is harmless on the decode side, which
    /// widens `Int32` to satisfy an `Int64` schema field. Returns `None`
    /// for values the wire format cannot carry (null, floating point);
    /// container entries that map to `None` are dropped.
    pub fn from_json(value: &Value) -> Option<Attr> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Int32(i32::from(*b))),
            Value::Number(n) => {
                let v = n.as_i64()?;
                Some(i32::try_from(v).map_or(Self::Int64(v), Self::Int32))
            }
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Array(items) => Some(Self::Array(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Value::Object(map) => Some(Self::Table(
                map.iter()
                    .filter_map(|(k, v)| Some((k.clone(), Self::from_json(v)?)))
                    .collect(),
            )),
        }
    }

    /// Render this attribute tree as JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.clone()),
            Self::Int32(v) => Value::from(*v),
            Self::Int64(v) => Value::from(*v),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Table(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Builder for an outbound request table.
///
/// Analogue of the bus's message buffer: acquired immediately before
/// encoding, consumed by `build`, and dropped with the call on every
/// outcome.
#[derive(Debug, Default)]
pub struct TableBuilder {
    entries: Vec<(String, Attr)>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string field.
    pub fn string(mut self, name: &str, value: &str) -> Self {
        self.entries.push((name.to_owned(), Attr::Str(value.to_owned())));
        self
    }

    /// Append a 32-bit integer field.
    pub fn int32(mut self, name: &str, value: i32) -> Self {
        self.entries.push((name.to_owned(), Attr::Int32(value)));
        self
    }

    /// Append a 64-bit integer field.
    pub fn int64(mut self, name: &str, value: i64) -> Self {
        self.entries.push((name.to_owned(), Attr::Int64(value)));
        self
    }

    /// Append an already-built sub-attribute.
    pub fn attr(mut self, name: &str, value: Attr) -> Self {
        self.entries.push((name.to_owned(), value));
        self
    }

    /// Finish the table.
    pub fn build(self) -> Attr {
        Attr::Table(self.entries)
    }
}
