use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod ports;

/// Key of a stored document, assigned by the backing store on insert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId(id.to_string())
    }
}

/// One untyped document field.
///
/// The store has no schema; every field takes one of these shapes.
/// `Timestamp` only appears on the read path, when the backend hands back
/// its native temporal type instead of the epoch-millisecond integer the
/// codecs write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    StrList(Vec<String>),
}

impl FieldValue {
    /// Both temporal encodings decode to the same instant; anything else
    /// reads as the Unix epoch.
    pub fn as_timestamp(&self) -> DateTime<Utc> {
        match self {
            FieldValue::Timestamp(at) => *at,
            FieldValue::Int(millis) => {
                DateTime::from_timestamp_millis(*millis).unwrap_or(DateTime::UNIX_EPOCH)
            }
            _ => DateTime::UNIX_EPOCH,
        }
    }

    /// Millisecond view of either temporal encoding, used for ordering.
    pub(crate) fn timestamp_millis(&self) -> Option<i64> {
        match self {
            FieldValue::Timestamp(at) => Some(at.timestamp_millis()),
            FieldValue::Int(millis) => Some(*millis),
            _ => None,
        }
    }
}

pub type FieldMap = BTreeMap<String, FieldValue>;

/// A document as read back from the store: its key plus its raw fields.
/// The key is never duplicated into the field map.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub fields: FieldMap,
}

impl StoredDocument {
    pub fn new(id: impl Into<DocumentId>, fields: FieldMap) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Missing or non-string fields read as the empty string.
    pub fn str_field(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(FieldValue::Str(value)) => value.clone(),
            _ => String::new(),
        }
    }

    /// Optional string: absent or empty reads as `None`.
    pub fn opt_str_field(&self, name: &str) -> Option<String> {
        let value = self.str_field(name);
        (!value.is_empty()).then_some(value)
    }

    /// Integers may arrive in a 32-bit or 64-bit representation; both
    /// normalize here. Missing fields read as zero.
    pub fn i32_field(&self, name: &str) -> i32 {
        match self.fields.get(name) {
            Some(FieldValue::Int(value)) => *value as i32,
            _ => 0,
        }
    }

    /// Timestamps are written as epoch milliseconds but may come back as
    /// the store's native temporal type; both decode to the same instant.
    /// Missing fields read as the Unix epoch.
    pub fn timestamp_field(&self, name: &str) -> DateTime<Utc> {
        match self.fields.get(name) {
            Some(value) => value.as_timestamp(),
            None => DateTime::UNIX_EPOCH,
        }
    }

    /// Missing or non-list fields read as the empty list.
    pub fn str_list_field(&self, name: &str) -> Vec<String> {
        match self.fields.get(name) {
            Some(FieldValue::StrList(values)) => values.clone(),
            _ => Vec::new(),
        }
    }
}

/// Conversion between a typed entity and its untyped document form.
///
/// `encode` writes an entry for every entity field, substituting a defined
/// default (the empty string) for absent optionals, so documents stay
/// self-describing. `decode` is total: a field that is missing or carries
/// an unexpected shape reads as its type-appropriate zero value, never an
/// error. Timestamps round-trip at millisecond granularity.
pub trait DocumentCodec: Sized {
    fn encode(&self) -> FieldMap;
    fn decode(doc: &StoredDocument) -> Self;
}

/// Epoch-millisecond encoding used for every stored timestamp.
pub fn timestamp_value(at: DateTime<Utc>) -> FieldValue {
    FieldValue::Int(at.timestamp_millis())
}

/// Truncate to the millisecond granularity the store round-trips, so an
/// entity handed back from `create` compares equal to a later read.
pub fn millis_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or(DateTime::UNIX_EPOCH)
}
