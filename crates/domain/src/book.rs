//! Book — a record with a system-assigned id and free-form client fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::BookId;

/// Name of the reserved key holding the system-assigned id.
pub const ID_KEY: &str = "id";

/// Client-supplied fields of a book, kept as raw JSON.
pub type Fields = Map<String, Value>;

/// A single book record.
///
/// Serializes flat: `{"id": 1, "title": "Dune", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Book {
    /// Create a book from client fields, dropping any client-provided `id`.
    #[must_use]
    pub fn new(id: BookId, mut fields: Fields) -> Self {
        fields.remove(ID_KEY);
        Self { id, fields }
    }

    /// Shallow-merge `patch` over the existing fields.
    ///
    /// Keys present in `patch` replace existing values, keys absent from it
    /// are left untouched. The `id` key is never overwritten.
    pub fn merge(&mut self, patch: Fields) {
        for (key, value) in patch {
            if key != ID_KEY {
                self.fields.insert(key, value);
            }
        }
    }

    /// Look up a single client field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
