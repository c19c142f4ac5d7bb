//! # Domain models for user records
//!
//! Defines the data structures exchanged between a [`crate::RecordStore`]
//! implementation and the directory state that sits on top of it. These types
//! are `Serialize + Deserialize` so they can cross a client/server boundary
//! unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`RecordId`] | The opaque identifier the remote collection assigns to a document at creation time. Immutable and unique within the collection; this crate never inspects its contents. |
//! | [`UserRecord`] | A single user document as stored in the collection: its id plus the `name`/`age` fields. `age` is numeric on every path — text-to-number conversion happens before a record is built, never after. |
//! | [`NewUser`] | A validated `name`/`age` pair that has not been persisted yet. Produced by form validation, consumed by insert and replace operations. |

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the remote collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a raw identifier string received from the store.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw identifier, e.g. for building request paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user document held in the remote collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned identifier, immutable after creation.
    pub id: RecordId,
    /// Display name, non-empty.
    pub name: String,
    /// Age in years, strictly positive.
    pub age: u32,
}

/// A validated name/age pair awaiting insert or replace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub age: u32,
}
