//! # RecordStore — the contract with the remote collection
//!
//! [`RecordStore`] is the sole channel between this application and the
//! remote document collection. It carries no business logic: each method maps
//! to exactly one remote call against a generic document-collection API
//! (fetch-all, add-document, update-document, delete-document), and no
//! caching happens at this layer — the in-memory mirror lives one layer up,
//! in the `directory` crate.
//!
//! ## Operations
//!
//! | Method | Remote call | Failure modes |
//! |--------|-------------|---------------|
//! | [`fetch_all`](RecordStore::fetch_all) | fetch every document in the collection, in store-defined order | [`StoreError::Unavailable`] |
//! | [`insert`](RecordStore::insert) | persist the fields and allocate a fresh identifier; returns the fully-identified record | [`StoreError::Unavailable`] |
//! | [`replace_fields`](RecordStore::replace_fields) | overwrite exactly `name` and `age` of the addressed document | [`StoreError::Unavailable`], [`StoreError::NotFound`] |
//! | [`remove`](RecordStore::remove) | delete the addressed document | [`StoreError::Unavailable`], [`StoreError::NotFound`] (callers treat a second delete as a no-op) |
//!
//! Implementations live in sibling modules ([`crate::MemoryStore`], and
//! [`crate::RestStore`] behind the `rest` feature).

use crate::error::StoreError;
use crate::models::{NewUser, RecordId, UserRecord};

/// Async interface to a remote user-record collection.
pub trait RecordStore {
    /// Fetch every record currently in the collection.
    fn fetch_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, StoreError>>;

    /// Persist a new record; the store allocates its identifier.
    fn insert(
        &self,
        new: NewUser,
    ) -> impl std::future::Future<Output = Result<UserRecord, StoreError>>;

    /// Overwrite the `name` and `age` fields of the record at `id`.
    fn replace_fields(
        &self,
        id: &RecordId,
        new: NewUser,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;

    /// Delete the record at `id`.
    fn remove(
        &self,
        id: &RecordId,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
