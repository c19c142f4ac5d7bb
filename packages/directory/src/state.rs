//! # DirectoryState — the mirror between the UI and the remote collection
//!
//! This module is the core of the user directory. [`DirectoryState`] owns the
//! in-memory mirror of the remote collection plus the transient
//! [`FormDraft`], and is the only component allowed to call the mutating
//! operations of its injected [`RecordStore`]. The rendering surface drives
//! it through intent methods and re-reads the accessors to redraw.
//!
//! ## Consistency rule
//!
//! The mirror is updated only after the remote call confirms success. A
//! failed call leaves the mirror and the draft exactly as they were, so the
//! user can correct the input or simply retry. No failure propagates out of
//! this type; everything becomes the single [`ErrorSignal`] the surface
//! displays.
//!
//! ## Intents
//!
//! | Method | Remote call | On success | On failure |
//! |--------|-------------|------------|------------|
//! | [`initialize`](DirectoryState::initialize) | fetch all | mirror replaced | mirror stays empty, [`ErrorSignal::StoreUnavailable`] |
//! | [`update_draft`](DirectoryState::update_draft) | none | draft field overwritten | — |
//! | [`begin_edit`](DirectoryState::begin_edit) | none | draft loaded from the record | — |
//! | [`submit`](DirectoryState::submit) | insert or replace, after validation | mirror committed, draft cleared | draft retained; [`ErrorSignal::InvalidInput`], [`ErrorSignal::StaleEdit`] or [`ErrorSignal::StoreUnavailable`] |
//! | [`delete_record`](DirectoryState::delete_record) | remove | mirror entry dropped (also on an already-absent id) | mirror untouched, [`ErrorSignal::StoreUnavailable`] |
//!
//! ## Threading model
//!
//! Intents take `&mut self`, so the borrow checker enforces the one-intent-
//! at-a-time discipline the design assumes: each intent runs to completion,
//! including its single remote call, before the next one is accepted. No
//! cancellation and no timeout exist at this layer.

use serde::{Deserialize, Serialize};

use store::{RecordId, RecordStore, StoreError, UserRecord};

use crate::draft::{DraftField, FormDraft};

/// User-visible failure signal, displayed verbatim by the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSignal {
    /// The draft failed validation; no remote call was attempted.
    InvalidInput,
    /// The record being edited no longer exists in the store.
    StaleEdit,
    /// A remote call could not complete; retrying is safe.
    StoreUnavailable,
}

impl std::fmt::Display for ErrorSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ErrorSignal::InvalidInput => "Please enter a valid name and age.",
            ErrorSignal::StaleEdit => {
                "That user no longer exists and has been removed from the list."
            }
            ErrorSignal::StoreUnavailable => {
                "The user directory is unreachable. Please try again."
            }
        };
        write!(f, "{message}")
    }
}

/// In-memory mirror of the user collection plus the staged form input.
pub struct DirectoryState<S: RecordStore> {
    store: S,
    records: Vec<UserRecord>,
    draft: FormDraft,
    error: Option<ErrorSignal>,
}

impl<S: RecordStore> DirectoryState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            records: Vec::new(),
            draft: FormDraft::default(),
            error: None,
        }
    }

    /// The mirror, in the order the store returned the records (inserts
    /// append at the end).
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// The staged form input.
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// The current failure signal, if any.
    pub fn error(&self) -> Option<ErrorSignal> {
        self.error
    }

    /// Whether submission will replace an existing record. The surface
    /// switches its button label ("Update" vs "Create") on this.
    pub fn is_editing(&self) -> bool {
        self.draft.editing_id.is_some()
    }

    /// Populate the mirror from the remote collection. On failure the
    /// mirror stays empty and the surface shows the signal.
    pub async fn initialize(&mut self) {
        match self.store.fetch_all().await {
            Ok(records) => {
                self.records = records;
            }
            Err(err) => {
                tracing::warn!("Initial fetch failed: {}", err);
                self.error = Some(ErrorSignal::StoreUnavailable);
            }
        }
    }

    /// Overwrite one draft field with the latest widget value. Purely
    /// local; no validation happens until [`submit`](Self::submit).
    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Stage a record for editing: its fields fill the draft and the next
    /// submission replaces it in place.
    pub fn begin_edit(&mut self, record: &UserRecord) {
        self.draft.load(record);
    }

    /// Validate the draft, perform the remote insert or replace, and commit
    /// the result to the mirror. Any success clears the draft; any failure
    /// retains it so the user can correct or retry.
    pub async fn submit(&mut self) {
        let Some(new) = self.draft.validate() else {
            self.error = Some(ErrorSignal::InvalidInput);
            return;
        };
        self.error = None;

        match self.draft.editing_id.clone() {
            Some(id) => match self.store.replace_fields(&id, new.clone()).await {
                Ok(()) => {
                    if let Some(entry) =
                        self.records.iter_mut().find(|r| r.id == id)
                    {
                        entry.name = new.name;
                        entry.age = new.age;
                    }
                    self.draft.clear();
                }
                Err(StoreError::NotFound) => {
                    tracing::warn!("Record {} vanished while being edited", id);
                    self.records.retain(|r| r.id != id);
                    self.error = Some(ErrorSignal::StaleEdit);
                }
                Err(StoreError::Unavailable { reason }) => {
                    tracing::warn!("Replace failed, draft kept for retry: {}", reason);
                    self.error = Some(ErrorSignal::StoreUnavailable);
                }
            },
            // insert has no not-found case; any failure means unreachable
            None => match self.store.insert(new).await {
                Ok(record) => {
                    self.records.push(record);
                    self.draft.clear();
                }
                Err(err) => {
                    tracing::warn!("Insert failed, draft kept for retry: {}", err);
                    self.error = Some(ErrorSignal::StoreUnavailable);
                }
            },
        }
    }

    /// Remove a record from the store and the mirror. A second delete of
    /// the same id is a no-op: the store reporting it absent still drops
    /// any mirror entry.
    pub async fn delete_record(&mut self, id: &RecordId) {
        match self.store.remove(id).await {
            Ok(()) | Err(StoreError::NotFound) => {
                self.records.retain(|r| r.id != *id);
            }
            Err(StoreError::Unavailable { reason }) => {
                tracing::warn!("Delete failed, mirror left untouched: {}", reason);
                self.error = Some(ErrorSignal::StoreUnavailable);
            }
        }
    }
}
