//! # HTTP-backed record store
//!
//! [`RestStore`] speaks the generic document-collection API over HTTP using
//! `reqwest`. It is the production backend; construct it from a
//! [`StoreConfig`] carrying the remote base URL and collection name.
//!
//! ## Endpoints
//!
//! | Method | Route | Operation |
//! |--------|-------|-----------|
//! | `GET` | `/collections/{name}/documents` | fetch all |
//! | `POST` | `/collections/{name}/documents` | insert (response body carries the allocated id) |
//! | `PATCH` | `/collections/{name}/documents/{id}` | replace fields |
//! | `DELETE` | `/collections/{name}/documents/{id}` | remove |
//!
//! Transport errors and non-2xx statuses map to [`StoreError::Unavailable`];
//! a `404 Not Found` on the id-addressed routes maps to
//! [`StoreError::NotFound`].

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::RecordStore;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{NewUser, RecordId, UserRecord};

/// Wire shape of a stored document.
#[derive(Debug, Deserialize)]
struct Document {
    id: String,
    name: String,
    age: u32,
}

impl From<Document> for UserRecord {
    fn from(doc: Document) -> Self {
        UserRecord {
            id: RecordId::new(doc.id),
            name: doc.name,
            age: doc.age,
        }
    }
}

/// Wire shape of the fields sent on insert and replace.
#[derive(Debug, Serialize)]
struct Fields<'a> {
    name: &'a str,
    age: u32,
}

/// HTTP-backed RecordStore for a remote document-collection API.
#[derive(Clone, Debug)]
pub struct RestStore {
    http: Client,
    base_url: String,
    collection: String,
}

impl RestStore {
    /// Build a store from configuration. Fails with
    /// [`StoreError::Unavailable`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if config.remote.timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(
                config.remote.timeout_secs.into(),
            ));
        }
        let http = builder.build().map_err(StoreError::unavailable)?;
        Ok(Self {
            http,
            base_url: config.remote.base_url.trim_end_matches('/').to_string(),
            collection: config.collection.name.clone(),
        })
    }

    fn documents_url(&self) -> String {
        format!("{}/collections/{}/documents", self.base_url, self.collection)
    }

    fn document_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.documents_url(), id.as_str())
    }

    /// Map a response status to the store error taxonomy, treating 404 as
    /// an absent record rather than an unreachable store.
    fn check_status(resp: &reqwest::Response) -> Result<(), StoreError> {
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            return Err(StoreError::unavailable(format!(
                "unexpected status {status}"
            )));
        }
        Ok(())
    }
}

impl RecordStore for RestStore {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let resp = self
            .http
            .get(self.documents_url())
            .send()
            .await
            .map_err(StoreError::unavailable)?;
        if !resp.status().is_success() {
            return Err(StoreError::unavailable(format!(
                "unexpected status {}",
                resp.status()
            )));
        }
        let docs: Vec<Document> =
            resp.json().await.map_err(StoreError::unavailable)?;
        Ok(docs.into_iter().map(UserRecord::from).collect())
    }

    async fn insert(&self, new: NewUser) -> Result<UserRecord, StoreError> {
        let resp = self
            .http
            .post(self.documents_url())
            .json(&Fields {
                name: &new.name,
                age: new.age,
            })
            .send()
            .await
            .map_err(StoreError::unavailable)?;
        if !resp.status().is_success() {
            return Err(StoreError::unavailable(format!(
                "unexpected status {}",
                resp.status()
            )));
        }
        let doc: Document = resp.json().await.map_err(StoreError::unavailable)?;
        Ok(doc.into())
    }

    async fn replace_fields(
        &self,
        id: &RecordId,
        new: NewUser,
    ) -> Result<(), StoreError> {
        let resp = self
            .http
            .patch(self.document_url(id))
            .json(&Fields {
                name: &new.name,
                age: new.age,
            })
            .send()
            .await
            .map_err(StoreError::unavailable)?;
        Self::check_status(&resp)
    }

    async fn remove(&self, id: &RecordId) -> Result<(), StoreError> {
        let resp = self
            .http
            .delete(self.document_url(id))
            .send()
            .await
            .map_err(StoreError::unavailable)?;
        Self::check_status(&resp)
    }
}
