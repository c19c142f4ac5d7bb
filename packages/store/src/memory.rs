use std::sync::{Arc, Mutex};

use crate::client::RecordStore;
use crate::error::StoreError;
use crate::models::{NewUser, RecordId, UserRecord};

/// In-memory RecordStore for testing and native fallback.
///
/// Identifiers are allocated sequentially (`mem-1`, `mem-2`, ...). The
/// [`set_offline`](MemoryStore::set_offline) switch makes every subsequent
/// call fail with [`StoreError::Unavailable`], which is how tests exercise
/// outage handling one layer up.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<UserRecord>>>,
    next_id: Arc<Mutex<u64>>,
    offline: Arc<Mutex<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an unreachable remote: while offline, every operation
    /// returns [`StoreError::Unavailable`] without touching the records.
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if *self.offline.lock().unwrap() {
            Err(StoreError::unavailable("memory store is offline"))
        } else {
            Ok(())
        }
    }
}

impl RecordStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.check_online()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn insert(&self, new: NewUser) -> Result<UserRecord, StoreError> {
        self.check_online()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let record = UserRecord {
            id: RecordId::new(format!("mem-{}", *next_id)),
            name: new.name,
            age: new.age,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn replace_fields(
        &self,
        id: &RecordId,
        new: NewUser,
    ) -> Result<(), StoreError> {
        self.check_online()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(StoreError::NotFound)?;
        record.name = new.name;
        record.age = new.age;
        Ok(())
    }

    async fn remove(&self, id: &RecordId) -> Result<(), StoreError> {
        self.check_online()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != *id);
        if records.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> NewUser {
        NewUser {
            name: "Ann".to_string(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_insert_allocates_fresh_ids() {
        let store = MemoryStore::new();

        let a = store.insert(ann()).await.unwrap();
        let b = store
            .insert(NewUser {
                name: "Ben".to_string(),
                age: 41,
            })
            .await
            .unwrap();

        assert_ne!(a.id, b.id);

        let all = store.fetch_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_replace_overwrites_fields() {
        let store = MemoryStore::new();
        let record = store.insert(ann()).await.unwrap();

        store
            .replace_fields(
                &record.id,
                NewUser {
                    name: "Ann".to_string(),
                    age: 31,
                },
            )
            .await
            .unwrap();

        let all = store.fetch_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);
        assert_eq!(all[0].age, 31);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let store = MemoryStore::new();
        let ghost = RecordId::new("mem-999");

        let err = store.replace_fields(&ghost, ann()).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound);

        let err = store.remove(&ghost).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn test_offline_fails_every_call() {
        let store = MemoryStore::new();
        let record = store.insert(ann()).await.unwrap();

        store.set_offline(true);
        assert!(store.fetch_all().await.is_err());
        assert!(store.insert(ann()).await.is_err());
        assert!(store.replace_fields(&record.id, ann()).await.is_err());
        assert!(store.remove(&record.id).await.is_err());

        // Back online, nothing was lost.
        store.set_offline(false);
        assert_eq!(store.fetch_all().await.unwrap(), vec![record]);
    }
}
