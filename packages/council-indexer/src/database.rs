use crate::IndexerResult;
use async_trait::async_trait;
use council_indexer_schema::Entity;
use council_indexer_types::TypeId;
use std::collections::HashMap;

/// The backing key-value store boundary.
///
/// Rows are raw bytes keyed by `(type id, identity string)`. `put_object` is
/// an upsert; there are no deletes and no range queries. The host framework
/// supplies the production implementation; [`MemoryDatabase`] backs tests and
/// embedded use.
#[async_trait]
pub trait Database: Send {
    async fn get_object(
        &mut self,
        type_id: i64,
        object_id: &str,
    ) -> IndexerResult<Option<Vec<u8>>>;

    async fn put_object(
        &mut self,
        type_id: i64,
        object_id: &str,
        bytes: Vec<u8>,
    ) -> IndexerResult<()>;
}

/// Load a record by its identity, or `None` if no row exists.
pub async fn load<T, D>(db: &mut D, object_id: &str) -> IndexerResult<Option<T>>
where
    T: Entity,
    D: Database + ?Sized,
{
    match db.get_object(T::type_id(), object_id).await? {
        Some(bytes) => Ok(Some(T::from_row(&bytes)?)),
        None => Ok(None),
    }
}

/// Persist a record under its identity, inserting or replacing the prior row.
pub async fn save<T, D>(db: &mut D, record: &T) -> IndexerResult<()>
where
    T: Entity,
    D: Database + ?Sized,
{
    db.put_object(T::type_id(), &record.id(), record.to_row()?)
        .await
}

/// In-memory object store.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    objects: HashMap<(i64, String), Vec<u8>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held, across all entity types.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    async fn get_object(
        &mut self,
        type_id: i64,
        object_id: &str,
    ) -> IndexerResult<Option<Vec<u8>>> {
        Ok(self.objects.get(&(type_id, object_id.to_string())).cloned())
    }

    async fn put_object(
        &mut self,
        type_id: i64,
        object_id: &str,
        bytes: Vec<u8>,
    ) -> IndexerResult<()> {
        self.objects.insert((type_id, object_id.to_string()), bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_indexer_schema::{event_scoped_id, Account, Transfer};

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let mut db = MemoryDatabase::new();
        let transfer = Transfer::new(event_scoped_id(10, 0), 10, "5FHneW46".into(), 7);

        save(&mut db, &transfer).await.unwrap();

        let loaded: Transfer = load(&mut db, "10-0").await.unwrap().unwrap();
        assert_eq!(loaded, transfer);
    }

    #[tokio::test]
    async fn test_get_absent_object_is_none() {
        let mut db = MemoryDatabase::new();
        assert_eq!(load::<Account, _>(&mut db, "missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_prior_row() {
        let mut db = MemoryDatabase::new();
        save(&mut db, &Transfer::new("10-0".into(), 10, "5FHneW46".into(), 7))
            .await
            .unwrap();
        save(&mut db, &Transfer::new("10-0".into(), 10, "5FHneW46".into(), 9))
            .await
            .unwrap();

        let loaded: Transfer = load(&mut db, "10-0").await.unwrap().unwrap();
        assert_eq!(loaded.amount, 9);
        assert_eq!(db.len(), 1);
    }

    #[tokio::test]
    async fn test_identities_do_not_collide_across_types() {
        let mut db = MemoryDatabase::new();
        save(&mut db, &Account::new("10-0".into())).await.unwrap();
        save(&mut db, &Transfer::new("10-0".into(), 10, "5FHneW46".into(), 7))
            .await
            .unwrap();

        assert_eq!(db.len(), 2);
        assert!(load::<Account, _>(&mut db, "10-0").await.unwrap().is_some());
    }
}
