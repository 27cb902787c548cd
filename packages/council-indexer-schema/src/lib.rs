//! # council_indexer_schema
//!
//! The records this indexer derives from chain events, together with the
//! trait that maps a record to the row bytes persisted in the backing store.

pub mod entities;

pub use entities::{Account, Councillor, Proposal, Transfer, VoteHistory};

use council_indexer_types::scalar::{BlockNumber, EventIndex};
use council_indexer_types::TypeId;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Result type used by indexer schema operations.
pub type IndexerSchemaResult<T> = core::result::Result<T, IndexerSchemaError>;

/// Error type used by indexer schema operations.
#[derive(Error, Debug)]
pub enum IndexerSchemaError {
    #[error("Row serialization error: {0:?}")]
    SerializationError(#[from] bincode::Error),
}

/// A record persisted by the indexer, keyed by its identity string within
/// its entity type.
///
/// `save` is an upsert: writing a record under an identity that already
/// exists replaces the prior row.
pub trait Entity:
    Sized + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + TypeId
{
    /// Identity under which this record is persisted.
    fn id(&self) -> String;

    /// Serialize this record into row bytes for the backing store.
    fn to_row(&self) -> IndexerSchemaResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize a record from row bytes fetched from the backing store.
    fn from_row(bytes: &[u8]) -> IndexerSchemaResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Derive the identity of a record keyed by the event occurrence that
/// produced it.
pub fn event_scoped_id(block_number: BlockNumber, index: EventIndex) -> String {
    format!("{block_number}-{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_scoped_id_format() {
        assert_eq!(event_scoped_id(10, 0), "10-0");
        assert_eq!(event_scoped_id(10, 1), "10-1");
    }

    #[test]
    fn test_entity_type_ids_are_distinct() {
        let ids = [
            Account::type_id(),
            Transfer::type_id(),
            Proposal::type_id(),
            VoteHistory::type_id(),
            Councillor::type_id(),
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_row_round_trip() {
        let transfer = Transfer::new(event_scoped_id(100, 2), 100, "5FHneW46".into(), 42);
        let bytes = transfer.to_row().unwrap();
        assert_eq!(Transfer::from_row(&bytes).unwrap(), transfer);
    }
}
