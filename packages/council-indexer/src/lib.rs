pub mod database;
pub mod executor;
pub mod handlers;

pub use database::{Database, MemoryDatabase};
pub use executor::{EventExecutor, Executor};

use council_indexer_schema::IndexerSchemaError;
use council_indexer_types::event::EventDecodeError;
use thiserror::Error;

pub mod prelude {
    pub use crate::database::{load, save, Database, MemoryDatabase};
    pub use crate::executor::{EventExecutor, Executor};
    pub use crate::handlers::{
        handle_council_proposed, handle_council_voted, handle_transfer,
    };
    pub use crate::{IndexerError, IndexerResult};
    pub use council_indexer_lib::{Manifest, ManifestError};
    pub use council_indexer_schema::{
        event_scoped_id, Account, Councillor, Entity, Proposal, Transfer, VoteHistory,
    };
    pub use council_indexer_types::prelude::*;
}

pub type IndexerResult<T> = core::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Event decode error: {0:?}")]
    DecodeError(#[from] EventDecodeError),
    #[error("Indexer schema error: {0:?}")]
    SchemaError(#[from] IndexerSchemaError),
    #[error("Manifest error: {0:?}")]
    ManifestError(#[from] council_indexer_lib::ManifestError),
    #[error("Database error: {0}")]
    DatabaseError(String),
}
