use crate::database::Database;
use crate::handlers;
use crate::IndexerResult;
use async_trait::async_trait;
use council_indexer_lib::Manifest;
use council_indexer_types::block::EventRecord;
use council_indexer_types::event::{EventKind, RuntimeEvent};
use std::collections::HashSet;
use tracing::trace;

#[async_trait]
pub trait Executor
where
    Self: Sized,
{
    async fn handle_events(&mut self, records: Vec<EventRecord>) -> IndexerResult<()>;
}

/// Drives the projection rules over a stream of event records.
///
/// Holds the store exclusively: one event is processed to completion before
/// the next starts, which is what keeps the councillor read-modify-write a
/// single-writer sequence. Callers must supply records in ascending
/// `(block, index)` order; the executor neither reorders nor retries.
pub struct EventExecutor<D: Database> {
    db: D,
    enabled: HashSet<EventKind>,
}

impl<D: Database> EventExecutor<D> {
    /// Executor subscribing to the event kinds the manifest registers.
    pub fn new(db: D, manifest: &Manifest) -> IndexerResult<Self> {
        let enabled = manifest.enabled_kinds()?;
        Ok(Self { db, enabled })
    }

    /// Executor subscribing to every recognized event kind.
    pub fn with_all_kinds(db: D) -> Self {
        let enabled = [
            EventKind::BalancesTransfer,
            EventKind::CouncilProposed,
            EventKind::CouncilVoted,
        ]
        .into_iter()
        .collect();
        Self { db, enabled }
    }

    pub fn database_mut(&mut self) -> &mut D {
        &mut self.db
    }

    pub fn into_database(self) -> D {
        self.db
    }

    async fn handle_event(&mut self, record: &EventRecord) -> IndexerResult<()> {
        let Some(kind) = EventKind::of(&record.event) else {
            trace!(
                "Skipping unrecognized event {}.{}",
                record.event.pallet,
                record.event.method
            );
            return Ok(());
        };

        if !self.enabled.contains(&kind) {
            trace!("Skipping {kind}: not registered in the manifest");
            return Ok(());
        }

        match RuntimeEvent::decode(&record.event)? {
            Some(RuntimeEvent::Transfer(event)) => {
                handlers::handle_transfer(&mut self.db, record, &event).await
            }
            Some(RuntimeEvent::CouncilProposed(event)) => {
                handlers::handle_council_proposed(&mut self.db, record, &event).await
            }
            Some(RuntimeEvent::CouncilVoted(event)) => {
                handlers::handle_council_voted(&mut self.db, record, &event).await
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<D: Database> Executor for EventExecutor<D> {
    /// Process records one at a time, in the order supplied. The first
    /// failure is propagated immediately; the host decides whether to retry
    /// or halt.
    async fn handle_events(&mut self, records: Vec<EventRecord>) -> IndexerResult<()> {
        for record in &records {
            self.handle_event(record).await?;
        }
        Ok(())
    }
}
