//! Projection rules: one per recognized event kind, each a mapping from an
//! event plus current store state to one or more record writes. Handlers
//! assume serial delivery; the executor holds the store's only mutable
//! borrow while a rule runs.

use crate::database::{load, save, Database};
use crate::IndexerResult;
use council_indexer_schema::{
    event_scoped_id, Account, Councillor, Proposal, Transfer, VoteHistory,
};
use council_indexer_types::block::EventRecord;
use council_indexer_types::event::{
    CouncilProposedEvent, CouncilVotedEvent, TransferEvent,
};
use council_indexer_types::scalar::AccountId;
use tracing::debug;

/// Project a `balances.Transfer` event.
///
/// Materializes the recipient's Account on first sight (the sender is not
/// materialized), then writes the Transfer row unconditionally. Redelivery
/// of the same event overwrites the row with identical content.
pub async fn handle_transfer<D: Database>(
    db: &mut D,
    record: &EventRecord,
    event: &TransferEvent,
) -> IndexerResult<()> {
    if load::<Account, _>(db, &event.to).await?.is_none() {
        save(db, &Account::new(event.to.clone())).await?;
    }

    let transfer = Transfer::new(
        event_scoped_id(record.block_number, record.index),
        record.block_number,
        event.to.clone(),
        event.amount,
    );
    debug!("Indexed transfer {} to {}", transfer.id, transfer.recipient);
    save(db, &transfer).await
}

/// Project a `council.Proposed` event.
///
/// The Proposal is keyed by its hash; a repeat event carrying the same hash
/// overwrites the prior record.
pub async fn handle_council_proposed<D: Database>(
    db: &mut D,
    record: &EventRecord,
    event: &CouncilProposedEvent,
) -> IndexerResult<()> {
    let proposal = Proposal {
        id: event.proposal_hash.clone(),
        index: event.proposal_index.to_string(),
        account: event.account.clone(),
        hash: event.proposal_hash.clone(),
        vote_threshold: event.threshold.to_string(),
        block: record.block_number,
    };
    debug!("Indexed proposal {}", proposal.id);
    save(db, &proposal).await
}

/// Project a `council.Voted` event.
///
/// Counts the vote against the councillor's running total, then writes the
/// VoteHistory row. The proposal reference is soft: the vote is recorded
/// whether or not a Proposal row exists for the hash.
pub async fn handle_council_voted<D: Database>(
    db: &mut D,
    record: &EventRecord,
    event: &CouncilVotedEvent,
) -> IndexerResult<()> {
    let id = event_scoped_id(record.block_number, record.index);

    // A redelivered vote must not bump the councillor's counter again.
    if load::<VoteHistory, _>(db, &id).await?.is_some() {
        debug!("Vote {id} already indexed, skipping");
        return Ok(());
    }

    ensure_councillor(db, &event.account).await?;

    let vote = VoteHistory {
        id,
        proposal_hash: event.proposal_hash.clone(),
        approved_vote: event.approved,
        councillor: event.account.clone(),
        voted_yes: event.yes_votes,
        voted_no: event.no_votes,
        block: record.block_number,
    };
    debug!("Indexed vote {} by {}", vote.id, vote.councillor);
    save(db, &vote).await
}

/// Ensure a Councillor record exists for this address, then count the vote.
async fn ensure_councillor<D: Database>(db: &mut D, account: &AccountId) -> IndexerResult<()> {
    let mut councillor = load::<Councillor, _>(db, account)
        .await?
        .unwrap_or_else(|| Councillor::new(account.clone()));
    councillor.number_of_votes += 1;
    save(db, &councillor).await
}
