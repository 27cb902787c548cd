use crate::scalar::{AccountId, Balance, Hash};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A typed positional payload value, as decoded from the chain's event codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventValue {
    AccountId(AccountId),
    Hash(Hash),
    Balance(Balance),
    Uint(u64),
    Bool(bool),
}

impl EventValue {
    /// Name of the contained scalar, for decode diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            EventValue::AccountId(_) => "AccountId",
            EventValue::Hash(_) => "Hash",
            EventValue::Balance(_) => "Balance",
            EventValue::Uint(_) => "Uint",
            EventValue::Bool(_) => "Bool",
        }
    }
}

/// An event as delivered by the host chain client: the emitting pallet, the
/// event method, and the ordered payload values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub pallet: String,
    pub method: String,
    pub data: Vec<EventValue>,
}

impl RawEvent {
    pub fn new(
        pallet: impl Into<String>,
        method: impl Into<String>,
        data: Vec<EventValue>,
    ) -> Self {
        Self {
            pallet: pallet.into(),
            method: method.into(),
            data,
        }
    }
}

/// The event kinds this indexer recognizes. Everything else is skipped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum EventKind {
    #[strum(serialize = "balances.Transfer")]
    BalancesTransfer,
    #[strum(serialize = "council.Proposed")]
    CouncilProposed,
    #[strum(serialize = "council.Voted")]
    CouncilVoted,
}

impl EventKind {
    /// Match a raw event against the recognized kinds.
    pub fn of(event: &RawEvent) -> Option<Self> {
        match (event.pallet.as_str(), event.method.as_str()) {
            ("balances", "Transfer") => Some(EventKind::BalancesTransfer),
            ("council", "Proposed") => Some(EventKind::CouncilProposed),
            ("council", "Voted") => Some(EventKind::CouncilVoted),
            _ => None,
        }
    }
}

/// Error type returned when an event payload does not match the shape its
/// kind declares.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EventDecodeError {
    #[error("{kind} event expects {expected} payload fields, found {actual}")]
    FieldCount {
        kind: EventKind,
        expected: usize,
        actual: usize,
    },
    #[error("{kind} payload field {index} is a {actual}, expected {expected}")]
    FieldType {
        kind: EventKind,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("{kind} payload field {index} is out of range for {expected}")]
    FieldRange {
        kind: EventKind,
        index: usize,
        expected: &'static str,
    },
}

/// Payload of a `balances.Transfer` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Balance,
}

/// Payload of a `council.Proposed` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilProposedEvent {
    pub account: AccountId,
    pub proposal_index: u32,
    pub proposal_hash: Hash,
    pub threshold: u32,
}

/// Payload of a `council.Voted` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilVotedEvent {
    pub account: AccountId,
    pub proposal_hash: Hash,
    pub approved: bool,
    pub yes_votes: u32,
    pub no_votes: u32,
}

/// A recognized event, decoded into its typed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeEvent {
    Transfer(TransferEvent),
    CouncilProposed(CouncilProposedEvent),
    CouncilVoted(CouncilVotedEvent),
}

impl RuntimeEvent {
    /// Decode a raw event into its typed payload. Returns `Ok(None)` for
    /// event kinds this indexer does not recognize; payloads whose shape
    /// does not match their kind fail with an [`EventDecodeError`].
    pub fn decode(event: &RawEvent) -> Result<Option<Self>, EventDecodeError> {
        let Some(kind) = EventKind::of(event) else {
            return Ok(None);
        };

        let decoded = match kind {
            EventKind::BalancesTransfer => {
                expect_len(kind, &event.data, 3)?;
                RuntimeEvent::Transfer(TransferEvent {
                    from: account_id(kind, &event.data, 0)?,
                    to: account_id(kind, &event.data, 1)?,
                    amount: balance(kind, &event.data, 2)?,
                })
            }
            EventKind::CouncilProposed => {
                expect_len(kind, &event.data, 4)?;
                RuntimeEvent::CouncilProposed(CouncilProposedEvent {
                    account: account_id(kind, &event.data, 0)?,
                    proposal_index: uint32(kind, &event.data, 1)?,
                    proposal_hash: hash(kind, &event.data, 2)?,
                    threshold: uint32(kind, &event.data, 3)?,
                })
            }
            EventKind::CouncilVoted => {
                expect_len(kind, &event.data, 5)?;
                RuntimeEvent::CouncilVoted(CouncilVotedEvent {
                    account: account_id(kind, &event.data, 0)?,
                    proposal_hash: hash(kind, &event.data, 1)?,
                    approved: boolean(kind, &event.data, 2)?,
                    yes_votes: uint32(kind, &event.data, 3)?,
                    no_votes: uint32(kind, &event.data, 4)?,
                })
            }
        };

        Ok(Some(decoded))
    }
}

fn expect_len(
    kind: EventKind,
    data: &[EventValue],
    expected: usize,
) -> Result<(), EventDecodeError> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(EventDecodeError::FieldCount {
            kind,
            expected,
            actual: data.len(),
        })
    }
}

fn field_type_error(
    kind: EventKind,
    index: usize,
    expected: &'static str,
    actual: &EventValue,
) -> EventDecodeError {
    EventDecodeError::FieldType {
        kind,
        index,
        expected,
        actual: actual.type_name(),
    }
}

fn account_id(
    kind: EventKind,
    data: &[EventValue],
    index: usize,
) -> Result<AccountId, EventDecodeError> {
    match &data[index] {
        EventValue::AccountId(id) => Ok(id.clone()),
        other => Err(field_type_error(kind, index, "AccountId", other)),
    }
}

fn hash(kind: EventKind, data: &[EventValue], index: usize) -> Result<Hash, EventDecodeError> {
    match &data[index] {
        EventValue::Hash(h) => Ok(h.clone()),
        other => Err(field_type_error(kind, index, "Hash", other)),
    }
}

fn balance(
    kind: EventKind,
    data: &[EventValue],
    index: usize,
) -> Result<Balance, EventDecodeError> {
    match &data[index] {
        EventValue::Balance(b) => Ok(*b),
        // Small amounts may arrive as plain unsigned values.
        EventValue::Uint(u) => Ok(*u as Balance),
        other => Err(field_type_error(kind, index, "Balance", other)),
    }
}

fn uint32(kind: EventKind, data: &[EventValue], index: usize) -> Result<u32, EventDecodeError> {
    match &data[index] {
        EventValue::Uint(u) => u32::try_from(*u).map_err(|_| EventDecodeError::FieldRange {
            kind,
            index,
            expected: "u32",
        }),
        other => Err(field_type_error(kind, index, "Uint", other)),
    }
}

fn boolean(kind: EventKind, data: &[EventValue], index: usize) -> Result<bool, EventDecodeError> {
    match &data[index] {
        EventValue::Bool(b) => Ok(*b),
        other => Err(field_type_error(kind, index, "Bool", other)),
    }
}
