use crate::event::RawEvent;
use crate::scalar::{BlockNumber, EventIndex};
use serde::{Deserialize, Serialize};

/// A chain event together with its positional metadata: the height of the
/// containing block and the event's index within that block.
///
/// The host block subscription delivers records in ascending
/// `(block_number, index)` order; identities derived from that pair rely on
/// the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub block_number: BlockNumber,
    pub index: EventIndex,
    pub event: RawEvent,
}

impl EventRecord {
    pub fn new(block_number: BlockNumber, index: EventIndex, event: RawEvent) -> Self {
        Self {
            block_number,
            index,
            event,
        }
    }
}
