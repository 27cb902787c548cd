/// Scalar for an SS58-encoded account address.
pub type AccountId = String;

/// Scalar for a hex-encoded 256-bit hash.
pub type Hash = String;

/// Scalar for a balance amount.
pub type Balance = u128;

/// Scalar for a block height.
pub type BlockNumber = u64;

/// Scalar for the index of an event within its containing block.
pub type EventIndex = u32;
