pub mod block;
pub mod event;
pub mod scalar;

use sha2::{Digest, Sha256};

pub const COUNCIL_TYPES_NAMESPACE: &str = "council";

pub trait TypeId {
    fn type_id() -> i64;
}

pub mod prelude {
    pub use crate::block::*;
    pub use crate::event::*;
    pub use crate::scalar::*;
    pub use crate::{type_id, TypeId, COUNCIL_TYPES_NAMESPACE};
}

/// Derive a type ID from a namespace and given abstraction name.
pub fn type_id(namespace: &str, name: &str) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&Sha256::digest(format!("{namespace}:{name}").as_bytes())[..8]);
    i64::from_le_bytes(bytes)
}
