use sha2::{Digest, Sha256};
use tracing_subscriber::filter::EnvFilter;

const RUST_LOG: &str = "RUST_LOG";

/// Returns the lower hex representation of a [`sha2::Sha256`] digest of the provided input.
pub fn sha256_digest<T: AsRef<[u8]>>(b: &T) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b);
    format!("{:x}", hasher.finalize())
}

/// Version string for an entity schema document.
pub fn schema_version(schema: &str) -> String {
    sha256_digest(&schema)
}

/// Initialize a `tracing` subscriber honoring the `RUST_LOG` environment
/// variable, defaulting to `info`.
pub fn init_logging() {
    let filter = match std::env::var_os(RUST_LOG) {
        Some(_) => EnvFilter::try_from_default_env().expect("Invalid `RUST_LOG` provided"),
        None => EnvFilter::new("info"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version_is_stable_and_content_addressed() {
        let schema = "type Account @entity { id: ID! }";
        assert_eq!(schema_version(schema), schema_version(schema));
        assert_ne!(schema_version(schema), schema_version("type Account"));
    }
}
