pub mod manifest;
pub mod utils;

pub use manifest::{HandlerSpec, Manifest, ManifestError};
