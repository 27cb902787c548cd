use council_indexer_types::event::{EventKind, RawEvent};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs::File,
    io::Read,
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// Result type returned from Manifest operations.
type ManifestResult<T> = Result<T, ManifestError>;

/// Error type returned from Manifest operations.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("YAML error: {0:#?}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("JSON error: {0:#?}")]
    JsonError(#[from] serde_json::Error),
    #[error("File IO error: {0} {1:?}.")]
    FileError(String, #[source] std::io::Error),
    #[error("Unrecognized event kind: {0:?}")]
    UnknownEventKind(String),
}

/// Binds one recognized event kind to the named projection handler.
///
/// `kind` uses the chain's `pallet.Method` spelling, e.g. `council.Voted`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HandlerSpec {
    handler: String,
    kind: String,
}

impl HandlerSpec {
    /// Get the handler name.
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Parse the event kind this handler subscribes to.
    pub fn kind(&self) -> ManifestResult<EventKind> {
        EventKind::from_str(&self.kind)
            .map_err(|_| ManifestError::UnknownEventKind(self.kind.clone()))
    }
}

/// Represents the indexer manifest file.
///
/// This manifest file is a simple YAML file declaring the indexer's identity,
/// its entity schema document, the optional block range it covers, and the
/// event kinds it subscribes to.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Manifest {
    /// Namespace of indexer.
    namespace: String,

    /// Identifier of indexer.
    identifier: String,

    /// Filepath to this indexer's entity schema document.
    schema: String,

    /// Block at which indexer should start.
    start_block: Option<u64>,

    /// Block at which indexer should stop.
    end_block: Option<u64>,

    /// Event handlers registered by this indexer.
    handlers: Vec<HandlerSpec>,
}

impl Manifest {
    /// Derive an indexer manifest via the YAML file at the specified path.
    pub fn from_file(path: impl AsRef<Path>) -> ManifestResult<Self> {
        let mut file = File::open(&path).map_err(|e| {
            ManifestError::FileError(path.as_ref().display().to_string(), e)
        })?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|e| {
            ManifestError::FileError(path.as_ref().display().to_string(), e)
        })?;
        Self::try_from(content.as_str())
    }

    /// Return the raw entity schema document for an indexer manifest.
    pub fn schema_content(&self) -> ManifestResult<String> {
        let mut file = File::open(&self.schema)
            .map_err(|err| ManifestError::FileError(self.schema.clone(), err))?;
        let mut schema = String::new();
        file.read_to_string(&mut schema)
            .map_err(|err| ManifestError::FileError(self.schema.clone(), err))?;
        Ok(schema)
    }

    /// Derive the unique identifier for a manifest.
    pub fn uid(&self) -> String {
        format!("{}.{}", &self.namespace, &self.identifier)
    }

    /// The set of event kinds this indexer subscribes to.
    pub fn enabled_kinds(&self) -> ManifestResult<HashSet<EventKind>> {
        self.handlers.iter().map(|h| h.kind()).collect()
    }

    /// Whether a raw event matches one of this manifest's handler kinds.
    pub fn subscribes_to(&self, event: &RawEvent) -> bool {
        match EventKind::of(event) {
            Some(kind) => self
                .handlers
                .iter()
                .any(|h| h.kind().map(|k| k == kind).unwrap_or(false)),
            None => false,
        }
    }

    /// Render this manifest as JSON, the form hosts exchange over the wire.
    pub fn json(&self) -> ManifestResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get the indexer namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the indexer identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Get the filepath to the indexer's entity schema document.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Get the indexer start block.
    pub fn start_block(&self) -> Option<u64> {
        self.start_block
    }

    /// Get the indexer end block.
    pub fn end_block(&self) -> Option<u64> {
        self.end_block
    }

    /// Get the indexer's registered handlers.
    pub fn handlers(&self) -> &[HandlerSpec] {
        &self.handlers
    }
}

impl TryFrom<&str> for Manifest {
    type Error = ManifestError;

    fn try_from(val: &str) -> ManifestResult<Self> {
        let manifest: Manifest = serde_yaml::from_str(val)?;
        Ok(manifest)
    }
}

impl TryFrom<&Manifest> for Vec<u8> {
    type Error = ManifestError;

    fn try_from(manifest: &Manifest) -> ManifestResult<Self> {
        Ok(serde_yaml::to_vec(manifest)?)
    }
}

impl TryFrom<&Vec<u8>> for Manifest {
    type Error = ManifestError;

    fn try_from(val: &Vec<u8>) -> ManifestResult<Self> {
        let manifest: Manifest = serde_yaml::from_slice(val)?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
namespace: council
identifier: proposals
schema: schema.graphql
start_block: 1
handlers:
  - handler: handle_transfer
    kind: balances.Transfer
  - handler: handle_council_proposed
    kind: council.Proposed
  - handler: handle_council_voted
    kind: council.Voted
"#;

    #[test]
    fn test_manifest_yaml_round_trip() {
        let manifest = Manifest::try_from(MANIFEST).unwrap();
        assert_eq!(manifest.uid(), "council.proposals");
        assert_eq!(manifest.start_block(), Some(1));
        assert_eq!(manifest.end_block(), None);
        assert_eq!(manifest.handlers().len(), 3);

        let bytes = Vec::<u8>::try_from(&manifest).unwrap();
        let restored = Manifest::try_from(&bytes).unwrap();
        assert_eq!(restored.uid(), manifest.uid());
    }

    #[test]
    fn test_manifest_json_round_trip() {
        let manifest = Manifest::try_from(MANIFEST).unwrap();
        let json = manifest.json().unwrap();
        let restored: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.uid(), manifest.uid());
    }

    #[test]
    fn test_enabled_kinds() {
        let manifest = Manifest::try_from(MANIFEST).unwrap();
        let kinds = manifest.enabled_kinds().unwrap();
        assert_eq!(kinds.len(), 3);
        assert!(kinds.contains(&EventKind::CouncilVoted));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let manifest = Manifest::try_from(
            "namespace: council\nidentifier: proposals\nschema: schema.graphql\nhandlers:\n  - handler: handle_staking\n    kind: staking.Rewarded\n",
        )
        .unwrap();
        assert!(matches!(
            manifest.enabled_kinds(),
            Err(ManifestError::UnknownEventKind(_))
        ));
    }

    #[test]
    fn test_subscribes_to_filters_by_kind() {
        use council_indexer_types::event::EventValue;

        let manifest = Manifest::try_from(
            "namespace: council\nidentifier: proposals\nschema: schema.graphql\nhandlers:\n  - handler: handle_council_voted\n    kind: council.Voted\n",
        )
        .unwrap();

        let voted = RawEvent::new(
            "council",
            "Voted",
            vec![EventValue::Bool(true)],
        );
        let transfer = RawEvent::new("balances", "Transfer", vec![]);

        assert!(manifest.subscribes_to(&voted));
        assert!(!manifest.subscribes_to(&transfer));
    }
}
