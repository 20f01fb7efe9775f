//! Artifact registration.
//!
//! The pipeline hands each rendered artifact to an [`ArtifactSink`] as a
//! (key, text) pair. Keys are dot-joined qualified names, safe for use as
//! file names. Registration writes exactly one pair per artifact and never
//! mutates pairs registered in earlier runs; key collisions between
//! declarations are the host's concern, not handled here.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Receives rendered artifacts keyed by their stable output key.
pub trait ArtifactSink {
    /// Registers one artifact.
    fn register(&mut self, key: &str, text: &str) -> Result<(), SinkError>;
}

/// Failure to persist an artifact.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Writing the artifact's backing file failed.
    #[error("failed to write artifact `{key}`")]
    Io {
        /// The output key being registered.
        key: String,
        /// The underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

/// In-memory sink with deterministic key order. Useful for tests and for
/// hosts that own artifact persistence themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: BTreeMap<String, String>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The artifact registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.artifacts.get(key).map(String::as_str)
    }

    /// Registered keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    /// Registered (key, text) pairs, in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.artifacts
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    /// Number of registered artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether no artifact has been registered.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn register(&mut self, key: &str, text: &str) -> Result<(), SinkError> {
        self.artifacts.insert(key.to_owned(), text.to_owned());
        Ok(())
    }
}

/// Sink writing each artifact to `<root>/<key>.rs`.
#[derive(Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// A sink rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for FsSink {
    fn register(&mut self, key: &str, text: &str) -> Result<(), SinkError> {
        let io = |source| SinkError::Io {
            key: key.to_owned(),
            source,
        };
        std::fs::create_dir_all(&self.root).map_err(io)?;
        std::fs::write(self.root.join(format!("{key}.rs")), text).map_err(io)
    }
}
