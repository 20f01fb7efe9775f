//! Pipeline error type.
//!
//! Resolution and disambiguation problems are recovered locally by skipping
//! the affected usage or candidate; only unparsable input and sink failures
//! abort a run.

use crate::sink::SinkError;

/// Errors the pipeline driver can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed into a syntax tree.
    #[error("failed to parse source text")]
    Parse(#[from] syn::Error),

    /// An artifact could not be registered with the sink.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
