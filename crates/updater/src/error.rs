//! Ways an update check can fail.

use labdesk_core::CoreError;
use thiserror::Error;

/// Errors from fetching or interpreting the release manifest.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Connection, TLS or timeout failure before a response arrived.
    #[error("release manifest unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    /// The release server answered, but not with the manifest.
    #[error("release server returned {status} for {url}")]
    ManifestStatus { url: String, status: u16 },
    /// The body is not `{ "version": ..., "notes"?: ..., "pub_date"?: ... }`.
    #[error("malformed release manifest at {url}: {source}")]
    MalformedManifest {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The manifest or the running build carries an unparsable version.
    #[error(transparent)]
    InvalidVersion(#[from] CoreError),
    #[error("could not build update client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl UpdateError {
    /// Whether the next scheduled check may succeed without intervention.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unreachable(_) => true,
            Self::ManifestStatus { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::MalformedManifest { .. } | Self::InvalidVersion(_) | Self::ClientBuild(_) => false,
        }
    }
}
