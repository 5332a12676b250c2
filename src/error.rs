use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The only parse outcome a caller rejects.
    #[error("Could not parse slug/title from markdown")]
    MissingSlugOrTitle,

    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode guide {slug}")]
    Encode {
        slug: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] rusqlite::Error),
}
