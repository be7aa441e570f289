//! Custom error types for the wordnet-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum WordnetError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The backing store or index file was missing or unreadable at construction time.
    #[error("Setup failed: {0}")]
    Setup(String),

    /// No dictionary files were found in any of the searched directories.
    #[error("Could not locate the dictionary files (searched: {searched})")]
    DictionaryNotFound { searched: String },

    /// The queried word has no entry in the database.
    #[error("Word not found: {0:?}")]
    WordNotFound(String),

    /// The queried synset identifier has no record in the database.
    #[error("Synset not found: {0}")]
    SynsetNotFound(String),

    /// A stored record does not conform to the expected field grammar.
    #[error("Malformed {context}: {detail}")]
    MalformedRecord {
        context: &'static str,
        detail: String,
    },

    /// A relation token carries a pointer symbol outside the known vocabulary.
    #[error("Unknown relation symbol: {0:?}")]
    UnknownRelationSymbol(String),

    /// A part-of-speech code outside `n`, `v`, `a`, `s`, `r`.
    #[error("Unknown part-of-speech code: {0:?}")]
    UnknownPosCode(char),

    /// An error reported by the embedded table engine during a lookup.
    #[error("Table store error: {0}")]
    Table(#[from] rocksdb::Error),
}

impl WordnetError {
    /// Shorthand constructor for [`WordnetError::MalformedRecord`].
    pub(crate) fn malformed(context: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedRecord {
            context,
            detail: detail.into(),
        }
    }

    /// True for errors raised while constructing a reader: the backing
    /// store could not be opened at all.
    pub fn is_setup(&self) -> bool {
        matches!(self, Self::Setup(_) | Self::DictionaryNotFound { .. })
    }

    /// True when a queried key (word or synset identifier) is simply
    /// absent. Recoverable; the caller decides the fallback.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WordNotFound(_) | Self::SynsetNotFound(_))
    }

    /// True when a stored record or token violates the expected grammar.
    /// Fatal for that one lookup; the database itself stays usable.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::UnknownRelationSymbol(_)
                | Self::UnknownPosCode(_)
        )
    }
}

/// A convenience `Result` type alias using the crate's `WordnetError` type.
pub type Result<T> = std::result::Result<T, WordnetError>;
