//! Core wordnet reader module

pub mod error;
pub mod models;
pub mod pointers;
pub mod records;

mod graph;
mod store;

use std::fmt;
use std::path::{Path, PathBuf};

use log::info;

pub use error::{Result, WordnetError};
pub use graph::{Lemma, Relation, Synset};
pub use models::{LemmaRecord, PartOfSpeech, SynsetId, SynsetRecord, WordEntry};
pub use pointers::{RelationPointer, RelationType};
pub use store::{Backend, FlatFileStore, Store, TableStore, CF_LEMMAS, CF_SYNSETS};

/// Default location of the table store when no data path is configured.
pub const DEFAULT_TABLE_PATH: &str = "data/wordnet-table";
/// Default location of the flat-file lemma index when no data path is
/// configured.
pub const DEFAULT_INDEX_PATH: &str = "data/lemma-index.bin";

/// Configuration for opening a [`WordnetReader`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Which storage backend to open.
    pub backend: Backend,
    /// Table store directory or lemma index file, depending on backend.
    /// `None` uses the default location under `./data`.
    pub data_path: Option<PathBuf>,
    /// Dictionary directory for the flat-file backend. `None` searches
    /// the conventional install locations.
    pub wordnet_dir: Option<PathBuf>,
}

/// Read-only access to the lexical database.
///
/// The entry point for navigation: look up a word to get its [`Lemma`],
/// walk from the lemma to its senses, and from each sense along its
/// typed relations to further senses.
///
/// # Errors
/// Construction fails with a setup error when the backing store or
/// dictionary files cannot be located; lookups fail with a distinct
/// not-found error when a key is absent, so callers can tell "word
/// unknown" apart from "database unavailable".
#[derive(Debug)]
pub struct WordnetReader {
    store: Store,
}

impl WordnetReader {
    /// Open the database described by `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let store = match config.backend {
            Backend::Table => {
                let path = config
                    .data_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH));
                Store::Table(TableStore::open(&path)?)
            }
            Backend::FlatFile => {
                let path = config
                    .data_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_PATH));
                Store::FlatFile(FlatFileStore::open(&path, config.wordnet_dir.as_deref())?)
            }
        };
        info!("Lexical database ready ({} backend)", store.backend());
        Ok(Self { store })
    }

    /// Look up a word's lemma entry by its exact stored form
    /// (multi-word terms use underscores).
    pub fn find(&self, word: &str) -> Result<Lemma<'_>> {
        let record = self.store.fetch_lemma(word)?;
        Ok(Lemma::new(record, &self.store))
    }

    /// Fetch one synset by identifier.
    pub fn synset(&self, id: SynsetId) -> Result<Synset<'_>> {
        Synset::fetch(&self.store, id)
    }

    pub fn backend(&self) -> Backend {
        self.store.backend()
    }

    /// The table directory or the lemma index file, depending on backend.
    pub fn data_path(&self) -> &Path {
        self.store.data_path()
    }

    /// The resolved dictionary directory (flat-file backend only).
    pub fn wordnet_dir(&self) -> Option<&Path> {
        self.store.dictionary_dir()
    }
}

impl fmt::Display for WordnetReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.store.backend() {
            Backend::Table => write!(
                f,
                "wordnet reader in table mode with dataset at {}",
                self.data_path().display()
            ),
            Backend::FlatFile => write!(
                f,
                "wordnet reader in flat-file mode using dictionary at {} and index at {}",
                self.wordnet_dir().unwrap_or_else(|| Path::new("?")).display(),
                self.data_path().display()
            ),
        }
    }
}
