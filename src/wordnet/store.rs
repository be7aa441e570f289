//! Backend stores: embedded key-value table and flat dictionary files.
//!
//! Both variants expose the same two point lookups, `fetch_lemma` and
//! `fetch_synset`, so navigator code never branches on the backend kind.
//! A store that cannot be opened is a setup error; a key that is absent
//! during a lookup is a distinct, catchable not-found condition.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use log::{debug, info};
use rocksdb::{Options, DB};

use super::error::{Result, WordnetError};
use super::models::{LemmaRecord, SynsetId, SynsetRecord};
use super::records;

/// Column family holding lemma records, keyed by the stored word form.
pub const CF_LEMMAS: &str = "lemmas";
/// Column family holding synset records, keyed by the serialized identifier.
pub const CF_SYNSETS: &str = "synsets";

/// Conventional install locations probed when no dictionary directory is
/// configured. Each is also probed with a `dict` subdirectory.
const SEARCH_DIRS: [&str; 3] = [
    "/usr/share/wordnet",
    "/usr/local/share/wordnet",
    "/usr/local/WordNet-3.0",
];

/// Which storage backend a reader runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    #[default]
    Table,
    FlatFile,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Table => f.write_str("table"),
            Backend::FlatFile => f.write_str("flat-file"),
        }
    }
}

/// Uniform read interface over the two physical storage formats.
#[derive(Debug)]
pub enum Store {
    Table(TableStore),
    FlatFile(FlatFileStore),
}

impl Store {
    /// Fetch the raw lemma record for an exact word key.
    pub fn fetch_lemma(&self, word: &str) -> Result<LemmaRecord> {
        match self {
            Store::Table(store) => store.fetch_lemma(word),
            Store::FlatFile(store) => store.fetch_lemma(word),
        }
    }

    /// Fetch the raw synset record for an identifier.
    pub fn fetch_synset(&self, id: SynsetId) -> Result<SynsetRecord> {
        match self {
            Store::Table(store) => store.fetch_synset(id),
            Store::FlatFile(store) => store.fetch_synset(id),
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Store::Table(_) => Backend::Table,
            Store::FlatFile(_) => Backend::FlatFile,
        }
    }

    /// The table directory or the lemma index file, depending on backend.
    pub fn data_path(&self) -> &Path {
        match self {
            Store::Table(store) => store.path(),
            Store::FlatFile(store) => store.index_path(),
        }
    }

    /// The resolved dictionary directory (flat-file backend only).
    pub fn dictionary_dir(&self) -> Option<&Path> {
        match self {
            Store::Table(_) => None,
            Store::FlatFile(store) => Some(store.dictionary_dir()),
        }
    }
}

/// Embedded ordered key-value table, opened read-only.
///
/// Values were pre-parsed into the records' logical fields at build time
/// and are stored bincode-encoded.
#[derive(Debug)]
pub struct TableStore {
    db: DB,
    path: PathBuf,
}

impl TableStore {
    /// Open the table store at the given directory.
    ///
    /// # Errors
    /// [`WordnetError::Setup`] if the directory is missing or the table
    /// cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WordnetError::Setup(format!(
                "no table store at {}; build the dataset before opening it",
                path.display()
            )));
        }
        let db = DB::open_cf_for_read_only(&Options::default(), path, [CF_LEMMAS, CF_SYNSETS], false)
            .map_err(|e| {
                WordnetError::Setup(format!(
                    "failed to open the table store at {}: {}",
                    path.display(),
                    e
                ))
            })?;
        info!("Opened table store at {}", path.display());
        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    fn get(&self, cf_name: &'static str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let cf = self.db.cf_handle(cf_name).ok_or_else(|| {
            WordnetError::Setup(format!(
                "table store at {} is missing the {cf_name:?} column family",
                self.path.display()
            ))
        })?;
        Ok(self.db.get_cf(cf, key)?)
    }

    pub fn fetch_lemma(&self, word: &str) -> Result<LemmaRecord> {
        match self.get(CF_LEMMAS, word.as_bytes())? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| WordnetError::malformed("lemma record", e.to_string())),
            None => Err(WordnetError::WordNotFound(word.to_string())),
        }
    }

    pub fn fetch_synset(&self, id: SynsetId) -> Result<SynsetRecord> {
        let key = id.to_string();
        match self.get(CF_SYNSETS, key.as_bytes())? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| WordnetError::malformed("synset record", e.to_string())),
            None => Err(WordnetError::SynsetNotFound(key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Flat-file backend: a prebuilt in-memory lemma index plus seek+read
/// access into the per-part-of-speech dictionary files.
#[derive(Debug)]
pub struct FlatFileStore {
    index: HashMap<String, LemmaRecord>,
    index_path: PathBuf,
    dictionary_dir: PathBuf,
}

impl FlatFileStore {
    /// Load the lemma index wholesale and locate the dictionary files.
    ///
    /// With no explicit directory, a fixed list of conventional install
    /// locations is searched, each with an optional `dict` subdirectory,
    /// probing for `data.noun`.
    ///
    /// # Errors
    /// [`WordnetError::Setup`] if the index file is missing or unreadable;
    /// [`WordnetError::DictionaryNotFound`] if no searched directory holds
    /// the dictionary files.
    pub fn open(index_path: &Path, dictionary_dir: Option<&Path>) -> Result<Self> {
        if !index_path.is_file() {
            return Err(WordnetError::Setup(format!(
                "no lemma index at {}; build the dataset before opening it",
                index_path.display()
            )));
        }
        let file = File::open(index_path)?;
        let index: HashMap<String, LemmaRecord> = bincode::deserialize_from(BufReader::new(file))
            .map_err(|e| {
                WordnetError::Setup(format!(
                    "failed to read the lemma index at {}: {}",
                    index_path.display(),
                    e
                ))
            })?;
        let dictionary_dir = locate_dictionary(dictionary_dir)?;
        info!(
            "Opened flat-file store: {} lemmas, dictionary at {}",
            index.len(),
            dictionary_dir.display()
        );
        Ok(Self {
            index,
            index_path: index_path.to_path_buf(),
            dictionary_dir,
        })
    }

    pub fn fetch_lemma(&self, word: &str) -> Result<LemmaRecord> {
        self.index
            .get(word)
            .cloned()
            .ok_or_else(|| WordnetError::WordNotFound(word.to_string()))
    }

    /// Seek to the identifier's byte offset in its dictionary file and
    /// decode the record found there.
    ///
    /// The file handle is scoped to this call. A zero-length read at the
    /// offset means the identifier addresses nothing; a garbled line at a
    /// readable offset is a decode error for this lookup only.
    pub fn fetch_synset(&self, id: SynsetId) -> Result<SynsetRecord> {
        let path = self
            .dictionary_dir
            .join(format!("data.{}", id.pos.data_file()));
        debug!("Reading {} at offset {}", path.display(), id.offset);
        let mut file = File::open(&path)?;
        file.seek(SeekFrom::Start(id.offset))?;
        let mut line = String::new();
        if BufReader::new(file).read_line(&mut line)? == 0 {
            return Err(WordnetError::SynsetNotFound(id.to_string()));
        }
        records::parse_synset_line(id.pos, &line)
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn dictionary_dir(&self) -> &Path {
        &self.dictionary_dir
    }
}

fn locate_dictionary(explicit: Option<&Path>) -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = match explicit {
        Some(dir) => vec![dir.to_path_buf()],
        None => SEARCH_DIRS.iter().map(PathBuf::from).collect(),
    };
    for base in &candidates {
        for sub in ["", "dict"] {
            let dir = if sub.is_empty() {
                base.clone()
            } else {
                base.join(sub)
            };
            if dir.join("data.noun").is_file() {
                debug!("Found dictionary files at {}", dir.display());
                return Ok(dir);
            }
        }
    }
    Err(WordnetError::DictionaryNotFound {
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}
