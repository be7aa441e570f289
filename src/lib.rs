//! # wordnet-reader
//!
//! A read-only reader for a WordNet-style lexical database: lemmas,
//! synsets (word senses), and typed relations between senses, served
//! from either an embedded key-value table or the flat dictionary files
//! plus a prebuilt lemma index.
//!
//! **Note:** building the table or the lemma index from the source
//! dictionary files is separate tooling; this crate only reads.
pub mod wordnet;

// Re-export the main types for convenience
pub use wordnet::{
    Backend, Config, Lemma, LemmaRecord, PartOfSpeech, Relation, RelationPointer, RelationType,
    Result, Synset, SynsetId, SynsetRecord, WordEntry, WordnetError, WordnetReader,
};
