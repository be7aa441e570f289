//! Data structures representing the database's record formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Result, WordnetError};

/// Part of speech of a lemma sense or synset.
///
/// Adjective satellites are a distinct synset type but resolve into the
/// same dictionary file family as plain adjectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 5] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::AdjectiveSatellite,
        PartOfSpeech::Adverb,
    ];

    /// The one-letter code used in identifiers and tagsense entries.
    pub fn code(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Suffix of the dictionary file holding this part of speech
    /// (`data.noun`, `data.verb`, ...). Satellites live in `data.adj`.
    pub fn data_file(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::AdjectiveSatellite => "adjective satellite",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl TryFrom<char> for PartOfSpeech {
    type Error = WordnetError;

    fn try_from(code: char) -> Result<Self> {
        match code {
            'n' => Ok(Self::Noun),
            'v' => Ok(Self::Verb),
            'a' => Ok(Self::Adjective),
            's' => Ok(Self::AdjectiveSatellite),
            'r' => Ok(Self::Adverb),
            other => Err(WordnetError::UnknownPosCode(other)),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of one synset: part of speech plus the byte offset of its
/// record in that part of speech's dictionary file.
///
/// Serialized as the one-letter POS code followed by the offset
/// zero-padded to eight digits, e.g. `n00001740`. The string form doubles
/// as the table backend's lookup key and as the physical locator for the
/// flat-file backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SynsetId {
    pub pos: PartOfSpeech,
    pub offset: u64,
}

impl SynsetId {
    pub fn new(pos: PartOfSpeech, offset: u64) -> Self {
        Self { pos, offset }
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:08}", self.pos.code(), self.offset)
    }
}

impl FromStr for SynsetId {
    type Err = WordnetError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let code = chars
            .next()
            .ok_or_else(|| WordnetError::malformed("synset identifier", "empty string"))?;
        let pos = PartOfSpeech::try_from(code)?;
        let digits = chars.as_str();
        let offset = digits.parse::<u64>().map_err(|_| {
            WordnetError::malformed(
                "synset identifier",
                format!("non-decimal offset {:?} in {:?}", digits, s),
            )
        })?;
        Ok(Self { pos, offset })
    }
}

/// Raw lemma record as fetched from a backend: the three stored fields,
/// still in wire form.
///
/// `tagsense_counts` is a `|`-joined list of POS-code + decimal-count
/// entries; `synset_ids` is a `|`-joined list of identifier strings in
/// storage order (most common sense first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaRecord {
    pub lemma: String,
    pub tagsense_counts: String,
    pub synset_ids: String,
}

/// Raw synset record as fetched from a backend.
///
/// `words` is a `|`-joined list of `word.num` pairs; `relations` is a
/// `|`-joined list of 4-field dot-joined relation tokens. Both are
/// decoded lazily by the navigator views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub lexical_filenum: String,
    pub synset_type: char,
    pub words: String,
    pub relations: String,
    pub gloss: String,
}

/// One member word of a synset.
///
/// `word` is the stored form (underscores for multi-word terms); `num`
/// is the disambiguation number from the wire pair, a hex digit in the
/// source format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub num: u32,
}

impl WordEntry {
    /// Presentation form of the word, underscores replaced with spaces.
    pub fn text(&self) -> String {
        self.word.replace('_', " ")
    }
}
