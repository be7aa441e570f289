//! Lazy, cached navigation over lemmas, synsets, and their relations.
//!
//! Views are lightweight and transient: each is built from a freshly
//! fetched record, and each instance decodes its derived fields once and
//! memoizes them for its own lifetime. Expanding a relation's destination
//! is always a fresh fetch-and-decode; the relation graph may contain
//! cycles and no traversal limit is imposed here, so callers control
//! expansion depth.

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::error::{Result, WordnetError};
use super::models::{LemmaRecord, PartOfSpeech, SynsetId, SynsetRecord, WordEntry};
use super::pointers::{RelationPointer, RelationType};
use super::records;
use super::store::Store;

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn word_at(words: &[WordEntry], index: usize, id: SynsetId) -> Result<String> {
    words
        .get(index - 1)
        .map(WordEntry::text)
        .ok_or_else(|| {
            WordnetError::malformed(
                "relation token",
                format!(
                    "word index {} out of range for {} ({} words)",
                    index,
                    id,
                    words.len()
                ),
            )
        })
}

macro_rules! sense_accessors {
    ($(($senses:ident, $ids:ident) => $variant:ident),* $(,)?) => {
        $(
            /// Senses of one fixed part of speech; shorthand for [`Lemma::senses`].
            pub fn $senses(&self) -> Result<Vec<Synset<'w>>> {
                self.senses(Some(PartOfSpeech::$variant))
            }

            /// Sense identifiers of one fixed part of speech; shorthand
            /// for [`Lemma::sense_ids`].
            pub fn $ids(&self) -> Result<Vec<SynsetId>> {
                self.sense_ids(Some(PartOfSpeech::$variant))
            }
        )*
    };
}

macro_rules! relation_accessors {
    ($($method:ident => $variant:ident),* $(,)?) => {
        $(
            /// Relations of one fixed type; shorthand for [`Synset::relations`].
            pub fn $method(&self) -> Result<Vec<&Relation<'w>>> {
                self.relations(Some(RelationType::$variant))
            }
        )*
    };
}

/// A word's database entry aggregating all its sense identifiers.
///
/// The sense list preserves the backend's stored ordering, which is the
/// lemma's implicit most-common-sense-first ranking; it is never
/// re-sorted.
#[derive(Debug)]
pub struct Lemma<'w> {
    store: &'w Store,
    record: LemmaRecord,
    text: OnceCell<String>,
    tagsense_counts: OnceCell<Vec<(PartOfSpeech, u32)>>,
    sense_ids: OnceCell<Vec<SynsetId>>,
}

impl<'w> Lemma<'w> {
    pub(crate) fn new(record: LemmaRecord, store: &'w Store) -> Self {
        Self {
            store,
            record,
            text: OnceCell::new(),
            tagsense_counts: OnceCell::new(),
            sense_ids: OnceCell::new(),
        }
    }

    /// Presentation form of the word, underscores replaced with spaces.
    pub fn text(&self) -> &str {
        self.text
            .get_or_init(|| self.record.lemma.replace('_', " "))
    }

    /// The stored word form (underscores for multi-word terms).
    pub fn raw_text(&self) -> &str {
        &self.record.lemma
    }

    /// The raw record this view was built from.
    pub fn record(&self) -> &LemmaRecord {
        &self.record
    }

    /// Per-part-of-speech corpus tagging counts. May be empty.
    pub fn tagsense_counts(&self) -> Result<&[(PartOfSpeech, u32)]> {
        self.tagsense_counts
            .get_or_try_init(|| records::parse_tagsense_counts(&self.record.tagsense_counts))
            .map(Vec::as_slice)
    }

    fn all_sense_ids(&self) -> Result<&[SynsetId]> {
        self.sense_ids
            .get_or_try_init(|| records::parse_sense_ids(&self.record.synset_ids))
            .map(Vec::as_slice)
    }

    /// Sense identifiers, optionally filtered to one part of speech.
    /// Stored order is preserved either way.
    pub fn sense_ids(&self, pos: Option<PartOfSpeech>) -> Result<Vec<SynsetId>> {
        let ids = self.all_sense_ids()?;
        Ok(match pos {
            Some(pos) => ids.iter().copied().filter(|id| id.pos == pos).collect(),
            None => ids.to_vec(),
        })
    }

    /// Fetch and decode the senses, optionally filtered to one part of
    /// speech.
    pub fn senses(&self, pos: Option<PartOfSpeech>) -> Result<Vec<Synset<'w>>> {
        self.sense_ids(pos)?
            .into_iter()
            .map(|id| Synset::fetch(self.store, id))
            .collect()
    }

    /// Parts of speech this lemma has senses in, in first-occurrence
    /// order.
    pub fn available_pos(&self) -> Result<Vec<PartOfSpeech>> {
        let mut seen = Vec::new();
        for id in self.all_sense_ids()? {
            if !seen.contains(&id.pos) {
                seen.push(id.pos);
            }
        }
        Ok(seen)
    }

    sense_accessors! {
        (nouns, noun_ids) => Noun,
        (verbs, verb_ids) => Verb,
        (adjectives, adjective_ids) => Adjective,
        (adverbs, adverb_ids) => Adverb,
    }
}

impl fmt::Display for Lemma<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())?;
        if let Ok(pos) = self.available_pos() {
            if !pos.is_empty() {
                let names: Vec<&str> = pos.iter().map(|p| p.name()).collect();
                write!(f, ", {}", names.join("/"))?;
            }
        }
        Ok(())
    }
}

/// One word sense: the set of synonymous words sharing a meaning, plus
/// its gloss and outgoing relations.
#[derive(Debug)]
pub struct Synset<'w> {
    store: &'w Store,
    id: SynsetId,
    record: SynsetRecord,
    words: OnceCell<Rc<Vec<WordEntry>>>,
    relations: OnceCell<Vec<Relation<'w>>>,
}

impl<'w> Synset<'w> {
    pub(crate) fn fetch(store: &'w Store, id: SynsetId) -> Result<Self> {
        let record = store.fetch_synset(id)?;
        Self::new(record, store)
    }

    pub(crate) fn new(record: SynsetRecord, store: &'w Store) -> Result<Self> {
        let id = record.id.parse::<SynsetId>()?;
        Ok(Self {
            store,
            id,
            record,
            words: OnceCell::new(),
            relations: OnceCell::new(),
        })
    }

    pub fn id(&self) -> SynsetId {
        self.id
    }

    /// The synset type decoded from the record's type code.
    pub fn synset_type(&self) -> Result<PartOfSpeech> {
        PartOfSpeech::try_from(self.record.synset_type)
    }

    /// Free-text definition, optionally with example sentences.
    pub fn gloss(&self) -> &str {
        &self.record.gloss
    }

    /// The raw record this view was built from.
    pub fn record(&self) -> &SynsetRecord {
        &self.record
    }

    fn words_rc(&self) -> Result<&Rc<Vec<WordEntry>>> {
        self.words
            .get_or_try_init(|| records::parse_word_entries(&self.record.words).map(Rc::new))
    }

    /// Member words in stored order. Decoded once per instance.
    pub fn words(&self) -> Result<&[WordEntry]> {
        self.words_rc().map(|words| words.as_slice())
    }

    /// Presentation forms of the member words.
    pub fn word_texts(&self) -> Result<Vec<String>> {
        Ok(self.words()?.iter().map(WordEntry::text).collect())
    }

    /// Number of member words.
    pub fn size(&self) -> Result<usize> {
        Ok(self.words()?.len())
    }

    fn all_relations(&self) -> Result<&[Relation<'w>]> {
        self.relations
            .get_or_try_init(|| {
                let source_words = Rc::clone(self.words_rc()?);
                records::split_relation_tokens(&self.record.relations)
                    .into_iter()
                    .map(|token| {
                        let pointer = RelationPointer::decode(token)?;
                        Ok(Relation {
                            store: self.store,
                            source_id: self.id,
                            source_words: Rc::clone(&source_words),
                            pointer,
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .map(Vec::as_slice)
    }

    /// Outgoing relations in record order, optionally filtered to one
    /// type. Decoded once per instance; filtering never re-orders.
    pub fn relations(&self, filter: Option<RelationType>) -> Result<Vec<&Relation<'w>>> {
        let all = self.all_relations()?;
        match filter {
            None => Ok(all.iter().collect()),
            Some(wanted) => {
                let mut matched = Vec::new();
                for relation in all {
                    if relation.relation_type()? == wanted {
                        matched.push(relation);
                    }
                }
                Ok(matched)
            }
        }
    }

    relation_accessors! {
        antonyms => Antonym,
        hypernyms => Hypernym,
        instance_hypernyms => InstanceHypernym,
        hyponyms => Hyponym,
        instance_hyponyms => InstanceHyponym,
        member_holonyms => MemberHolonym,
        substance_holonyms => SubstanceHolonym,
        part_holonyms => PartHolonym,
        member_meronyms => MemberMeronym,
        substance_meronyms => SubstanceMeronym,
        part_meronyms => PartMeronym,
        attributes => Attribute,
        derivationally_related_forms => DerivationallyRelatedForm,
        domain_of_synset_topics => DomainOfSynsetTopic,
        member_of_this_domain_topics => MemberOfThisDomainTopic,
        domain_of_synset_regions => DomainOfSynsetRegion,
        member_of_this_domain_regions => MemberOfThisDomainRegion,
        domain_of_synset_usages => DomainOfSynsetUsage,
        member_of_this_domain_usages => MemberOfThisDomainUsage,
        entailments => Entailment,
        causes => Cause,
        also_sees => AlsoSee,
        verb_groups => VerbGroup,
        similar_tos => SimilarTo,
        participle_of_verbs => ParticipleOfVerb,
        pertainyms => Pertainym,
    }
}

impl fmt::Display for Synset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = PartOfSpeech::try_from(self.record.synset_type)
            .map(|pos| capitalize(pos.name()))
            .unwrap_or_else(|_| "Synset".to_string());
        let words = match self.word_texts() {
            Ok(words) => words
                .iter()
                .map(|w| format!("\"{w}\""))
                .collect::<Vec<_>>()
                .join(", "),
            Err(_) => "<malformed>".to_string(),
        };
        write!(
            f,
            "{} including word(s): {} meaning: {}",
            type_name,
            words,
            self.gloss()
        )
    }
}

/// A directed, typed edge from a source sense to a destination sense.
///
/// Semantic relations connect whole senses; lexical relations link one
/// specific word in the source to one specific word in the destination.
pub struct Relation<'w> {
    store: &'w Store,
    source_id: SynsetId,
    source_words: Rc<Vec<WordEntry>>,
    pointer: RelationPointer,
}

impl<'w> Relation<'w> {
    /// The relation type.
    ///
    /// # Errors
    /// [`WordnetError::UnknownRelationSymbol`] if the stored pointer
    /// symbol is outside the fixed vocabulary.
    pub fn relation_type(&self) -> Result<RelationType> {
        self.pointer.relation_type()
    }

    /// The raw pointer symbol as stored.
    pub fn symbol(&self) -> &str {
        self.pointer.symbol()
    }

    /// True for whole-synset relations.
    pub fn is_semantic(&self) -> bool {
        self.pointer.is_semantic()
    }

    /// True for word-to-word relations.
    pub fn is_lexical(&self) -> bool {
        !self.is_semantic()
    }

    pub fn source_id(&self) -> SynsetId {
        self.source_id
    }

    pub fn destination_id(&self) -> SynsetId {
        self.pointer.target()
    }

    /// The decoded pointer this relation was built from.
    pub fn pointer(&self) -> &RelationPointer {
        &self.pointer
    }

    /// The linked word in the source synset, or `None` for semantic
    /// relations.
    pub fn source_word(&self) -> Result<Option<String>> {
        match self.pointer.source_index() {
            None => Ok(None),
            Some(index) => word_at(&self.source_words, index, self.source_id).map(Some),
        }
    }

    /// The linked word in the destination synset, or `None` for semantic
    /// relations. Resolving this fetches and decodes the destination.
    pub fn destination_word(&self) -> Result<Option<String>> {
        match self.pointer.destination_index() {
            None => Ok(None),
            Some(index) => {
                let destination = self.destination()?;
                let words = destination.words()?;
                word_at(words, index, destination.id()).map(Some)
            }
        }
    }

    /// Expand the destination into a full synset view.
    ///
    /// Every call is a fresh fetch-and-decode; nothing is cached across
    /// expansions, and cycles in the relation graph are not detected
    /// here.
    pub fn destination(&self) -> Result<Synset<'w>> {
        Synset::fetch(self.store, self.pointer.target())
    }

    /// Human-readable rendering. Fallible because lexical relations
    /// resolve their destination word.
    pub fn describe(&self) -> Result<String> {
        let type_name = self.relation_type()?.name();
        if self.is_semantic() {
            Ok(format!(
                "Semantic {} relation between {} and {}",
                type_name,
                self.source_id,
                self.destination_id()
            ))
        } else {
            let source_word = self.source_word()?.unwrap_or_default();
            let destination_word = self.destination_word()?.unwrap_or_default();
            Ok(format!(
                "{} relation between {}'s word \"{}\" and {}'s word \"{}\"",
                capitalize(type_name),
                self.source_id,
                source_word,
                self.destination_id(),
                destination_word
            ))
        }
    }
}

impl fmt::Debug for Relation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("source_id", &self.source_id)
            .field("pointer", &self.pointer)
            .finish()
    }
}
