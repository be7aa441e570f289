//! Relation pointer token decoding.
//!
//! A relation token has four `.`-joined subfields:
//! `<symbol>.<target offset>.<target POS code>.<word pair>`. The word
//! pair is four hex digits; `0000` marks a semantic (whole-synset)
//! relation, anything else carries the 1-based source and destination
//! word indices in its high and low byte.

use std::fmt;
use std::str::FromStr;

use super::error::{Result, WordnetError};
use super::models::{PartOfSpeech, SynsetId};

/// The fixed vocabulary of relation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelatedForm,
    DomainOfSynsetTopic,
    MemberOfThisDomainTopic,
    DomainOfSynsetRegion,
    MemberOfThisDomainRegion,
    DomainOfSynsetUsage,
    MemberOfThisDomainUsage,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    ParticipleOfVerb,
    Pertainym,
}

impl RelationType {
    /// Map a pointer symbol to its relation type.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(Self::Antonym),
            "@" => Some(Self::Hypernym),
            "@i" => Some(Self::InstanceHypernym),
            "~" => Some(Self::Hyponym),
            "~i" => Some(Self::InstanceHyponym),
            "#m" => Some(Self::MemberHolonym),
            "#s" => Some(Self::SubstanceHolonym),
            "#p" => Some(Self::PartHolonym),
            "%m" => Some(Self::MemberMeronym),
            "%s" => Some(Self::SubstanceMeronym),
            "%p" => Some(Self::PartMeronym),
            "=" => Some(Self::Attribute),
            "+" => Some(Self::DerivationallyRelatedForm),
            ";c" => Some(Self::DomainOfSynsetTopic),
            "-c" => Some(Self::MemberOfThisDomainTopic),
            ";r" => Some(Self::DomainOfSynsetRegion),
            "-r" => Some(Self::MemberOfThisDomainRegion),
            ";u" => Some(Self::DomainOfSynsetUsage),
            "-u" => Some(Self::MemberOfThisDomainUsage),
            "*" => Some(Self::Entailment),
            ">" => Some(Self::Cause),
            "^" => Some(Self::AlsoSee),
            "$" => Some(Self::VerbGroup),
            "&" => Some(Self::SimilarTo),
            "<" => Some(Self::ParticipleOfVerb),
            "\\" => Some(Self::Pertainym),
            _ => None,
        }
    }

    /// The pointer symbol this type is stored as.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Antonym => "!",
            Self::Hypernym => "@",
            Self::InstanceHypernym => "@i",
            Self::Hyponym => "~",
            Self::InstanceHyponym => "~i",
            Self::MemberHolonym => "#m",
            Self::SubstanceHolonym => "#s",
            Self::PartHolonym => "#p",
            Self::MemberMeronym => "%m",
            Self::SubstanceMeronym => "%s",
            Self::PartMeronym => "%p",
            Self::Attribute => "=",
            Self::DerivationallyRelatedForm => "+",
            Self::DomainOfSynsetTopic => ";c",
            Self::MemberOfThisDomainTopic => "-c",
            Self::DomainOfSynsetRegion => ";r",
            Self::MemberOfThisDomainRegion => "-r",
            Self::DomainOfSynsetUsage => ";u",
            Self::MemberOfThisDomainUsage => "-u",
            Self::Entailment => "*",
            Self::Cause => ">",
            Self::AlsoSee => "^",
            Self::VerbGroup => "$",
            Self::SimilarTo => "&",
            Self::ParticipleOfVerb => "<",
            Self::Pertainym => "\\",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Antonym => "antonym",
            Self::Hypernym => "hypernym",
            Self::InstanceHypernym => "instance hypernym",
            Self::Hyponym => "hyponym",
            Self::InstanceHyponym => "instance hyponym",
            Self::MemberHolonym => "member holonym",
            Self::SubstanceHolonym => "substance holonym",
            Self::PartHolonym => "part holonym",
            Self::MemberMeronym => "member meronym",
            Self::SubstanceMeronym => "substance meronym",
            Self::PartMeronym => "part meronym",
            Self::Attribute => "attribute",
            Self::DerivationallyRelatedForm => "derivationally related form",
            Self::DomainOfSynsetTopic => "domain of synset topic",
            Self::MemberOfThisDomainTopic => "member of this domain topic",
            Self::DomainOfSynsetRegion => "domain of synset region",
            Self::MemberOfThisDomainRegion => "member of this domain region",
            Self::DomainOfSynsetUsage => "domain of synset usage",
            Self::MemberOfThisDomainUsage => "member of this domain usage",
            Self::Entailment => "entailment",
            Self::Cause => "cause",
            Self::AlsoSee => "also see",
            Self::VerbGroup => "verb group",
            Self::SimilarTo => "similar to",
            Self::ParticipleOfVerb => "participle of verb",
            Self::Pertainym => "pertainym",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded form of one relation pointer token.
///
/// The symbol is kept raw; it is mapped to a [`RelationType`] only when
/// the type is actually queried, so a token with an out-of-vocabulary
/// symbol decodes fine and errors on use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationPointer {
    symbol: String,
    target: SynsetId,
    word_pair: u16,
}

impl RelationPointer {
    /// Decode a `symbol.offset.pos.pair` token.
    pub fn decode(token: &str) -> Result<Self> {
        let mut fields = token.split('.');
        let (symbol, offset, pos, pair) = match (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) {
            (Some(symbol), Some(offset), Some(pos), Some(pair), None) => {
                (symbol, offset, pos, pair)
            }
            _ => {
                return Err(WordnetError::malformed(
                    "relation token",
                    format!("expected 4 dot-joined fields in {:?}", token),
                ))
            }
        };

        let pos_code = match pos.chars().next() {
            Some(c) if pos.chars().count() == 1 => c,
            _ => {
                return Err(WordnetError::malformed(
                    "relation token",
                    format!("target POS must be one character, got {:?}", pos),
                ))
            }
        };
        let target_pos = PartOfSpeech::try_from(pos_code)?;
        let offset = offset.parse::<u64>().map_err(|_| {
            WordnetError::malformed(
                "relation token",
                format!("non-decimal target offset {:?} in {:?}", offset, token),
            )
        })?;

        if pair.len() != 4 {
            return Err(WordnetError::malformed(
                "relation token",
                format!("word pair must be 4 hex digits, got {:?}", pair),
            ));
        }
        let word_pair = u16::from_str_radix(pair, 16).map_err(|_| {
            WordnetError::malformed(
                "relation token",
                format!("non-hex word pair {:?} in {:?}", pair, token),
            )
        })?;
        // Lexical relations link a word on each end; a pair with only one
        // zero byte addresses no word and marks a corrupt token.
        let (source, dest) = (word_pair >> 8, word_pair & 0xff);
        if word_pair != 0 && (source == 0 || dest == 0) {
            return Err(WordnetError::malformed(
                "relation token",
                format!("half-zero word pair {:?} in {:?}", pair, token),
            ));
        }

        Ok(Self {
            symbol: symbol.to_string(),
            target: SynsetId::new(target_pos, offset),
            word_pair,
        })
    }

    /// The raw pointer symbol as stored.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The relation type for this pointer's symbol.
    ///
    /// # Errors
    /// [`WordnetError::UnknownRelationSymbol`] if the symbol is outside
    /// the fixed vocabulary.
    pub fn relation_type(&self) -> Result<RelationType> {
        RelationType::from_symbol(&self.symbol)
            .ok_or_else(|| WordnetError::UnknownRelationSymbol(self.symbol.clone()))
    }

    /// Identifier of the synset this pointer links to.
    pub fn target(&self) -> SynsetId {
        self.target
    }

    /// True for whole-synset relations (the reserved all-zero word pair).
    pub fn is_semantic(&self) -> bool {
        self.word_pair == 0
    }

    /// 1-based index of the linked word in the source synset, or `None`
    /// for semantic relations.
    pub fn source_index(&self) -> Option<usize> {
        if self.is_semantic() {
            None
        } else {
            Some((self.word_pair >> 8) as usize)
        }
    }

    /// 1-based index of the linked word in the destination synset, or
    /// `None` for semantic relations.
    pub fn destination_index(&self) -> Option<usize> {
        if self.is_semantic() {
            None
        } else {
            Some((self.word_pair & 0xff) as usize)
        }
    }

    /// Re-serialize the token in its wire form.
    pub fn encode(&self) -> String {
        format!(
            "{}.{:08}.{}.{:04x}",
            self.symbol,
            self.target.offset,
            self.target.pos.code(),
            self.word_pair
        )
    }
}

impl FromStr for RelationPointer {
    type Err = WordnetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
