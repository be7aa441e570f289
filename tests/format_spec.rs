//! Pure decoder coverage: record grammar, sub-field parsers, and the
//! relation pointer micro-format.

use wordnet_reader::wordnet::{pointers::RelationPointer, records};
use wordnet_reader::{PartOfSpeech, RelationType, SynsetId, WordnetError};

const NOUN_LINE: &str = "00001740 03 n 02 bank 0 side 1 002 @ 00002137 n 0000 + 00004258 v 0101 | sloping land beside a body of water";

#[test]
fn synset_line_decodes_into_wire_fields() {
    let record = records::parse_synset_line(PartOfSpeech::Noun, NOUN_LINE).expect("decode");
    assert_eq!(record.id, "n00001740");
    assert_eq!(record.lexical_filenum, "03");
    assert_eq!(record.synset_type, 'n');
    assert_eq!(record.words, "bank.0|side.1");
    assert_eq!(record.relations, "@.00002137.n.0000|+.00004258.v.0101");
    assert_eq!(record.gloss, "sloping land beside a body of water");
}

#[test]
fn synset_head_round_trips() {
    let record = records::parse_synset_line(PartOfSpeech::Noun, NOUN_LINE).expect("decode");
    let head = records::encode_synset_head(&record).expect("encode");
    let expected = NOUN_LINE.split_once(" | ").unwrap().0;
    assert_eq!(head, expected);
}

#[test]
fn synset_line_decoding_is_deterministic() {
    let first = records::parse_synset_line(PartOfSpeech::Noun, NOUN_LINE).expect("decode");
    let second = records::parse_synset_line(PartOfSpeech::Noun, NOUN_LINE).expect("decode");
    assert_eq!(first, second);
}

#[test]
fn word_count_is_hexadecimal() {
    // 0a = ten words
    let mut line = String::from("00000010 03 n 0a");
    for i in 0..10 {
        line.push_str(&format!(" word{} 0", i));
    }
    line.push_str(" 000 | ten synonyms");
    let record = records::parse_synset_line(PartOfSpeech::Noun, &line).expect("decode");
    assert_eq!(records::parse_word_entries(&record.words).unwrap().len(), 10);
}

#[test]
fn synset_line_rejects_missing_gloss_delimiter() {
    let err = records::parse_synset_line(PartOfSpeech::Noun, "00000010 03 n 01 bank 0 000")
        .unwrap_err();
    assert!(err.is_decode(), "expected decode error, got {err:?}");
}

#[test]
fn synset_line_rejects_non_hex_word_count() {
    let err = records::parse_synset_line(PartOfSpeech::Noun, "00000010 03 n zz bank 0 000 | x")
        .unwrap_err();
    assert!(matches!(err, WordnetError::MalformedRecord { .. }));
}

#[test]
fn synset_line_rejects_truncated_word_section() {
    // claims three words, carries one
    let err = records::parse_synset_line(PartOfSpeech::Noun, "00000010 03 n 03 bank 0 | x")
        .unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn synset_line_rejects_non_decimal_relation_count() {
    let err = records::parse_synset_line(PartOfSpeech::Noun, "00000010 03 n 01 bank 0 0x2 | x")
        .unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn synset_line_ignores_trailing_frame_fields() {
    // verb records carry a frame section after the relation tokens
    let line = "00000010 40 v 01 bank 0 000 01 + 08 00 | keep an account";
    let record = records::parse_synset_line(PartOfSpeech::Verb, line).expect("decode");
    assert_eq!(record.relations, "");
    assert_eq!(record.gloss, "keep an account");
}

#[test]
fn word_entries_keep_dots_inside_words() {
    let entries = records::parse_word_entries("st._petersburg.0|bank.a").expect("decode");
    assert_eq!(entries[0].word, "st._petersburg");
    assert_eq!(entries[0].num, 0);
    assert_eq!(entries[0].text(), "st. petersburg");
    // the number field is hex
    assert_eq!(entries[1].num, 10);
}

#[test]
fn tagsense_counts_parse_in_order() {
    let counts = records::parse_tagsense_counts("n25|v5").expect("decode");
    assert_eq!(
        counts,
        vec![(PartOfSpeech::Noun, 25), (PartOfSpeech::Verb, 5)]
    );
    assert!(records::parse_tagsense_counts("").unwrap().is_empty());
    assert!(records::parse_tagsense_counts("x5").is_err());
}

#[test]
fn sense_ids_preserve_stored_order() {
    let ids = records::parse_sense_ids("n00001740|v00004258|n00002137").expect("decode");
    assert_eq!(
        ids,
        vec![
            SynsetId::new(PartOfSpeech::Noun, 1740),
            SynsetId::new(PartOfSpeech::Verb, 4258),
            SynsetId::new(PartOfSpeech::Noun, 2137),
        ]
    );
    assert!(records::parse_sense_ids("q00001740").is_err());
}

#[test]
fn synset_id_string_form_round_trips() {
    let id = SynsetId::new(PartOfSpeech::AdjectiveSatellite, 1740);
    assert_eq!(id.to_string(), "s00001740");
    assert_eq!("s00001740".parse::<SynsetId>().unwrap(), id);
    assert!("".parse::<SynsetId>().is_err());
    assert!("nxyz".parse::<SynsetId>().is_err());
    assert!(matches!(
        "z00001740".parse::<SynsetId>().unwrap_err(),
        WordnetError::UnknownPosCode('z')
    ));
}

#[test]
fn semantic_pointer_carries_no_word_indices() {
    let pointer = RelationPointer::decode("@.00001740.n.0000").expect("decode");
    assert!(pointer.is_semantic());
    assert_eq!(pointer.source_index(), None);
    assert_eq!(pointer.destination_index(), None);
    assert_eq!(
        pointer.target(),
        SynsetId::new(PartOfSpeech::Noun, 1740)
    );
    assert_eq!(pointer.relation_type().unwrap(), RelationType::Hypernym);
}

#[test]
fn lexical_pointer_splits_word_pair_bytes() {
    let pointer = RelationPointer::decode("+.00004258.v.0102").expect("decode");
    assert!(!pointer.is_semantic());
    assert_eq!(pointer.source_index(), Some(1));
    assert_eq!(pointer.destination_index(), Some(2));
    assert_eq!(pointer.target(), SynsetId::new(PartOfSpeech::Verb, 4258));
}

#[test]
fn pointer_rejects_bad_grammar() {
    // wrong field count
    assert!(RelationPointer::decode("@.00001740.n").is_err());
    assert!(RelationPointer::decode("@.00001740.n.0000.extra").is_err());
    // non-hex and wrongly sized word pairs
    assert!(RelationPointer::decode("@.00001740.n.zzzz").is_err());
    assert!(RelationPointer::decode("@.00001740.n.01").is_err());
    // a lexical pair must name a word on both ends
    assert!(RelationPointer::decode("+.00001740.n.0100").is_err());
    assert!(RelationPointer::decode("+.00001740.n.0001").is_err());
    // unknown target POS
    assert!(RelationPointer::decode("@.00001740.q.0000").is_err());
}

#[test]
fn unknown_symbol_decodes_but_fails_type_query() {
    let pointer = RelationPointer::decode("?.00001740.n.0000").expect("decode");
    let err = pointer.relation_type().unwrap_err();
    assert!(matches!(err, WordnetError::UnknownRelationSymbol(ref s) if s == "?"));
    assert!(err.is_decode());
}

#[test]
fn pointer_re_encodes_its_wire_form() {
    for token in ["@.00001740.n.0000", "+.00004258.v.0102"] {
        let pointer = RelationPointer::decode(token).expect("decode");
        assert_eq!(pointer.encode(), token);
    }
}

#[test]
fn symbol_table_is_bidirectional() {
    let all = [
        RelationType::Antonym,
        RelationType::Hypernym,
        RelationType::InstanceHypernym,
        RelationType::Hyponym,
        RelationType::InstanceHyponym,
        RelationType::MemberHolonym,
        RelationType::SubstanceHolonym,
        RelationType::PartHolonym,
        RelationType::MemberMeronym,
        RelationType::SubstanceMeronym,
        RelationType::PartMeronym,
        RelationType::Attribute,
        RelationType::DerivationallyRelatedForm,
        RelationType::DomainOfSynsetTopic,
        RelationType::MemberOfThisDomainTopic,
        RelationType::DomainOfSynsetRegion,
        RelationType::MemberOfThisDomainRegion,
        RelationType::DomainOfSynsetUsage,
        RelationType::MemberOfThisDomainUsage,
        RelationType::Entailment,
        RelationType::Cause,
        RelationType::AlsoSee,
        RelationType::VerbGroup,
        RelationType::SimilarTo,
        RelationType::ParticipleOfVerb,
        RelationType::Pertainym,
    ];
    for relation_type in all {
        assert_eq!(
            RelationType::from_symbol(relation_type.symbol()),
            Some(relation_type),
            "symbol {:?} does not map back",
            relation_type.symbol()
        );
    }
}
