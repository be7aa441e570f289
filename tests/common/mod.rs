//! Shared fixture dictionary for the integration tests.
//!
//! Builds one small lexical database in both physical formats: flat
//! `data.<pos>` files plus a bincode lemma index, and a rocksdb table
//! with pre-parsed records. Offsets are fixed-width, so line lengths do
//! not depend on the offset values and one layout pass with placeholder
//! offsets yields the exact byte positions.

use std::collections::HashMap;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use rocksdb::{Options, DB};
use wordnet_reader::wordnet::{CF_LEMMAS, CF_SYNSETS};
use wordnet_reader::{LemmaRecord, PartOfSpeech, SynsetId, SynsetRecord};

struct Syn {
    key: &'static str,
    pos: PartOfSpeech,
    lexnum: &'static str,
    ss_type: char,
    words: &'static [(&'static str, u32)],
    // (symbol, target key, target POS code, word pair)
    rels: &'static [(&'static str, &'static str, char, &'static str)],
    gloss: &'static str,
}

const SYNSETS: &[Syn] = &[
    Syn {
        key: "bank-finance",
        pos: PartOfSpeech::Noun,
        lexnum: "14",
        ss_type: 'n',
        words: &[("bank", 0), ("depository_financial_institution", 0)],
        rels: &[
            ("@", "institution", 'n', "0000"),
            ("+", "bank-verb", 'v', "0101"),
        ],
        gloss: "a financial institution that accepts deposits; \"he cashed a check at the bank\"",
    },
    Syn {
        key: "bank-slope",
        pos: PartOfSpeech::Noun,
        lexnum: "17",
        ss_type: 'n',
        words: &[("bank", 0)],
        rels: &[("@", "slope", 'n', "0000")],
        gloss: "sloping land beside a body of water",
    },
    Syn {
        key: "institution",
        pos: PartOfSpeech::Noun,
        lexnum: "14",
        ss_type: 'n',
        words: &[("institution", 0), ("establishment", 0)],
        rels: &[("~", "bank-finance", 'n', "0000")],
        gloss: "an organization founded for a specific purpose",
    },
    Syn {
        key: "slope",
        pos: PartOfSpeech::Noun,
        lexnum: "17",
        ss_type: 'n',
        words: &[("slope", 0), ("incline", 0), ("side", 0)],
        rels: &[],
        gloss: "an elevated geological formation",
    },
    Syn {
        key: "oddity",
        pos: PartOfSpeech::Noun,
        lexnum: "23",
        ss_type: 'n',
        words: &[("thingamajig", 0)],
        // out-of-vocabulary pointer symbol
        rels: &[("?", "slope", 'n', "0000")],
        gloss: "something whose name is unknown or forgotten",
    },
    Syn {
        key: "bank-verb",
        pos: PartOfSpeech::Verb,
        lexnum: "40",
        ss_type: 'v',
        words: &[("bank", 0)],
        rels: &[
            ("@", "transact", 'v', "0000"),
            ("+", "bank-finance", 'n', "0101"),
        ],
        gloss: "do business with a bank or keep an account at a bank",
    },
    Syn {
        key: "transact",
        pos: PartOfSpeech::Verb,
        lexnum: "40",
        ss_type: 'v',
        words: &[("transact", 0)],
        rels: &[],
        gloss: "conduct business",
    },
];

const LEMMAS: &[(&str, &str, &[&str])] = &[
    ("bank", "n25|v5", &["bank-finance", "bank-slope", "bank-verb"]),
    ("depository_financial_institution", "n1", &["bank-finance"]),
    ("institution", "n2", &["institution"]),
    ("slope", "n2", &["slope"]),
    ("thingamajig", "", &["oddity"]),
    ("transact", "v1", &["transact"]),
];

fn render_line(syn: &Syn, offsets: &HashMap<&'static str, u64>) -> String {
    let mut line = format!(
        "{:08} {} {} {:02x}",
        offsets[syn.key],
        syn.lexnum,
        syn.ss_type,
        syn.words.len()
    );
    for (word, num) in syn.words {
        line.push_str(&format!(" {} {:x}", word, num));
    }
    line.push_str(&format!(" {:03}", syn.rels.len()));
    for (symbol, target, target_pos, pair) in syn.rels {
        line.push_str(&format!(
            " {} {:08} {} {}",
            symbol, offsets[target], target_pos, pair
        ));
    }
    line.push_str(" | ");
    line.push_str(syn.gloss);
    line
}

fn offsets() -> HashMap<&'static str, u64> {
    let zeros: HashMap<&'static str, u64> = SYNSETS.iter().map(|s| (s.key, 0)).collect();
    let mut out = HashMap::new();
    for pos in [PartOfSpeech::Noun, PartOfSpeech::Verb] {
        let mut at = 0u64;
        for syn in SYNSETS.iter().filter(|s| s.pos == pos) {
            out.insert(syn.key, at);
            at += render_line(syn, &zeros).len() as u64 + 1;
        }
    }
    out
}

/// Identifier of a fixture synset by its symbolic key.
pub fn id_of(key: &str) -> SynsetId {
    let syn = SYNSETS
        .iter()
        .find(|s| s.key == key)
        .unwrap_or_else(|| panic!("unknown fixture synset {key}"));
    SynsetId::new(syn.pos, offsets()[syn.key])
}

fn lemma_records(offsets: &HashMap<&'static str, u64>) -> HashMap<String, LemmaRecord> {
    LEMMAS
        .iter()
        .map(|(lemma, tagsense_counts, keys)| {
            let ids: Vec<String> = keys
                .iter()
                .map(|key| {
                    let syn = SYNSETS.iter().find(|s| s.key == *key).unwrap();
                    SynsetId::new(syn.pos, offsets[syn.key]).to_string()
                })
                .collect();
            (
                lemma.to_string(),
                LemmaRecord {
                    lemma: lemma.to_string(),
                    tagsense_counts: tagsense_counts.to_string(),
                    synset_ids: ids.join("|"),
                },
            )
        })
        .collect()
}

fn synset_record(syn: &Syn, offsets: &HashMap<&'static str, u64>) -> SynsetRecord {
    let words: Vec<String> = syn
        .words
        .iter()
        .map(|(word, num)| format!("{}.{:x}", word, num))
        .collect();
    let relations: Vec<String> = syn
        .rels
        .iter()
        .map(|(symbol, target, target_pos, pair)| {
            format!("{}.{:08}.{}.{}", symbol, offsets[target], target_pos, pair)
        })
        .collect();
    SynsetRecord {
        id: SynsetId::new(syn.pos, offsets[syn.key]).to_string(),
        lexical_filenum: syn.lexnum.to_string(),
        synset_type: syn.ss_type,
        words: words.join("|"),
        relations: relations.join("|"),
        gloss: syn.gloss.to_string(),
    }
}

/// Write the flat-file fixture under `dir`; returns (lemma index path,
/// dictionary directory).
pub fn write_flatfile(dir: &Path) -> (PathBuf, PathBuf) {
    let offsets = offsets();
    for pos in [PartOfSpeech::Noun, PartOfSpeech::Verb] {
        let content: String = SYNSETS
            .iter()
            .filter(|s| s.pos == pos)
            .map(|s| render_line(s, &offsets) + "\n")
            .collect();
        fs::write(dir.join(format!("data.{}", pos.data_file())), content)
            .expect("write dictionary file");
    }
    let index_path = dir.join("lemma-index.bin");
    let file = fs::File::create(&index_path).expect("create lemma index");
    bincode::serialize_into(BufWriter::new(file), &lemma_records(&offsets))
        .expect("serialize lemma index");
    (index_path, dir.to_path_buf())
}

/// Write the rocksdb table fixture under `dir`; returns the table path.
pub fn write_table(dir: &Path) -> PathBuf {
    let offsets = offsets();
    let path = dir.join("wordnet-table");
    let mut opts = Options::default();
    opts.create_if_missing(true);
    opts.create_missing_column_families(true);
    let db = DB::open_cf(&opts, &path, [CF_LEMMAS, CF_SYNSETS]).expect("create table fixture");

    let cf_lemmas = db.cf_handle(CF_LEMMAS).unwrap();
    for (lemma, record) in lemma_records(&offsets) {
        db.put_cf(cf_lemmas, lemma.as_bytes(), bincode::serialize(&record).unwrap())
            .expect("put lemma");
    }
    let cf_synsets = db.cf_handle(CF_SYNSETS).unwrap();
    for syn in SYNSETS {
        let record = synset_record(syn, &offsets);
        db.put_cf(cf_synsets, record.id.as_bytes(), bincode::serialize(&record).unwrap())
            .expect("put synset");
    }
    drop(db);
    path
}
