//! Record decoding: raw stored records into structured fields.
//!
//! All functions here are pure transformations applied identically
//! regardless of which backend produced the record. The flat-file head
//! section mixes radices: the word count is hexadecimal while the
//! relation count is decimal.

use log::trace;

use super::error::{Result, WordnetError};
use super::models::{PartOfSpeech, SynsetId, SynsetRecord, WordEntry};

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<&'a str> {
    fields
        .next()
        .ok_or_else(|| WordnetError::malformed("synset record", format!("truncated before {what}")))
}

/// Parse one line of a `data.<pos>` dictionary file into a [`SynsetRecord`].
///
/// The head section is space-separated: offset, lexical file number,
/// synset type code, hex word count, that many word/number pairs, decimal
/// relation count, that many 4-field relation tokens. It is separated
/// from the gloss by a literal `" | "`. Anything after the declared
/// relation count (verb frame data) is ignored. A missing gloss
/// delimiter, a bad count, or a truncated head is a decode error; this
/// format has no tolerance for partial records.
pub fn parse_synset_line(pos: PartOfSpeech, line: &str) -> Result<SynsetRecord> {
    let line = line.trim_end_matches(['\n', '\r']);
    let (head, gloss) = line.split_once(" | ").ok_or_else(|| {
        WordnetError::malformed("synset record", "missing \" | \" gloss delimiter")
    })?;

    let mut fields = head.split_whitespace();

    let offset = next_field(&mut fields, "synset offset")?;
    if offset.parse::<u64>().is_err() {
        return Err(WordnetError::malformed(
            "synset record",
            format!("non-decimal synset offset {offset:?}"),
        ));
    }
    let lexical_filenum = next_field(&mut fields, "lexical file number")?;
    let type_field = next_field(&mut fields, "synset type")?;
    let synset_type = match type_field.chars().next() {
        Some(c) if type_field.chars().count() == 1 => c,
        _ => {
            return Err(WordnetError::malformed(
                "synset record",
                format!("synset type must be one character, got {type_field:?}"),
            ))
        }
    };

    let word_count_field = next_field(&mut fields, "word count")?;
    let word_count = usize::from_str_radix(word_count_field, 16).map_err(|_| {
        WordnetError::malformed(
            "synset record",
            format!("non-hex word count {word_count_field:?}"),
        )
    })?;
    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let word = next_field(&mut fields, "word")?;
        let num = next_field(&mut fields, "word number")?;
        words.push(format!("{word}.{num}"));
    }

    let relation_count_field = next_field(&mut fields, "relation count")?;
    let relation_count = relation_count_field.parse::<usize>().map_err(|_| {
        WordnetError::malformed(
            "synset record",
            format!("non-decimal relation count {relation_count_field:?}"),
        )
    })?;
    let mut relations = Vec::with_capacity(relation_count);
    for _ in 0..relation_count {
        let symbol = next_field(&mut fields, "relation symbol")?;
        let target_offset = next_field(&mut fields, "relation target offset")?;
        let target_pos = next_field(&mut fields, "relation target POS")?;
        let word_pair = next_field(&mut fields, "relation word pair")?;
        relations.push(format!("{symbol}.{target_offset}.{target_pos}.{word_pair}"));
    }

    trace!(
        "Decoded synset line at {}{}: {} words, {} relations",
        pos.code(),
        offset,
        words.len(),
        relations.len()
    );

    Ok(SynsetRecord {
        id: format!("{}{}", pos.code(), offset),
        lexical_filenum: lexical_filenum.to_string(),
        synset_type,
        words: words.join("|"),
        relations: relations.join("|"),
        gloss: gloss.trim().to_string(),
    })
}

/// Re-serialize a record's head section (everything before the gloss).
///
/// Counts are written in their canonical widths: two hex digits for the
/// word count, three decimal digits for the relation count. Inverse of
/// the head parse in [`parse_synset_line`].
pub fn encode_synset_head(record: &SynsetRecord) -> Result<String> {
    let offset = match record.id.get(1..) {
        Some(digits) if !digits.is_empty() => digits,
        _ => {
            return Err(WordnetError::malformed(
                "synset record",
                format!("identifier {:?} too short to re-encode", record.id),
            ))
        }
    };

    let words = parse_word_entries(&record.words)?;
    let tokens = split_relation_tokens(&record.relations);

    let mut parts: Vec<String> = vec![
        offset.to_string(),
        record.lexical_filenum.clone(),
        record.synset_type.to_string(),
        format!("{:02x}", words.len()),
    ];
    for entry in &words {
        parts.push(entry.word.clone());
        parts.push(format!("{:x}", entry.num));
    }
    parts.push(format!("{:03}", tokens.len()));
    for token in tokens {
        let subfields: Vec<&str> = token.split('.').collect();
        if subfields.len() != 4 {
            return Err(WordnetError::malformed(
                "relation token",
                format!("expected 4 dot-joined fields in {token:?}"),
            ));
        }
        parts.extend(subfields.into_iter().map(str::to_string));
    }
    Ok(parts.join(" "))
}

/// Parse a `|`-joined list of `word.num` member-word pairs.
///
/// The number is the final dot-separated component (words themselves may
/// contain dots) and is a hex digit in the source format.
pub fn parse_word_entries(words: &str) -> Result<Vec<WordEntry>> {
    if words.is_empty() {
        return Ok(Vec::new());
    }
    words
        .split('|')
        .map(|pair| {
            let (word, num) = pair.rsplit_once('.').ok_or_else(|| {
                WordnetError::malformed("word entry", format!("missing number in {pair:?}"))
            })?;
            let num = u32::from_str_radix(num, 16).map_err(|_| {
                WordnetError::malformed("word entry", format!("non-hex number in {pair:?}"))
            })?;
            Ok(WordEntry {
                word: word.to_string(),
                num,
            })
        })
        .collect()
}

/// Parse a `|`-joined list of POS-code + decimal-count tagsense entries.
pub fn parse_tagsense_counts(counts: &str) -> Result<Vec<(PartOfSpeech, u32)>> {
    if counts.is_empty() {
        return Ok(Vec::new());
    }
    counts
        .split('|')
        .map(|entry| {
            let mut chars = entry.chars();
            let code = chars.next().ok_or_else(|| {
                WordnetError::malformed("tagsense entry", "empty entry".to_string())
            })?;
            let pos = PartOfSpeech::try_from(code)?;
            let count = chars.as_str().parse::<u32>().map_err(|_| {
                WordnetError::malformed("tagsense entry", format!("non-decimal count in {entry:?}"))
            })?;
            Ok((pos, count))
        })
        .collect()
}

/// Parse a `|`-joined list of sense identifier strings, preserving the
/// stored order.
pub fn parse_sense_ids(ids: &str) -> Result<Vec<SynsetId>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    ids.split('|').map(str::parse).collect()
}

/// Split a `|`-joined relation list into its raw tokens without decoding
/// them.
pub fn split_relation_tokens(relations: &str) -> Vec<&str> {
    if relations.is_empty() {
        Vec::new()
    } else {
        relations.split('|').collect()
    }
}
