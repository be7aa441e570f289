use std::env;
use std::path::PathBuf;

use wordnet_reader::{Backend, Config, PartOfSpeech, Synset, WordnetReader};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <word> [--backend table|flatfile] [--data <path>] [--wordnet-dir <path>] [--pos n|v|a|r]",
            args[0]
        );
        std::process::exit(1);
    }

    let word = &args[1];
    let mut config = Config::default();
    let mut pos: Option<PartOfSpeech> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--backend" => {
                match args.get(i + 1).map(String::as_str) {
                    Some("table") => config.backend = Backend::Table,
                    Some("flatfile") => config.backend = Backend::FlatFile,
                    other => {
                        eprintln!("ERROR: --backend expects 'table' or 'flatfile', got {:?}", other);
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--data" => {
                match args.get(i + 1) {
                    Some(path) => config.data_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("ERROR: --data flag requires an argument.");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--wordnet-dir" => {
                match args.get(i + 1) {
                    Some(path) => config.wordnet_dir = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("ERROR: --wordnet-dir flag requires an argument.");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--pos" => {
                let code = args.get(i + 1).and_then(|s| {
                    let mut chars = s.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => PartOfSpeech::try_from(c).ok(),
                        _ => None,
                    }
                });
                match code {
                    Some(p) => pos = Some(p),
                    None => {
                        eprintln!("ERROR: --pos expects one of n, v, a, s, r.");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            other => {
                eprintln!("ERROR: Unknown argument {:?}", other);
                std::process::exit(1);
            }
        }
    }

    let reader = match WordnetReader::open(&config) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("ERROR: Failed to open the lexical database");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", reader);
    println!("{}", "=".repeat(60));

    match lookup(&reader, word, pos) {
        Ok(()) => {}
        Err(e) if e.is_not_found() => {
            eprintln!("\"{}\" is not in the dictionary.", word);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("ERROR: Lookup failed");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

fn lookup(
    reader: &WordnetReader,
    word: &str,
    pos: Option<PartOfSpeech>,
) -> wordnet_reader::Result<()> {
    let lemma = reader.find(word)?;

    println!("\n{}", lemma);
    let tagsense_counts = lemma.tagsense_counts()?;
    if !tagsense_counts.is_empty() {
        let rendered: Vec<String> = tagsense_counts
            .iter()
            .map(|(pos, count)| format!("{}: {}", pos, count))
            .collect();
        println!("Tagsense counts: {}", rendered.join(", "));
    }

    let senses = lemma.senses(pos)?;
    println!("\nSenses ({}):", senses.len());
    for (i, sense) in senses.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, sense.id(), sense.gloss());
        println!("     words: {}", sense.word_texts()?.join(", "));
        print_hypernyms(sense)?;
    }

    Ok(())
}

fn print_hypernyms(sense: &Synset<'_>) -> wordnet_reader::Result<()> {
    for relation in sense.hypernyms()? {
        let destination = relation.destination()?;
        println!(
            "     hypernym -> [{}] {}",
            destination.id(),
            destination.word_texts()?.join(", ")
        );
    }
    Ok(())
}
