use std::fs;
use std::io::{BufRead, BufReader};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use shibori_core::item::NormalizedItem;
use shibori_core::matcher::item_matches;
use shibori_core::query::search_patterns;
use shibori_core::reading::ReadingDictionary;
use shibori_core::variants::VariantRules;

#[derive(Parser)]
#[command(name = "shiboritool", about = "Shibori matching diagnostics")]
struct Cli {
    /// Path to a readings TOML file (default: bundled dictionary)
    #[arg(long, global = true)]
    readings: Option<String>,
    /// Path to a variant-rules TOML file (default: bundled table)
    #[arg(long, global = true)]
    rules: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the full pattern set derived from a query
    Patterns {
        /// Query text as typed into a search field
        query: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve an item text: reading, romaji, and spelling variants
    Reading {
        /// Item text to resolve
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Filter a file of item texts (one per line) by a query
    Filter {
        /// Path to the input file (one item per line)
        items_file: String,
        /// Query text as typed into a search field
        query: String,
        /// Output as JSON with per-item representations
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PatternsReport {
    query: String,
    patterns: Vec<String>,
}

#[derive(Serialize)]
struct ReadingReport {
    text: String,
    resolved: String,
    reading: String,
    romaji: String,
    romaji_variants: Vec<String>,
}

fn reading_report(text: &str, readings: &ReadingDictionary, rules: &VariantRules) -> ReadingReport {
    let resolved = readings.resolve(text);
    let item = NormalizedItem::build(0, text, readings, rules);
    ReadingReport {
        text: text.to_string(),
        resolved,
        reading: item.hiragana_reading,
        romaji: item.romaji,
        romaji_variants: item.romaji_variants,
    }
}

#[derive(Serialize)]
struct FilterEntry {
    text: String,
    matched: bool,
    reading: String,
    romaji: String,
    romaji_variants: Vec<String>,
}

#[derive(Serialize)]
struct FilterReport {
    query: String,
    total: usize,
    matched: usize,
    items: Vec<FilterEntry>,
}

fn open_resources(cli: &Cli) -> (ReadingDictionary, VariantRules) {
    let readings = match &cli.readings {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read readings file {}: {}", path, e);
                process::exit(1);
            });
            ReadingDictionary::from_toml(&text).unwrap_or_else(|e| {
                eprintln!("Invalid readings file {}: {}", path, e);
                process::exit(1);
            })
        }
        None => ReadingDictionary::default(),
    };

    let rules = match &cli.rules {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read rules file {}: {}", path, e);
                process::exit(1);
            });
            VariantRules::from_toml(&text).unwrap_or_else(|e| {
                eprintln!("Invalid rules file {}: {}", path, e);
                process::exit(1);
            })
        }
        None => VariantRules::default(),
    };

    (readings, rules)
}

fn read_items(items_file: &str) -> Vec<String> {
    let file = fs::File::open(items_file).unwrap_or_else(|e| {
        eprintln!("Failed to open items file {}: {}", items_file, e);
        process::exit(1);
    });
    BufReader::new(file)
        .lines()
        .map(|l| {
            l.unwrap_or_else(|e| {
                eprintln!("Failed to read line: {}", e);
                process::exit(1);
            })
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn print_json<T: Serialize>(value: &T) {
    let out = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {}", e);
        process::exit(1);
    });
    println!("{}", out);
}

fn main() {
    let cli = Cli::parse();
    let (readings, rules) = open_resources(&cli);

    match &cli.command {
        Command::Patterns { query, json } => {
            let patterns = search_patterns(query, &rules);
            if *json {
                print_json(&PatternsReport {
                    query: query.clone(),
                    patterns,
                });
            } else {
                for p in &patterns {
                    println!("{}", p);
                }
            }
        }

        Command::Reading { text, json } => {
            let report = reading_report(text, &readings, &rules);
            if *json {
                print_json(&report);
            } else {
                println!("resolved:  {}", report.resolved);
                println!("reading:   {}", report.reading);
                println!("romaji:    {}", report.romaji);
                println!("variants:  {}", report.romaji_variants.join(" "));
            }
        }

        Command::Filter {
            items_file,
            query,
            json,
        } => {
            let texts = read_items(items_file);
            let patterns = search_patterns(query, &rules);
            let items: Vec<NormalizedItem> = texts
                .iter()
                .enumerate()
                .map(|(i, t)| NormalizedItem::build(i, t, &readings, &rules))
                .collect();

            if *json {
                let entries: Vec<FilterEntry> = items
                    .iter()
                    .map(|item| FilterEntry {
                        text: item.original_text.clone(),
                        matched: item_matches(item, &patterns),
                        reading: item.hiragana_reading.clone(),
                        romaji: item.romaji.clone(),
                        romaji_variants: item.romaji_variants.clone(),
                    })
                    .collect();
                let matched = entries.iter().filter(|e| e.matched).count();
                print_json(&FilterReport {
                    query: query.clone(),
                    total: entries.len(),
                    matched,
                    items: entries,
                });
            } else {
                for item in items.iter().filter(|i| item_matches(i, &patterns)) {
                    println!("{}", item.original_text);
                }
            }
        }
    }
}
