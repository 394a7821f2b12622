use colored::*;
use qurantext::api::SurahInfo;
use qurantext::config::QuranConfig;
use qurantext::corpus;
use qurantext::model::{LanguageVersion, ParagraphRecord};

/// Print composed paragraphs, one per line. The plain form is the literal
/// text; the JSON form carries direction and alignment for hosts that style
/// paragraphs themselves.
pub fn print_records(records: &[ParagraphRecord], json: bool) {
    if json {
        let rendered = serde_json::to_string_pretty(records)
            .expect("paragraph records serialize to JSON");
        println!("{}", rendered);
        return;
    }
    for record in records {
        println!("{}", record.text);
    }
}

pub fn print_surahs(surahs: &[SurahInfo]) {
    for info in surahs {
        println!(
            "{:>3}. {:<16} {}",
            info.number,
            info.name,
            format!("{} ayat", info.ayah_count).dimmed()
        );
    }
}

pub fn print_streams(available: &[LanguageVersion]) {
    for (language, versions) in corpus::known_catalogue() {
        for version in *versions {
            let source = LanguageVersion::new(*language, *version);
            let marker = if available.contains(&source) {
                "+".green()
            } else {
                "-".dimmed()
            };
            println!("{} {}", marker, source);
        }
    }

    let unlisted: Vec<&LanguageVersion> = available
        .iter()
        .filter(|source| !in_catalogue(source))
        .collect();
    if !unlisted.is_empty() {
        println!();
        for source in unlisted {
            println!("{} {} {}", "+".green(), source, "(unlisted)".dimmed());
        }
    }
}

pub fn print_config(config: &QuranConfig) {
    println!("corpus-dir = {}", corpus_dir_value(config));
    println!("arabic-font = {}", config.arabic_font());
    println!("numbered = {}", config.numbered);
}

pub fn print_config_key(config: &QuranConfig, key: &str) {
    match key {
        "corpus-dir" => println!("corpus-dir = {}", corpus_dir_value(config)),
        "arabic-font" => println!("arabic-font = {}", config.arabic_font()),
        "numbered" => println!("numbered = {}", config.numbered),
        other => println!("Unknown config key: {}", other),
    }
}

fn corpus_dir_value(config: &QuranConfig) -> String {
    config
        .corpus_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(platform data dir)".to_string())
}

fn in_catalogue(source: &LanguageVersion) -> bool {
    corpus::known_catalogue().iter().any(|(language, versions)| {
        *language == source.language && versions.contains(&source.version.as_str())
    })
}
