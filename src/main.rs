use clap::Parser;
use directories::ProjectDirs;
use qurantext::api::QuranApi;
use qurantext::config::QuranConfig;
use qurantext::corpus::xml::XmlCorpus;
use qurantext::error::{QuranError, Result};
use qurantext::model::{
    AyahRange, CompositionRequest, LanguageVersion, LayoutMode, RangeSelection, StreamKind,
    StreamSelection,
};
use std::path::{Path, PathBuf};

mod cli;
use cli::args::{Cli, Commands, InsertArgs};
use cli::print;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let proj_dirs =
        ProjectDirs::from("nl", "mossoft", "qurantext").expect("Could not determine config dir");
    let config = QuranConfig::load(config_dir(&proj_dirs)).unwrap_or_default();
    let corpus_dir = resolve_corpus_dir(&cli, &config, &proj_dirs);

    let api = QuranApi::new(XmlCorpus::new(corpus_dir));

    match cli.command {
        Commands::Insert(args) => handle_insert(&api, &config, args),
        Commands::Surahs => {
            print::print_surahs(&api.all_surahs());
            Ok(())
        }
        Commands::Streams => {
            print::print_streams(&api.streams()?);
            Ok(())
        }
        Commands::Config { key, value } => {
            handle_config(&config_dir(&proj_dirs), config, key, value)
        }
    }
}

fn handle_config(
    config_dir: &Path,
    mut config: QuranConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => print::print_config(&config),
        (Some(key), None) => print::print_config_key(&config, key),
        (Some("corpus-dir"), Some(value)) => {
            config.corpus_dir = Some(PathBuf::from(value));
            config.save(config_dir)?;
        }
        (Some("arabic-font"), Some(value)) => {
            config.arabic_font = Some(value);
            config.save(config_dir)?;
        }
        (Some("numbered"), Some(value)) => {
            config.numbered = value.parse().map_err(|_| {
                QuranError::InvalidArgument(format!(
                    "numbered must be true or false, got '{}'",
                    value
                ))
            })?;
            config.save(config_dir)?;
        }
        (Some(other), Some(_)) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

/// Config location, overridable for tests and sandboxed environments.
fn config_dir(proj_dirs: &ProjectDirs) -> PathBuf {
    std::env::var_os("QURANTEXT_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| proj_dirs.config_dir().to_path_buf())
}

/// Corpus location: explicit flag, then config, then the platform data dir.
fn resolve_corpus_dir(cli: &Cli, config: &QuranConfig, proj_dirs: &ProjectDirs) -> PathBuf {
    if let Some(dir) = &cli.corpus_dir {
        return dir.clone();
    }
    if let Some(dir) = &config.corpus_dir {
        return dir.clone();
    }
    proj_dirs.data_dir().join("corpus")
}

fn handle_insert(api: &QuranApi<XmlCorpus>, config: &QuranConfig, args: InsertArgs) -> Result<()> {
    let numbered = !args.no_numbers && config.numbered;
    let arabic_font = args
        .arabic_font
        .unwrap_or_else(|| config.arabic_font().to_string());

    let mut streams = Vec::new();
    if let Some(version) = args.arabic {
        let mut stream = StreamSelection::new(
            StreamKind::Original,
            LanguageVersion::new("Arabic", version),
        );
        stream.numbered = numbered;
        stream.digit_font = Some(arabic_font);
        streams.push(stream);
    }
    if let Some(spec) = args.translation.as_deref() {
        streams.push(parse_stream(StreamKind::Translation, spec, numbered)?);
    }
    if let Some(spec) = args.transliteration.as_deref() {
        streams.push(parse_stream(StreamKind::Transliteration, spec, numbered)?);
    }

    let range = match (args.from, args.to) {
        (Some(from), Some(to)) => RangeSelection::Ayat(AyahRange::new(from, to)),
        _ => RangeSelection::All,
    };
    let layout = if args.block {
        LayoutMode::OneBlockPerStream
    } else {
        LayoutMode::LineByLine
    };

    let request = CompositionRequest {
        surah: args.surah,
        range,
        streams,
        layout,
    };
    let records = api.compose(&request)?;
    print::print_records(&records, args.json);
    Ok(())
}

fn parse_stream(kind: StreamKind, spec: &str, numbered: bool) -> Result<StreamSelection> {
    let (language, version) = spec.split_once('/').ok_or_else(|| {
        QuranError::InvalidArgument(format!(
            "stream '{}' must be given as LANG/VERSION, e.g. English/Sahih_International",
            spec
        ))
    })?;
    if language.is_empty() || version.is_empty() {
        return Err(QuranError::InvalidArgument(format!(
            "stream '{}' must name both a language and a version",
            spec
        )));
    }
    let mut stream = StreamSelection::new(kind, LanguageVersion::new(language, version));
    stream.numbered = numbered;
    Ok(stream)
}
