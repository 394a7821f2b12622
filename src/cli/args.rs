use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qurantext")]
#[command(about = "Compose Quran text for insertion into documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing the QuranText XML corpus files
    #[arg(long, global = true, value_name = "DIR")]
    pub corpus_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose a surah selection and print the paragraphs
    #[command(alias = "i")]
    Insert(InsertArgs),

    /// List the 114 surahs with their ayah counts
    Surahs,

    /// List the text streams the corpus provides
    Streams,

    /// Show or set configuration values
    Config {
        /// Key to show or set (corpus-dir, arabic-font, numbered)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct InsertArgs {
    /// Surah number (1-114)
    #[arg(short, long)]
    pub surah: u32,

    /// First ayah of the range (defaults to the whole surah)
    #[arg(long, requires = "to")]
    pub from: Option<u32>,

    /// Last ayah of the range
    #[arg(long, requires = "from")]
    pub to: Option<u32>,

    /// Include the Arabic stream, naming its version (e.g. "Medina")
    #[arg(long, value_name = "VERSION")]
    pub arabic: Option<String>,

    /// Include a translation stream (e.g. "English/Sahih_International")
    #[arg(long, value_name = "LANG/VERSION")]
    pub translation: Option<String>,

    /// Include a transliteration stream (e.g. "Transliteration/English")
    #[arg(long, value_name = "LANG/VERSION")]
    pub transliteration: Option<String>,

    /// Emit one block per stream instead of line-by-line
    #[arg(long)]
    pub block: bool,

    /// Suppress ayah numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Arabic font family, used to pick ayah-number digit glyphs
    #[arg(long, value_name = "FONT")]
    pub arabic_font: Option<String>,

    /// Emit paragraph records as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}
