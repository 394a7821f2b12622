use crate::model::LanguageVersion;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuranError {
    #[error("Surah number {0} is out of range (1-114)")]
    InvalidSurah(u32),

    #[error("Invalid ayat range {from}-{to} for surah {surah} ({size} ayat)")]
    InvalidRange {
        surah: u32,
        from: u32,
        to: u32,
        size: u32,
    },

    #[error("No text streams selected")]
    NoStreamsSelected,

    #[error("Ayah {surah}:{ayah} not found in {stream}")]
    AyahNotFound {
        stream: LanguageVersion,
        surah: u32,
        ayah: u32,
    },

    #[error("Corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, QuranError>;
