//! Read-only access to the verse corpus.
//!
//! The [`Corpus`] trait abstracts the storage backend so the engine stays
//! decoupled from the on-disk format and tests run without a filesystem:
//!
//! - [`xml::XmlCorpus`]: production backend, one XML file per
//!   (language, version) named `QuranText.<Language>.<Version>.xml`. Each
//!   file is parsed at most once per corpus lifetime and served from an
//!   in-memory index afterwards.
//! - [`memory::MemoryCorpus`]: in-memory backend for tests.
//!
//! Surah sizes and names deliberately live in [`crate::surahs`], not here.

use crate::error::Result;
use crate::model::LanguageVersion;

pub mod memory;
pub mod xml;

/// Abstract read-only interface to the verse corpus.
pub trait Corpus {
    /// Literal text of one ayah. Absence is an error, never an empty string.
    fn ayah_text(&self, source: &LanguageVersion, surah: u32, ayah: u32) -> Result<String>;

    /// The opening invocation (Bismillah) for a stream. Conventionally the
    /// text of surah 1 ayah 1, but exposed as its own operation since it is
    /// reused across all surahs.
    fn bismillah(&self, source: &LanguageVersion) -> Result<String>;

    /// Streams the corpus actually contains.
    fn available_streams(&self) -> Result<Vec<LanguageVersion>>;
}

/// Corpus file name for a stream.
pub fn corpus_filename(source: &LanguageVersion) -> String {
    format!("QuranText.{}.{}.xml", source.language, source.version)
}

/// The language/version catalogue the tool ships support for. The corpus
/// directory is the source of truth for what is present; this table only
/// labels listings.
pub fn known_catalogue() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("Arabic", &["Medina"]),
        ("Dutch", &["Leemhuis", "Siregar"]),
        ("English", &["Sahih_International", "Pickthall"]),
        ("Indonesian", &["Ministry_of_Religious_Affairs"]),
    ]
}
