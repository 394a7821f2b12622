use serde::{Deserialize, Serialize};
use std::fmt;

/// One textual rendering of the corpus, e.g. Arabic/Medina or
/// English/Sahih_International. Versions use underscores where the display
/// name has spaces, matching the corpus file naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageVersion {
    pub language: String,
    pub version: String,
}

impl LanguageVersion {
    pub fn new(language: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            version: version.into(),
        }
    }

    /// Writing direction is a property of the language, never stored
    /// separately.
    pub fn is_rtl(&self) -> bool {
        self.language == "Arabic"
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.language, self.version.replace('_', " "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn alignment(self) -> Alignment {
        match self {
            Self::Ltr => Alignment::Left,
            Self::Rtl => Alignment::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Right,
}

/// Role of a stream in the composed output. The variant order is the fixed
/// emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StreamKind {
    Original,
    Translation,
    Transliteration,
}

/// One active stream plus its per-stream display parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSelection {
    pub kind: StreamKind,
    pub source: LanguageVersion,
    /// Decorate each ayah with its number.
    pub numbered: bool,
    /// Font family used to pick digit glyphs for RTL numbering. `None` falls
    /// back to the standard Arabic-Indic digit block.
    pub digit_font: Option<String>,
}

impl StreamSelection {
    pub fn new(kind: StreamKind, source: LanguageVersion) -> Self {
        Self {
            kind,
            source,
            numbered: true,
            digit_font: None,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.source.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

/// Inclusive 1-based ayah range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyahRange {
    pub from: u32,
    pub to: u32,
}

impl AyahRange {
    pub fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    pub fn count(&self) -> u32 {
        self.to - self.from + 1
    }

    pub fn ayat(&self) -> impl Iterator<Item = u32> {
        self.from..=self.to
    }
}

/// Requested range: the whole surah, or an explicit ayah range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelection {
    All,
    Ayat(AyahRange),
}

impl RangeSelection {
    /// Resolve against the surah size. `All` is equivalent to `1..=size`.
    pub fn resolve(self, surah_size: u32) -> AyahRange {
        match self {
            Self::All => AyahRange::new(1, surah_size),
            Self::Ayat(range) => range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Interleave ayat of all streams, one paragraph per ayah per stream.
    LineByLine,
    /// Concatenate each stream's whole range into a single paragraph.
    OneBlockPerStream,
}

/// Immutable composition request, built once by the caller. The engine is a
/// pure function of this value plus the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionRequest {
    pub surah: u32,
    pub range: RangeSelection,
    pub streams: Vec<StreamSelection>,
    pub layout: LayoutMode,
}

/// The engine's output unit. Records are emitted in insertion order; the
/// consumer creates one document paragraph per record and must not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    pub text: String,
    pub direction: Direction,
    pub alignment: Alignment,
}

impl ParagraphRecord {
    pub fn new(text: String, direction: Direction) -> Self {
        Self {
            text,
            direction,
            alignment: direction.alignment(),
        }
    }
}
