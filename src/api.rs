use crate::compose;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::model::{CompositionRequest, LanguageVersion, ParagraphRecord};
use crate::numbering::{DigitProbe, NoProbe};
use crate::surahs;
use serde::Serialize;

/// One row of the surah listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurahInfo {
    pub number: u32,
    pub name: &'static str,
    pub ayah_count: u32,
}

/// The API facade: entry point for all operations. Generic over the corpus
/// backend so callers and tests pick their own.
pub struct QuranApi<C: Corpus> {
    corpus: C,
    probe: Box<dyn DigitProbe>,
}

impl<C: Corpus> QuranApi<C> {
    pub fn new(corpus: C) -> Self {
        Self {
            corpus,
            probe: Box::new(NoProbe),
        }
    }

    /// Replace the digit probe, for hosts that know their font tables.
    pub fn with_probe(mut self, probe: Box<dyn DigitProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn compose(&self, request: &CompositionRequest) -> Result<Vec<ParagraphRecord>> {
        compose::compose(request, &self.corpus, self.probe.as_ref())
    }

    pub fn compose_with_progress(
        &self,
        request: &CompositionRequest,
        progress: impl FnMut(u8),
    ) -> Result<Vec<ParagraphRecord>> {
        compose::compose_with_progress(request, &self.corpus, self.probe.as_ref(), progress)
    }

    /// Streams present in the corpus.
    pub fn streams(&self) -> Result<Vec<LanguageVersion>> {
        self.corpus.available_streams()
    }

    /// All 114 surahs with their ayah counts.
    pub fn all_surahs(&self) -> Vec<SurahInfo> {
        (1..=surahs::SURAH_COUNT)
            .map(|number| SurahInfo {
                number,
                // Infallible for 1..=114.
                name: surahs::surah_name(number).unwrap_or(""),
                ayah_count: surahs::surah_size(number).unwrap_or(0),
            })
            .collect()
    }
}
