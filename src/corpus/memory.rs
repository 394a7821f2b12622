use super::Corpus;
use crate::error::{QuranError, Result};
use crate::model::LanguageVersion;
use std::collections::HashMap;

/// In-memory corpus for testing and development. Does NOT touch the
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryCorpus {
    ayat: HashMap<(LanguageVersion, u32, u32), String>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_ayah(
        &mut self,
        source: &LanguageVersion,
        surah: u32,
        ayah: u32,
        text: impl Into<String>,
    ) {
        self.ayat.insert((source.clone(), surah, ayah), text.into());
    }
}

impl Corpus for MemoryCorpus {
    fn ayah_text(&self, source: &LanguageVersion, surah: u32, ayah: u32) -> Result<String> {
        self.ayat
            .get(&(source.clone(), surah, ayah))
            .cloned()
            .ok_or_else(|| QuranError::AyahNotFound {
                stream: source.clone(),
                surah,
                ayah,
            })
    }

    fn bismillah(&self, source: &LanguageVersion) -> Result<String> {
        self.ayah_text(source, 1, 1)
    }

    fn available_streams(&self) -> Result<Vec<LanguageVersion>> {
        let mut streams: Vec<LanguageVersion> = self
            .ayat
            .keys()
            .map(|(source, _, _)| source.clone())
            .collect();
        streams.sort_by(|a, b| (&a.language, &a.version).cmp(&(&b.language, &b.version)));
        streams.dedup();
        Ok(streams)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn arabic() -> LanguageVersion {
        LanguageVersion::new("Arabic", "Medina")
    }

    pub fn english() -> LanguageVersion {
        LanguageVersion::new("English", "Sahih_International")
    }

    pub fn transliteration() -> LanguageVersion {
        LanguageVersion::new("Transliteration", "English")
    }

    pub struct CorpusFixture {
        pub corpus: MemoryCorpus,
    }

    impl Default for CorpusFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CorpusFixture {
        pub fn new() -> Self {
            Self {
                corpus: MemoryCorpus::new(),
            }
        }

        /// Fill `surah` with `count` deterministic ayah texts for a stream.
        pub fn with_surah(mut self, source: &LanguageVersion, surah: u32, count: u32) -> Self {
            for ayah in 1..=count {
                let text = format!("{} {}:{}", source.version, surah, ayah);
                self.corpus.insert_ayah(source, surah, ayah, text);
            }
            self
        }

        /// Streams need surah 1 ayah 1 present for the opening invocation.
        pub fn with_bismillah(mut self, source: &LanguageVersion) -> Self {
            let text = format!("{} bismillah", source.version);
            self.corpus.insert_ayah(source, 1, 1, text);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{arabic, english, CorpusFixture};
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut corpus = MemoryCorpus::new();
        corpus.insert_ayah(&arabic(), 2, 1, "alif lam mim");
        assert_eq!(corpus.ayah_text(&arabic(), 2, 1).unwrap(), "alif lam mim");
    }

    #[test]
    fn test_missing_ayah() {
        let corpus = MemoryCorpus::new();
        assert!(matches!(
            corpus.ayah_text(&arabic(), 1, 1),
            Err(QuranError::AyahNotFound { .. })
        ));
    }

    #[test]
    fn test_bismillah_comes_from_first_surah() {
        let fixture = CorpusFixture::new().with_bismillah(&arabic());
        assert_eq!(
            fixture.corpus.bismillah(&arabic()).unwrap(),
            "Medina bismillah"
        );
    }

    #[test]
    fn test_available_streams_sorted_and_deduped() {
        let fixture = CorpusFixture::new()
            .with_surah(&english(), 1, 7)
            .with_surah(&arabic(), 1, 7);
        assert_eq!(
            fixture.corpus.available_streams().unwrap(),
            vec![arabic(), english()]
        );
    }
}
