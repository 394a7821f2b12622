use super::{corpus_filename, Corpus};
use crate::error::{QuranError, Result};
use crate::model::LanguageVersion;
use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Production corpus backend over one XML file per (language, version).
///
/// File shape: `<quran><surah no="..."><ayat no="..." text="..."/></surah></quran>`.
/// A stream's file is parsed on first use and indexed for the lifetime of
/// the corpus, so a composition run touches each file at most once no matter
/// how many ayat it looks up.
pub struct XmlCorpus {
    corpus_dir: PathBuf,
    cache: RefCell<HashMap<LanguageVersion, StreamIndex>>,
}

struct StreamIndex {
    ayat: HashMap<(u32, u32), String>,
}

impl XmlCorpus {
    pub fn new(corpus_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus_dir: corpus_dir.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn corpus_dir(&self) -> &Path {
        &self.corpus_dir
    }

    /// Run `f` against the parsed index for a stream, loading it on first use.
    fn with_stream<T>(
        &self,
        source: &LanguageVersion,
        f: impl FnOnce(&StreamIndex) -> T,
    ) -> Result<T> {
        let mut cache = self.cache.borrow_mut();
        if !cache.contains_key(source) {
            let index = load_stream(&self.corpus_dir, source)?;
            cache.insert(source.clone(), index);
        }
        Ok(f(&cache[source]))
    }
}

impl Corpus for XmlCorpus {
    fn ayah_text(&self, source: &LanguageVersion, surah: u32, ayah: u32) -> Result<String> {
        self.with_stream(source, |index| index.ayat.get(&(surah, ayah)).cloned())?
            .ok_or_else(|| QuranError::AyahNotFound {
                stream: source.clone(),
                surah,
                ayah,
            })
    }

    fn bismillah(&self, source: &LanguageVersion) -> Result<String> {
        // Stored as surah 1 ayah 1 in every stream file.
        self.ayah_text(source, 1, 1)
    }

    fn available_streams(&self) -> Result<Vec<LanguageVersion>> {
        if !self.corpus_dir.is_dir() {
            return Err(QuranError::CorpusUnavailable(format!(
                "corpus directory not found: {}",
                self.corpus_dir.display()
            )));
        }

        let mut streams = Vec::new();
        for entry in fs::read_dir(&self.corpus_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(source) = parse_corpus_filename(&name.to_string_lossy()) {
                streams.push(source);
            }
        }
        streams.sort_by(|a, b| (&a.language, &a.version).cmp(&(&b.language, &b.version)));
        Ok(streams)
    }
}

fn parse_corpus_filename(name: &str) -> Option<LanguageVersion> {
    let stem = name.strip_prefix("QuranText.")?.strip_suffix(".xml")?;
    let (language, version) = stem.split_once('.')?;
    if language.is_empty() || version.is_empty() {
        return None;
    }
    Some(LanguageVersion::new(language, version))
}

fn load_stream(corpus_dir: &Path, source: &LanguageVersion) -> Result<StreamIndex> {
    let path = corpus_dir.join(corpus_filename(source));
    if !path.is_file() {
        return Err(QuranError::CorpusUnavailable(format!(
            "corpus file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(&path)?;
    let index = parse_stream(&content)?;
    debug!("parsed {} ayat from {}", index.ayat.len(), path.display());
    Ok(index)
}

fn parse_stream(content: &str) -> Result<StreamIndex> {
    let mut reader = Reader::from_reader(content.as_bytes());
    reader.config_mut().trim_text(true);

    let mut ayat = HashMap::new();
    let mut current_surah: Option<u32> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"surah" => {
                    current_surah = numeric_attribute(&reader, &e, b"no");
                    if current_surah.is_none() {
                        warn!("skipping surah element without a numeric 'no' attribute");
                    }
                }
                b"ayat" => {
                    if let Some(surah) = current_surah {
                        let no = numeric_attribute(&reader, &e, b"no");
                        let text = text_attribute(&reader, &e)?;
                        match (no, text) {
                            (Some(ayah), Some(text)) => {
                                ayat.insert((surah, ayah), text);
                            }
                            _ => warn!("skipping malformed ayat element in surah {}", surah),
                        }
                    } else {
                        warn!("skipping ayat element outside a surah element");
                    }
                }
                _ => {}
            },
            Event::End(e) => {
                if e.name().as_ref() == b"surah" {
                    current_surah = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(StreamIndex { ayat })
}

fn numeric_attribute(
    reader: &Reader<&[u8]>,
    e: &quick_xml::events::BytesStart<'_>,
    key: &[u8],
) -> Option<u32> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            let value = reader
                .decoder()
                .decode(attr.value.as_ref())
                .unwrap_or_default();
            return value.trim().parse().ok();
        }
    }
    None
}

fn text_attribute(
    reader: &Reader<&[u8]>,
    e: &quick_xml::events::BytesStart<'_>,
) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"text" {
            let raw = reader
                .decoder()
                .decode(attr.value.as_ref())
                .unwrap_or_default();
            let unescaped = quick_xml::escape::unescape(raw.as_ref()).map_err(|err| {
                QuranError::CorpusUnavailable(format!("bad escape in corpus text: {}", err))
            })?;
            return Ok(Some(unescaped.into_owned()));
        }
    }
    Ok(None)
}
