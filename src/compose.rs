//! The composition engine: turns a [`CompositionRequest`] into an ordered
//! sequence of [`ParagraphRecord`]s.
//!
//! The engine is a pure function of the request plus the corpus. It holds no
//! state between invocations and commits its result atomically: on any
//! lookup failure the whole run fails and nothing is returned.

use crate::corpus::Corpus;
use crate::error::{QuranError, Result};
use crate::line;
use crate::model::{
    CompositionRequest, LayoutMode, ParagraphRecord, StreamSelection,
};
use crate::numbering::{self, DigitProbe};
use crate::surahs;

/// Surahs that carry no opening invocation. Al-Fatihah opens with it as its
/// own first ayah; At-Tawbah has none by convention.
const INVOCATION_EXEMPT_SURAHS: [u32; 2] = [1, 9];

/// Compose without progress reporting.
pub fn compose<C: Corpus + ?Sized>(
    request: &CompositionRequest,
    corpus: &C,
    probe: &dyn DigitProbe,
) -> Result<Vec<ParagraphRecord>> {
    compose_with_progress(request, corpus, probe, |_| {})
}

/// Compose, reporting progress in percent as ayah lines are produced.
/// Values are non-decreasing within one run and reach 100 on success; they
/// carry no other guarantee and no correctness weight.
pub fn compose_with_progress<C: Corpus + ?Sized>(
    request: &CompositionRequest,
    corpus: &C,
    probe: &dyn DigitProbe,
    mut progress: impl FnMut(u8),
) -> Result<Vec<ParagraphRecord>> {
    let size = surahs::surah_size(request.surah)?;
    let range = request.range.resolve(size);
    if range.from < 1 || range.from > range.to || range.to > size {
        return Err(QuranError::InvalidRange {
            surah: request.surah,
            from: range.from,
            to: range.to,
            size,
        });
    }
    if request.streams.is_empty() {
        return Err(QuranError::NoStreamsSelected);
    }

    // Fixed emission order: original, translation, transliteration. The sort
    // is stable, so several streams of one kind keep their request order.
    let mut streams: Vec<&StreamSelection> = request.streams.iter().collect();
    streams.sort_by_key(|stream| stream.kind);
    let streams: Vec<(&StreamSelection, u32)> = streams
        .into_iter()
        .map(|stream| (stream, stream_digit_base(stream, probe)))
        .collect();

    let with_invocation =
        range.from == 1 && !INVOCATION_EXEMPT_SURAHS.contains(&request.surah);

    let total_lines = u64::from(range.count()) * streams.len() as u64;
    let mut lines_done: u64 = 0;
    let tick = |done: u64| ((done * 100) / total_lines) as u8;

    let mut records = Vec::new();
    match request.layout {
        LayoutMode::OneBlockPerStream => {
            for (stream, digit_base) in &streams {
                let mut block = String::new();
                if with_invocation {
                    block.push_str(&corpus.bismillah(&stream.source)?);
                    block.push('\n');
                }
                for (i, ayah) in range.ayat().enumerate() {
                    if i > 0 {
                        block.push(' ');
                    }
                    block.push_str(&line::ayah_line(
                        corpus,
                        stream,
                        request.surah,
                        ayah,
                        *digit_base,
                    )?);
                    lines_done += 1;
                    progress(tick(lines_done));
                }
                records.push(ParagraphRecord::new(block, stream.direction()));
            }
        }
        LayoutMode::LineByLine => {
            if with_invocation {
                for (stream, _) in &streams {
                    let text = corpus.bismillah(&stream.source)?;
                    records.push(ParagraphRecord::new(text, stream.direction()));
                }
            }
            for ayah in range.ayat() {
                for (stream, digit_base) in &streams {
                    let text =
                        line::ayah_line(corpus, stream, request.surah, ayah, *digit_base)?;
                    records.push(ParagraphRecord::new(text, stream.direction()));
                    lines_done += 1;
                    progress(tick(lines_done));
                }
            }
        }
    }

    Ok(records)
}

fn stream_digit_base(stream: &StreamSelection, probe: &dyn DigitProbe) -> u32 {
    numbering::digit_base_for_font(stream.digit_font.as_deref().unwrap_or(""), probe)
}
