//! Builds one literal line of output for one stream at one ayah.

use crate::corpus::Corpus;
use crate::error::Result;
use crate::model::{Direction, StreamSelection};
use crate::numbering;

/// One ayah line for a stream: the corpus text, with the decorated ayah
/// number spliced at the tail (RTL) or head (LTR) when numbering is on.
/// No trailing newline; the composition engine owns separators.
pub fn ayah_line<C: Corpus + ?Sized>(
    corpus: &C,
    stream: &StreamSelection,
    surah: u32,
    ayah: u32,
    digit_base: u32,
) -> Result<String> {
    let text = corpus.ayah_text(&stream.source, surah, ayah)?;
    if !stream.numbered {
        return Ok(text);
    }
    let line = match stream.direction() {
        Direction::Rtl => format!(
            "{}{}",
            text,
            numbering::decorate(ayah, Direction::Rtl, digit_base)
        ),
        Direction::Ltr => format!(
            "{}{}",
            numbering::decorate(ayah, Direction::Ltr, digit_base),
            text
        ),
    };
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::memory::fixtures::{arabic, english, CorpusFixture};
    use crate::model::StreamKind;
    use crate::numbering::ARABIC_INDIC_ZERO;

    fn fixture() -> CorpusFixture {
        CorpusFixture::new()
            .with_surah(&arabic(), 2, 3)
            .with_surah(&english(), 2, 3)
    }

    #[test]
    fn test_rtl_line_numbered_at_tail() {
        let fixture = fixture();
        let stream = StreamSelection::new(StreamKind::Original, arabic());
        let line = ayah_line(&fixture.corpus, &stream, 2, 3, ARABIC_INDIC_ZERO).unwrap();
        assert_eq!(line, "Medina 2:3 \u{FD3F}\u{0663}\u{FD3E}");
    }

    #[test]
    fn test_ltr_line_numbered_at_head() {
        let fixture = fixture();
        let stream = StreamSelection::new(StreamKind::Translation, english());
        let line = ayah_line(&fixture.corpus, &stream, 2, 3, ARABIC_INDIC_ZERO).unwrap();
        assert_eq!(line, "(3) Sahih_International 2:3");
    }

    #[test]
    fn test_unnumbered_line_is_bare_text() {
        let fixture = fixture();
        let mut stream = StreamSelection::new(StreamKind::Original, arabic());
        stream.numbered = false;
        let line = ayah_line(&fixture.corpus, &stream, 2, 1, ARABIC_INDIC_ZERO).unwrap();
        assert_eq!(line, "Medina 2:1");
    }

    #[test]
    fn test_missing_ayah_propagates() {
        let fixture = fixture();
        let stream = StreamSelection::new(StreamKind::Original, arabic());
        assert!(ayah_line(&fixture.corpus, &stream, 2, 4, ARABIC_INDIC_ZERO).is_err());
    }
}
