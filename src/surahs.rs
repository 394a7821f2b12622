//! Fixed surah tables: the 114 names and ayah counts.
//!
//! These are corpus-independent constants and the single authoritative
//! source for surah validation. The repository never supplies them, so the
//! engine cannot diverge from the corpus on sizing.

use crate::error::{QuranError, Result};

pub const SURAH_COUNT: u32 = 114;

#[rustfmt::skip]
static SURAH_NAMES: [&str; 114] = [
    "Al-Fatihah", "Al-Baqarah", "Aal-e-Imran", "An-Nisa", "Al-Ma'idah",
    "Al-An'am", "Al-A'raf", "Al-Anfal", "At-Tawbah", "Yunus", "Hud", "Yusuf",
    "Ar-Ra'd", "Ibrahim", "Al-Hijr", "An-Nahl", "Al-Isra'", "Al-Kahf",
    "Maryam", "Ta-Ha", "Al-Anbiya", "Al-Hajj", "Al-Mu'minum", "An-Nur",
    "Al-Furqan", "Ash-Shu'ara", "Al-Naml", "Al-Qasas", "Al-Ankabut",
    "Ar-Rum", "Luqman", "As-Sajdah", "Al-Ahzab", "Saba'", "Fatir", "Ya-Seen",
    "As-Saaffat", "Sad", "Az-Zumar", "Ghafir", "Fussilat", "Ash-Shura",
    "Zukhuf", "Asd-Dukhan", "Al-Jathiya", "Al-Ahqaf", "Muhammad", "Al-Fath",
    "Al-Hujurat", "Qaf", "Adh-Dhariyat", "At-Tur", "An-Najm", "Al-Qamar",
    "Ar-Rahman", "Al-Waqi'ah", "Al-Hadid", "Al-Mujadila", "Al-Hasr",
    "Al-Mumtahana", "As-Saf", "Al-Jumu'ah", "Al-Munafiqun", "At-Taghabun",
    "At-Talaq", "At-Tahrim", "Al-Mulk", "Al-Qalam", "Al-Haqqah", "Al-Ma'arij",
    "Al-Nuh", "Al-Jinn", "Al-Muzzammil", "Al-Muddathir", "Al-Qiyamah",
    "Al-Insan", "Al-Mursalat", "Al-Naba'", "Al-Nazi'at", "'Abasa",
    "At-Takwir", "Al-Infitar", "Al-Mutaffifin", "Al-Inshiqaq", "Al-Buruj",
    "At-Tariq", "Al-A'la", "Al-Ghashiyah", "Al-Fajr", "Al-Balad",
    "Ash-Shams", "Al-Layl", "Ad-Dhuhaa", "Al-Sharh", "At-Tin", "Al-Alaq",
    "Al-Qadr", "Al-Bayyinah", "Az-Zalzalah", "Al-Adiyat", "Al-Qari'ah",
    "At-Takathur", "Al-Asr", "Al-Humazah", "Al-Fil", "Quraysh", "Al-Ma'un",
    "Al-Kawthar", "Al-Kafirun", "An-Nasr", "Al-Masad", "Al-Ikhlas",
    "Al-Falaq", "An-Nas",
];

#[rustfmt::skip]
static SURAH_SIZES: [u32; 114] = [
      7, 286, 200, 176, 120, 165, 206,  75, 129, 109, 123, 111,  43,  52,
     99, 128, 111, 110,  98, 135, 112,  78, 118,  64,  77, 227,  93,  88,
     69,  60,  34,  30,  73,  54,  45,  83, 182,  88,  75,  85,  54,  53,
     89,  59,  37,  35,  38,  29,  18,  45,  60,  49,  62,  55,  78,  96,
     29,  22,  24,  13,  14,  11,  11,  18,  12,  12,  30,  52,  52,  44,
     28,  28,  20,  56,  40,  31,  50,  40,  46,  42,  29,  19,  36,  25,
     22,  17,  19,  26,  30,  20,  15,  21,  11,   8,   8,  19,   5,   8,
      8,  11,  11,   8,   3,   9,   5,   4,   7,   3,   6,   3,   5,   4,
      5,   6,
];

/// Name of a surah by its 1-based number.
pub fn surah_name(surah: u32) -> Result<&'static str> {
    validate_surah(surah)?;
    Ok(SURAH_NAMES[surah as usize - 1])
}

/// Number of ayat in a surah.
pub fn surah_size(surah: u32) -> Result<u32> {
    validate_surah(surah)?;
    Ok(SURAH_SIZES[surah as usize - 1])
}

pub fn validate_surah(surah: u32) -> Result<()> {
    if (1..=SURAH_COUNT).contains(&surah) {
        Ok(())
    } else {
        Err(QuranError::InvalidSurah(surah))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(surah_name(1).unwrap(), "Al-Fatihah");
        assert_eq!(surah_name(2).unwrap(), "Al-Baqarah");
        assert_eq!(surah_name(9).unwrap(), "At-Tawbah");
        assert_eq!(surah_name(114).unwrap(), "An-Nas");
    }

    #[test]
    fn test_known_sizes() {
        assert_eq!(surah_size(1).unwrap(), 7);
        assert_eq!(surah_size(2).unwrap(), 286);
        assert_eq!(surah_size(9).unwrap(), 129);
        assert_eq!(surah_size(112).unwrap(), 4);
        assert_eq!(surah_size(114).unwrap(), 6);
    }

    #[test]
    fn test_out_of_range_surah() {
        assert!(matches!(surah_name(0), Err(QuranError::InvalidSurah(0))));
        assert!(matches!(surah_size(115), Err(QuranError::InvalidSurah(115))));
    }

    #[test]
    fn test_names_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for name in SURAH_NAMES {
            assert!(seen.insert(name), "duplicate surah name: {}", name);
        }
    }
}
