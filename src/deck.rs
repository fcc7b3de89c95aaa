//! Kanji deck model and CSV parsing.
//!
//! A deck is a CSV file with the header `kanji,meaning,readings,compounds`,
//! one kanji per row. Meanings and compounds are quoted fields with embedded
//! commas; compounds serialize as `word (kana) = gloss; word (kana) = gloss`.

use std::{fmt, io, path::Path, str::FromStr};

use crate::{
    error::{KabeError, KabeResult},
    kana,
};

/// JLPT proficiency level covered by the generator (N5 easiest, N2 hardest
/// level with published vocabulary lists on the source site).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    N5,
    N4,
    N3,
    N2,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::N5, Level::N4, Level::N3, Level::N2];

    /// Output directory name, e.g. `JLPT-N2`.
    pub fn dir_name(self) -> String {
        format!("JLPT-{self}")
    }

    /// Output file prefix, e.g. `JLPT_N2`.
    pub fn file_prefix(self) -> String {
        format!("JLPT_{self}")
    }

    /// Derive a level from a deck file name such as `kanji_n2.csv`: any
    /// `_`-separated segment of the stem that parses as a level counts.
    pub fn from_path(path: &Path) -> Option<Level> {
        let stem = path.file_stem()?.to_str()?;
        stem.split('_').find_map(|seg| seg.parse().ok())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::N5 => "N5",
            Level::N4 => "N4",
            Level::N3 => "N3",
            Level::N2 => "N2",
        };
        f.write_str(s)
    }
}

impl FromStr for Level {
    type Err = KabeError;

    fn from_str(s: &str) -> KabeResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "n5" => Ok(Level::N5),
            "n4" => Ok(Level::N4),
            "n3" => Ok(Level::N3),
            "n2" => Ok(Level::N2),
            other => Err(KabeError::deck(format!(
                "unknown JLPT level '{other}' (expected n5..n2)"
            ))),
        }
    }
}

/// A compound word using the entry's kanji: `右腕 (うわん) = right arm`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compound {
    pub word: String,
    pub kana: String,
    pub gloss: String,
}

/// One parsed deck row. Immutable once read; consumed once by the renderer.
#[derive(Clone, Debug)]
pub struct KanjiEntry {
    /// The kanji itself, a single glyph.
    pub character: String,
    /// English meaning line.
    pub meaning: String,
    /// On-yomi readings (katakana).
    pub on_readings: Vec<String>,
    /// Kun-yomi readings (hiragana).
    pub kun_readings: Vec<String>,
    pub compounds: Vec<Compound>,
    pub level: Level,
}

#[derive(Debug, serde::Deserialize)]
struct RawRecord {
    kanji: String,
    meaning: String,
    #[serde(default)]
    readings: String,
    #[serde(default)]
    compounds: String,
}

/// Read a deck file from disk.
pub fn read_deck(path: &Path, level: Level) -> KabeResult<Vec<KanjiEntry>> {
    let file = std::fs::File::open(path)
        .map_err(|e| KabeError::deck(format!("open deck '{}': {e}", path.display())))?;
    parse_deck(io::BufReader::new(file), level)
}

/// Parse deck rows from any reader. A row with a missing field or an empty
/// `kanji`/`meaning` aborts with its 1-based row number; there is no
/// skip-and-continue at this scale.
pub fn parse_deck<R: io::Read>(reader: R, level: Level) -> KabeResult<Vec<KanjiEntry>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut entries = Vec::new();
    // Header is row 1.
    for (row, record) in rdr.deserialize::<RawRecord>().enumerate() {
        let row = row + 2;
        let record = record.map_err(|e| KabeError::deck(format!("row {row}: {e}")))?;
        entries.push(entry_from_record(record, row, level)?);
    }
    Ok(entries)
}

fn entry_from_record(record: RawRecord, row: usize, level: Level) -> KabeResult<KanjiEntry> {
    let character = record.kanji.trim().to_string();
    if character.is_empty() {
        return Err(KabeError::deck(format!("row {row}: empty kanji field")));
    }
    let meaning = record.meaning.trim().to_string();
    if meaning.is_empty() {
        return Err(KabeError::deck(format!(
            "row {row}: empty meaning field for '{character}'"
        )));
    }

    let (kun_readings, on_readings) = kana::split_readings(&record.readings);

    Ok(KanjiEntry {
        character,
        meaning,
        on_readings,
        kun_readings,
        compounds: parse_compounds(&record.compounds),
        level,
    })
}

/// Parse the serialized compound list. Fragments that do not match
/// `word (kana) = gloss` are skipped; they are display decoration, not data.
pub fn parse_compounds(raw: &str) -> Vec<Compound> {
    raw.split(';')
        .filter_map(parse_compound_fragment)
        .collect()
}

fn parse_compound_fragment(fragment: &str) -> Option<Compound> {
    let fragment = fragment.trim();
    let open = fragment.find('(')?;
    let close = fragment[open..].find(')')? + open;
    let eq = fragment[close..].find('=')? + close;

    // The word is the non-space run directly before the paren.
    let word = fragment[..open].trim().split_whitespace().last()?.to_string();
    let kana = fragment[open + 1..close].trim().to_string();
    let gloss = fragment[eq + 1..].trim().to_string();

    if word.is_empty() || kana.is_empty() || gloss.is_empty() {
        return None;
    }
    Some(Compound { word, kana, gloss })
}
