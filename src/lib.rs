#![forbid(unsafe_code)]
//! kanjikabe renders JLPT kanji study wallpapers: CSV decks of kanji metadata
//! in, one PNG per entry out, sized to a target screen resolution.

pub mod deck;
pub mod error;
pub mod fonts;
pub mod kana;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod text;
pub mod theme;

pub use deck::{Compound, KanjiEntry, Level};
pub use error::{KabeError, KabeResult};
pub use layout::Canvas;
pub use pipeline::{DeckSummary, generate_deck};
pub use render::{FrameRgba, WallpaperRenderer};
pub use theme::Theme;
