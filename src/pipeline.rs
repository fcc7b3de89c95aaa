//! Per-file batch pipeline: parse a deck, render every entry, write PNGs.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    deck::{self, Level},
    error::KabeResult,
    render::WallpaperRenderer,
};

/// Result of generating one deck file.
#[derive(Clone, Debug)]
pub struct DeckSummary {
    pub level: Level,
    pub written: usize,
    pub out_dir: PathBuf,
}

/// Output file name for the entry at 1-based `index`, e.g. `JLPT_N2_00001.png`.
pub fn output_file_name(level: Level, index: usize) -> String {
    format!("{}_{index:05}.png", level.file_prefix())
}

/// Generate wallpapers for one deck file into `<out_root>/JLPT-<level>/`.
///
/// Every valid row produces exactly one image; any malformed row or write
/// failure aborts the run.
#[tracing::instrument(skip(renderer), fields(deck = %csv_path.display(), %level))]
pub fn generate_deck(
    csv_path: &Path,
    level: Level,
    out_root: &Path,
    renderer: &mut WallpaperRenderer,
) -> KabeResult<DeckSummary> {
    let entries = deck::read_deck(csv_path, level)?;
    tracing::info!(entries = entries.len(), "deck parsed");

    let out_dir = out_root.join(level.dir_name());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    for (i, entry) in entries.iter().enumerate() {
        let out_path = out_dir.join(output_file_name(level, i + 1));
        let frame = renderer.compose(entry)?;

        image::save_buffer_with_format(
            &out_path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", out_path.display()))?;

        tracing::debug!(kanji = %entry.character, out = %out_path.display(), "wrote wallpaper");
    }

    Ok(DeckSummary {
        level,
        written: entries.len(),
        out_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_zero_padded_and_stable() {
        assert_eq!(output_file_name(Level::N2, 1), "JLPT_N2_00001.png");
        assert_eq!(output_file_name(Level::N2, 437), "JLPT_N2_00437.png");
        assert_eq!(output_file_name(Level::N5, 99999), "JLPT_N5_99999.png");
    }
}
