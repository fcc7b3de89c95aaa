//! Canvas size and pure wallpaper geometry.
//!
//! All arithmetic here is independent of the rasterizer: text widths come in
//! through a measure callback, so the wrapping rules are testable with a fake
//! measure.

use crate::{
    deck::Compound,
    error::{KabeError, KabeResult},
};

/// Target canvas size in pixels. Global per run; no per-entry variation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> KabeResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(&self) -> KabeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KabeError::layout("canvas width/height must be > 0"));
        }
        // Rasterizer surfaces are indexed with u16 coordinates.
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(KabeError::layout(format!(
                "canvas {}x{} exceeds the {} px per-axis surface limit",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(())
    }
}

/// Side margin, px.
pub const MARGIN_X: f32 = 80.0;
/// Minimum top margin when the canvas is too short to center the content.
pub const MIN_MARGIN_Y: f32 = 50.0;
/// Estimated height of the whole content block, used for vertical centering.
pub const CONTENT_HEIGHT_ESTIMATE: f32 = 400.0;
/// Extra vertical space between stacked elements.
pub const VERTICAL_SPACING: f32 = 20.0;
/// Main glyph offset below the content top.
pub const GLYPH_OFFSET_Y: f32 = 30.0;
/// Right column starts this far right of the glyph column.
pub const GLYPH_COLUMN_WIDTH: f32 = 350.0;
/// Row advance for the meaning line.
pub const MEANING_ADVANCE: f32 = 45.0;
/// Row advance for a readings line.
pub const READING_ADVANCE: f32 = 40.0;
/// Horizontal gap between readings on one line.
pub const READING_GAP: f32 = 15.0;

/// Compound box inner padding.
pub const BOX_PADDING: f32 = 15.0;
/// Compound box line advance.
pub const BOX_LINE_SPACING: f32 = 30.0;
/// Compound box outline thickness.
pub const BOX_OUTLINE: f32 = 2.0;
/// Clearance kept below the box to the canvas bottom edge.
pub const BOX_BOTTOM_CLEARANCE: f32 = 30.0;
/// Gap after a compound word before its kana.
pub const WORD_KANA_GAP: f32 = 8.0;
/// Gap after the kana before the gloss.
pub const KANA_GLOSS_GAP: f32 = 12.0;
// Fitted text is kept inside this fraction of the available width so that
// measurement rounding never pushes a line over the box edge.
const FIT_FACTOR: f32 = 0.9;

/// Top of the content block: centered for tall canvases, clamped to the
/// minimum margin for short ones.
pub fn content_top(canvas: Canvas) -> f32 {
    let centered = (canvas.height as f32 - CONTENT_HEIGHT_ESTIMATE) / 2.0;
    centered.max(MIN_MARGIN_Y)
}

/// Usable text width inside the compound box for a given canvas.
pub fn compound_text_width(canvas: Canvas) -> f32 {
    let right_x = MARGIN_X + GLYPH_COLUMN_WIDTH;
    let available = canvas.width as f32 - right_x - MARGIN_X - 20.0;
    available - BOX_PADDING * 2.0
}

/// One rendered line inside the compound box. Continuation lines carry only
/// a gloss fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundLine {
    pub word: String,
    pub kana: String,
    pub gloss: String,
}

impl CompoundLine {
    pub fn is_continuation(&self) -> bool {
        self.word.is_empty() && self.kana.is_empty()
    }
}

/// Break compounds into box lines. The first line of a compound holds the
/// word, its kana, and as much of the gloss as fits; overflow continues on
/// gloss-only lines wrapped to the box width.
///
/// `measure` returns the rendered pixel width of a text run at the compound
/// type size.
pub fn wrap_compounds(
    compounds: &[Compound],
    max_width: f32,
    measure: &mut dyn FnMut(&str) -> KabeResult<f32>,
) -> KabeResult<Vec<CompoundLine>> {
    let mut lines = Vec::new();

    for compound in compounds {
        let word_width = measure(&compound.word)?;
        let kana_width = measure(&compound.kana)?;
        let gloss_budget =
            max_width - (word_width + WORD_KANA_GAP + kana_width + KANA_GLOSS_GAP);

        let words: Vec<&str> = compound.gloss.split_whitespace().collect();
        let mut first = String::new();
        let mut rest: Option<String> = None;
        for (i, w) in words.iter().enumerate() {
            let candidate = if first.is_empty() {
                (*w).to_string()
            } else {
                format!("{first} {w}")
            };
            if measure(&candidate)? <= gloss_budget * FIT_FACTOR {
                first = candidate;
            } else {
                rest = Some(words[i..].join(" "));
                break;
            }
        }

        lines.push(CompoundLine {
            word: compound.word.clone(),
            kana: compound.kana.clone(),
            gloss: first,
        });

        let Some(rest) = rest else { continue };
        let mut current = String::new();
        for w in rest.split_whitespace() {
            let candidate = if current.is_empty() {
                w.to_string()
            } else {
                format!("{current} {w}")
            };
            if measure(&candidate)? <= max_width * FIT_FACTOR {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(continuation(std::mem::take(&mut current)));
                }
                current = w.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(continuation(current));
        }
    }

    Ok(lines)
}

fn continuation(gloss: String) -> CompoundLine {
    CompoundLine {
        word: String::new(),
        kana: String::new(),
        gloss,
    }
}

/// Bottom edge of the compound box, clamped so the box never runs off the
/// canvas.
pub fn compound_box_bottom(canvas: Canvas, box_top: f32, line_count: usize) -> f32 {
    if line_count == 0 {
        // Minimum height for an empty box.
        return box_top + BOX_PADDING * 2.0 + BOX_LINE_SPACING;
    }
    let max_available = canvas.height as f32 - box_top - BOX_BOTTOM_CLEARANCE;
    let ideal = line_count as f32 * BOX_LINE_SPACING;
    let content = ideal.min(max_available - BOX_PADDING * 2.0);
    box_top + content + BOX_PADDING * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_char_measure(s: &str) -> KabeResult<f32> {
        Ok(s.chars().count() as f32 * 10.0)
    }

    fn compound(word: &str, kana: &str, gloss: &str) -> Compound {
        Compound {
            word: word.into(),
            kana: kana.into(),
            gloss: gloss.into(),
        }
    }

    #[test]
    fn canvas_validation() {
        assert!(Canvas::new(1920, 1080).is_ok());
        assert!(Canvas::new(0, 1080).is_err());
        assert!(Canvas::new(1920, 70_000).is_err());
    }

    #[test]
    fn content_is_centered_on_tall_canvases() {
        assert_eq!(content_top(Canvas { width: 1920, height: 1080 }), 340.0);
        // Short canvas falls back to the minimum margin.
        assert_eq!(content_top(Canvas { width: 800, height: 400 }), 50.0);
    }

    #[test]
    fn short_gloss_stays_on_one_line() {
        let compounds = [compound("右腕", "うわん", "right arm")];
        let lines = wrap_compounds(&compounds, 500.0, &mut per_char_measure).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].word, "右腕");
        assert_eq!(lines[0].kana, "うわん");
        assert_eq!(lines[0].gloss, "right arm");
    }

    #[test]
    fn long_gloss_wraps_to_continuation_lines() {
        let compounds = [compound(
            "手腕",
            "しゅわん",
            "ability talent skill competence capability prowess craft",
        )];
        let lines = wrap_compounds(&compounds, 300.0, &mut per_char_measure).unwrap();
        assert!(lines.len() > 1);
        assert!(!lines[0].is_continuation());
        assert!(lines[1..].iter().all(CompoundLine::is_continuation));

        // No gloss word is lost in the wrap.
        let joined: Vec<String> = lines
            .iter()
            .flat_map(|l| l.gloss.split_whitespace().map(str::to_string))
            .collect();
        assert_eq!(joined.len(), 7);
    }

    #[test]
    fn too_narrow_box_keeps_word_and_kana_line() {
        let compounds = [compound("右腕", "うわん", "right arm")];
        let lines = wrap_compounds(&compounds, 50.0, &mut per_char_measure).unwrap();
        assert_eq!(lines[0].word, "右腕");
        assert!(lines[0].gloss.is_empty());
        assert!(lines.len() >= 2);
    }

    #[test]
    fn no_compounds_yields_no_lines() {
        let lines = wrap_compounds(&[], 500.0, &mut per_char_measure).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn box_bottom_is_clamped_to_canvas() {
        let canvas = Canvas { width: 1920, height: 1080 };
        let unclamped = compound_box_bottom(canvas, 600.0, 3);
        assert_eq!(unclamped, 600.0 + 3.0 * BOX_LINE_SPACING + BOX_PADDING * 2.0);

        let clamped = compound_box_bottom(canvas, 600.0, 100);
        assert!(clamped <= canvas.height as f32 - BOX_BOTTOM_CLEARANCE + BOX_PADDING * 2.0);
        assert!(clamped < 600.0 + 100.0 * BOX_LINE_SPACING);
    }

    #[test]
    fn empty_box_has_minimum_height() {
        let canvas = Canvas { width: 1920, height: 1080 };
        let bottom = compound_box_bottom(canvas, 600.0, 0);
        assert_eq!(bottom, 600.0 + BOX_PADDING * 2.0 + BOX_LINE_SPACING);
    }
}
