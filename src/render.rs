//! Wallpaper composition on the vello_cpu rasterizer.
//!
//! One `WallpaperRenderer` serves a whole run: it owns the shaped font and
//! the layout engine, and composes one frame per deck entry. Scene structure
//! per frame: background, main glyph, meaning, readings rows, compound box.

use crate::{
    deck::KanjiEntry,
    error::{KabeError, KabeResult},
    layout::{
        self, BOX_LINE_SPACING, BOX_OUTLINE, BOX_PADDING, Canvas, GLYPH_COLUMN_WIDTH,
        GLYPH_OFFSET_Y, KANA_GLOSS_GAP, MARGIN_X, MEANING_ADVANCE, READING_ADVANCE, READING_GAP,
        VERTICAL_SPACING, WORD_KANA_GAP,
    },
    text::{TextBrushRgba8, TextLayoutEngine},
    theme::{Rgba8, Theme},
};

/// A composed frame in row-major RGBA8, ready to be written as PNG.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    /// Pixmap readback is premultiplied; wallpapers are fully opaque, so the
    /// bytes are also valid straight alpha.
    pub premultiplied: bool,
}

pub struct WallpaperRenderer {
    canvas: Canvas,
    theme: Theme,
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

impl WallpaperRenderer {
    pub fn new(canvas: Canvas, theme: Theme, font_bytes: Vec<u8>) -> KabeResult<Self> {
        canvas.validate()?;
        let engine = TextLayoutEngine::new(&font_bytes)?;
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            canvas,
            theme,
            engine,
            font,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Compose one wallpaper. Deterministic for a fixed entry, canvas, theme
    /// and font.
    pub fn compose(&mut self, entry: &KanjiEntry) -> KabeResult<FrameRgba> {
        let width_u16: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| KabeError::render("canvas width exceeds u16"))?;
        let height_u16: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| KabeError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        let [r, g, b, a] = self.theme.background;
        clear_pixmap(&mut pixmap, premul_rgba8(r, g, b, a));

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let top = layout::content_top(self.canvas);
        let text: TextBrushRgba8 = self.theme.text.into();
        let accent: TextBrushRgba8 = self.theme.accent.into();

        // Main glyph, left column.
        let glyph = self
            .engine
            .layout(&entry.character, self.theme.glyph_size, text, None)?;
        draw_layout(&mut ctx, &self.font, &glyph, MARGIN_X, top + GLYPH_OFFSET_Y);

        // Right column: meaning, then on-yomi, then kun-yomi.
        let right_x = MARGIN_X + GLYPH_COLUMN_WIDTH;
        let mut y = top;

        let meaning = self
            .engine
            .layout(&entry.meaning, self.theme.body_size, text, None)?;
        draw_layout(&mut ctx, &self.font, &meaning, right_x, y);
        y += MEANING_ADVANCE + VERTICAL_SPACING;

        for readings in [&entry.on_readings, &entry.kun_readings] {
            if readings.is_empty() {
                continue;
            }
            let mut x = right_x;
            for (i, reading) in readings.iter().enumerate() {
                let brush = if i % 2 == 0 { text } else { accent };
                let run = self
                    .engine
                    .layout(reading, self.theme.body_size, brush, None)?;
                draw_layout(&mut ctx, &self.font, &run, x, y);
                x += run.width() + READING_GAP;
            }
            y += READING_ADVANCE + VERTICAL_SPACING;
        }

        self.draw_compound_box(&mut ctx, entry, right_x, y + VERTICAL_SPACING)?;

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRgba {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_compound_box(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        entry: &KanjiEntry,
        right_x: f32,
        box_y0: f32,
    ) -> KabeResult<()> {
        let size = self.theme.compound_size;
        let max_text_width = layout::compound_text_width(self.canvas);
        let lines = {
            let engine = &mut self.engine;
            layout::wrap_compounds(&entry.compounds, max_text_width, &mut |s| {
                engine.measure(s, size)
            })?
        };

        let box_x0 = right_x - BOX_PADDING;
        let box_x1 = self.canvas.width as f32 - MARGIN_X;
        let box_y1 = layout::compound_box_bottom(self.canvas, box_y0, lines.len());

        fill_rect(ctx, self.theme.box_fill, box_x0, box_y0, box_x1, box_y1);
        stroke_rect_outline(
            ctx,
            self.theme.box_outline,
            box_x0,
            box_y0,
            box_x1,
            box_y1,
            BOX_OUTLINE,
        );

        let text: TextBrushRgba8 = self.theme.text.into();
        let accent: TextBrushRgba8 = self.theme.accent.into();
        let mut line_y = box_y0 + BOX_PADDING;
        for line in &lines {
            if line_y > box_y1 - BOX_PADDING {
                break;
            }
            let mut x = right_x;
            if !line.is_continuation() {
                let word = self.engine.layout(&line.word, size, text, None)?;
                draw_layout(ctx, &self.font, &word, x, line_y);
                x += word.width() + WORD_KANA_GAP;

                let kana = self.engine.layout(&line.kana, size, accent, None)?;
                draw_layout(ctx, &self.font, &kana, x, line_y);
                x += kana.width() + KANA_GLOSS_GAP;
            }
            if !line.gloss.is_empty() {
                let gloss = self.engine.layout(&line.gloss, size, text, None)?;
                draw_layout(ctx, &self.font, &gloss, x, line_y);
            }
            line_y += BOX_LINE_SPACING;
        }

        Ok(())
    }
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
    x: f32,
    y: f32,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        f64::from(x),
        f64::from(y),
    )));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn fill_rect(
    ctx: &mut vello_cpu::RenderContext,
    color: Rgba8,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color[0], color[1], color[2], color[3],
    ));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        f64::from(x0),
        f64::from(y0),
        f64::from(x1),
        f64::from(y1),
    ));
}

// Four filled strips; the rasterizer's stroke path is not needed for an
// axis-aligned outline.
fn stroke_rect_outline(
    ctx: &mut vello_cpu::RenderContext,
    color: Rgba8,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    thickness: f32,
) {
    let t = thickness;
    fill_rect(ctx, color, x0, y0, x1, y0 + t);
    fill_rect(ctx, color, x0, y1 - t, x1, y1);
    fill_rect(ctx, color, x0, y0, x0 + t, y1);
    fill_rect(ctx, color, x1 - t, y0, x1, y1);
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let af = (a as u16) + 1;
    let premul = |c: u8| -> u8 { (((c as u16) * af) >> 8) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premul_is_identity_for_opaque_pixels() {
        assert_eq!(premul_rgba8(255, 165, 0, 255), [255, 165, 0, 255]);
        assert_eq!(premul_rgba8(20, 20, 20, 255), [20, 20, 20, 255]);
    }

    #[test]
    fn premul_scales_by_alpha() {
        let [r, g, b, a] = premul_rgba8(255, 255, 255, 128);
        assert_eq!(a, 128);
        assert!(r == g && g == b);
        assert!((127..=129).contains(&r));
    }
}
