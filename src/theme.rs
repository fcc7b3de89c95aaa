//! Wallpaper color and type scale. Defaults match the slideshow sets already
//! in circulation; a run can override them with `--theme theme.json`.

pub type Rgba8 = [u8; 4];

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Canvas background.
    pub background: Rgba8,
    /// Primary text: meaning, compound words and glosses.
    pub text: Rgba8,
    /// Accent for kana: alternating readings and compound readings.
    pub accent: Rgba8,
    /// Compound box fill, slightly lighter than the background.
    pub box_fill: Rgba8,
    /// Compound box outline.
    pub box_outline: Rgba8,

    /// Main kanji glyph size, px.
    pub glyph_size: f32,
    /// Meaning and readings size, px.
    pub body_size: f32,
    /// Compound line size, px.
    pub compound_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 255],
            text: [255, 255, 255, 255],
            accent: [255, 165, 0, 255],
            box_fill: [20, 20, 20, 255],
            box_outline: [255, 255, 255, 255],
            glyph_size: 220.0,
            body_size: 32.0,
            compound_size: 24.0,
        }
    }
}
