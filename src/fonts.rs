//! CJK-capable font discovery.
//!
//! Kanji wallpapers need a font with CJK coverage; the well-known system
//! locations are probed in order and the first hit wins. `KANJIKABE_FONT`
//! overrides the search with an explicit file path.

use std::path::{Path, PathBuf};

use crate::error::{KabeError, KabeResult};

/// Environment variable holding an explicit font file path.
pub const FONT_ENV: &str = "KANJIKABE_FONT";

const CANDIDATE_PATHS: &[&str] = &[
    // Debian/Ubuntu
    "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    // Fedora
    "/usr/share/fonts/google-noto-sans-cjk-fonts/NotoSansCJK-Regular.ttc",
    // macOS
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    // Windows
    "/Windows/Fonts/msgothic.ttc",
    // Last resort; renders latin text but not kanji.
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Locate a usable font file without reading it.
pub fn find_font() -> KabeResult<PathBuf> {
    find_font_with(std::env::var_os(FONT_ENV).map(PathBuf::from))
}

fn find_font_with(env_override: Option<PathBuf>) -> KabeResult<PathBuf> {
    if let Some(path) = env_override {
        if path.is_file() {
            return Ok(path);
        }
        return Err(KabeError::font(format!(
            "{FONT_ENV} points at '{}' which is not a file",
            path.display()
        )));
    }

    CANDIDATE_PATHS
        .iter()
        .map(Path::new)
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            KabeError::font(format!(
                "no CJK font found; set {FONT_ENV} or install Noto Sans CJK (tried: {})",
                CANDIDATE_PATHS.join(", ")
            ))
        })
}

/// Locate and read the font bytes for this run.
pub fn resolve_font() -> KabeResult<Vec<u8>> {
    let path = find_font()?;
    tracing::info!(font = %path.display(), "using font");
    std::fs::read(&path)
        .map_err(|e| KabeError::font(format!("read font '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_override_is_an_error_not_a_fallback() {
        let err = find_font_with(Some(PathBuf::from("/nonexistent/font.ttc"))).unwrap_err();
        assert!(err.to_string().contains(FONT_ENV), "got: {err}");
    }

    #[test]
    fn existing_override_wins_over_candidates() {
        // Any file works for discovery; content is only read later.
        let dir = PathBuf::from("target").join("font_discovery");
        std::fs::create_dir_all(&dir).unwrap();
        let fake = dir.join("fake.ttf");
        std::fs::write(&fake, b"not a font").unwrap();

        assert_eq!(find_font_with(Some(fake.clone())).unwrap(), fake);
    }
}
