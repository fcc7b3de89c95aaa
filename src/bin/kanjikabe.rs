use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use kanjikabe::{Canvas, Level, Theme, WallpaperRenderer};

#[derive(Parser, Debug)]
#[command(name = "kanjikabe", version, about = "Render JLPT kanji study wallpapers from CSV decks")]
struct Cli {
    /// Deck CSV files with header `kanji,meaning,readings,compounds`.
    /// Omitted: the per-level set kanji_n5.csv .. kanji_n2.csv in the
    /// current directory.
    files: Vec<PathBuf>,

    /// Wallpaper width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Wallpaper height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Root directory for the per-level output folders (JLPT-N5, ...).
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Theme JSON overriding colors and type sizes.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// JLPT level (n5..n2) for decks whose file name does not encode one.
    #[arg(long)]
    level: Option<Level>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let canvas = Canvas::new(cli.width, cli.height)?;
    let theme = match &cli.theme {
        Some(path) => read_theme_json(path)?,
        None => Theme::default(),
    };
    let font_bytes = kanjikabe::fonts::resolve_font()?;
    let mut renderer = WallpaperRenderer::new(canvas, theme, font_bytes)?;

    let files = if cli.files.is_empty() {
        default_deck_files()
    } else {
        cli.files.clone()
    };

    let mut total = 0usize;
    for file in &files {
        let level = match cli.level {
            Some(level) => level,
            None => Level::from_path(file).with_context(|| {
                format!(
                    "cannot derive a JLPT level from '{}'; pass --level",
                    file.display()
                )
            })?,
        };

        let summary = kanjikabe::generate_deck(file, level, &cli.out_dir, &mut renderer)?;
        eprintln!(
            "wrote {} images to {}",
            summary.written,
            summary.out_dir.display()
        );
        total += summary.written;
    }

    eprintln!("done: {total} images from {} deck file(s)", files.len());
    Ok(())
}

fn default_deck_files() -> Vec<PathBuf> {
    Level::ALL
        .iter()
        .map(|level| PathBuf::from(format!("kanji_{}.csv", level.to_string().to_lowercase())))
        .collect()
}

fn read_theme_json(path: &Path) -> anyhow::Result<Theme> {
    let f = File::open(path).with_context(|| format!("open theme '{}'", path.display()))?;
    let r = BufReader::new(f);
    let theme: Theme = serde_json::from_reader(r).with_context(|| "parse theme JSON")?;
    Ok(theme)
}
