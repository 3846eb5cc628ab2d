use crate::config::{AnalyzerConfig, Locale};
use crate::error::RenderError;
use plotters::style::{FontStyle, register_font};
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known locations of general-purpose Latin fonts
const LATIN_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Well-known locations of fonts with Japanese glyphs
const CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W4.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// System font locations in search order; Japanese-capable fonts come first for [`Locale::Ja`]
pub fn font_candidates(locale: Locale) -> Vec<&'static str> {
    let (first, second) = match locale {
        Locale::En => (LATIN_FONTS, CJK_FONTS),
        Locale::Ja => (CJK_FONTS, LATIN_FONTS),
    };
    first.iter().chain(second).copied().collect()
}

/// Picks the font file for the configured family
pub fn resolve_font_path(config: &AnalyzerConfig) -> Option<PathBuf> {
    if let Some(path) = &config.font_path {
        return Some(path.clone());
    }
    font_candidates(config.locale)
        .into_iter()
        .map(Path::new)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}

/// Registers the font file under the configured family name so plotters can draw with it
pub fn register(config: &AnalyzerConfig) -> Result<(), RenderError> {
    let path = resolve_font_path(config).ok_or_else(|| {
        RenderError::Font(format!(
            "no font found for '{}'; set font_path in the configuration",
            config.font_family
        ))
    })?;

    let bytes = fs::read(&path)?;
    // plotters keeps registered fonts for the whole process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(&config.font_family, FontStyle::Normal, bytes)
        .map_err(|_| {
            RenderError::Font(format!(
                "{}: not a valid TrueType/OpenType font",
                path.display()
            ))
        })?;

    ::log::debug!(
        "Registered font '{}' from {}",
        config.font_family,
        path.display()
    );
    Ok(())
}
