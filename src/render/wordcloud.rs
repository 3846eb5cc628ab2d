//! Word cloud rendering.
//!
//! The renderer works on the raw page text: it does its own tokenization and
//! weighting, which is looser than the frequency chart's (stopwords dropped,
//! case and plural forms folded). Words are then placed largest first along
//! an elliptical spiral from the canvas centre, using a summed-area table of
//! the occupied pixels to test candidate positions in constant time.

use crate::config::AnalyzerConfig;
use crate::error::RenderError;
use crate::render::fonts;
use plotters::prelude::*;
use regex::Regex;
use std::collections::HashMap;
use std::f64::consts::{SQRT_2, TAU};
use std::path::Path;
use std::sync::LazyLock;

static CLOUD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("static regex"));

/// Words that carry no meaning in a word cloud
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do",
    "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few", "for",
    "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
    "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself", "his",
    "how", "how's", "however", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is",
    "isn't", "it", "it's", "its", "itself", "just", "let's", "like", "me", "more", "most",
    "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shall", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "since", "so",
    "some", "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "therefore", "these", "they", "they'd", "they'll", "they're",
    "they've", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why",
    "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd", "you'll", "you're",
    "you've", "your", "yours", "yourself", "yourselves",
];

/// Free pixels kept around every placed word
const WORD_PADDING: u32 = 2;

/// Distance between two turns of the placement spiral, in pixels
const SPIRAL_SPACING: f64 = 3.0;

/// A word and its relative weight in `(0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedWord {
    pub word: String,
    pub weight: f64,
}

#[derive(Debug, Default)]
struct WordCount {
    total: usize,
    first_seen: usize,
    forms: HashMap<String, usize>,
}

impl WordCount {
    /// Most frequent surface form; ties go to the lexicographically smallest
    fn display_form(&self) -> String {
        self.forms
            .iter()
            .max_by(|(a_form, a), (b_form, b)| a.cmp(b).then_with(|| b_form.cmp(a_form)))
            .map(|(form, _)| form.clone())
            .unwrap_or_default()
    }
}

/// Tokenizes raw text for the word cloud and returns at most `max_words`
/// words, heaviest first, with weights relative to the most frequent word.
pub fn weigh_words(text: &str, max_words: usize) -> Vec<WeightedWord> {
    let mut counts: HashMap<String, WordCount> = HashMap::new();

    for (position, m) in CLOUD_WORD.find_iter(text).enumerate() {
        let raw = m.as_str();
        let word = raw
            .strip_suffix("'s")
            .or_else(|| raw.strip_suffix("'S"))
            .unwrap_or(raw);
        if word.chars().count() < 2 || word.chars().all(|c| c.is_numeric()) {
            continue;
        }

        let key = word.to_lowercase();
        if STOPWORDS.contains(&key.as_str()) {
            continue;
        }

        let entry = counts.entry(key).or_insert_with(|| WordCount {
            first_seen: position,
            ..WordCount::default()
        });
        entry.total += 1;
        *entry.forms.entry(word.to_string()).or_insert(0) += 1;
    }

    fold_plurals(&mut counts);

    let mut ranked: Vec<(String, usize, usize)> = counts
        .values()
        .map(|c| (c.display_form(), c.total, c.first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    ranked.truncate(max_words);

    let Some(max_count) = ranked.first().map(|(_, count, _)| *count as f64) else {
        return Vec::new();
    };

    ranked
        .into_iter()
        .map(|(word, count, _)| WeightedWord {
            word,
            weight: count as f64 / max_count,
        })
        .collect()
}

/// Merges `words` into `word` when both forms occur
fn fold_plurals(counts: &mut HashMap<String, WordCount>) {
    let plurals: Vec<String> = counts
        .keys()
        .filter(|key| key.ends_with('s') && !key.ends_with("ss"))
        .filter(|key| counts.contains_key(&key[..key.len() - 1]))
        .cloned()
        .collect();

    for plural in plurals {
        let singular = &plural[..plural.len() - 1];
        let Some(folded) = counts.remove(&plural) else {
            continue;
        };
        if let Some(entry) = counts.get_mut(singular) {
            entry.total += folded.total;
            entry.first_seen = entry.first_seen.min(folded.first_seen);
        }
    }
}

/// Canvas and font bounds for the word layout
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub width: u32,
    pub height: u32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub relative_scaling: f64,
}

impl From<&AnalyzerConfig> for LayoutOptions {
    fn from(config: &AnalyzerConfig) -> Self {
        Self {
            width: config.wordcloud_width,
            height: config.wordcloud_height,
            min_font_size: config.min_font_size,
            max_font_size: config.max_font_size,
            relative_scaling: config.relative_scaling.clamp(0.0, 1.0),
        }
    }
}

/// Where a word ends up on the canvas (top-left corner and text extent)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Pixel occupancy of the canvas with a summed-area table for rectangle queries
struct OccupancyGrid {
    width: usize,
    height: usize,
    filled: Vec<bool>,
    // (width + 1) x (height + 1), row-major
    integral: Vec<u32>,
}

impl OccupancyGrid {
    fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            filled: vec![false; width * height],
            integral: vec![0; (width + 1) * (height + 1)],
        }
    }

    fn fits(&self, x: i64, y: i64, w: u32, h: u32) -> bool {
        x >= 0
            && y >= 0
            && x as usize + w as usize <= self.width
            && y as usize + h as usize <= self.height
    }

    /// True if no pixel of the rectangle is occupied; the rectangle must fit
    fn is_free(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        let stride = self.width + 1;
        let at = |col: usize, row: usize| self.integral[row * stride + col] as i64;
        let sum = at(x + w, y + h) - at(x, y + h) - at(x + w, y) + at(x, y);
        sum == 0
    }

    fn mark(&mut self, x: usize, y: usize, w: usize, h: usize) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for row in y..y_end {
            let start = row * self.width;
            self.filled[start + x..start + x_end].fill(true);
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let stride = self.width + 1;
        for row in 0..self.height {
            let mut row_sum = 0;
            for col in 0..self.width {
                row_sum += u32::from(self.filled[row * self.width + col]);
                self.integral[(row + 1) * stride + col + 1] =
                    self.integral[row * stride + col + 1] + row_sum;
            }
        }
    }

    /// Walks an elliptical spiral out from the centre and returns the first
    /// free top-left corner for a `w` x `h` box
    fn find_position(&self, w: u32, h: u32) -> Option<(usize, usize)> {
        if w as usize > self.width || h as usize > self.height {
            return None;
        }

        let cx = (self.width as f64 - w as f64) / 2.0;
        let cy = (self.height as f64 - h as f64) / 2.0;
        let aspect = self.width as f64 / self.height.max(1) as f64;
        // x is stretched by the aspect ratio, so the corners sit at half the
        // diagonal of a height x height square
        let max_radius = self.height as f64 * SQRT_2 / 2.0 + 1.0;

        let mut theta: f64 = 0.0;
        loop {
            let radius = SPIRAL_SPACING * theta / TAU;
            if radius > max_radius {
                return None;
            }

            let x = (cx + radius * theta.cos() * aspect).round() as i64;
            let y = (cy + radius * theta.sin()).round() as i64;
            if self.fits(x, y, w, h) && self.is_free(x as usize, y as usize, w as usize, h as usize)
            {
                return Some((x as usize, y as usize));
            }

            // about one pixel of arc per step
            theta += 1.0 / radius.max(1.0);
        }
    }
}

/// Places words (heaviest first) on the canvas without overlap.
///
/// `measure` returns the pixel extent of a word at a font size. A word that
/// does not fit anywhere is retried at a smaller size; once the size falls
/// below `min_font_size` the layout stops.
pub fn layout<F, E>(
    words: &[WeightedWord],
    options: &LayoutOptions,
    mut measure: F,
) -> Result<Vec<Placement>, E>
where
    F: FnMut(&str, u32) -> Result<(u32, u32), E>,
{
    let mut grid = OccupancyGrid::new(options.width, options.height);
    let mut placements = Vec::new();

    let scaling = options.relative_scaling;
    let mut font_size = f64::from(options.max_font_size.min(options.height));
    let mut last_weight = words.first().map_or(1.0, |w| w.weight);

    'words: for word in words {
        if word.weight <= 0.0 {
            continue;
        }
        font_size = ((scaling * word.weight / last_weight + (1.0 - scaling)) * font_size).round();

        let placed = loop {
            let size = font_size as u32;
            if size < options.min_font_size || size == 0 {
                break 'words;
            }

            let (w, h) = measure(&word.word, size)?;
            let (padded_w, padded_h) = (w + 2 * WORD_PADDING, h + 2 * WORD_PADDING);
            if let Some((x, y)) = grid.find_position(padded_w, padded_h) {
                grid.mark(x, y, padded_w as usize, padded_h as usize);
                break Placement {
                    word: word.word.clone(),
                    font_size: size,
                    x: (x as u32 + WORD_PADDING) as i32,
                    y: (y as u32 + WORD_PADDING) as i32,
                    width: w,
                    height: h,
                };
            }

            font_size -= (font_size / 10.0).floor().max(1.0);
        };

        ::log::trace!(
            "Placed '{}' at ({}, {}) size {}",
            placed.word,
            placed.x,
            placed.y,
            placed.font_size
        );
        placements.push(placed);
        last_weight = word.weight;
    }

    ::log::debug!("Word cloud layout placed {} of {} words", placements.len(), words.len());
    Ok(placements)
}

/// Deterministic, saturated colour per word
fn word_color(word: &str) -> HSLColor {
    // FNV-1a
    let hash = word
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |h, b| (h ^ u64::from(b)).wrapping_mul(0x100_0000_01b3));
    let hue = (hash % 360) as f64 / 360.0;
    HSLColor(hue, 0.8, 0.4)
}

/// Lays out `words` and saves the word cloud as a PNG at `path`.
///
/// Returns how many words made it onto the canvas.
pub fn render_wordcloud(
    words: &[WeightedWord],
    config: &AnalyzerConfig,
    path: &Path,
) -> Result<usize, RenderError> {
    fonts::register(config)?;

    let options = LayoutOptions::from(config);
    let family = config.font_family.as_str();

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    let [r, g, b] = config.background;
    root.fill(&RGBColor(r, g, b)).map_err(RenderError::plot)?;

    let placements = layout(words, &options, |word, size| {
        let style = TextStyle::from((family, f64::from(size)).into_font());
        root.estimate_text_size(word, &style)
    })
    .map_err(RenderError::plot)?;

    for placement in &placements {
        let color = word_color(&placement.word);
        let style = (family, f64::from(placement.font_size))
            .into_font()
            .color(&color);
        root.draw_text(&placement.word, &style, (placement.x, placement.y))
            .map_err(RenderError::plot)?;
    }

    root.present().map_err(RenderError::plot)?;
    ::log::info!("Saved word cloud to {}", path.display());
    Ok(placements.len())
}
