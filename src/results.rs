use crate::config::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A hyperlink found on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Trimmed display text of the anchor (may be empty)
    pub text: String,

    /// Raw `href` attribute value
    pub url: String,
}

impl Link {
    /// Create a new link record
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text: {}, url: {}", self.text, self.url)
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Links were printed and saved
    LinksSaved { count: usize, path: PathBuf },
    /// The word frequency chart was saved
    ChartSaved { path: PathBuf },
    /// The word cloud image was saved
    WordCloudSaved { path: PathBuf },
    /// The operator picked an unknown mode
    InvalidSelection(String),
}

impl Outcome {
    /// Path of the file written by the run, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::LinksSaved { path, .. }
            | Outcome::ChartSaved { path }
            | Outcome::WordCloudSaved { path } => Some(path.as_path()),
            Outcome::InvalidSelection(_) => None,
        }
    }

    /// Whether the output is an image
    pub fn is_image(&self) -> bool {
        matches!(
            self,
            Outcome::ChartSaved { .. } | Outcome::WordCloudSaved { .. }
        )
    }

    /// Message reported to the operator once the run is done
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (Outcome::LinksSaved { count, path }, Locale::En) => {
                format!("Saved {} links to [{}]", count, path.display())
            }
            (Outcome::LinksSaved { count, path }, Locale::Ja) => {
                format!("{}件のリンク情報をファイル[{}]に保存しました。", count, path.display())
            }
            (Outcome::ChartSaved { path }, Locale::En) => {
                format!("Saved the word frequency plot to [{}]", path.display())
            }
            (Outcome::ChartSaved { path }, Locale::Ja) => {
                format!("単語の出現頻度をプロットした画像を[{}]に保存しました。", path.display())
            }
            (Outcome::WordCloudSaved { path }, Locale::En) => {
                format!("Saved the word cloud to [{}]", path.display())
            }
            (Outcome::WordCloudSaved { path }, Locale::Ja) => {
                format!("クラウドワードの画像を[{}]に保存しました。", path.display())
            }
            (Outcome::InvalidSelection(selection), Locale::En) => {
                format!("Invalid selection: {:?}", selection)
            }
            (Outcome::InvalidSelection(selection), Locale::Ja) => {
                format!("無効な選択です: {:?}", selection)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_line_format() {
        assert_eq!(
            Link::new("Home", "/x").to_string(),
            "text: Home, url: /x"
        );
    }

    #[test]
    fn test_outcome_message_follows_locale() {
        let outcome = Outcome::ChartSaved {
            path: PathBuf::from("datas/word_frequency_plot.png"),
        };
        assert_eq!(
            outcome.message(Locale::En),
            "Saved the word frequency plot to [datas/word_frequency_plot.png]"
        );
        assert_eq!(
            outcome.message(Locale::Ja),
            "単語の出現頻度をプロットした画像を[datas/word_frequency_plot.png]に保存しました。"
        );
        assert_eq!(
            Outcome::InvalidSelection("9".to_string()).message(Locale::Ja),
            "無効な選択です: \"9\""
        );
    }
}
