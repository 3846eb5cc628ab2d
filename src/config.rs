use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Language used for chart captions and axis labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Caption and axis descriptions of the frequency chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Prompts and headings shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorText {
    pub url_prompt: &'static str,
    pub menu_heading: &'static str,
    pub menu: [&'static str; 3],
    pub selection_prompt: &'static str,
    pub links_heading: &'static str,
}

impl Locale {
    /// Operator-facing prompts in this locale
    pub fn operator_text(&self) -> OperatorText {
        match self {
            Locale::En => OperatorText {
                url_prompt: "Enter the URL of the web page to analyze: ",
                menu_heading: "Choose an analysis:",
                menu: [
                    "1. Show links on the page",
                    "2. Plot word frequency",
                    "3. Generate a word cloud",
                ],
                selection_prompt: "Selection (1/2/3): ",
                links_heading: "Links on the page:",
            },
            Locale::Ja => OperatorText {
                url_prompt: "解析したいウェブページのURLを入力してください: ",
                menu_heading: "行いたい解析内容を選択してください:",
                menu: [
                    "1. ページ内のリンク表示",
                    "2. 単語の出現頻度をプロット",
                    "3. 単語のクラウドワード生成",
                ],
                selection_prompt: "選択 (1/2/3): ",
                links_heading: "ページ内のリンク:",
            },
        }
    }

    /// Labels for the word frequency chart in this locale
    pub fn chart_labels(&self) -> ChartLabels {
        let (title, x_label, y_label) = match self {
            Locale::En => ("Top 10 most frequent words", "Word", "Occurrences"),
            Locale::Ja => ("出現頻度の最も高い10単語", "単語", "出現回数"),
        };
        ChartLabels {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}

/// Configuration for a page analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Folder every output file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Open the saved image in the platform viewer
    #[serde(default)]
    pub display: bool,

    /// Locale of the chart labels
    #[serde(default)]
    pub locale: Locale,

    /// Font family used for all rendered text
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// TrueType/OpenType file for the font family; common system fonts are tried when unset
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// Base font size for chart labels
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with the page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    #[serde(default = "default_wordcloud_width")]
    pub wordcloud_width: u32,

    #[serde(default = "default_wordcloud_height")]
    pub wordcloud_height: u32,

    /// Background colour of the word cloud as RGB
    #[serde(default = "default_background")]
    pub background: [u8; 3],

    /// Maximum number of words in the word cloud
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,

    #[serde(default = "default_max_font_size")]
    pub max_font_size: u32,

    /// How strongly word weight drives font size (0.0 = rank only, 1.0 = weight only)
    #[serde(default = "default_relative_scaling")]
    pub relative_scaling: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            display: false,
            locale: Locale::default(),
            font_family: default_font_family(),
            font_path: None,
            font_size: default_font_size(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            wordcloud_width: default_wordcloud_width(),
            wordcloud_height: default_wordcloud_height(),
            background: default_background(),
            max_words: default_max_words(),
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            relative_scaling: default_relative_scaling(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("datas")
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_font_size() -> u32 {
    14
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("page-lens/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_chart_width() -> u32 {
    800
}

fn default_chart_height() -> u32 {
    600
}

fn default_wordcloud_width() -> u32 {
    800
}

fn default_wordcloud_height() -> u32 {
    400
}

fn default_background() -> [u8; 3] {
    [255, 255, 255]
}

fn default_max_words() -> usize {
    200
}

fn default_min_font_size() -> u32 {
    4
}

fn default_max_font_size() -> u32 {
    120
}

fn default_relative_scaling() -> f64 {
    0.5
}
