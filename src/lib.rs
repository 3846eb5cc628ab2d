pub mod analysis;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parsers;
pub mod render;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{AnalyzerConfig, Locale};
pub use error::{AnalysisError, Error, FetchError, RenderError};
pub use parsers::PageDocument;
pub use results::{Link, Outcome};

use std::path::{Path, PathBuf};

/// Analysis the operator can pick from the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// "1": list the page's links and save them to a text file
    ShowLinks,
    /// "2": plot the ten most frequent words
    PlotFrequency,
    /// "3": render a word cloud of the page text
    GenerateWordCloud,
    /// Anything else, kept verbatim for the error message
    Invalid(String),
}

impl Mode {
    /// Parses the menu selector; unknown input maps to [`Mode::Invalid`]
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim() {
            "1" => Mode::ShowLinks,
            "2" => Mode::PlotFrequency,
            "3" => Mode::GenerateWordCloud,
            other => Mode::Invalid(other.to_string()),
        }
    }

    /// Menu lines shown before asking for a selection
    pub fn menu(locale: Locale) -> [&'static str; 3] {
        locale.operator_text().menu
    }
}

/// Main builder for a single-page analysis
pub struct Analyzer {
    url: String,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create a new analyzer for the given URL with default configuration
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: AnalyzerConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = AnalyzerConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the folder output files are written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Open saved images in the platform viewer
    pub fn with_display(mut self, display: bool) -> Self {
        self.config.display = display;
        self
    }

    /// Set the locale of chart labels
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Set the font family used in rendered images
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    /// Set the font file registered under the font family
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.font_path = Some(path.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fetch the page and parse it once
    pub async fn fetch(&self) -> Result<PageDocument, Error> {
        let html = fetch::fetch_html(&self.url, &fetch::FetchConfig::from(&self.config)).await?;
        Ok(PageDocument::parse(&html))
    }

    /// Run one analysis on an already fetched page
    pub fn run(&self, page: &PageDocument, mode: &Mode) -> Result<Outcome, Error> {
        ::log::info!("Running {:?} for {}", mode, self.url);

        let outcome = match mode {
            Mode::ShowLinks => self.show_links(page)?,
            Mode::PlotFrequency => self.plot_frequency(page)?,
            Mode::GenerateWordCloud => self.generate_wordcloud(page)?,
            Mode::Invalid(selection) => {
                ::log::warn!("Invalid selection: {:?}", selection);
                return Ok(Outcome::InvalidSelection(selection.clone()));
            }
        };

        if self.config.display && outcome.is_image() {
            if let Some(path) = outcome.path() {
                render::open_image(path)?;
            }
        }

        Ok(outcome)
    }

    /// Fetch the page and run one analysis on it
    pub async fn analyze(&self, mode: &Mode) -> Result<Outcome, Error> {
        let page = self.fetch().await?;
        self.run(&page, mode)
    }

    fn show_links(&self, page: &PageDocument) -> Result<Outcome, Error> {
        let links = page.links();

        println!("{}", self.config.locale.operator_text().links_heading);
        for link in &links {
            println!("{}", link);
        }

        let path = output::write_links(&self.config.output_dir, &links)?;
        Ok(Outcome::LinksSaved {
            count: links.len(),
            path,
        })
    }

    fn plot_frequency(&self, page: &PageDocument) -> Result<Outcome, Error> {
        let tokens = page.tokens();
        let top = analysis::top_words(&tokens, analysis::TOP_WORD_COUNT)?;

        output::ensure_dir(&self.config.output_dir)?;
        let path = self.config.output_dir.join(output::FREQUENCY_PLOT_FILE);
        render::render_frequency_chart(&top, &self.config, &path)?;
        Ok(Outcome::ChartSaved { path })
    }

    fn generate_wordcloud(&self, page: &PageDocument) -> Result<Outcome, Error> {
        let words = render::weigh_words(&page.text(), self.config.max_words);
        if words.is_empty() {
            return Err(AnalysisError::EmptyInput.into());
        }

        output::ensure_dir(&self.config.output_dir)?;
        let path = self.config.output_dir.join(output::WORDCLOUD_FILE);
        let placed = render::render_wordcloud(&words, &self.config, &path)?;
        ::log::debug!("Word cloud shows {} of {} words", placed, words.len());
        Ok(Outcome::WordCloudSaved { path })
    }
}
