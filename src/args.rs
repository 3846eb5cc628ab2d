use clap::{Parser, ValueEnum};
use page_lens::{Analyzer, AnalyzerConfig, Error, Locale};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-lens")]
#[command(about = "Fetches a web page and lists its links, plots word frequency or draws a word cloud")]
#[command(version)]
pub struct Args {
    /// URL of the page to analyze (prompted for when omitted)
    pub url: Option<String>,

    /// Analysis to run: 1 = links, 2 = word frequency, 3 = word cloud (menu when omitted)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Folder the output files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Language of the chart labels
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Font family for rendered images
    #[arg(long)]
    pub font_family: Option<String>,

    /// Font file (TTF/OTF/TTC) used for rendered images
    #[arg(long)]
    pub font_path: Option<PathBuf>,

    /// Open the saved image in the default viewer
    #[arg(long)]
    pub display: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    En,
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Ja => Locale::Ja,
        }
    }
}

impl Args {
    /// Locale for operator text: the flag, else the config file, else the default
    pub fn locale(&self) -> Result<Locale, Error> {
        if let Some(locale) = self.locale {
            return Ok(locale.into());
        }
        match &self.config {
            Some(path) => Ok(AnalyzerConfig::from_file(path)?.locale),
            None => Ok(Locale::default()),
        }
    }

    /// Build the analyzer: config file first, then command-line overrides
    pub fn analyzer(&self, url: &str) -> Result<Analyzer, Error> {
        let mut analyzer = Analyzer::new(url);

        if let Some(path) = &self.config {
            analyzer = analyzer.with_config_file(path)?;
        }
        if let Some(dir) = &self.output_dir {
            analyzer = analyzer.with_output_dir(dir);
        }
        if let Some(locale) = self.locale {
            analyzer = analyzer.with_locale(locale.into());
        }
        if let Some(family) = &self.font_family {
            analyzer = analyzer.with_font_family(family);
        }
        if let Some(path) = &self.font_path {
            analyzer = analyzer.with_font_path(path);
        }
        if self.display {
            analyzer = analyzer.with_display(true);
        }
        if let Some(timeout) = self.timeout {
            analyzer = analyzer.with_timeout(timeout);
        }

        Ok(analyzer)
    }
}
