use thiserror::Error;

/// Errors that can occur while fetching the page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to parse URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised by the text analyses
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No words found on the page; nothing to count")]
    EmptyInput,
}

/// Errors raised while producing or showing an image
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Plotting failed: {0}")]
    Plot(String),
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("Font unavailable: {0}")]
    Font(String),
    #[error("Image viewer failed: {0}")]
    Viewer(String),
}

impl RenderError {
    /// Wraps any plotters drawing error
    pub(crate) fn plot<E: std::fmt::Display>(err: E) -> Self {
        RenderError::Plot(err.to_string())
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level error for a run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
