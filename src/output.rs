use crate::results::Link;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const LINKS_FILE: &str = "links.txt";
pub const FREQUENCY_PLOT_FILE: &str = "word_frequency_plot.png";
pub const WORDCLOUD_FILE: &str = "wordcloud.png";

/// Creates the output folder (and parents) if it does not exist yet
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        ::log::debug!("Creating output folder {}", dir.display());
    }
    fs::create_dir_all(dir)
}

/// One `text: ..., url: ...` line per link, in extraction order
pub fn format_links(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| link.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the links file into `dir` and returns its path.
///
/// An empty link list produces an empty file.
pub fn write_links(dir: &Path, links: &[Link]) -> io::Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(LINKS_FILE);
    fs::write(&path, format_links(links))?;
    ::log::info!("Wrote {} links to {}", links.len(), path.display());
    Ok(path)
}
