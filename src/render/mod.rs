pub mod chart;
pub mod fonts;
pub mod viewer;
pub mod wordcloud;

pub use chart::render_frequency_chart;
pub use viewer::open_image;
pub use wordcloud::{WeightedWord, render_wordcloud, weigh_words};
