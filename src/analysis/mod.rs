pub mod frequency;

pub use frequency::{FrequencyTable, TOP_WORD_COUNT, top_words};
