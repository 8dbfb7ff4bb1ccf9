pub mod providers;
mod summarizer;

pub use summarizer::{Summarizer, DEFAULT_MAX_ARTICLES, NO_CONTENT_PLACEHOLDER};
