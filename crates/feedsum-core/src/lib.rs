pub mod ai;
pub mod config;
pub mod error;
pub mod feed;

pub use ai::Summarizer;
pub use config::{AiConfig, AppConfig};
pub use error::{Error, Result};
