mod claude_api;
mod openai;

pub use claude_api::ClaudeApiProvider;
pub use openai::OpenAiProvider;

use crate::Result;

/// Max tokens requested for a single summary
pub(crate) const SUMMARY_MAX_TOKENS: u32 = 500;

/// One of the two supported hosted LLM backends
pub enum Provider {
    Claude(ClaudeApiProvider),
    OpenAi(OpenAiProvider),
}

impl Provider {
    /// Send a single user message and return the reply text
    pub async fn chat(&self, prompt: &str) -> Result<String> {
        match self {
            Provider::Claude(provider) => provider.chat(prompt).await,
            Provider::OpenAi(provider) => provider.chat(prompt).await,
        }
    }
}
