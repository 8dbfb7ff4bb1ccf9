use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use super::providers::{ClaudeApiProvider, OpenAiProvider, Provider};
use crate::config::AiConfig;
use crate::feed::Article;
use crate::{Error, Result};

/// Default number of articles processed by one batch run
pub const DEFAULT_MAX_ARTICLES: usize = 10;

/// Fixed summary returned for articles with no extracted content
pub const NO_CONTENT_PLACEHOLDER: &str = "暂无内容摘要";

/// Articles shorter than this are returned verbatim instead of summarized
const MIN_SUMMARIZE_CHARS: usize = 100;

/// Characters of the title shown in batch progress lines
const PROGRESS_TITLE_CHARS: usize = 50;

const DEFAULT_PROMPT_TEMPLATE: &str = "请用中文为以下文章生成简洁摘要（3-5句话）：
标题：{title}
内容：{content}

要求：突出核心观点，帮助读者快速判断是否值得阅读原文。";

/// LLM summarizer that wraps the configured provider
pub struct Summarizer {
    config: AiConfig,
    prompt_template: String,
    client: OnceCell<Provider>,
}

impl Summarizer {
    /// Create a new summarizer from configuration.
    ///
    /// Credentials are not validated here; a missing or invalid key surfaces
    /// as a provider-reported failure on the first network call.
    pub fn new(config: AiConfig) -> Self {
        let prompt_template = config
            .summary_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT_TEMPLATE.to_string());

        Self {
            config,
            prompt_template,
            client: OnceCell::new(),
        }
    }

    /// Get the provider client, creating it on first use.
    ///
    /// The client is built at most once per instance; switching providers
    /// requires a new `Summarizer`.
    async fn client(&self) -> Result<&Provider> {
        self.client
            .get_or_try_init(|| async {
                match self.config.provider.as_str() {
                    "claude" => {
                        let api_key = self.config.api_key.as_deref().unwrap_or_default();
                        Ok(Provider::Claude(ClaudeApiProvider::new(
                            api_key,
                            &self.config.model,
                        )))
                    }
                    "openai" => {
                        let api_key = self.config.openai_api_key.as_deref().unwrap_or_default();
                        Ok(Provider::OpenAi(OpenAiProvider::new(
                            api_key,
                            &self.config.openai_api_base,
                            &self.config.openai_model,
                        )))
                    }
                    other => Err(Error::AiProvider(format!("unknown provider: {}", other))),
                }
            })
            .await
    }

    /// Generate a summary for an article.
    ///
    /// Articles with fewer than 100 characters of content skip the network:
    /// non-empty content is returned verbatim, empty content yields the
    /// fixed placeholder. All provider failures are absorbed here and
    /// reported as `None`.
    pub async fn summarize(&self, article: &Article) -> Option<String> {
        if article.content.chars().count() < MIN_SUMMARIZE_CHARS {
            if article.content.is_empty() {
                return Some(NO_CONTENT_PLACEHOLDER.to_string());
            }
            return Some(article.content.clone());
        }

        let prompt = render_prompt(&self.prompt_template, &article.title, &article.content);

        match self.config.provider.as_str() {
            "claude" | "openai" => match self.dispatch(&prompt).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    error!("Summarization failed ({}): {}", article.title, e);
                    None
                }
            },
            other => {
                warn!("Unknown LLM provider: {}", other);
                None
            }
        }
    }

    async fn dispatch(&self, prompt: &str) -> Result<String> {
        let client = self.client().await?;
        client.chat(prompt).await
    }

    /// Summarize up to `max_articles` articles from the front of the input,
    /// strictly in order, one provider call at a time.
    ///
    /// A failed item yields `None` for that article and the batch continues.
    pub async fn summarize_batch(
        &self,
        articles: Vec<Article>,
        max_articles: usize,
    ) -> Vec<(Article, Option<String>)> {
        let total = articles.len().min(max_articles);
        let mut results = Vec::with_capacity(total);

        for (i, article) in articles.into_iter().take(max_articles).enumerate() {
            info!(
                "({}/{}) Summarizing: {}...",
                i + 1,
                total,
                article.title_preview(PROGRESS_TITLE_CHARS)
            );
            let summary = self.summarize(&article).await;
            results.push((article, summary));
        }

        results
    }
}

/// Substitute `{title}` and `{content}` into the prompt template
fn render_prompt(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{title}", title)
        .replace("{content}", content)
}
