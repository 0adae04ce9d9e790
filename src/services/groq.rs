// src/services/groq.rs
//! Article content generation backed by the Groq chat-completion API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const CHAT_COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

#[derive(Debug, thiserror::Error)]
pub enum GroqError {
    #[error("GROQ_API_KEY not configured")]
    NotConfigured,

    #[error("Groq API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("model returned no content")]
    EmptyResponse,

    #[error("request failed: {0}")]
    RequestFailed(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateArticleParams {
    pub title: String,
    pub category: String,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArticle {
    pub content: String,
    pub excerpt: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug)]
pub struct GroqService {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

impl GroqService {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            client,
        }
    }

    /// Point the service at a different endpoint (test servers).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Generate article body and excerpt for the given title/category.
    ///
    /// Sends a single chat-completion request; the caller's validation has
    /// already run, so any failure here is configuration or upstream.
    pub async fn generate_article_content(
        &self,
        params: &GenerateArticleParams,
    ) -> Result<GeneratedArticle, GroqError> {
        let api_key = self.api_key.as_deref().ok_or(GroqError::NotConfigured)?;

        let prompt = build_article_prompt(params);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content:
                        "Você é um jornalista esportivo profissional especializado em futebol."
                            .to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: 0.7,
            max_tokens: 2000,
        };

        debug!(
            model = %self.model,
            title = %params.title,
            category = %params.category,
            "Sending article generation request to Groq"
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GroqError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Groq returned an error status");
            return Err(GroqError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GroqError::RequestFailed(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(GroqError::EmptyResponse);
        }

        let excerpt = derive_excerpt(&content);

        info!(
            content_len = content.len(),
            excerpt_len = excerpt.len(),
            "Article content generated"
        );

        Ok(GeneratedArticle {
            content: content.trim().to_string(),
            excerpt,
        })
    }
}

fn build_article_prompt(params: &GenerateArticleParams) -> String {
    let keywords_line = params
        .keywords
        .as_deref()
        .map(|k| format!("Palavras-chave: {}", k))
        .unwrap_or_default();

    format!(
        r#"Você é um jornalista esportivo especializado em futebol brasileiro e internacional.

Escreva uma análise completa e profissional sobre: "{title}"

Categoria: {category}
{keywords_line}

INSTRUÇÕES:
- Escreva em português brasileiro
- Use tom profissional mas acessível
- Mínimo de 500 palavras
- Divida em parágrafos bem estruturados
- Inclua análise técnica e contexto
- Use markdown para formatação (negrito, listas, etc.)
- NÃO invente fatos ou estatísticas - seja genérico se não tiver dados
- Foque em análise, opinião e contexto

Escreva APENAS o conteúdo do artigo, sem título (ele já foi fornecido)."#,
        title = params.title,
        category = params.category,
        keywords_line = keywords_line,
    )
}

/// First two sentences of the content, joined with ". " and closed with a
/// period. A sentence ends at `.`, `!` or `?` followed by whitespace.
pub fn derive_excerpt(content: &str) -> String {
    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
            if sentences.len() == 2 {
                break;
            }
        } else {
            current.push(c);
        }
    }
    if sentences.len() < 2 && !current.is_empty() {
        sentences.push(current);
    }

    let mut excerpt = sentences
        .into_iter()
        .take(2)
        .collect::<Vec<_>>()
        .join(". ");
    if !excerpt.ends_with('.') {
        excerpt.push('.');
    }
    excerpt.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GenerateArticleParams {
        GenerateArticleParams {
            title: "Flamengo vence o clássico".to_string(),
            category: "Brasileirão".to_string(),
            keywords: Some("flamengo, maracanã".to_string()),
        }
    }

    #[test]
    fn test_derive_excerpt_takes_first_two_sentences() {
        let content = "Primeira frase. Segunda frase! Terceira frase.";
        assert_eq!(derive_excerpt(content), "Primeira frase. Segunda frase.");
    }

    #[test]
    fn test_derive_excerpt_single_sentence() {
        assert_eq!(derive_excerpt("Só uma frase."), "Só uma frase.");
        assert_eq!(derive_excerpt("Sem pontuação final"), "Sem pontuação final.");
    }

    #[test]
    fn test_derive_excerpt_ignores_dots_without_whitespace() {
        // Decimal points and abbreviations glued to text do not end sentences.
        let content = "O time marcou 1.5 gols por jogo em média. Foi um recorde. Fim.";
        assert_eq!(
            derive_excerpt(content),
            "O time marcou 1.5 gols por jogo em média. Foi um recorde."
        );
    }

    #[test]
    fn test_prompt_embeds_inputs() {
        let prompt = build_article_prompt(&params());
        assert!(prompt.contains("\"Flamengo vence o clássico\""));
        assert!(prompt.contains("Categoria: Brasileirão"));
        assert!(prompt.contains("Palavras-chave: flamengo, maracanã"));
    }

    #[test]
    fn test_prompt_omits_keywords_line_when_absent() {
        let mut p = params();
        p.keywords = None;
        let prompt = build_article_prompt(&p);
        assert!(!prompt.contains("Palavras-chave"));
    }

    #[tokio::test]
    async fn test_generate_requires_api_key() {
        let service = GroqService::new(None, "llama-3.3-70b-versatile".to_string());
        let err = service.generate_article_content(&params()).await;
        assert!(matches!(err, Err(GroqError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_generate_parses_completion() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/openai/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "choices": [{
                        "message": {
                            "role": "assistant",
                            "content": "O Flamengo dominou a partida. A defesa funcionou bem. O resto é detalhe."
                        }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let service = GroqService::new(
            Some("test-key".to_string()),
            "llama-3.3-70b-versatile".to_string(),
        )
        .with_base_url(server.url());

        let result = service
            .generate_article_content(&params())
            .await
            .expect("generation should succeed");

        assert!(result.content.starts_with("O Flamengo dominou"));
        assert_eq!(
            result.excerpt,
            "O Flamengo dominou a partida. A defesa funcionou bem."
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_surfaces_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(429)
            .with_body("rate limited")
            .create_async()
            .await;

        let service = GroqService::new(Some("k".to_string()), "m".to_string())
            .with_base_url(server.url());

        match service.generate_article_content(&params()).await {
            Err(GroqError::Upstream { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected upstream error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_content() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let service = GroqService::new(Some("k".to_string()), "m".to_string())
            .with_base_url(server.url());

        let err = service.generate_article_content(&params()).await;
        assert!(matches!(err, Err(GroqError::EmptyResponse)));
    }
}
