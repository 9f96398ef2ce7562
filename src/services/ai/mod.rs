pub mod details;
pub mod gemini;
pub mod ollama;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::AppError;

use self::gemini::GeminiProvider;
use self::ollama::OllamaProvider;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

/// `None` when `AI_PROVIDER` is unset or `none`; the completion endpoint then
/// answers 503 and the rest of the service runs without it.
pub fn provider_from_config(
    config: &AppConfig,
) -> Result<Option<Box<dyn CompletionProvider>>, AppError> {
    match config.ai_provider.as_str() {
        "" | "none" => Ok(None),
        "gemini" => {
            if config.gemini_api_key.is_empty() {
                return Err(AppError::Config(
                    "GEMINI_API_KEY must be set when AI_PROVIDER=gemini".to_string(),
                ));
            }
            Ok(Some(Box::new(GeminiProvider::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
            ))))
        }
        "ollama" => Ok(Some(Box::new(OllamaProvider::new(
            config.ollama_url.clone(),
            config.ollama_model.clone(),
        )))),
        other => Err(AppError::Config(format!("unknown AI_PROVIDER: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(provider: &str, key: &str) -> AppConfig {
        AppConfig {
            port: 3000,
            database_url: ":memory:".to_string(),
            restaurant_name: "Test Bistro".to_string(),
            confirmation_prefix: "TST".to_string(),
            ai_provider: provider.to_string(),
            gemini_api_key: key.to_string(),
            gemini_model: "gemini-pro".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
        }
    }

    #[test]
    fn test_no_provider() {
        assert!(provider_from_config(&config_with("none", "")).unwrap().is_none());
    }

    #[test]
    fn test_gemini_requires_key() {
        let err = provider_from_config(&config_with("gemini", "")).err().unwrap();
        assert!(matches!(err, AppError::Config(_)));

        let provider = provider_from_config(&config_with("gemini", "k")).unwrap().unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_ollama_and_unknown() {
        let provider = provider_from_config(&config_with("ollama", "")).unwrap().unwrap();
        assert_eq!(provider.name(), "ollama");
        assert!(provider_from_config(&config_with("gpt", "")).is_err());
    }
}
