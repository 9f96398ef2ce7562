use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub restaurant_name: String,
    pub confirmation_prefix: String,
    pub ai_provider: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "reservations.db".to_string()),
            restaurant_name: env::var("RESTAURANT_NAME")
                .unwrap_or_else(|_| "MML Restaurant".to_string()),
            confirmation_prefix: env::var("CONFIRMATION_PREFIX")
                .unwrap_or_else(|_| "MML".to_string()),
            ai_provider: env::var("AI_PROVIDER")
                .map(|v| v.to_lowercase())
                .unwrap_or_else(|_| "none".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
        }
    }
}
