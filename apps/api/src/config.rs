use anyhow::{Context, Result};

/// Default cap on uploaded resume size: 16 MiB.
const DEFAULT_MAX_FILE_SIZE: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_api_url: String,
    pub ollama_model: String,
    pub job_search_script: String,
    pub upload_dir: String,
    pub max_file_size: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_api_url: env_or("OLLAMA_API_URL", "http://localhost:11434"),
            ollama_model: env_or("OLLAMA_MODEL", "qwen3"),
            job_search_script: require_env("JOB_SEARCH_SCRIPT")?,
            upload_dir: env_or("UPLOAD_DIR", "uploads"),
            max_file_size: std::env::var("MAX_FILE_SIZE")
                .ok()
                .map(|v| {
                    v.parse::<usize>()
                        .context("MAX_FILE_SIZE must be a byte count")
                })
                .transpose()?
                .unwrap_or(DEFAULT_MAX_FILE_SIZE),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
