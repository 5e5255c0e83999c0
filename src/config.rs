use std::time::Duration;

use anyhow::{bail, ensure};
use clap::Parser;

// CLI argument structure, every flag can also come from the environment (or .env)
#[derive(Parser, Debug, Clone)]
#[command(name = "study-notes-gateway")]
#[command(about = "Turns a topic or an uploaded file into AI generated study notes")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    // API key for the completion provider
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: String,

    // OpenAI compatible base url of the provider
    #[arg(long, env = "GROQ_BASE_URL", default_value = "https://api.groq.com/openai/v1")]
    pub base_url: String,

    // Model used for every completion
    #[arg(short, long, env = "GROQ_MODEL", default_value = "llama-3.1-8b-instant")]
    pub model: String,

    // Upstream request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 60)]
    pub request_timeout: u64,

    // Extra attempts after a transient upstream failure
    #[arg(long, env = "MAX_RETRIES", default_value_t = 0)]
    pub max_retries: u32,

    // Base delay between retries in milliseconds (grows linearly)
    #[arg(long, env = "RETRY_DELAY_MS", default_value_t = 500)]
    pub retry_delay_ms: u64,

    // Max request body size in megabytes
    #[arg(long, env = "MAX_UPLOAD_MB", default_value_t = 25)]
    pub max_upload_mb: usize,
}

impl Args {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.api_key.trim().is_empty(), "api key must not be empty");
        ensure!(!self.model.trim().is_empty(), "model must not be empty");
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!("base url must start with http:// or https://, got {}", self.base_url);
        }
        ensure!(self.request_timeout > 0, "request timeout must be positive");
        ensure!(self.max_upload_mb > 0, "upload limit must be positive");
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn body_limit(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["study-notes-gateway"];
        if !extra.contains(&"--api-key") {
            argv.extend(["--api-key", "test-key"]);
        }
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_groq() {
        let args = parse(&[]);
        assert_eq!(args.model, "llama-3.1-8b-instant");
        assert_eq!(args.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(args.max_retries, 0);
        assert_eq!(args.body_limit(), 25 * 1024 * 1024);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn rejects_bad_base_url() {
        let args = parse(&["--base-url", "api.groq.com"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn rejects_blank_key_and_zero_timeout() {
        let args = parse(&["--api-key", "  "]);
        assert!(args.validate().is_err());

        let args = parse(&["--request-timeout", "0"]);
        assert!(args.validate().is_err());
    }
}
