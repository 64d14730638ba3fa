use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub pokemons_file: PathBuf,
    pub assets_dir: PathBuf,
    pub api_docs_file: PathBuf,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_port = var("PORT", "3000");
        let port = raw_port
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a port number, got {raw_port:?}"))?;

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            pokemons_file: var("POKEMONS_FILE", "data/pokemons.json").into(),
            assets_dir: var("ASSETS_DIR", "assets").into(),
            api_docs_file: var("API_DOCS_FILE", "docs/openapi.yaml").into(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
