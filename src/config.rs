use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// YouTube Data API key (preferred)
    #[serde(default)]
    pub yt_api_key: Option<String>,

    /// YouTube Data API key (fallback name)
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    /// YouTube Data API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Optional database connection URL, only used by the diagnostics probe
    #[serde(default)]
    pub database_url: Option<String>,

    /// Optional database name, only reported by the diagnostics probe
    #[serde(default)]
    pub database_name: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

pub fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The upstream credential: `YT_API_KEY` wins over `YOUTUBE_API_KEY`, empty values are ignored.
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.yt_api_key).or_else(|| non_empty(&self.youtube_api_key))
    }

    pub fn database_url_set(&self) -> bool {
        non_empty(&self.database_url).is_some()
    }

    pub fn database_name_set(&self) -> bool {
        non_empty(&self.database_name).is_some()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
