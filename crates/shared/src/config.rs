//! Application configuration management.

use serde::Deserialize;

/// Placeholder in [`ChartConfig::url`] that is replaced by a pair's slug.
pub const CHART_URL_PLACEHOLDER: &str = "currencyLink";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Static rate table configuration.
    #[serde(default)]
    pub rates: RatesConfig,
    /// Chart link configuration.
    #[serde(default)]
    pub charts: ChartConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Static rate table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Path to the JSON file holding the currency-to-EUR table.
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> String {
    "data/currencyexchange.json".to_string()
}

/// Chart link configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// URL template containing [`CHART_URL_PLACEHOLDER`].
    #[serde(default = "default_chart_url")]
    pub url: String,
    /// Known currency pairs and the slug substituted into the template.
    #[serde(default)]
    pub links: Vec<ChartLinkEntry>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            url: default_chart_url(),
            links: Vec::new(),
        }
    }
}

fn default_chart_url() -> String {
    "https://www.ecb.europa.eu/stats/policy_and_exchange_rates/euro_reference_exchange_rates/html/eurofxref-graph-currencyLink.en.html".to_string()
}

/// A single currency pair chart entry, e.g. `EUR-USD` -> `usd`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChartLinkEntry {
    /// Currency pair as requested by clients.
    pub pair: String,
    /// Slug substituted into the chart URL template.
    pub slug: String,
}

impl ChartLinkEntry {
    /// Creates a new chart link entry.
    pub fn new(pair: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            slug: slug.into(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FXRATE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
