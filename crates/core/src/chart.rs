//! Chart link lookup for currency pairs.
//!
//! Pairs such as `EUR-USD` map to a slug that is substituted into a
//! configured URL template. Lookups do not touch request counters.

use std::collections::HashMap;

use fxrate_shared::ChartConfig;
use fxrate_shared::config::CHART_URL_PLACEHOLDER;
use tracing::warn;

use crate::currency::ExchangeError;

/// Resolved chart URL for a currency pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLink {
    /// Full chart URL.
    pub currency_pair: String,
}

/// Chart link lookup built from configuration.
#[derive(Debug, Clone)]
pub struct ChartLinkService {
    url_template: String,
    slugs: HashMap<String, String>,
}

impl ChartLinkService {
    /// Creates the lookup from chart configuration.
    ///
    /// Later entries for the same pair replace earlier ones.
    #[must_use]
    pub fn new(config: &ChartConfig) -> Self {
        let slugs = config
            .links
            .iter()
            .map(|entry| (entry.pair.clone(), entry.slug.clone()))
            .collect();

        Self {
            url_template: config.url.clone(),
            slugs,
        }
    }

    /// Chart URL for an exact pair, e.g. `EUR-USD`.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeError::ChartLinkNotFound` if no slug is configured.
    pub fn chart_link(&self, pair: &str) -> Result<ChartLink, ExchangeError> {
        let Some(slug) = self.slugs.get(pair) else {
            warn!(pair, "No chart link configured");
            return Err(ExchangeError::ChartLinkNotFound(pair.to_string()));
        };

        Ok(ChartLink {
            currency_pair: self.url_template.replace(CHART_URL_PLACEHOLDER, slug),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxrate_shared::ChartLinkEntry;

    fn service() -> ChartLinkService {
        let config = ChartConfig {
            links: vec![
                ChartLinkEntry::new("EUR-USD", "usd"),
                ChartLinkEntry::new("EUR-HUF", "huf"),
            ],
            ..ChartConfig::default()
        };
        ChartLinkService::new(&config)
    }

    #[test]
    fn test_chart_link() {
        let link = service().chart_link("EUR-USD").unwrap();
        assert_eq!(
            link.currency_pair,
            "https://www.ecb.europa.eu/stats/policy_and_exchange_rates/euro_reference_exchange_rates/html/eurofxref-graph-usd.en.html"
        );
    }

    #[test]
    fn test_chart_link_not_found() {
        let err = service().chart_link("EUR-USD1").unwrap_err();
        assert!(matches!(err, ExchangeError::ChartLinkNotFound(_)));
        assert_eq!(err.to_string(), "No currency chart url found for EUR-USD1");
    }

    #[test]
    fn test_chart_link_is_exact_match() {
        assert!(service().chart_link("eur-usd").is_err());
    }

    #[test]
    fn test_custom_template() {
        let config = ChartConfig {
            url: "https://charts.example/currencyLink/daily".to_string(),
            links: vec![ChartLinkEntry::new("EUR-GBP", "gbp")],
        };
        let link = ChartLinkService::new(&config).chart_link("EUR-GBP").unwrap();
        assert_eq!(link.currency_pair, "https://charts.example/gbp/daily");
    }
}
