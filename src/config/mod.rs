use rust_decimal::Decimal;

use crate::pricing::rates::DEFAULT_EXCHANGE_RATE;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Base URL of the console API serving `/api/option/`.
    pub api_base: String,
    /// Converts tier quantity units into reference-currency price units.
    pub price_ratio: Decimal,
    /// Reference→local rate used when no cached status blob is available.
    pub default_exchange_rate: Decimal,
    pub enable_metrics: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // dotenvy loads .env, but doesn't override already-set env vars
        dotenvy::dotenv().ok();

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let api_base = std::env::var("OPTIONS_API_BASE")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let price_ratio = decimal_env("PRICE_RATIO", Decimal::ONE);
        let default_exchange_rate = decimal_env("DEFAULT_EXCHANGE_RATE", DEFAULT_EXCHANGE_RATE);
        let enable_metrics = std::env::var("ENABLE_METRICS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            log_level,
            api_base,
            price_ratio,
            default_exchange_rate,
            enable_metrics,
        })
    }
}

/// Rate-style values fall back to their documented default when unset or
/// unparsable rather than failing startup.
fn decimal_env(name: &str, default: Decimal) -> Decimal {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<Decimal>().ok())
        .unwrap_or(default)
}
