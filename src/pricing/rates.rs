use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use tracing::debug;

/// Fallback reference→local rate used when the cached status blob is absent,
/// malformed, or carries a non-positive rate.
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(7);

/// The slice of the cached console status blob we care about. Everything else
/// in the blob is ignored.
#[derive(Debug, Deserialize)]
struct StatusBlob {
    #[serde(default)]
    usd_exchange_rate: Option<f64>,
}

/// Reads the reference→local exchange rate out of the cached status blob.
///
/// Any parse problem yields the default instead of an error, so a stale or
/// corrupt cache can never take down rendering.
pub fn exchange_rate_from_status(blob: Option<&str>) -> Decimal {
    let Some(blob) = blob else {
        return DEFAULT_EXCHANGE_RATE;
    };
    let parsed: StatusBlob = match serde_json::from_str(blob) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(error = %err, "status blob unparsable, using default rate");
            return DEFAULT_EXCHANGE_RATE;
        }
    };
    parsed
        .usd_exchange_rate
        .and_then(Decimal::from_f64)
        .filter(|rate| *rate > Decimal::ZERO)
        .unwrap_or(DEFAULT_EXCHANGE_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_valid_blob_yields_its_rate() {
        let blob = r#"{"usd_exchange_rate": 7.3, "version": "1.0"}"#;
        assert_eq!(exchange_rate_from_status(Some(blob)), dec!(7.3));
    }

    #[test]
    fn a_missing_blob_yields_the_default() {
        assert_eq!(exchange_rate_from_status(None), DEFAULT_EXCHANGE_RATE);
    }

    #[test]
    fn malformed_json_yields_the_default() {
        assert_eq!(
            exchange_rate_from_status(Some("{not json")),
            DEFAULT_EXCHANGE_RATE
        );
    }

    #[test]
    fn a_blob_without_the_rate_field_yields_the_default() {
        assert_eq!(
            exchange_rate_from_status(Some(r#"{"version": "1.0"}"#)),
            DEFAULT_EXCHANGE_RATE
        );
    }

    #[test]
    fn a_non_positive_rate_yields_the_default() {
        assert_eq!(
            exchange_rate_from_status(Some(r#"{"usd_exchange_rate": 0}"#)),
            DEFAULT_EXCHANGE_RATE
        );
        assert_eq!(
            exchange_rate_from_status(Some(r#"{"usd_exchange_rate": -2.5}"#)),
            DEFAULT_EXCHANGE_RATE
        );
    }

    #[test]
    fn a_rate_of_the_wrong_type_yields_the_default() {
        assert_eq!(
            exchange_rate_from_status(Some(r#"{"usd_exchange_rate": "seven"}"#)),
            DEFAULT_EXCHANGE_RATE
        );
    }
}
