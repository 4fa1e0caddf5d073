pub mod quote;
pub mod rates;
pub mod types;

pub use quote::{pay_money, quote};
pub use rates::{DEFAULT_EXCHANGE_RATE, exchange_rate_from_status};
pub use types::{CurrencyContext, CurrencyKind, PresetQuote, PriceTier, PricingError};
