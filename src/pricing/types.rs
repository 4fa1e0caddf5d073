use rust_decimal::Decimal;
use thiserror::Error;

/// A fixed top-up option: quantity denominated in the reference currency plus
/// a discount multiplier on its nominal price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTier {
    pub base_value: Decimal,
    /// `0 < factor <= 1`; 1 means no discount.
    pub discount_factor: Decimal,
}

impl PriceTier {
    pub fn new(base_value: Decimal, discount_factor: Decimal) -> Self {
        Self {
            base_value,
            discount_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyKind {
    /// The currency tier prices are denominated in; no projection.
    Reference,
    /// The deployment's local currency; quantity is rescaled, prices are not,
    /// since tier prices are already expressed in local terms.
    Local,
    /// An operator-configured display currency; quantity and prices are both
    /// rescaled, bridging through the secondary rate.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyContext {
    pub kind: CurrencyKind,
    pub symbol: String,
    /// Units of this currency per unit of reference currency. Unused on the
    /// Reference path.
    pub rate_from_reference: Decimal,
}

impl CurrencyContext {
    pub fn reference(symbol: impl Into<String>) -> Self {
        Self {
            kind: CurrencyKind::Reference,
            symbol: symbol.into(),
            rate_from_reference: Decimal::ONE,
        }
    }

    pub fn local(symbol: impl Into<String>, rate_from_reference: Decimal) -> Self {
        Self {
            kind: CurrencyKind::Local,
            symbol: symbol.into(),
            rate_from_reference,
        }
    }

    pub fn custom(symbol: impl Into<String>, rate_from_reference: Decimal) -> Self {
        Self {
            kind: CurrencyKind::Custom,
            symbol: symbol.into(),
            rate_from_reference,
        }
    }
}

/// Computed display numbers for one preset card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetQuote {
    /// Tier quantity expressed in the display currency's unit.
    pub display_quantity: Decimal,
    pub payable: Decimal,
    pub saved: Decimal,
    pub has_discount: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Caller configuration error; better to refuse than to render a division
    /// artifact.
    #[error("exchange rate must be positive, got {0}")]
    InvalidRate(Decimal),
}
