use rust_decimal::Decimal;

use super::types::{CurrencyContext, CurrencyKind, PresetQuote, PriceTier, PricingError};

/// Projects one preset tier into display numbers for the active currency.
///
/// `reference_price_ratio` converts tier quantity units into reference-currency
/// price units. `secondary_rate` bridges reference prices onto the custom
/// currency's rate basis and is only consulted on the Custom path — that the
/// Custom path divides through it at all mirrors the console's long-standing
/// behavior, unrelated custom currency or not.
pub fn quote(
    tier: &PriceTier,
    currency: &CurrencyContext,
    reference_price_ratio: Decimal,
    secondary_rate: Decimal,
) -> Result<PresetQuote, PricingError> {
    let nominal = tier.base_value * reference_price_ratio;
    let payable = nominal * tier.discount_factor;
    let saved = nominal - payable;
    let has_discount = tier.discount_factor < Decimal::ONE;

    let quote = match currency.kind {
        CurrencyKind::Reference => PresetQuote {
            display_quantity: tier.base_value,
            payable,
            saved,
            has_discount,
        },
        CurrencyKind::Local => {
            ensure_positive(currency.rate_from_reference)?;
            PresetQuote {
                display_quantity: tier.base_value * currency.rate_from_reference,
                payable,
                saved,
                has_discount,
            }
        }
        CurrencyKind::Custom => {
            ensure_positive(currency.rate_from_reference)?;
            ensure_positive(secondary_rate)?;
            PresetQuote {
                display_quantity: tier.base_value * currency.rate_from_reference,
                payable: payable / secondary_rate * currency.rate_from_reference,
                saved: saved / secondary_rate * currency.rate_from_reference,
                has_discount,
            }
        }
    };

    Ok(quote)
}

fn ensure_positive(rate: Decimal) -> Result<(), PricingError> {
    if rate <= Decimal::ZERO {
        return Err(PricingError::InvalidRate(rate));
    }
    Ok(())
}

/// Final payable amount for an arbitrary top-up request: nominal amount times
/// unit price, group ratio, preset discount, and promo discount. A zero group
/// ratio means "unconfigured" and is treated as 1.
pub fn pay_money(
    amount: Decimal,
    unit_price: Decimal,
    group_ratio: Decimal,
    preset_discount: Decimal,
    promo_discount: Decimal,
) -> Decimal {
    let group_ratio = if group_ratio == Decimal::ZERO {
        Decimal::ONE
    } else {
        group_ratio
    };
    amount * unit_price * group_ratio * preset_discount * promo_discount
}
