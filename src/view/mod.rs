use rust_decimal::Decimal;

use crate::pricing::{CurrencyContext, CurrencyKind, PresetQuote, PriceTier, PricingError, quote};
use crate::rebate::RebateConfig;
use crate::telemetry;

/// Everything the render layer needs for one preset card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCard {
    /// Raw tier quantity, echoed back on selection.
    pub tier_value: Decimal,
    pub quote: PresetQuote,
    pub selected: bool,
}

/// Conversion note shown next to the tier picker, e.g. "1 $ = 7.30 ¥".
/// Omitted for the reference currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateNote {
    pub symbol: String,
    pub rate: Decimal,
}

/// Rebate banner contents, present only while the promotion is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebateBanner {
    pub percent: u32,
    pub max_count: u32,
}

/// Named actions the render layer may invoke. It treats these as opaque
/// capabilities wired up by the controller, not as behavior it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Submit,
    SelectPreset(usize),
    OpenHistory,
}

/// Computed display state for the recharge panel, replacing per-field prop
/// drilling with one struct handed to the render layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeView {
    pub currency_symbol: String,
    pub rate_note: Option<RateNote>,
    pub presets: Vec<PresetCard>,
    pub rebate_banner: Option<RebateBanner>,
    pub actions: Vec<ViewAction>,
}

pub fn build_recharge_view(
    tiers: &[PriceTier],
    selected: Option<usize>,
    currency: &CurrencyContext,
    reference_price_ratio: Decimal,
    secondary_rate: Decimal,
    rebate: &RebateConfig,
) -> Result<RechargeView, PricingError> {
    let presets = tiers
        .iter()
        .enumerate()
        .map(|(index, tier)| {
            Ok(PresetCard {
                tier_value: tier.base_value,
                quote: quote(tier, currency, reference_price_ratio, secondary_rate)?,
                selected: selected == Some(index),
            })
        })
        .collect::<Result<Vec<_>, PricingError>>()?;

    let rate_note = match currency.kind {
        CurrencyKind::Reference => None,
        CurrencyKind::Local | CurrencyKind::Custom => Some(RateNote {
            symbol: currency.symbol.clone(),
            rate: currency.rate_from_reference,
        }),
    };

    let rebate_banner = rebate.is_active().then(|| RebateBanner {
        percent: rebate.percent,
        max_count: rebate.max_count,
    });

    let mut actions = vec![ViewAction::Submit, ViewAction::OpenHistory];
    actions.extend((0..tiers.len()).map(ViewAction::SelectPreset));

    telemetry::record_view_built(currency_label(currency.kind), tiers.len());

    Ok(RechargeView {
        currency_symbol: currency.symbol.clone(),
        rate_note,
        presets,
        rebate_banner,
        actions,
    })
}

fn currency_label(kind: CurrencyKind) -> &'static str {
    match kind {
        CurrencyKind::Reference => "reference",
        CurrencyKind::Local => "local",
        CurrencyKind::Custom => "custom",
    }
}
