use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Operator rebate promotion settings as served by the top-up info endpoint.
/// The promotion is active only when both fields are positive; defaults to
/// inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RebateConfig {
    #[serde(rename = "topup_rebate_percent", default)]
    pub percent: u32,
    #[serde(rename = "topup_rebate_max_count", default)]
    pub max_count: u32,
}

impl RebateConfig {
    pub fn new(percent: u32, max_count: u32) -> Self {
        Self { percent, max_count }
    }

    pub fn is_active(&self) -> bool {
        self.percent > 0 && self.max_count > 0
    }
}

/// Price multiplier a user gets when paying with someone's promo code:
/// `1 - percent/100`, floored at 0.01. No discount when the promotion is
/// inactive or the user has exhausted the qualifying top-up count.
pub fn promo_discount(config: &RebateConfig, user_topup_count: u32) -> Decimal {
    if !config.is_active() || user_topup_count >= config.max_count {
        return Decimal::ONE;
    }
    let discount = Decimal::ONE - Decimal::from(config.percent) / dec!(100);
    discount.max(dec!(0.01))
}

/// Quota credited back to the code owner after a qualifying top-up: integer
/// percentage of the purchased quota, truncating division.
pub fn rebate_quota(quota: i64, percent: u32) -> i64 {
    if percent == 0 {
        return 0;
    }
    let credited = quota * i64::from(percent) / 100;
    credited.max(0)
}
