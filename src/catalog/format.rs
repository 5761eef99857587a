use crate::{
    constants::{HIGH_MARKET_VALUE, MEDIUM_MARKET_VALUE},
    shapes::enums::MarketValueTier,
};

/// Renders a market value the way listings show it: millions with one
/// decimal from 1,000,000 up, whole thousands below. Halves round up.
pub fn format_market_value(value: u64) -> String {
    if value >= 1_000_000 {
        let tenths = value.saturating_add(50_000) / 100_000;
        format!("€{}.{}M", tenths / 10, tenths % 10)
    } else {
        format!("€{}K", (value + 500) / 1_000)
    }
}

impl MarketValueTier {
    pub fn of(value: u64) -> Self {
        if value >= HIGH_MARKET_VALUE {
            MarketValueTier::High
        } else if value >= MEDIUM_MARKET_VALUE {
            MarketValueTier::Medium
        } else {
            MarketValueTier::Standard
        }
    }
}
