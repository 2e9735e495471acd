use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PricingTier {
    pub id: i32,
    pub min_quantity: i32,
    /// Percentage off the base unit price, e.g. 5.00 for 5%.
    pub discount_percentage: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreatePricingTierRequest {
    pub min_quantity: i32,
    pub discount_percentage: Decimal,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePricingTierRequest {
    pub min_quantity: Option<i32>,
    pub discount_percentage: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// Calculator response. Amounts are exact decimals internally and only become
/// floats at the JSON boundary.
#[derive(Debug, Serialize)]
pub struct PriceQuote {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_percentage: Decimal,
    pub qty: i32,
}

/// Pick the discount for a quantity. The tier table is small and
/// admin-curated, so this is a linear scan over tiers sorted by descending
/// min_quantity: the first threshold at or below the quantity wins.
pub fn select_discount(tiers: &[PricingTier], qty: i32) -> Decimal {
    for tier in tiers {
        if qty >= tier.min_quantity {
            return tier.discount_percentage;
        }
    }

    Decimal::ZERO
}

/// Apply the best volume discount to a base unit price.
pub fn quote_price(base_unit_price: Decimal, qty: i32, tiers: &[PricingTier]) -> PriceQuote {
    let discount_percentage = select_discount(tiers, qty);

    let multiplier = (Decimal::ONE_HUNDRED - discount_percentage) / Decimal::ONE_HUNDRED;
    let unit_price = (base_unit_price * multiplier).round_dp(2);
    let total_price = (unit_price * Decimal::from(qty)).round_dp(2);

    PriceQuote {
        total_price,
        unit_price,
        base_unit_price,
        discount_percentage,
        qty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn tiers() -> Vec<PricingTier> {
        // Sorted by descending min_quantity, as the query layer returns them.
        vec![
            PricingTier {
                id: 2,
                min_quantity: 50,
                discount_percentage: dec!(15.00),
                is_active: true,
            },
            PricingTier {
                id: 1,
                min_quantity: 10,
                discount_percentage: dec!(5.00),
                is_active: true,
            },
        ]
    }

    #[test]
    fn no_tier_qualifies_below_lowest_threshold() {
        assert_eq!(select_discount(&tiers(), 1), Decimal::ZERO);
        assert_eq!(select_discount(&tiers(), 9), Decimal::ZERO);
    }

    #[test]
    fn highest_qualifying_threshold_wins() {
        assert_eq!(select_discount(&tiers(), 10), dec!(5.00));
        assert_eq!(select_discount(&tiers(), 49), dec!(5.00));
        assert_eq!(select_discount(&tiers(), 50), dec!(15.00));
        assert_eq!(select_discount(&tiers(), 1000), dec!(15.00));
    }

    #[test]
    fn empty_tier_table_means_no_discount() {
        assert_eq!(select_discount(&[], 100), Decimal::ZERO);
    }

    #[test]
    fn quote_at_qty_one_is_undiscounted() {
        let quote = quote_price(dec!(1000), 1, &tiers());
        assert_eq!(quote.discount_percentage, Decimal::ZERO);
        assert_eq!(quote.unit_price, dec!(1000.00));
        assert_eq!(quote.total_price, dec!(1000.00));
        assert_eq!(quote.qty, 1);
    }

    #[test]
    fn quote_at_qty_twelve_gets_five_percent() {
        let quote = quote_price(dec!(1000), 12, &tiers());
        assert_eq!(quote.discount_percentage, dec!(5.00));
        assert_eq!(quote.unit_price, dec!(950.00));
        assert_eq!(quote.total_price, dec!(11400.00));
    }

    #[test]
    fn quote_at_qty_sixty_gets_fifteen_percent() {
        let quote = quote_price(dec!(1000), 60, &tiers());
        assert_eq!(quote.discount_percentage, dec!(15.00));
        assert_eq!(quote.unit_price, dec!(850.00));
        assert_eq!(quote.total_price, dec!(51000.00));
    }

    #[test]
    fn fractional_unit_prices_round_to_cents() {
        let quote = quote_price(dec!(33.33), 10, &tiers());
        // 33.33 * 0.95 = 31.6635 -> 31.66
        assert_eq!(quote.unit_price, dec!(31.66));
        assert_eq!(quote.total_price, dec!(316.60));
        assert_eq!(quote.base_unit_price, dec!(33.33));
    }
}
