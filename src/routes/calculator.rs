use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::{quote_price, PriceQuote},
    queries::{pricing_queries, product_queries},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CalculatePriceParams {
    pub product_id: Option<String>,
    pub qty: Option<String>,
}

/// Live price quote for the product pages. Looks the product up whether or
/// not it is active; display pages do their own filtering.
pub async fn calculate_price(
    State(state): State<AppState>,
    Query(params): Query<CalculatePriceParams>,
) -> Result<Json<PriceQuote>> {
    let product_id = params
        .product_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Product ID required".to_string()))?
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid product ID".to_string()))?;

    let qty = parse_qty(params.qty.as_deref());

    let product = product_queries::find_by_id(&state.db, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;

    let tiers = pricing_queries::get_active(&state.db).await?;

    Ok(Json(quote_price(product.base_unit_price(), qty, &tiers)))
}

/// Absent, unparseable or non-positive quantities all fall back to 1.
fn parse_qty(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|q| *q >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qty_defaults_to_one() {
        assert_eq!(parse_qty(None), 1);
        assert_eq!(parse_qty(Some("")), 1);
        assert_eq!(parse_qty(Some("abc")), 1);
        assert_eq!(parse_qty(Some("0")), 1);
        assert_eq!(parse_qty(Some("-5")), 1);
    }

    #[test]
    fn valid_quantities_pass_through() {
        assert_eq!(parse_qty(Some("1")), 1);
        assert_eq!(parse_qty(Some("12")), 12);
        assert_eq!(parse_qty(Some(" 60 ")), 60);
    }
}
