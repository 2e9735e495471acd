use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductExample {
    pub id: i32,
    pub category_id: i32,
    pub title: String,
    pub description: String,
    pub starting_price: Decimal,
    /// Per-unit price used by the calculator; falls back to starting_price.
    pub unit_price: Option<Decimal>,
    pub min_quantity: i32,
    pub image: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ProductExample {
    pub fn base_unit_price(&self) -> Decimal {
        self.unit_price.unwrap_or(self.starting_price)
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: ProductExample,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub category_id: i32,
    pub title: String,
    pub description: String,
    pub starting_price: Decimal,
    pub unit_price: Option<Decimal>,
    pub min_quantity: Option<i32>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub category_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub min_quantity: Option<i32>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::dec;

    fn product(unit_price: Option<Decimal>) -> ProductExample {
        ProductExample {
            id: 1,
            category_id: 1,
            title: "Branded Mug".to_string(),
            description: "11oz ceramic mug".to_string(),
            starting_price: dec!(350.00),
            unit_price,
            min_quantity: 1,
            image: None,
            is_featured: false,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn calculator_prefers_the_explicit_unit_price() {
        assert_eq!(product(Some(dec!(300.00))).base_unit_price(), dec!(300.00));
    }

    #[test]
    fn calculator_falls_back_to_starting_price() {
        assert_eq!(product(None).base_unit_price(), dec!(350.00));
    }
}
