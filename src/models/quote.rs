use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Staff-side pricing and follow-up record, 1:1 with an inquiry. A blank
/// shell is created in the same transaction as every new inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuoteRequest {
    pub id: i32,
    pub inquiry_id: i32,
    pub specifications_file: Option<String>,
    pub estimated_price: Option<Decimal>,
    pub notes: String,
    pub follow_up_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuoteRequest {
    pub estimated_price: Option<Decimal>,
    pub notes: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
}
