use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreatePricingTierRequest, PricingTier, UpdatePricingTierRequest},
};

/// Active tiers ordered for selection: highest threshold first
pub async fn get_active(pool: &PgPool) -> Result<Vec<PricingTier>> {
    let tiers = sqlx::query_as::<_, PricingTier>(
        "SELECT * FROM pricing_tiers WHERE is_active = true ORDER BY min_quantity DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(tiers)
}

/// All tiers, lowest threshold first (admin listing)
pub async fn get_all(pool: &PgPool) -> Result<Vec<PricingTier>> {
    let tiers =
        sqlx::query_as::<_, PricingTier>("SELECT * FROM pricing_tiers ORDER BY min_quantity ASC")
            .fetch_all(pool)
            .await?;

    Ok(tiers)
}

/// Find tier by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<PricingTier>> {
    let tier = sqlx::query_as::<_, PricingTier>("SELECT * FROM pricing_tiers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(tier)
}

/// Find tier by its unique quantity threshold
pub async fn find_by_min_quantity(pool: &PgPool, min_quantity: i32) -> Result<Option<PricingTier>> {
    let tier =
        sqlx::query_as::<_, PricingTier>("SELECT * FROM pricing_tiers WHERE min_quantity = $1")
            .bind(min_quantity)
            .fetch_optional(pool)
            .await?;

    Ok(tier)
}

/// Create a new tier
pub async fn create(pool: &PgPool, req: &CreatePricingTierRequest) -> Result<PricingTier> {
    let tier = sqlx::query_as::<_, PricingTier>(
        "INSERT INTO pricing_tiers (min_quantity, discount_percentage, is_active)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(req.min_quantity)
    .bind(req.discount_percentage)
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(tier)
}

/// Update an existing tier
pub async fn update(
    pool: &PgPool,
    id: i32,
    req: &UpdatePricingTierRequest,
) -> Result<Option<PricingTier>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE pricing_tiers SET ");
    let mut fields = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(min_quantity) = req.min_quantity {
        fields
            .push("min_quantity = ")
            .push_bind_unseparated(min_quantity);
        has_fields = true;
    }

    if let Some(discount_percentage) = req.discount_percentage {
        fields
            .push("discount_percentage = ")
            .push_bind_unseparated(discount_percentage);
        has_fields = true;
    }

    if let Some(is_active) = req.is_active {
        fields.push("is_active = ").push_bind_unseparated(is_active);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id).await;
    }

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let tier = query_builder
        .build_query_as::<PricingTier>()
        .fetch_optional(pool)
        .await?;

    Ok(tier)
}
