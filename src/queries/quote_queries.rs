use sqlx::PgPool;

use crate::{
    error::Result,
    models::{QuoteRequest, UpdateQuoteRequest},
};

/// Find the quote attached to an inquiry
pub async fn find_by_inquiry_id(pool: &PgPool, inquiry_id: i32) -> Result<Option<QuoteRequest>> {
    let quote =
        sqlx::query_as::<_, QuoteRequest>("SELECT * FROM quote_requests WHERE inquiry_id = $1")
            .bind(inquiry_id)
            .fetch_optional(pool)
            .await?;

    Ok(quote)
}

/// Attach an uploaded specifications file to the quote
pub async fn attach_specifications_file(
    pool: &PgPool,
    quote_id: i32,
    file_key: &str,
) -> Result<()> {
    sqlx::query(
        "UPDATE quote_requests SET specifications_file = $1, updated_at = NOW() WHERE id = $2",
    )
    .bind(file_key)
    .bind(quote_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update staff-entered quote fields
pub async fn update(
    pool: &PgPool,
    inquiry_id: i32,
    req: &UpdateQuoteRequest,
) -> Result<Option<QuoteRequest>> {
    let mut query_builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE quote_requests SET ");
    let mut fields = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(estimated_price) = req.estimated_price {
        fields
            .push("estimated_price = ")
            .push_bind_unseparated(estimated_price);
        has_fields = true;
    }

    if let Some(notes) = &req.notes {
        fields.push("notes = ").push_bind_unseparated(notes);
        has_fields = true;
    }

    if let Some(follow_up_date) = req.follow_up_date {
        fields
            .push("follow_up_date = ")
            .push_bind_unseparated(follow_up_date);
        has_fields = true;
    }

    if !has_fields {
        return find_by_inquiry_id(pool, inquiry_id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE inquiry_id = ");
    query_builder.push_bind(inquiry_id);
    query_builder.push(" RETURNING *");

    let quote = query_builder
        .build_query_as::<QuoteRequest>()
        .fetch_optional(pool)
        .await?;

    Ok(quote)
}
