use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CustomerInquiry, InquiryStatus, NewInquiry, QuoteRequest},
};

/// Persist a new inquiry together with its blank quote shell. Both rows are
/// created in one transaction: either the pair exists or nothing does.
pub async fn create_with_quote(
    pool: &PgPool,
    inquiry: &NewInquiry,
) -> Result<(CustomerInquiry, QuoteRequest)> {
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, CustomerInquiry>(
        "INSERT INTO customer_inquiries (name, phone, email, company, service_needed, message)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(&inquiry.name)
    .bind(&inquiry.phone)
    .bind(&inquiry.email)
    .bind(&inquiry.company)
    .bind(inquiry.service_needed)
    .bind(&inquiry.message)
    .fetch_one(&mut *tx)
    .await?;

    let quote = sqlx::query_as::<_, QuoteRequest>(
        "INSERT INTO quote_requests (inquiry_id) VALUES ($1) RETURNING *",
    )
    .bind(created.id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok((created, quote))
}

/// Find inquiry by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<CustomerInquiry>> {
    let inquiry =
        sqlx::query_as::<_, CustomerInquiry>("SELECT * FROM customer_inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(inquiry)
}

/// List inquiries, newest first, optionally filtered by status
pub async fn list(
    pool: &PgPool,
    status: Option<InquiryStatus>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<CustomerInquiry>, i64)> {
    let (inquiries, total) = match status {
        Some(status) => {
            let inquiries = sqlx::query_as::<_, CustomerInquiry>(
                "SELECT * FROM customer_inquiries WHERE status = $1
                 ORDER BY submitted_on DESC
                 LIMIT $2 OFFSET $3",
            )
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

            let (total,): (i64,) =
                sqlx::query_as("SELECT COUNT(*) FROM customer_inquiries WHERE status = $1")
                    .bind(status)
                    .fetch_one(pool)
                    .await?;

            (inquiries, total)
        }
        None => {
            let inquiries = sqlx::query_as::<_, CustomerInquiry>(
                "SELECT * FROM customer_inquiries
                 ORDER BY submitted_on DESC
                 LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

            let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customer_inquiries")
                .fetch_one(pool)
                .await?;

            (inquiries, total)
        }
    };

    Ok((inquiries, total))
}

/// Set the workflow status; transitions are intentionally unconstrained
pub async fn update_status(
    pool: &PgPool,
    id: i32,
    status: InquiryStatus,
) -> Result<Option<CustomerInquiry>> {
    let inquiry = sqlx::query_as::<_, CustomerInquiry>(
        "UPDATE customer_inquiries SET status = $1 WHERE id = $2 RETURNING *",
    )
    .bind(status)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(inquiry)
}
