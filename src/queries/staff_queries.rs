use sqlx::PgPool;

use crate::{error::Result, models::StaffUser};

/// Find staff account by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<StaffUser>> {
    let staff = sqlx::query_as::<_, StaffUser>("SELECT * FROM staff_users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(staff)
}
