use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateServiceCategoryRequest, ServiceCategory, UpdateServiceCategoryRequest},
};

/// Find service category by ID
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<ServiceCategory>> {
    let category =
        sqlx::query_as::<_, ServiceCategory>("SELECT * FROM service_categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

/// Find service category by slug
pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<ServiceCategory>> {
    let category =
        sqlx::query_as::<_, ServiceCategory>("SELECT * FROM service_categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

/// Find an active service category by slug (public detail page)
pub async fn find_active_by_slug(pool: &PgPool, slug: &str) -> Result<Option<ServiceCategory>> {
    let category = sqlx::query_as::<_, ServiceCategory>(
        "SELECT * FROM service_categories WHERE slug = $1 AND is_active = true",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

/// Whether an active category with this ID exists (inquiry form reference)
pub async fn exists_active(pool: &PgPool, id: i32) -> Result<bool> {
    let row: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM service_categories WHERE id = $1 AND is_active = true")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(row.is_some())
}

/// Get all service categories
pub async fn get_all(pool: &PgPool, active_only: bool) -> Result<Vec<ServiceCategory>> {
    let query = if active_only {
        "SELECT * FROM service_categories WHERE is_active = true
         ORDER BY display_order ASC, name ASC"
    } else {
        "SELECT * FROM service_categories ORDER BY display_order ASC, name ASC"
    };

    let categories = sqlx::query_as::<_, ServiceCategory>(query)
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

/// Create a new service category
pub async fn create(
    pool: &PgPool,
    req: &CreateServiceCategoryRequest,
    slug: &str,
) -> Result<ServiceCategory> {
    let category = sqlx::query_as::<_, ServiceCategory>(
        "INSERT INTO service_categories (name, slug, description, icon_class, display_order, is_active)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(slug)
    .bind(&req.description)
    .bind(&req.icon_class)
    .bind(req.display_order.unwrap_or(0))
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(category)
}

/// Update an existing service category
pub async fn update(
    pool: &PgPool,
    id: i32,
    req: &UpdateServiceCategoryRequest,
) -> Result<Option<ServiceCategory>> {
    let mut query_builder =
        sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE service_categories SET ");
    let mut fields = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(name) = &req.name {
        fields.push("name = ").push_bind_unseparated(name);
        has_fields = true;
    }

    if let Some(slug) = &req.slug {
        fields.push("slug = ").push_bind_unseparated(slug);
        has_fields = true;
    }

    if let Some(description) = &req.description {
        fields
            .push("description = ")
            .push_bind_unseparated(description);
        has_fields = true;
    }

    if let Some(icon_class) = &req.icon_class {
        fields
            .push("icon_class = ")
            .push_bind_unseparated(icon_class);
        has_fields = true;
    }

    if let Some(display_order) = req.display_order {
        fields
            .push("display_order = ")
            .push_bind_unseparated(display_order);
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

    let category = query_builder
        .build_query_as::<ServiceCategory>()
        .fetch_optional(pool)
        .await?;

    Ok(category)
}
