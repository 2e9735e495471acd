use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CreateProductRequest, ProductExample, UpdateProductRequest},
};

/// Find product by ID (active or not; display filtering is the caller's job)
pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<ProductExample>> {
    let product =
        sqlx::query_as::<_, ProductExample>("SELECT * FROM product_examples WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(product)
}

/// Get active featured products, cheapest first
pub async fn get_featured(pool: &PgPool, limit: i64) -> Result<Vec<ProductExample>> {
    let products = sqlx::query_as::<_, ProductExample>(
        "SELECT * FROM product_examples
         WHERE is_active = true AND is_featured = true
         ORDER BY starting_price ASC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// All active featured products (catalog page)
pub async fn get_featured_all(pool: &PgPool) -> Result<Vec<ProductExample>> {
    let products = sqlx::query_as::<_, ProductExample>(
        "SELECT * FROM product_examples
         WHERE is_active = true AND is_featured = true
         ORDER BY starting_price ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Get active products for one service category
pub async fn get_by_category(pool: &PgPool, category_id: i32) -> Result<Vec<ProductExample>> {
    let products = sqlx::query_as::<_, ProductExample>(
        "SELECT * FROM product_examples
         WHERE category_id = $1 AND is_active = true
         ORDER BY is_featured DESC, starting_price ASC",
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Get all products (admin listing)
pub async fn get_all(pool: &PgPool) -> Result<Vec<ProductExample>> {
    let products = sqlx::query_as::<_, ProductExample>(
        "SELECT * FROM product_examples ORDER BY is_featured DESC, starting_price ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Create a new product
pub async fn create(pool: &PgPool, req: &CreateProductRequest) -> Result<ProductExample> {
    let product = sqlx::query_as::<_, ProductExample>(
        "INSERT INTO product_examples
             (category_id, title, description, starting_price, unit_price,
              min_quantity, image, is_featured, is_active)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(req.category_id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(req.starting_price)
    .bind(req.unit_price)
    .bind(req.min_quantity.unwrap_or(1))
    .bind(&req.image)
    .bind(req.is_featured.unwrap_or(false))
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Update an existing product
pub async fn update(
    pool: &PgPool,
    id: i32,
    req: &UpdateProductRequest,
) -> Result<Option<ProductExample>> {
    let mut query_builder =
        sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE product_examples SET ");
    let mut fields = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(category_id) = req.category_id {
        fields
            .push("category_id = ")
            .push_bind_unseparated(category_id);
        has_fields = true;
    }

    if let Some(title) = &req.title {
        fields.push("title = ").push_bind_unseparated(title);
        has_fields = true;
    }

    if let Some(description) = &req.description {
        fields
            .push("description = ")
            .push_bind_unseparated(description);
        has_fields = true;
    }

    if let Some(starting_price) = req.starting_price {
        fields
            .push("starting_price = ")
            .push_bind_unseparated(starting_price);
        has_fields = true;
    }

    if let Some(unit_price) = req.unit_price {
        fields
            .push("unit_price = ")
            .push_bind_unseparated(unit_price);
        has_fields = true;
    }

    if let Some(min_quantity) = req.min_quantity {
        fields
            .push("min_quantity = ")
            .push_bind_unseparated(min_quantity);
        has_fields = true;
    }

    if let Some(image) = &req.image {
        fields.push("image = ").push_bind_unseparated(image);
        has_fields = true;
    }

    if let Some(is_featured) = req.is_featured {
        fields
            .push("is_featured = ")
            .push_bind_unseparated(is_featured);
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

    let product = query_builder
        .build_query_as::<ProductExample>()
        .fetch_optional(pool)
        .await?;

    Ok(product)
}
