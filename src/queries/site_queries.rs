use sqlx::PgPool;

use crate::{
    error::Result,
    models::{
        CarouselImage, CreateCarouselImageRequest, CreateSocialMediaLinkRequest,
        SiteConfiguration, SocialMediaLink, UpdateCarouselImageRequest,
        UpdateSiteConfigurationRequest, UpdateSocialMediaLinkRequest,
    },
};

/// Idempotent get-or-initialize for the singleton configuration row. The
/// fixed key (id = 1, enforced by a table check) makes concurrent first
/// writes converge on one row instead of racing a check-then-create.
pub async fn get_or_init_config(pool: &PgPool) -> Result<SiteConfiguration> {
    sqlx::query("INSERT INTO site_configuration (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
        .execute(pool)
        .await?;

    let config =
        sqlx::query_as::<_, SiteConfiguration>("SELECT * FROM site_configuration WHERE id = 1")
            .fetch_one(pool)
            .await?;

    Ok(config)
}

/// Read the configuration row if it has been initialized
pub async fn find_config(pool: &PgPool) -> Result<Option<SiteConfiguration>> {
    let config =
        sqlx::query_as::<_, SiteConfiguration>("SELECT * FROM site_configuration WHERE id = 1")
            .fetch_optional(pool)
            .await?;

    Ok(config)
}

/// Update the singleton configuration row; there is no delete
pub async fn update_config(
    pool: &PgPool,
    req: &UpdateSiteConfigurationRequest,
) -> Result<SiteConfiguration> {
    // Make sure the row exists before a partial update.
    let current = get_or_init_config(pool).await?;

    let mut query_builder =
        sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE site_configuration SET ");
    let mut fields = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(site_name) = &req.site_name {
        fields.push("site_name = ").push_bind_unseparated(site_name);
        has_fields = true;
    }

    if let Some(logo) = &req.logo {
        fields.push("logo = ").push_bind_unseparated(logo);
        has_fields = true;
    }

    if let Some(phone_contact) = &req.phone_contact {
        fields
            .push("phone_contact = ")
            .push_bind_unseparated(phone_contact);
        has_fields = true;
    }

    if let Some(whatsapp_number) = &req.whatsapp_number {
        fields
            .push("whatsapp_number = ")
            .push_bind_unseparated(whatsapp_number);
        has_fields = true;
    }

    if let Some(email_contact) = &req.email_contact {
        fields
            .push("email_contact = ")
            .push_bind_unseparated(email_contact);
        has_fields = true;
    }

    if !has_fields {
        return Ok(current);
    }

    query_builder.push(" WHERE id = 1 RETURNING *");

    let config = query_builder
        .build_query_as::<SiteConfiguration>()
        .fetch_one(pool)
        .await?;

    Ok(config)
}

/// Get social media links, ordered for the footer
pub async fn get_social_links(pool: &PgPool, active_only: bool) -> Result<Vec<SocialMediaLink>> {
    let query = if active_only {
        "SELECT * FROM social_media_links WHERE is_active = true ORDER BY display_order ASC"
    } else {
        "SELECT * FROM social_media_links ORDER BY display_order ASC"
    };

    let links = sqlx::query_as::<_, SocialMediaLink>(query)
        .fetch_all(pool)
        .await?;

    Ok(links)
}

/// Create a social media link
pub async fn create_social_link(
    pool: &PgPool,
    req: &CreateSocialMediaLinkRequest,
) -> Result<SocialMediaLink> {
    let link = sqlx::query_as::<_, SocialMediaLink>(
        "INSERT INTO social_media_links (name, url, icon_class, display_order, is_active)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&req.name)
    .bind(&req.url)
    .bind(&req.icon_class)
    .bind(req.display_order.unwrap_or(0))
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(link)
}

/// Update a social media link
pub async fn update_social_link(
    pool: &PgPool,
    id: i32,
    req: &UpdateSocialMediaLinkRequest,
) -> Result<Option<SocialMediaLink>> {
    let mut query_builder =
        sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE social_media_links SET ");
    let mut fields = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(name) = &req.name {
        fields.push("name = ").push_bind_unseparated(name);
        has_fields = true;
    }

    if let Some(url) = &req.url {
        fields.push("url = ").push_bind_unseparated(url);
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
        let link =
            sqlx::query_as::<_, SocialMediaLink>("SELECT * FROM social_media_links WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        return Ok(link);
    }

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let link = query_builder
        .build_query_as::<SocialMediaLink>()
        .fetch_optional(pool)
        .await?;

    Ok(link)
}

/// Delete a social media link
pub async fn delete_social_link(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM social_media_links WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get carousel slides in display order
pub async fn get_carousel(pool: &PgPool, active_only: bool) -> Result<Vec<CarouselImage>> {
    let query = if active_only {
        "SELECT * FROM carousel_images WHERE is_active = true ORDER BY display_order ASC"
    } else {
        "SELECT * FROM carousel_images ORDER BY display_order ASC"
    };

    let slides = sqlx::query_as::<_, CarouselImage>(query)
        .fetch_all(pool)
        .await?;

    Ok(slides)
}

/// Create a carousel slide
pub async fn create_carousel_image(
    pool: &PgPool,
    req: &CreateCarouselImageRequest,
) -> Result<CarouselImage> {
    let slide = sqlx::query_as::<_, CarouselImage>(
        "INSERT INTO carousel_images (title, image, display_order, is_active)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(req.title.as_deref().unwrap_or(""))
    .bind(&req.image)
    .bind(req.display_order.unwrap_or(0))
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    Ok(slide)
}

/// Update a carousel slide
pub async fn update_carousel_image(
    pool: &PgPool,
    id: i32,
    req: &UpdateCarouselImageRequest,
) -> Result<Option<CarouselImage>> {
    let mut query_builder =
        sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE carousel_images SET ");
    let mut fields = query_builder.separated(", ");
    let mut has_fields = false;

    if let Some(title) = &req.title {
        fields.push("title = ").push_bind_unseparated(title);
        has_fields = true;
    }

    if let Some(image) = &req.image {
        fields.push("image = ").push_bind_unseparated(image);
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
        let slide =
            sqlx::query_as::<_, CarouselImage>("SELECT * FROM carousel_images WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        return Ok(slide);
    }

    query_builder.push(" WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    let slide = query_builder
        .build_query_as::<CarouselImage>()
        .fetch_optional(pool)
        .await?;

    Ok(slide)
}

/// Delete a carousel slide
pub async fn delete_carousel_image(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM carousel_images WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
