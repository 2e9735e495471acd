use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{
        CarouselImage, CreateCarouselImageRequest, CreatePricingTierRequest, CreateProductRequest,
        CreateServiceCategoryRequest, CreateSocialMediaLinkRequest, CustomerInquiry,
        InquiryDetailResponse, InquiryListItem, InquiryQuery, InquirySearchResponse, PricingTier,
        ProductResponse, QuoteRequest, ServiceCategory, SiteConfigurationResponse,
        SocialMediaLink, UpdateCarouselImageRequest, UpdateInquiryStatusRequest,
        UpdatePricingTierRequest, UpdateProductRequest, UpdateQuoteRequest,
        UpdateServiceCategoryRequest, UpdateSiteConfigurationRequest,
        UpdateSocialMediaLinkRequest, UploadUrlRequest, UploadUrlResponse,
    },
    queries::{
        inquiry_queries, pricing_queries, product_queries, quote_queries, service_queries,
        site_queries,
    },
    services::storage_service,
    utils::slug::slugify,
    AppState,
};

use super::pages;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;
const UPLOAD_URL_EXPIRY_SECS: u64 = 900;

// INQUIRY ROUTES (any staff)

pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(query): Query<InquiryQuery>,
) -> Result<Json<InquirySearchResponse>> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0).max(0);

    let (inquiries, total) = inquiry_queries::list(&state.db, query.status, limit, offset).await?;

    let inquiries = inquiries
        .into_iter()
        .map(|inquiry| InquiryListItem {
            whatsapp_link: inquiry.whatsapp_link(),
            inquiry,
        })
        .collect();

    Ok(Json(InquirySearchResponse {
        inquiries,
        total,
        limit,
        offset,
    }))
}

pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<InquiryDetailResponse>> {
    let inquiry = inquiry_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", id)))?;

    // Every inquiry gets a quote shell at creation; a missing one means the
    // store is inconsistent.
    let quote = quote_queries::find_by_inquiry_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Inquiry {} has no quote", id)))?;

    let specifications_file_url = quote
        .specifications_file
        .as_deref()
        .map(|key| storage_service::public_url(&state.assets_url, key));

    Ok(Json(InquiryDetailResponse {
        whatsapp_link: inquiry.whatsapp_link(),
        inquiry,
        quote,
        specifications_file_url,
    }))
}

pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInquiryStatusRequest>,
) -> Result<Json<CustomerInquiry>> {
    let inquiry = inquiry_queries::update_status(&state.db, id, payload.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inquiry {} not found", id)))?;

    Ok(Json(inquiry))
}

pub async fn update_quote(
    State(state): State<AppState>,
    Path(inquiry_id): Path<i32>,
    Json(payload): Json<UpdateQuoteRequest>,
) -> Result<Json<QuoteRequest>> {
    let quote = quote_queries::update(&state.db, inquiry_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quote for inquiry {} not found", inquiry_id)))?;

    Ok(Json(quote))
}

// SERVICE CATEGORY ROUTES (admin)

pub async fn list_service_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceCategory>>> {
    let categories = service_queries::get_all(&state.db, false).await?;

    Ok(Json(categories))
}

pub async fn create_service_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceCategoryRequest>,
) -> Result<Json<ServiceCategory>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    // Slug falls back to the name, as staff rarely type one by hand.
    let slug = match payload.slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(&payload.name),
    };

    if slug.is_empty() {
        return Err(AppError::BadRequest(
            "name must contain at least one alphanumeric character".to_string(),
        ));
    }

    if service_queries::find_by_slug(&state.db, &slug).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Service with slug {} already exists",
            slug
        )));
    }

    let category = service_queries::create(&state.db, &payload, &slug).await?;

    Ok(Json(category))
}

pub async fn update_service_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceCategoryRequest>,
) -> Result<Json<ServiceCategory>> {
    if let Some(slug) = payload.slug.as_deref() {
        if let Some(existing) = service_queries::find_by_slug(&state.db, slug).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "Service with slug {} already exists",
                    slug
                )));
            }
        }
    }

    let category = service_queries::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))?;

    Ok(Json(category))
}

// PRODUCT ROUTES (admin)

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = product_queries::get_all(&state.db)
        .await?
        .into_iter()
        .map(|p| pages::product_response(&state, p))
        .collect();

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<ProductResponse>> {
    if service_queries::find_by_id(&state.db, payload.category_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "Service {} does not exist",
            payload.category_id
        )));
    }

    let product = product_queries::create(&state.db, &payload).await?;

    Ok(Json(pages::product_response(&state, product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    if let Some(category_id) = payload.category_id {
        if service_queries::find_by_id(&state.db, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Service {} does not exist",
                category_id
            )));
        }
    }

    let product = product_queries::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

    Ok(Json(pages::product_response(&state, product)))
}

// PRICING TIER ROUTES (admin)

pub async fn list_pricing_tiers(State(state): State<AppState>) -> Result<Json<Vec<PricingTier>>> {
    let tiers = pricing_queries::get_all(&state.db).await?;

    Ok(Json(tiers))
}

pub async fn create_pricing_tier(
    State(state): State<AppState>,
    Json(payload): Json<CreatePricingTierRequest>,
) -> Result<Json<PricingTier>> {
    validate_discount(&payload.discount_percentage)?;

    if pricing_queries::find_by_min_quantity(&state.db, payload.min_quantity)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "Tier with minimum quantity {} already exists",
            payload.min_quantity
        )));
    }

    let tier = pricing_queries::create(&state.db, &payload).await?;

    Ok(Json(tier))
}

pub async fn update_pricing_tier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePricingTierRequest>,
) -> Result<Json<PricingTier>> {
    if let Some(discount) = &payload.discount_percentage {
        validate_discount(discount)?;
    }

    if let Some(min_quantity) = payload.min_quantity {
        if let Some(existing) = pricing_queries::find_by_min_quantity(&state.db, min_quantity).await?
        {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "Tier with minimum quantity {} already exists",
                    min_quantity
                )));
            }
        }
    }

    let tier = pricing_queries::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tier {} not found", id)))?;

    Ok(Json(tier))
}

fn validate_discount(discount: &rust_decimal::Decimal) -> Result<()> {
    if *discount < rust_decimal::Decimal::ZERO || *discount > rust_decimal::Decimal::ONE_HUNDRED {
        return Err(AppError::BadRequest(
            "discount_percentage must be between 0 and 100".to_string(),
        ));
    }

    Ok(())
}

// SITE CONFIGURATION ROUTES (admin)

pub async fn get_site_configuration(
    State(state): State<AppState>,
) -> Result<Json<SiteConfigurationResponse>> {
    let config = site_queries::get_or_init_config(&state.db).await?;

    Ok(Json(site_configuration_response(&state, config)))
}

pub async fn update_site_configuration(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSiteConfigurationRequest>,
) -> Result<Json<SiteConfigurationResponse>> {
    let config = site_queries::update_config(&state.db, &payload).await?;

    Ok(Json(site_configuration_response(&state, config)))
}

fn site_configuration_response(
    state: &AppState,
    config: crate::models::SiteConfiguration,
) -> SiteConfigurationResponse {
    let logo_url = config
        .logo
        .as_deref()
        .map(|key| storage_service::public_url(&state.assets_url, key));

    SiteConfigurationResponse { config, logo_url }
}

// SOCIAL MEDIA LINK ROUTES (admin)

pub async fn list_social_links(
    State(state): State<AppState>,
) -> Result<Json<Vec<SocialMediaLink>>> {
    let links = site_queries::get_social_links(&state.db, false).await?;

    Ok(Json(links))
}

pub async fn create_social_link(
    State(state): State<AppState>,
    Json(payload): Json<CreateSocialMediaLinkRequest>,
) -> Result<Json<SocialMediaLink>> {
    let link = site_queries::create_social_link(&state.db, &payload).await?;

    Ok(Json(link))
}

pub async fn update_social_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSocialMediaLinkRequest>,
) -> Result<Json<SocialMediaLink>> {
    let link = site_queries::update_social_link(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Social link {} not found", id)))?;

    Ok(Json(link))
}

pub async fn delete_social_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    if !site_queries::delete_social_link(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Social link {} not found", id)));
    }

    Ok(Json(serde_json::json!({ "deleted": id })))
}

// CAROUSEL ROUTES (admin)

pub async fn list_carousel_images(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarouselImage>>> {
    let slides = site_queries::get_carousel(&state.db, false).await?;

    Ok(Json(slides))
}

pub async fn create_carousel_image(
    State(state): State<AppState>,
    Json(payload): Json<CreateCarouselImageRequest>,
) -> Result<Json<CarouselImage>> {
    let slide = site_queries::create_carousel_image(&state.db, &payload).await?;

    Ok(Json(slide))
}

pub async fn update_carousel_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCarouselImageRequest>,
) -> Result<Json<CarouselImage>> {
    let slide = site_queries::update_carousel_image(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Carousel image {} not found", id)))?;

    Ok(Json(slide))
}

pub async fn delete_carousel_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    if !site_queries::delete_carousel_image(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Carousel image {} not found", id)));
    }

    Ok(Json(serde_json::json!({ "deleted": id })))
}

// UPLOAD ROUTES (admin)

/// Presigned PUT URL for product, carousel and site images. The admin
/// frontend uploads directly to the bucket and then saves the returned key
/// on the owning record.
pub async fn create_upload_url(
    State(state): State<AppState>,
    Json(payload): Json<UploadUrlRequest>,
) -> Result<Json<UploadUrlResponse>> {
    if !storage_service::UPLOAD_FOLDERS.contains(&payload.folder.as_str()) {
        return Err(AppError::BadRequest(format!(
            "folder must be one of: {}",
            storage_service::UPLOAD_FOLDERS.join(", ")
        )));
    }

    let extension = payload.extension.trim_start_matches('.').to_ascii_lowercase();
    if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::BadRequest("Invalid file extension".to_string()));
    }

    let key = storage_service::object_key(&payload.folder, &extension);

    let upload_url = storage_service::put_object_url(
        &state.s3,
        &state.uploads_bucket,
        &key,
        &payload.content_type,
        UPLOAD_URL_EXPIRY_SECS,
    )
    .await?;

    let public_url = storage_service::public_url(&state.assets_url, &key);

    Ok(Json(UploadUrlResponse {
        key,
        upload_url,
        public_url,
    }))
}
