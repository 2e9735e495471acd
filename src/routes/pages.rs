use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{
        CarouselImageResponse, IndexContext, InquirySuccessContext, ProductExample,
        ProductResponse, ProductsContext, ServiceDetailContext, SiteConfigurationResponse,
        SiteContext,
    },
    queries::{pricing_queries, product_queries, service_queries, site_queries},
    services::storage_service,
    AppState,
};

/// The home page shows up to this many featured products.
const FEATURED_PRODUCT_LIMIT: i64 = 6;

pub(crate) fn product_response(state: &AppState, product: ProductExample) -> ProductResponse {
    let image_url = product
        .image
        .as_deref()
        .map(|key| storage_service::public_url(&state.assets_url, key));

    ProductResponse { product, image_url }
}

/// Site settings and social links, included with every page context the way
/// the frontend layout expects them.
pub(crate) async fn site_context(state: &AppState) -> Result<SiteContext> {
    let config = site_queries::find_config(&state.db).await?.map(|config| {
        let logo_url = config
            .logo
            .as_deref()
            .map(|key| storage_service::public_url(&state.assets_url, key));

        SiteConfigurationResponse { config, logo_url }
    });

    let social_links = site_queries::get_social_links(&state.db, true).await?;

    Ok(SiteContext {
        config,
        social_links,
    })
}

/// Full display context for the home page; also recomputed when the inquiry
/// form is re-rendered with errors.
pub(crate) async fn index_context(state: &AppState) -> Result<IndexContext> {
    let services = service_queries::get_all(&state.db, true).await?;

    let products = product_queries::get_featured(&state.db, FEATURED_PRODUCT_LIMIT)
        .await?
        .into_iter()
        .map(|p| product_response(state, p))
        .collect();

    let carousel_slides = site_queries::get_carousel(&state.db, true)
        .await?
        .into_iter()
        .map(|slide| CarouselImageResponse {
            image_url: storage_service::public_url(&state.assets_url, &slide.image),
            slide,
        })
        .collect();

    let pricing_tiers = pricing_queries::get_active(&state.db).await?;

    Ok(IndexContext {
        services,
        products,
        carousel_slides,
        pricing_tiers,
        site: site_context(state).await?,
    })
}

pub async fn index(State(state): State<AppState>) -> Result<Json<IndexContext>> {
    let context = index_context(&state).await?;

    Ok(Json(context))
}

pub async fn service_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceDetailContext>> {
    let service = service_queries::find_active_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", slug)))?;

    let products = product_queries::get_by_category(&state.db, service.id)
        .await?
        .into_iter()
        .map(|p| product_response(&state, p))
        .collect();

    let pricing_tiers = pricing_queries::get_active(&state.db).await?;

    Ok(Json(ServiceDetailContext {
        service,
        products,
        pricing_tiers,
        site: site_context(&state).await?,
    }))
}

pub async fn products(State(state): State<AppState>) -> Result<Json<ProductsContext>> {
    let categories = service_queries::get_all(&state.db, true).await?;

    let products = product_queries::get_featured_all(&state.db)
        .await?
        .into_iter()
        .map(|p| product_response(&state, p))
        .collect();

    Ok(Json(ProductsContext {
        categories,
        products,
        site: site_context(&state).await?,
    }))
}

pub async fn inquiry_success(State(state): State<AppState>) -> Result<Json<InquirySuccessContext>> {
    Ok(Json(InquirySuccessContext {
        site: site_context(&state).await?,
    }))
}
