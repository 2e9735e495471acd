mod admin;
mod calculator;
mod health;
mod inquiries;
mod login;
mod pages;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    // Lead handling is open to any staff account.
    let staff_routes = Router::new()
        .route("/admin/inquiries", get(admin::list_inquiries))
        .route("/admin/inquiries/{id}", get(admin::get_inquiry))
        .route(
            "/admin/inquiries/{id}/status",
            patch(admin::update_inquiry_status),
        )
        .route("/admin/inquiries/{id}/quote", patch(admin::update_quote))
        .layer(middleware::from_fn(crate::middleware::staff_middleware));

    // Catalog, pricing and site settings need the admin role.
    let admin_routes = Router::new()
        .route(
            "/admin/services",
            get(admin::list_service_categories).post(admin::create_service_category),
        )
        .route("/admin/services/{id}", patch(admin::update_service_category))
        .route(
            "/admin/products",
            get(admin::list_products).post(admin::create_product),
        )
        .route("/admin/products/{id}", patch(admin::update_product))
        .route(
            "/admin/pricing-tiers",
            get(admin::list_pricing_tiers).post(admin::create_pricing_tier),
        )
        .route("/admin/pricing-tiers/{id}", patch(admin::update_pricing_tier))
        .route(
            "/admin/site-configuration",
            get(admin::get_site_configuration).put(admin::update_site_configuration),
        )
        .route(
            "/admin/social-links",
            get(admin::list_social_links).post(admin::create_social_link),
        )
        .route(
            "/admin/social-links/{id}",
            patch(admin::update_social_link).delete(admin::delete_social_link),
        )
        .route(
            "/admin/carousel",
            get(admin::list_carousel_images).post(admin::create_carousel_image),
        )
        .route(
            "/admin/carousel/{id}",
            patch(admin::update_carousel_image).delete(admin::delete_carousel_image),
        )
        .route("/admin/upload-url", post(admin::create_upload_url))
        .layer(middleware::from_fn(crate::middleware::admin_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/", get(pages::index))
        .route("/service/{slug}", get(pages::service_detail))
        .route("/products", get(pages::products))
        .route("/inquiry/submit", post(inquiries::submit_inquiry))
        .route("/inquiry/success", get(pages::inquiry_success))
        .route("/api/calculate-price", get(calculator::calculate_price))
        .route("/admin/login", post(login::login_staff))
        .merge(staff_routes)
        .merge(admin_routes)
}
