use aws_sdk_s3::Client as S3Client;
use aws_sdk_sesv2::Client as SesClient;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::{config::AppConfig, database, error::Result, routes};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub ses: SesClient,
    pub s3: S3Client,
    pub assets_url: String,
    pub uploads_bucket: String,
    pub frontend_url: String,
    pub sender_email: String,
    pub leads_email: String,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let ses = crate::config::load_ses_client().await?;
    let s3 = crate::config::load_s3_client().await?;

    let state = AppState {
        db: pool,
        ses,
        s3,
        assets_url: config.storage.assets_url.clone(),
        uploads_bucket: config.storage.bucket.clone(),
        frontend_url: config.frontend_url.clone(),
        sender_email: config.mail.sender_email.clone(),
        leads_email: config.mail.leads_email.clone(),
    };

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
