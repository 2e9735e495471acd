use serde::{Deserialize, Serialize};

/// Singleton row of global site settings, pinned to id = 1.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteConfiguration {
    pub id: i32,
    pub site_name: String,
    pub logo: Option<String>,
    pub phone_contact: String,
    pub whatsapp_number: String,
    pub email_contact: String,
}

#[derive(Debug, Serialize)]
pub struct SiteConfigurationResponse {
    #[serde(flatten)]
    pub config: SiteConfiguration,
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSiteConfigurationRequest {
    pub site_name: Option<String>,
    pub logo: Option<String>,
    pub phone_contact: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email_contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SocialMediaLink {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub icon_class: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateSocialMediaLinkRequest {
    pub name: String,
    pub url: String,
    pub icon_class: String,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSocialMediaLinkRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon_class: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CarouselImage {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct CarouselImageResponse {
    #[serde(flatten)]
    pub slide: CarouselImage,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCarouselImageRequest {
    pub title: Option<String>,
    pub image: String,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCarouselImageRequest {
    pub title: Option<String>,
    pub image: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
