use serde::Serialize;

use crate::models::{
    CarouselImageResponse, FormErrors, PricingTier, ProductResponse, ServiceCategory,
    SiteConfigurationResponse, SocialMediaLink,
};

/// Settings and social links shown on every page; the frontend gets them
/// with each page context.
#[derive(Debug, Serialize)]
pub struct SiteContext {
    pub config: Option<SiteConfigurationResponse>,
    pub social_links: Vec<SocialMediaLink>,
}

#[derive(Debug, Serialize)]
pub struct IndexContext {
    pub services: Vec<ServiceCategory>,
    pub products: Vec<ProductResponse>,
    pub carousel_slides: Vec<CarouselImageResponse>,
    pub pricing_tiers: Vec<PricingTier>,
    pub site: SiteContext,
}

#[derive(Debug, Serialize)]
pub struct ServiceDetailContext {
    pub service: ServiceCategory,
    pub products: Vec<ProductResponse>,
    pub pricing_tiers: Vec<PricingTier>,
    pub site: SiteContext,
}

#[derive(Debug, Serialize)]
pub struct ProductsContext {
    pub categories: Vec<ServiceCategory>,
    pub products: Vec<ProductResponse>,
    pub site: SiteContext,
}

#[derive(Debug, Serialize)]
pub struct InquirySuccessContext {
    pub site: SiteContext,
}

/// Successful submission; the frontend navigates to `redirect`.
#[derive(Debug, Serialize)]
pub struct InquirySubmitAccepted {
    pub success: bool,
    pub redirect: String,
}

/// Rejected submission: field errors plus the freshly recomputed index
/// context, so the frontend can re-render the form in place.
#[derive(Debug, Serialize)]
pub struct InquirySubmitRejected {
    pub success: bool,
    pub errors: FormErrors,
    pub context: IndexContext,
}
