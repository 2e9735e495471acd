use serde::{Deserialize, Serialize};

use crate::models::{CustomerInquiry, InquiryStatus, QuoteRequest};

#[derive(Debug, Deserialize)]
pub struct InquiryQuery {
    pub status: Option<InquiryStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct InquiryListItem {
    #[serde(flatten)]
    pub inquiry: CustomerInquiry,
    pub whatsapp_link: String,
}

#[derive(Debug, Serialize)]
pub struct InquirySearchResponse {
    pub inquiries: Vec<InquiryListItem>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize)]
pub struct InquiryDetailResponse {
    #[serde(flatten)]
    pub inquiry: CustomerInquiry,
    pub whatsapp_link: String,
    pub quote: QuoteRequest,
    pub specifications_file_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInquiryStatusRequest {
    pub status: InquiryStatus,
}

#[derive(Debug, Deserialize)]
pub struct UploadUrlRequest {
    /// Storage prefix: products, carousel or site.
    pub folder: String,
    pub content_type: String,
    pub extension: String,
}

#[derive(Debug, Serialize)]
pub struct UploadUrlResponse {
    pub key: String,
    pub upload_url: String,
    pub public_url: String,
}
