use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::validation::{is_valid_email, is_valid_kenyan_mobile, normalize_phone};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_COMPANY_LEN: usize = 150;

/// File extensions accepted for uploaded design files.
pub const ALLOWED_DESIGN_EXTENSIONS: [&str; 7] =
    ["pdf", "png", "jpg", "jpeg", "ai", "psd", "svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    Contacted,
    Quoted,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CustomerInquiry {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: Option<String>,
    pub service_needed: Option<i32>,
    pub message: String,
    pub submitted_on: DateTime<Utc>,
    pub status: InquiryStatus,
}

impl CustomerInquiry {
    pub fn whatsapp_link(&self) -> String {
        whatsapp_link(&self.phone, &self.name)
    }
}

/// Build a wa.me deep link with a pre-filled greeting. The stored phone is
/// already normalized; a leading 0 becomes the 254 country code and a
/// leading + is dropped, anything else passes through unchanged.
pub fn whatsapp_link(phone: &str, name: &str) -> String {
    let phone = normalize_phone(phone);
    let phone = if let Some(rest) = phone.strip_prefix('0') {
        format!("254{}", rest)
    } else if let Some(rest) = phone.strip_prefix('+') {
        rest.to_string()
    } else {
        phone
    };

    let greeting = format!(
        "Hello {}, thank you for your inquiry about PrintHive services. \
         We'd love to discuss your project!",
        name
    );

    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(&greeting))
}

/// Raw fields collected from the multipart contact form.
#[derive(Debug, Default)]
pub struct InquiryForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub service_needed: Option<i32>,
    pub message: String,
    pub design_file: Option<DesignUpload>,
}

#[derive(Debug)]
pub struct DesignUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DesignUpload {
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// An inquiry that passed validation; phone is stored normalized.
#[derive(Debug)]
pub struct NewInquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: Option<String>,
    pub service_needed: Option<i32>,
    pub message: String,
}

/// Field-level validation errors, keyed by form field name.
#[derive(Debug, Default, Serialize)]
pub struct FormErrors {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl InquiryForm {
    /// Validate every field, collecting all errors rather than stopping at
    /// the first. The category reference is checked against the database by
    /// the caller. No record is created unless this returns Ok.
    pub fn validate(self) -> std::result::Result<(NewInquiry, Option<DesignUpload>), FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", "Name is required");
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.add("name", "Name must be at most 100 characters");
        }

        let phone = normalize_phone(self.phone.trim());
        if phone.is_empty() {
            errors.add("phone", "Phone number is required");
        } else if !is_valid_kenyan_mobile(&phone) {
            errors.add(
                "phone",
                "Enter a valid Kenyan phone number (e.g., 0712345678 or +254712345678)",
            );
        }

        let email = self.email.trim().to_string();
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&email) {
            errors.add("email", "Enter a valid email address");
        }

        let company = self.company.trim().to_string();
        if company.chars().count() > MAX_COMPANY_LEN {
            errors.add("company", "Company must be at most 150 characters");
        }

        let message = self.message.trim().to_string();
        if message.is_empty() {
            errors.add("message", "Message is required");
        }

        if let Some(upload) = &self.design_file {
            match upload.extension() {
                Some(ext) if ALLOWED_DESIGN_EXTENSIONS.contains(&ext.as_str()) => {}
                _ => errors.add(
                    "design_file",
                    "Upload a PDF, PNG, JPG, JPEG, AI, PSD or SVG file",
                ),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok((
            NewInquiry {
                name,
                phone,
                email,
                company: if company.is_empty() { None } else { Some(company) },
                service_needed: self.service_needed,
                message,
            },
            self.design_file,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            name: "Jane Wanjiku".to_string(),
            phone: "0712 345 678".to_string(),
            email: "jane@example.com".to_string(),
            company: String::new(),
            service_needed: None,
            message: "Need 200 branded mugs".to_string(),
            design_file: None,
        }
    }

    #[test]
    fn valid_form_normalizes_phone() {
        let (inquiry, file) = valid_form().validate().expect("form should validate");
        assert_eq!(inquiry.phone, "0712345678");
        assert_eq!(inquiry.company, None);
        assert!(file.is_none());
    }

    #[test]
    fn invalid_phone_reports_phone_field() {
        let mut form = valid_form();
        form.phone = "12345".to_string();

        let errors = form.validate().expect_err("phone should fail");
        assert!(errors.fields.contains_key("phone"));
        assert_eq!(errors.fields.len(), 1);
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let form = InquiryForm::default();

        let errors = form.validate().expect_err("empty form should fail");
        for field in ["name", "phone", "email", "message"] {
            assert!(errors.fields.contains_key(field), "missing error for {}", field);
        }
    }

    #[test]
    fn disallowed_design_file_extension_is_rejected() {
        let mut form = valid_form();
        form.design_file = Some(DesignUpload {
            filename: "virus.exe".to_string(),
            content_type: "application/octet-stream".to_string(),
            bytes: vec![0u8; 4],
        });

        let errors = form.validate().expect_err("exe should fail");
        assert!(errors.fields.contains_key("design_file"));
    }

    #[test]
    fn accepted_design_file_passes_through() {
        let mut form = valid_form();
        form.design_file = Some(DesignUpload {
            filename: "Logo.PDF".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0u8; 4],
        });

        let (_, file) = form.validate().expect("pdf should pass");
        assert_eq!(file.expect("file kept").filename, "Logo.PDF");
    }

    #[test]
    fn whatsapp_link_converts_local_prefix() {
        let link = whatsapp_link("0712345678", "Jane");
        assert!(link.starts_with("https://wa.me/254712345678?text="));
    }

    #[test]
    fn whatsapp_link_drops_plus_prefix() {
        let link = whatsapp_link("+254712345678", "Jane");
        assert!(link.starts_with("https://wa.me/254712345678?text="));
    }

    #[test]
    fn whatsapp_link_passes_other_numbers_through() {
        let link = whatsapp_link("254712345678", "Jane");
        assert!(link.starts_with("https://wa.me/254712345678?text="));
    }

    #[test]
    fn whatsapp_link_url_encodes_the_greeting() {
        let link = whatsapp_link("0712345678", "Jane");
        assert!(!link.contains(' '));
        assert!(link.contains("Hello%20Jane"));
    }
}
