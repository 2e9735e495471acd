use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{DesignUpload, FormErrors, InquiryForm, InquirySubmitAccepted, InquirySubmitRejected},
    queries::{inquiry_queries, quote_queries, service_queries},
    services::{email_service, storage_service},
    AppState,
};

use super::pages;

/// Raw multipart fields as submitted; service_needed stays a string until
/// it is checked against the catalog.
#[derive(Debug, Default)]
struct RawInquiryForm {
    name: String,
    phone: String,
    email: String,
    company: String,
    service_needed: String,
    message: String,
    design_file: Option<DesignUpload>,
}

async fn read_form(multipart: &mut Multipart) -> Result<RawInquiryForm> {
    let mut form = RawInquiryForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "design_file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if filename.is_empty() {
                    // No file picked; browsers still send the empty part.
                    continue;
                }

                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?;

                form.design_file = Some(DesignUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?;

                match name.as_str() {
                    "name" => form.name = value,
                    "phone" => form.phone = value,
                    "email" => form.email = value,
                    "company" => form.company = value,
                    "service_needed" => form.service_needed = value,
                    "message" => form.message = value,
                    _ => {}
                }
            }
        }
    }

    Ok(form)
}

/// Contact form submission: validate, persist the inquiry + quote shell,
/// attach the design file, fire notifications, tell the frontend where to
/// redirect. Validation failure creates nothing and returns field errors
/// with a freshly recomputed page context.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let raw = read_form(&mut multipart).await?;

    let mut errors = FormErrors::default();

    let service_needed = {
        let value = raw.service_needed.trim();
        if value.is_empty() {
            None
        } else {
            match value.parse::<i32>() {
                Ok(id) => {
                    if service_queries::exists_active(&state.db, id).await? {
                        Some(id)
                    } else {
                        errors.add("service_needed", "Select a valid service");
                        None
                    }
                }
                Err(_) => {
                    errors.add("service_needed", "Select a valid service");
                    None
                }
            }
        }
    };

    let form = InquiryForm {
        name: raw.name,
        phone: raw.phone,
        email: raw.email,
        company: raw.company,
        service_needed,
        message: raw.message,
        design_file: raw.design_file,
    };

    let validated = match form.validate() {
        Ok(validated) if errors.is_empty() => Some(validated),
        Ok(_) => None,
        Err(field_errors) => {
            for (field, messages) in field_errors.fields {
                for message in messages {
                    errors.add(&field, message);
                }
            }
            None
        }
    };

    let Some((new_inquiry, design_file)) = validated else {
        let context = pages::index_context(&state).await?;
        return Ok(Json(InquirySubmitRejected {
            success: false,
            errors,
            context,
        })
        .into_response());
    };

    let (inquiry, quote) = inquiry_queries::create_with_quote(&state.db, &new_inquiry).await?;

    tracing::info!("New inquiry {} from {}", inquiry.id, inquiry.name);

    // The inquiry exists from here on; losing the attachment is logged but
    // never undoes the lead.
    if let Some(upload) = design_file {
        let extension = upload.extension().unwrap_or_else(|| "bin".to_string());
        let key = storage_service::object_key(storage_service::SPECIFICATIONS_PREFIX, &extension);

        match storage_service::upload_object(
            &state.s3,
            &state.uploads_bucket,
            &key,
            &upload.content_type,
            upload.bytes,
        )
        .await
        {
            Ok(()) => {
                quote_queries::attach_specifications_file(&state.db, quote.id, &key).await?;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to store design file for inquiry {}: {}",
                    inquiry.id,
                    e
                );
            }
        }
    }

    let service_name = match inquiry.service_needed {
        Some(id) => service_queries::find_by_id(&state.db, id)
            .await?
            .map(|s| s.name),
        None => None,
    };

    email_service::dispatch_inquiry_notifications(
        state.ses.clone(),
        state.sender_email.clone(),
        state.leads_email.clone(),
        state.frontend_url.clone(),
        inquiry,
        service_name,
    );

    Ok(Json(InquirySubmitAccepted {
        success: true,
        redirect: "/inquiry/success".to_string(),
    })
    .into_response())
}
