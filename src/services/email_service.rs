use aws_sdk_sesv2::Client as SesClient;

use crate::{
    error::{AppError, Result},
    models::CustomerInquiry,
};

/// Customer acknowledgments echo at most this many characters of the message.
const ACK_MESSAGE_LIMIT: usize = 200;

/// Fire both post-inquiry notifications from a detached task. Delivery is
/// best-effort: a failed send is logged and never reaches the submitting
/// customer, and the stored inquiry is never touched.
pub fn dispatch_inquiry_notifications(
    ses: SesClient,
    sender_email: String,
    leads_email: String,
    frontend_url: String,
    inquiry: CustomerInquiry,
    service_name: Option<String>,
) {
    tokio::spawn(async move {
        let subject = format!("New Inquiry from {}", inquiry.name);
        let body = admin_alert_body(&inquiry, service_name.as_deref(), &frontend_url);

        if let Err(e) = send_plain_email(&ses, &sender_email, &leads_email, &subject, &body).await {
            tracing::warn!(
                "Failed to send new-lead alert for inquiry {}: {}",
                inquiry.id,
                e
            );
        }

        let body = customer_ack_body(&inquiry, service_name.as_deref());

        if let Err(e) = send_plain_email(
            &ses,
            &sender_email,
            &inquiry.email,
            "Thank you for contacting PrintHive Kenya!",
            &body,
        )
        .await
        {
            tracing::warn!(
                "Failed to send acknowledgment for inquiry {}: {}",
                inquiry.id,
                e
            );
        }
    });
}

/// New-lead alert for the business inbox.
pub fn admin_alert_body(
    inquiry: &CustomerInquiry,
    service_name: Option<&str>,
    frontend_url: &str,
) -> String {
    format!(
        "New inquiry received on PrintHive Kenya:\n\
         \n\
         Name: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Company: {}\n\
         Service: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         ---\n\
         View in admin: {}/admin/inquiries/{}\n\
         WhatsApp: {}\n",
        inquiry.name,
        inquiry.phone,
        inquiry.email,
        inquiry.company.as_deref().unwrap_or("N/A"),
        service_name.unwrap_or("Not specified"),
        inquiry.message,
        frontend_url,
        inquiry.id,
        inquiry.whatsapp_link(),
    )
}

/// Auto-reply acknowledging the customer's inquiry.
pub fn customer_ack_body(inquiry: &CustomerInquiry, service_name: Option<&str>) -> String {
    format!(
        "Dear {},\n\
         \n\
         Thank you for reaching out to PrintHive Kenya! We have received your \
         inquiry and our team will get back to you within 24 hours.\n\
         \n\
         Your inquiry details:\n\
         - Service: {}\n\
         - Message: {}\n\
         \n\
         If you need immediate assistance, please call us or message us on \
         WhatsApp.\n\
         \n\
         Best regards,\n\
         The PrintHive Kenya Team\n",
        inquiry.name,
        service_name.unwrap_or("General inquiry"),
        truncate_message(&inquiry.message, ACK_MESSAGE_LIMIT),
    )
}

/// Cap the echoed message, marking the cut with an ellipsis.
pub fn truncate_message(message: &str, limit: usize) -> String {
    if message.chars().count() > limit {
        let truncated: String = message.chars().take(limit).collect();
        format!("{}...", truncated)
    } else {
        message.to_string()
    }
}

pub async fn send_plain_email(
    ses_client: &SesClient,
    sender_email: &str,
    recipient: &str,
    subject: &str,
    body: &str,
) -> Result<()> {
    let destination = aws_sdk_sesv2::types::Destination::builder()
        .to_addresses(recipient)
        .build();

    let subject = aws_sdk_sesv2::types::Content::builder()
        .data(subject)
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build subject: {}", e)))?;

    let text_body = aws_sdk_sesv2::types::Content::builder()
        .data(body)
        .charset("UTF-8")
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build body: {}", e)))?;

    let body = aws_sdk_sesv2::types::Body::builder().text(text_body).build();

    let message = aws_sdk_sesv2::types::Message::builder()
        .subject(subject)
        .body(body)
        .build();

    let content = aws_sdk_sesv2::types::EmailContent::builder()
        .simple(message)
        .build();

    ses_client
        .send_email()
        .from_email_address(sender_email)
        .destination(destination)
        .content(content)
        .send()
        .await
        .map_err(|e| AppError::InternalError(format!("Email send failed: {:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InquiryStatus;
    use chrono::Utc;

    fn inquiry(message: &str) -> CustomerInquiry {
        CustomerInquiry {
            id: 7,
            name: "Jane Wanjiku".to_string(),
            phone: "0712345678".to_string(),
            email: "jane@example.com".to_string(),
            company: None,
            service_needed: None,
            message: message.to_string(),
            submitted_on: Utc::now(),
            status: InquiryStatus::New,
        }
    }

    #[test]
    fn short_messages_are_echoed_verbatim() {
        assert_eq!(truncate_message("hello", 200), "hello");

        let exactly_200 = "a".repeat(200);
        assert_eq!(truncate_message(&exactly_200, 200), exactly_200);
    }

    #[test]
    fn long_messages_are_cut_with_ellipsis() {
        let long = "b".repeat(201);
        let truncated = truncate_message(&long, 200);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
        assert!(truncated.starts_with(&"b".repeat(200)));
    }

    #[test]
    fn ack_body_truncates_the_echoed_message() {
        let body = customer_ack_body(&inquiry(&"x".repeat(300)), None);
        assert!(body.contains(&format!("{}...", "x".repeat(200))));
        assert!(!body.contains(&"x".repeat(201)));
        assert!(body.contains("General inquiry"));
    }

    #[test]
    fn alert_body_carries_contact_details_and_whatsapp_link() {
        let body = admin_alert_body(
            &inquiry("Need 200 mugs"),
            Some("Branded Merchandise"),
            "https://printhive.co.ke",
        );
        assert!(body.contains("Jane Wanjiku"));
        assert!(body.contains("0712345678"));
        assert!(body.contains("Branded Merchandise"));
        assert!(body.contains("https://wa.me/254712345678?text="));
        assert!(body.contains("https://printhive.co.ke/admin/inquiries/7"));
        assert!(body.contains("Company: N/A"));
    }
}
