use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use std::time::Duration;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Storage prefixes admin uploads may target.
pub const UPLOAD_FOLDERS: [&str; 3] = ["products", "carousel", "site"];

/// Prefix for customer design files attached to quotes.
pub const SPECIFICATIONS_PREFIX: &str = "specifications";

/// Generate a fresh object key under a folder prefix.
pub fn object_key(folder: &str, extension: &str) -> String {
    format!("{}/{}.{}", folder, Uuid::new_v4(), extension)
}

/// Public URL for a stored object.
pub fn public_url(assets_url: &str, key: &str) -> String {
    format!("{}/{}", assets_url.trim_end_matches('/'), key)
}

/// Upload bytes received by the server (inquiry design files).
pub async fn upload_object(
    client: &S3Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<()> {
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .body(ByteStream::from(bytes))
        .send()
        .await
        .map_err(|e| AppError::InternalError(format!("Upload failed for {}: {:?}", key, e)))?;

    Ok(())
}

/// Presigned PUT URL so the admin frontend uploads images directly.
pub async fn put_object_url(
    client: &S3Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    expires_in: u64,
) -> Result<String> {
    let expires_in = Duration::from_secs(expires_in);
    let presigning_config = PresigningConfig::expires_in(expires_in)
        .map_err(|e| AppError::InternalError(format!("Invalid presign expiry: {}", e)))?;

    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .presigned(presigning_config)
        .await
        .map_err(|e| AppError::InternalError(format!("Presign failed for {}: {:?}", key, e)))?;

    Ok(presigned_request.uri().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_keys_carry_folder_and_extension() {
        let key = object_key("specifications", "pdf");
        assert!(key.starts_with("specifications/"));
        assert!(key.ends_with(".pdf"));
    }

    #[test]
    fn public_urls_join_cleanly() {
        assert_eq!(
            public_url("https://assets.example.com/", "products/a.png"),
            "https://assets.example.com/products/a.png"
        );
        assert_eq!(
            public_url("https://assets.example.com", "products/a.png"),
            "https://assets.example.com/products/a.png"
        );
    }
}
