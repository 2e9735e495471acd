use axum::{extract::Request, middleware::Next, response::Response};

use crate::{error::AppError, models::StaffRole, utils::jwt};

fn bearer_claims(req: &Request) -> Result<jwt::Claims, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid token format".to_string()))?;

    jwt::verify_token(token)
}

/// Any authenticated staff account (lead handling).
pub async fn staff_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    let claims = bearer_claims(&req)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Admin-only surface (catalog, pricing and site configuration).
pub async fn admin_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    let claims = bearer_claims(&req)?;

    if claims.role != StaffRole::Admin {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
