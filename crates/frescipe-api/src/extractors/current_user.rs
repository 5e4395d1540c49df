//! Caller identity extractor.
//!
//! Authentication happens upstream; the gateway forwards the caller's
//! user ID in the `X-User-Id` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use frescipe_core::error::AppError;

use crate::error::ApiError;
use frescipe_core::types::UserId;
use frescipe_service::RequestContext;

/// Header carrying the authenticated user ID.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Optional correlation header.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The identified caller of the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl CurrentUser {
    /// Request context for service calls.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing X-User-Id header"))?;

        let user_id: UserId = raw
            .trim()
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid X-User-Id header"))?;

        let mut ctx = RequestContext::new(user_id);
        if let Some(request_id) = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            ctx = ctx.with_request_id(request_id);
        }

        Ok(Self(ctx))
    }
}
