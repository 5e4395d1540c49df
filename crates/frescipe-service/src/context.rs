//! Request context carrying the calling user.

use serde::{Deserialize, Serialize};

use frescipe_core::types::UserId;

/// Who is acting in the current request.
///
/// Built by the transport layer and passed into every service method so
/// that each operation is scoped to the caller's items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The calling user.
    pub user_id: UserId,
    /// Correlation ID from the transport, if any.
    pub request_id: Option<String>,
}

impl RequestContext {
    /// Context for `user_id` without a correlation ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            request_id: None,
        }
    }

    /// Attach a correlation ID.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
