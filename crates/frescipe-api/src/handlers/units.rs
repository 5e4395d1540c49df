//! Unit conversion handler.

use axum::Json;

use frescipe_entity::ingredient::convert;

use crate::dto::request::ConvertRequest;
use crate::dto::response::{ApiResponse, ConvertResponse};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;

/// POST /api/units/convert
pub async fn convert_units(
    ValidatedJson(req): ValidatedJson<ConvertRequest>,
) -> Result<Json<ApiResponse<ConvertResponse>>, ApiError> {
    let result = convert(req.amount, req.from, req.to)?;
    Ok(Json(ApiResponse::ok(ConvertResponse {
        amount: req.amount,
        from: req.from,
        to: req.to,
        result,
    })))
}
