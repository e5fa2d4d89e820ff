//! Admin availability-window management.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use medistay_core::types::{CabinId, PeriodId};
use medistay_entity::availability::{CreateAvailabilityPeriod, UpdateAvailabilityPeriod};

use crate::dto::request::{CreatePeriodRequest, UpdatePeriodRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PeriodResponse};
use crate::error::ApiResult;
use crate::extractors::auth::AdminUser;
use crate::state::AppState;

/// GET /api/admin/cabins/{id}/periods
pub async fn list_periods(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(cabin_id): Path<CabinId>,
) -> ApiResult<Json<ApiResponse<Vec<PeriodResponse>>>> {
    let periods = state.cabin_service.list_periods(cabin_id).await?;
    Ok(Json(ApiResponse::ok(
        periods.into_iter().map(PeriodResponse::from).collect(),
    )))
}

/// POST /api/admin/cabins/{id}/periods
pub async fn create_period(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(cabin_id): Path<CabinId>,
    Json(body): Json<CreatePeriodRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<PeriodResponse>>)> {
    let period = state
        .cabin_service
        .create_period(CreateAvailabilityPeriod {
            cabin_id,
            start_date: body.start_date,
            end_date: body.end_date,
            reason: body.reason,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(period.into()))))
}

/// PUT /api/admin/periods/{id}
pub async fn update_period(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<PeriodId>,
    Json(body): Json<UpdatePeriodRequest>,
) -> ApiResult<Json<ApiResponse<PeriodResponse>>> {
    let period = state
        .cabin_service
        .update_period(
            id,
            UpdateAvailabilityPeriod {
                start_date: body.start_date,
                end_date: body.end_date,
                is_active: body.is_active,
                reason: body.reason,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(period.into())))
}

/// DELETE /api/admin/periods/{id}
pub async fn delete_period(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<PeriodId>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.cabin_service.delete_period(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Availability period deleted".to_string(),
    })))
}
