//! Admin cabin catalogue management.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use medistay_core::error::AppError;
use medistay_core::types::pagination::PageResponse;
use medistay_core::types::{CabinId, Money};
use medistay_entity::cabin::{CreateCabin, UpdateCabin};

use crate::dto::request::{CreateCabinRequest, UpdateCabinRequest};
use crate::dto::response::{ApiResponse, CabinResponse, MessageResponse, map_page};
use crate::error::ApiResult;
use crate::extractors::auth::AdminUser;
use crate::extractors::pagination::PaginationParams;
use crate::state::AppState;

/// GET /api/admin/cabins
///
/// Includes inactive cabins, unlike the patient-facing listing.
pub async fn list_cabins(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<CabinResponse>>>> {
    let page = params.into_page_request();
    let cabins = state.cabin_service.list_all(&page).await?;
    Ok(Json(ApiResponse::ok(map_page(cabins))))
}

/// POST /api/admin/cabins
pub async fn create_cabin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<CreateCabinRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<CabinResponse>>)> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let cabin = state
        .cabin_service
        .create_cabin(CreateCabin {
            name: body.name.clone(),
            description: body.description.clone(),
            capacity: body.capacity,
            price_per_night: body.price(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(cabin.into()))))
}

/// PUT /api/admin/cabins/{id}
pub async fn update_cabin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<CabinId>,
    Json(body): Json<UpdateCabinRequest>,
) -> ApiResult<Json<ApiResponse<CabinResponse>>> {
    let cabin = state
        .cabin_service
        .update_cabin(
            id,
            UpdateCabin {
                name: body.name,
                description: body.description,
                capacity: body.capacity,
                price_per_night: body.price_per_night_cents.map(Money::from_cents),
                is_active: body.is_active,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(cabin.into())))
}

/// DELETE /api/admin/cabins/{id}
///
/// Soft delete: the cabin is deactivated, never removed. Refused with 409
/// while date-holding bookings reference it.
pub async fn deactivate_cabin(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<CabinId>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.cabin_service.deactivate_cabin(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Cabin deactivated".to_string(),
    })))
}
