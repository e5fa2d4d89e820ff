//! Patient-facing cabin browsing and availability checking.

use axum::Json;
use axum::extract::{Path, Query, State};

use medistay_core::types::CabinId;
use medistay_core::types::pagination::PageResponse;

use crate::dto::request::AvailabilityQuery;
use crate::dto::response::{ApiResponse, AvailabilityResponse, CabinResponse, map_page};
use crate::error::ApiResult;
use crate::extractors::auth::AuthUser;
use crate::extractors::pagination::PaginationParams;
use crate::state::AppState;

/// GET /api/cabins
///
/// Lists active cabins only; inactive cabins are invisible to patients.
pub async fn list_cabins(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<CabinResponse>>>> {
    let page = params.into_page_request();
    let cabins = state.cabin_service.list_active(&page).await?;
    Ok(Json(ApiResponse::ok(map_page(cabins))))
}

/// GET /api/cabins/{id}
pub async fn get_cabin(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<CabinId>,
) -> ApiResult<Json<ApiResponse<CabinResponse>>> {
    let cabin = state.cabin_service.get_cabin(id).await?;
    Ok(Json(ApiResponse::ok(cabin.into())))
}

/// GET /api/cabins/{id}/availability?check_in=YYYY-MM-DD&check_out=YYYY-MM-DD
///
/// An unavailable cabin is a 200 with `available: false`, not an error.
pub async fn check_availability(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<CabinId>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<Json<ApiResponse<AvailabilityResponse>>> {
    let availability = state
        .availability_service
        .check_availability(id, query.check_in, query.check_out)
        .await?;
    Ok(Json(ApiResponse::ok(availability.into())))
}
