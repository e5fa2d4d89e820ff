//! Admin booking oversight and lifecycle progression.

use axum::Json;
use axum::extract::{Path, Query, State};

use medistay_core::types::BookingId;
use medistay_core::types::pagination::{PageRequest, PageResponse};
use medistay_entity::booking::BookingStatus;

use crate::dto::request::PaymentStatusRequest;
use crate::dto::response::{ApiResponse, BookingResponse, map_page};
use crate::error::ApiResult;
use crate::extractors::auth::AdminUser;
use crate::state::AppState;

/// Pagination plus the optional status filter for the admin listing.
#[derive(Debug, serde::Deserialize)]
pub struct AdminBookingQuery {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Optional status filter.
    pub status: Option<BookingStatus>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

/// GET /api/admin/bookings?status=
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<AdminBookingQuery>,
) -> ApiResult<Json<ApiResponse<PageResponse<BookingResponse>>>> {
    let page = PageRequest::new(query.page, query.per_page);
    let bookings = state
        .booking_service
        .list_bookings(query.status, &page)
        .await?;
    Ok(Json(ApiResponse::ok(map_page(bookings))))
}

/// GET /api/admin/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<BookingId>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state.booking_service.get_booking(&admin, id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// POST /api/admin/bookings/{id}/confirm
pub async fn confirm_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<BookingId>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state.booking_service.confirm_booking(id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// POST /api/admin/bookings/{id}/check-in
pub async fn check_in_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<BookingId>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state.booking_service.check_in_booking(id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// POST /api/admin/bookings/{id}/check-out
pub async fn check_out_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<BookingId>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state.booking_service.check_out_booking(id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// POST /api/admin/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<BookingId>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state.booking_service.cancel_booking(&admin, id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// PUT /api/admin/bookings/{id}/payment
pub async fn set_payment_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<BookingId>,
    Json(body): Json<PaymentStatusRequest>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state
        .booking_service
        .set_payment_status(id, body.payment_status)
        .await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}
