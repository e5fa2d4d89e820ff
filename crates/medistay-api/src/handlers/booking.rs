//! Patient-facing booking handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use medistay_core::error::AppError;
use medistay_core::types::BookingId;
use medistay_core::types::pagination::PageResponse;
use medistay_service::booking::CreateBookingRequest as CreateBookingCommand;

use crate::dto::request::CreateBookingRequest;
use crate::dto::response::{ApiResponse, BookingResponse, map_page};
use crate::error::ApiResult;
use crate::extractors::auth::AuthUser;
use crate::extractors::pagination::PaginationParams;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<BookingResponse>>)> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let command = CreateBookingCommand {
        cabin_id: body.cabin_id,
        check_in_date: body.check_in_date,
        check_out_date: body.check_out_date,
        number_of_guests: body.number_of_guests,
        guest_name: body.guest_name,
        guest_phone: body.guest_phone,
        guest_email: body.guest_email,
        notes: body.notes,
    };

    let booking = state.booking_service.create_booking(&user, command).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booking.into()))))
}

/// GET /api/bookings
///
/// The calling patient's bookings, newest first.
pub async fn list_my_bookings(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<BookingResponse>>>> {
    let page = params.into_page_request();
    let bookings = state.booking_service.list_my_bookings(&user, &page).await?;
    Ok(Json(ApiResponse::ok(map_page(bookings))))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<BookingId>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state.booking_service.get_booking(&user, id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}

/// POST /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<BookingId>,
) -> ApiResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state.booking_service.cancel_booking(&user, id).await?;
    Ok(Json(ApiResponse::ok(booking.into())))
}
