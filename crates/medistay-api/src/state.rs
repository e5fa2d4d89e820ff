//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use medistay_core::config::AppConfig;
use medistay_core::traits::SystemClock;
use medistay_database::repositories::{
    AvailabilityPeriodRepository, BookingRepository, CabinRepository,
};
use medistay_service::availability::AvailabilityService;
use medistay_service::booking::BookingService;
use medistay_service::cabin::CabinService;

use crate::extractors::auth::JwtVerifier;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token verifier.
    pub jwt_verifier: Arc<JwtVerifier>,
    /// Availability checking service.
    pub availability_service: Arc<AvailabilityService>,
    /// Booking service.
    pub booking_service: Arc<BookingService>,
    /// Cabin administration service.
    pub cabin_service: Arc<CabinService>,
}

impl AppState {
    /// Wire repositories and services from configuration and a connected
    /// pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let cabin_repo = Arc::new(CabinRepository::new(db_pool.clone()));
        let period_repo = Arc::new(AvailabilityPeriodRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));

        let availability_service = Arc::new(AvailabilityService::new(
            cabin_repo.clone(),
            period_repo.clone(),
            booking_repo.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(
            cabin_repo.clone(),
            booking_repo.clone(),
            availability_service.clone(),
            Arc::new(SystemClock),
        ));
        let cabin_service = Arc::new(CabinService::new(cabin_repo, period_repo, booking_repo));

        let jwt_verifier = Arc::new(JwtVerifier::new(&config.auth));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_verifier,
            availability_service,
            booking_service,
            cabin_service,
        }
    }
}
