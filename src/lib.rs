pub mod config;
pub mod errors;
pub mod models;
pub mod seat_map;
pub mod services;

use std::sync::Arc;

pub use errors::{AllocationError, ConfigError};
pub use models::{Movie, SeatId};
pub use seat_map::{RowChart, SeatChart, SeatMap, SeatStatus};
pub use services::allocation::{
    allocate, allocate_default, allocate_from_position, AllocationRequest, AllocationResult,
};
pub use services::seating::SeatingService;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub seating: SeatingService,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, ConfigError> {
        let movie = Movie::from_config(&config.hall)?;
        tracing::info!(
            "screen configured: '{}', {} rows x {} seats",
            movie.title,
            movie.rows,
            movie.seats_per_row
        );
        let seating = SeatingService::new(movie);
        Ok(Arc::new(Self { seating, config }))
    }
}
