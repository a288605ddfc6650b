use serde::Serialize;
use thiserror::Error;

use crate::models::SeatId;

// Все ошибки аллокации возвращаются вызывающему как значения и
// сериализуются в JSON для веб-слоя. Ни одна из них не фатальна.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum AllocationError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("seat {seat} is outside the configured hall")]
    OutOfRange { seat: SeatId },

    #[error("invalid start position: {detail}")]
    InvalidPosition { detail: String },

    #[error("not enough seats available: requested {requested}, only {available} remaining")]
    InsufficientSeats { requested: u32, available: u32 },

    #[error("seat {seat} was taken by a concurrent booking")]
    ConcurrentModification { seat: SeatId },
}

// Ошибки создания конфигурации зала (валидация как на форме setup)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("movie title is required")]
    EmptyTitle,

    #[error("number of rows must be between 1 and 26, got {got}")]
    InvalidRows { got: u32 },

    #[error("seats per row must be between 1 and 50, got {got}")]
    InvalidSeatsPerRow { got: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_errors_serialize_with_a_tag() {
        let err = AllocationError::InsufficientSeats {
            requested: 100,
            available: 25,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "insufficient_seats");
        assert_eq!(json["available"], 25);
    }

    #[test]
    fn messages_name_the_contested_seat() {
        let err = AllocationError::ConcurrentModification {
            seat: SeatId::new('B', 3),
        };
        assert!(err.to_string().contains("B3"));
    }
}
