use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::HallConfig;
use crate::errors::ConfigError;
use crate::models::seat::row_letter;

pub const MAX_ROWS: u32 = 26;
pub const MAX_SEATS_PER_ROW: u32 = 50;

// Активная конфигурация зала: один фильм, одна сетка мест
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub rows: u32,
    pub seats_per_row: u32,
    pub created_at: NaiveDateTime,
}

impl Movie {
    pub fn new(title: &str, rows: u32, seats_per_row: u32) -> Result<Self, ConfigError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if rows < 1 || rows > MAX_ROWS {
            return Err(ConfigError::InvalidRows { got: rows });
        }
        if seats_per_row < 1 || seats_per_row > MAX_SEATS_PER_ROW {
            return Err(ConfigError::InvalidSeatsPerRow { got: seats_per_row });
        }

        Ok(Movie {
            title: title.to_string(),
            rows,
            seats_per_row,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn from_config(config: &HallConfig) -> Result<Self, ConfigError> {
        Movie::new(&config.title, config.rows, config.seats_per_row)
    }

    pub fn total_seats(&self) -> u32 {
        self.rows * self.seats_per_row
    }

    // Буква последнего ряда - самого дальнего от экрана
    pub fn back_row(&self) -> char {
        row_letter(self.rows - 1)
    }
}
