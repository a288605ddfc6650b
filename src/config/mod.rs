use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Настройки зала: название фильма и размеры сетки мест
#[derive(Debug, Clone, Deserialize)]
pub struct HallConfig {
    pub title: String,
    pub rows: u32,
    pub seats_per_row: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_seating=debug".to_string()),
            },
            hall: HallConfig {
                title: env::var("MOVIE_TITLE").unwrap_or_else(|_| "Untitled".to_string()),
                rows: env::var("HALL_ROWS")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .expect("HALL_ROWS must be a valid number"),
                seats_per_row: env::var("HALL_SEATS_PER_ROW")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("HALL_SEATS_PER_ROW must be a valid number"),
            },
        }
    }
}
