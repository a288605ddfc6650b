use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AllocationError;
use crate::models::{Movie, SeatId};
use crate::seat_map::{RowChart, SeatMap};
use crate::services::allocation::{self, AllocationResult};

// Текущий экран: фильм и его сетка мест, заменяются только вместе
#[derive(Debug)]
struct Screen {
    movie: Movie,
    map: SeatMap,
}

// Владелец живой сетки мест. Предложения считаются под read-блокировкой
// и могут идти параллельно; фиксация, отмена и сброс сериализуются
// через write-блокировку, так что две брони не заберут одно место.
#[derive(Clone)]
pub struct SeatingService {
    screen: Arc<RwLock<Screen>>,
}

impl SeatingService {
    pub fn new(movie: Movie) -> Self {
        let map = SeatMap::new(&movie);
        SeatingService {
            screen: Arc::new(RwLock::new(Screen { movie, map })),
        }
    }

    pub async fn movie(&self) -> Movie {
        self.screen.read().await.movie.clone()
    }

    pub async fn available(&self) -> u32 {
        self.screen.read().await.map.total_free()
    }

    // Чистое предложение: состояние не меняется, снимок мест на момент
    // вызова. Повторный вызов без фиксации вернет тот же результат.
    pub async fn propose_default(&self, count: u32) -> AllocationResult {
        let screen = self.screen.read().await;
        allocation::allocate_default(&screen.map, count)
    }

    pub async fn propose_from_position(&self, start: SeatId, count: u32) -> AllocationResult {
        let screen = self.screen.read().await;
        allocation::allocate_from_position(&screen.map, start, count)
    }

    // Фиксация подтвержденной брони. Под write-блокировкой все места
    // перепроверяются; если конкурирующая бронь успела занять хотя бы
    // одно - фиксация отклоняется целиком, частичных изменений нет.
    pub async fn confirm(&self, seats: &[SeatId]) -> Result<(), AllocationError> {
        let mut screen = self.screen.write().await;
        match screen.map.apply(seats) {
            Ok(()) => {
                info!("booking confirmed: {} seats", seats.len());
                Ok(())
            }
            Err(err @ AllocationError::ConcurrentModification { .. }) => {
                warn!("booking rejected: {}", err);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    // Отмена брони освобождает ее места
    pub async fn release(&self, seats: &[SeatId]) -> Result<(), AllocationError> {
        let mut screen = self.screen.write().await;
        screen.map.release(seats)?;
        info!("booking cancelled: {} seats released", seats.len());
        Ok(())
    }

    // Полный сброс занятости текущей конфигурации
    pub async fn reset(&self) {
        let mut screen = self.screen.write().await;
        screen.map.reset();
        info!("🧹 seat map reset, {} seats free", screen.map.total_free());
    }

    // Смена фильма заменяет конфигурацию целиком: новая сетка, все
    // места свободны
    pub async fn replace(&self, movie: Movie) {
        let mut screen = self.screen.write().await;
        info!("screen replaced: '{}' -> '{}'", screen.movie.title, movie.title);
        screen.map = SeatMap::new(&movie);
        screen.movie = movie;
    }

    pub async fn chart(&self, selected: &[SeatId]) -> Vec<RowChart> {
        self.screen.read().await.map.chart(selected)
    }
}
