use serde::Serialize;

use crate::errors::AllocationError;
use crate::models::seat::row_letter;
use crate::models::{Movie, SeatId};

// Состояние сетки мест текущей конфигурации. Сама сетка никогда не
// меняет размеров: смена фильма создает новый SeatMap целиком.
#[derive(Debug, Clone)]
pub struct SeatMap {
    rows: u32,
    seats_per_row: u32,
    occupied: Vec<bool>,
}

// Строка схемы зала для отображения веб-слоем
#[derive(Debug, Clone, Serialize)]
pub struct RowChart {
    pub row: char,
    pub seats: Vec<SeatChart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatChart {
    pub label: String,
    pub number: u32,
    pub status: SeatStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Selected,
    Booked,
}

impl SeatMap {
    // Размеры берутся из уже проверенной конфигурации, все места свободны
    pub fn new(movie: &Movie) -> Self {
        SeatMap {
            rows: movie.rows,
            seats_per_row: movie.seats_per_row,
            occupied: vec![false; (movie.rows * movie.seats_per_row) as usize],
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    pub fn capacity(&self) -> u32 {
        self.rows * self.seats_per_row
    }

    // Линейный индекс места; OutOfRange если место вне сетки
    fn index(&self, seat: SeatId) -> Result<usize, AllocationError> {
        if !seat.row.is_ascii_uppercase() || seat.number < 1 || seat.number > self.seats_per_row {
            return Err(AllocationError::OutOfRange { seat });
        }
        let row_index = seat.row_index();
        if row_index >= self.rows {
            return Err(AllocationError::OutOfRange { seat });
        }
        Ok((row_index * self.seats_per_row + seat.number - 1) as usize)
    }

    fn row_start(&self, row_index: u32) -> usize {
        (row_index * self.seats_per_row) as usize
    }

    pub fn is_free(&self, seat: SeatId) -> Result<bool, AllocationError> {
        Ok(!self.occupied[self.index(seat)?])
    }

    pub fn count_free_in_row(&self, row: char) -> Result<u32, AllocationError> {
        Ok(self.free_numbers_in_row(row)?.len() as u32)
    }

    // Номера свободных мест ряда по возрастанию
    pub fn free_numbers_in_row(&self, row: char) -> Result<Vec<u32>, AllocationError> {
        // Проверяем границы через первое место ряда
        let start = self.index(SeatId::new(row, 1))?;
        let free = self.occupied[start..start + self.seats_per_row as usize]
            .iter()
            .enumerate()
            .filter(|(_, taken)| !**taken)
            .map(|(offset, _)| offset as u32 + 1)
            .collect();
        Ok(free)
    }

    // Ряды от самого дальнего от экрана к ближнему: H, G, ..., A
    pub fn rows_furthest_first(&self) -> impl Iterator<Item = char> {
        (0..self.rows).rev().map(row_letter)
    }

    pub fn total_free(&self) -> u32 {
        self.occupied.iter().filter(|taken| !**taken).count() as u32
    }

    // Фиксация брони: сначала проверяем ВСЕ места, потом помечаем.
    // Если хоть одно место уже занято - вся фиксация отклоняется.
    pub fn apply(&mut self, seats: &[SeatId]) -> Result<(), AllocationError> {
        let mut indices = Vec::with_capacity(seats.len());
        for &seat in seats {
            let idx = self.index(seat)?;
            if self.occupied[idx] {
                return Err(AllocationError::ConcurrentModification { seat });
            }
            indices.push(idx);
        }
        for idx in indices {
            self.occupied[idx] = true;
        }
        Ok(())
    }

    // Освобождение мест отмененной брони
    pub fn release(&mut self, seats: &[SeatId]) -> Result<(), AllocationError> {
        let mut indices = Vec::with_capacity(seats.len());
        for &seat in seats {
            indices.push(self.index(seat)?);
        }
        for idx in indices {
            self.occupied[idx] = false;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.occupied.fill(false);
    }

    // Схема зала; места из selected помечаются как выбранные,
    // чтобы показать еще не подтвержденное предложение
    pub fn chart(&self, selected: &[SeatId]) -> Vec<RowChart> {
        (0..self.rows)
            .map(|row_index| {
                let row = row_letter(row_index);
                let start = self.row_start(row_index);
                let seats = (1..=self.seats_per_row)
                    .map(|number| {
                        let seat = SeatId::new(row, number);
                        let status = if selected.contains(&seat) {
                            SeatStatus::Selected
                        } else if self.occupied[start + number as usize - 1] {
                            SeatStatus::Booked
                        } else {
                            SeatStatus::Available
                        };
                        SeatChart {
                            label: seat.to_string(),
                            number,
                            status,
                        }
                    })
                    .collect();
                RowChart { row, seats }
            })
            .collect()
    }
}
