use serde::Deserialize;
use tracing::debug;

use crate::errors::AllocationError;
use crate::models::seat::row_letter;
use crate::models::SeatId;
use crate::seat_map::SeatMap;

// Итог подбора: упорядоченный список мест или типизированный отказ
pub type AllocationResult = Result<Vec<SeatId>, AllocationError>;

// Запрос на подбор: количество билетов и необязательное стартовое
// место. Без стартового места работает автоматический подбор.
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationRequest {
    pub count: u32,
    #[serde(default)]
    pub start_seat: Option<SeatId>,
}

/// Единая точка входа для обеих политик подбора
pub fn allocate(map: &SeatMap, request: &AllocationRequest) -> AllocationResult {
    match request.start_seat {
        Some(start) => allocate_from_position(map, start, request.count),
        None => allocate_default(map, request.count),
    }
}

/// Автоматический подбор мест: начинаем с самого дальнего от экрана
/// ряда, в каждом ряду центрируем блок, при нехватке переливаемся в
/// следующий ряд ближе к экрану.
pub fn allocate_default(map: &SeatMap, count: u32) -> AllocationResult {
    validate_request(map, count)?;

    let mut picked: Vec<SeatId> = Vec::with_capacity(count as usize);
    let mut remaining = count;

    for row in map.rows_furthest_first() {
        if remaining == 0 {
            break;
        }
        let taken = scan_row(map, row, remaining)?;
        if taken.is_empty() {
            continue;
        }
        remaining -= taken.len() as u32;
        picked.extend(taken.into_iter().map(|number| SeatId::new(row, number)));
    }

    if remaining > 0 {
        // Предварительная проверка количества делает эту ветку
        // недостижимой, но контракт держим честным
        return Err(AllocationError::InsufficientSeats {
            requested: count,
            available: map.total_free(),
        });
    }

    debug!(count, seats = %labels(&picked), "default allocation");
    Ok(picked)
}

/// Подбор от выбранного места: заполняем ряд вправо от него, остаток
/// переливается в ряды ближе к экрану по автоматическим правилам.
pub fn allocate_from_position(map: &SeatMap, start: SeatId, count: u32) -> AllocationResult {
    validate_request(map, count)?;

    match map.is_free(start) {
        Ok(true) => {}
        Ok(false) => {
            return Err(AllocationError::InvalidPosition {
                detail: format!("seat {} is already taken", start),
            });
        }
        Err(AllocationError::OutOfRange { seat }) => {
            return Err(AllocationError::InvalidPosition {
                detail: format!("seat {} does not exist in this hall", seat),
            });
        }
        Err(other) => return Err(other),
    }

    let mut picked: Vec<SeatId> = Vec::with_capacity(count as usize);
    let mut remaining = count;

    // Первый ряд: только свободные места правее выбранного, занятые
    // пропускаем и продолжаем до конца ряда
    for number in map
        .free_numbers_in_row(start.row)?
        .into_iter()
        .filter(|&number| number >= start.number)
        .take(remaining as usize)
    {
        picked.push(SeatId::new(start.row, number));
    }
    remaining -= picked.len() as u32;

    // Дальше - как в автоматическом подборе, ряд за рядом к экрану.
    // Ряды позади стартового не рассматриваются.
    let mut row_index = start.row_index();
    while remaining > 0 && row_index > 0 {
        row_index -= 1;
        let row = row_letter(row_index);
        let taken = scan_row(map, row, remaining)?;
        remaining -= taken.len() as u32;
        picked.extend(taken.into_iter().map(|number| SeatId::new(row, number)));
    }

    if remaining > 0 {
        return Err(AllocationError::InsufficientSeats {
            requested: count,
            available: picked.len() as u32,
        });
    }

    debug!(count, start = %start, seats = %labels(&picked), "positional allocation");
    Ok(picked)
}

// Общая валидация запроса: нулевой запрос - ошибка запроса, нехватка
// свободных мест (включая запросы больше вместимости зала) - отдельный
// вид ошибки с количеством оставшихся мест
fn validate_request(map: &SeatMap, count: u32) -> Result<(), AllocationError> {
    if count == 0 {
        return Err(AllocationError::InvalidRequest {
            reason: "ticket count must be greater than zero".to_string(),
        });
    }
    let available = map.total_free();
    if count > available {
        return Err(AllocationError::InsufficientSeats {
            requested: count,
            available,
        });
    }
    Ok(())
}

/// Стартовая колонка центрированного блока из `count` мест в ряду
/// ширины `seats_per_row`: floor((N - k) / 2) + 1, лишнее свободное
/// место при нечетном остатке уходит влево
pub fn middle_start_column(seats_per_row: u32, count: u32) -> u32 {
    if count >= seats_per_row {
        return 1;
    }
    (seats_per_row - count) / 2 + 1
}

// Сканирование одного ряда: до `want` номеров свободных мест.
// Меньше want возвращается только когда ряд исчерпан.
fn scan_row(map: &SeatMap, row: char, want: u32) -> Result<Vec<u32>, AllocationError> {
    let free = map.free_numbers_in_row(row)?;
    let want = want as usize;

    // Ряд исчерпан: забираем все свободные места, недобор
    // обрабатывает вызывающий переливом в следующий ряд
    if free.len() <= want {
        return Ok(free);
    }

    let preferred = middle_start_column(map.seats_per_row(), want as u32);

    // Лучший непрерывный блок нужной длины - ближайший к центру
    if let Some(index) = best_contiguous_run(&free, want, preferred) {
        return Ok(free[index..index + want].to_vec());
    }

    // Непрерывного блока нет: берем свободные места, ближайшие к
    // задуманному блоку, при равном расстоянии - с меньшим номером
    Ok(nearest_to_block(&free, want, preferred))
}

// Индекс начала непрерывного блока из want мест, чей старт ближе
// всего к preferred; при равенстве побеждает меньший номер
fn best_contiguous_run(free: &[u32], want: usize, preferred: u32) -> Option<usize> {
    let mut best: Option<(u32, usize)> = None;
    for index in 0..=free.len().saturating_sub(want) {
        // Номера отсортированы и уникальны, поэтому блок непрерывен
        // тогда и только тогда, когда крайние отличаются на want-1
        if free[index + want - 1] - free[index] != want as u32 - 1 {
            continue;
        }
        let distance = free[index].abs_diff(preferred);
        if best.map_or(true, |(best_distance, _)| distance < best_distance) {
            best = Some((distance, index));
        }
    }
    best.map(|(_, index)| index)
}

fn nearest_to_block(free: &[u32], want: usize, preferred: u32) -> Vec<u32> {
    let block_end = preferred + want as u32 - 1;
    let mut ranked = free.to_vec();
    ranked.sort_by_key(|&number| {
        let distance = if number < preferred {
            preferred - number
        } else if number > block_end {
            number - block_end
        } else {
            0
        };
        (distance, number)
    });
    let mut chosen: Vec<u32> = ranked.into_iter().take(want).collect();
    chosen.sort_unstable();
    chosen
}

fn labels(seats: &[SeatId]) -> String {
    seats
        .iter()
        .map(SeatId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;

    fn empty_map(rows: u32, seats_per_row: u32) -> SeatMap {
        SeatMap::new(&Movie::new("Test", rows, seats_per_row).unwrap())
    }

    fn seats(labels: &[&str]) -> Vec<SeatId> {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    #[test]
    fn centering_follows_the_floor_formula() {
        // floor((N - k) / 2) + 1
        assert_eq!(middle_start_column(10, 2), 5);
        assert_eq!(middle_start_column(10, 3), 4);
        assert_eq!(middle_start_column(5, 2), 2);
        assert_eq!(middle_start_column(5, 5), 1);
        assert_eq!(middle_start_column(1, 1), 1);
        // Запрос шире ряда прижимается к левому краю
        assert_eq!(middle_start_column(5, 9), 1);
    }

    #[test]
    fn scan_takes_the_centered_block_in_an_empty_row() {
        let map = empty_map(1, 10);
        assert_eq!(scan_row(&map, 'A', 2).unwrap(), vec![5, 6]);
        assert_eq!(scan_row(&map, 'A', 3).unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn scan_shifts_to_the_nearest_contiguous_run() {
        let mut map = empty_map(1, 10);
        // Центр занят: остаются блоки 1-4 и 7-10
        map.apply(&seats(&["A5", "A6"])).unwrap();
        assert_eq!(scan_row(&map, 'A', 2).unwrap(), vec![3, 4]);

        // При равном удалении стартов побеждает меньший номер:
        // блоки со стартами 2 и 6 равноудалены от колонки 4
        let mut map = empty_map(1, 9);
        map.apply(&seats(&["A4", "A5"])).unwrap();
        assert_eq!(scan_row(&map, 'A', 2).unwrap(), vec![2, 3]);
    }

    #[test]
    fn scan_falls_back_to_seats_nearest_the_center() {
        let mut map = empty_map(1, 10);
        // Свободны только 1, 4, 7, 10 - непрерывной пары нет
        map.apply(&seats(&["A2", "A3", "A5", "A6", "A8", "A9"]))
            .unwrap();
        assert_eq!(scan_row(&map, 'A', 2).unwrap(), vec![4, 7]);
    }

    #[test]
    fn scan_returns_the_whole_row_when_exhausted() {
        let mut map = empty_map(1, 5);
        map.apply(&seats(&["A3"])).unwrap();
        assert_eq!(scan_row(&map, 'A', 5).unwrap(), vec![1, 2, 4, 5]);
    }

    #[test]
    fn default_allocation_starts_at_the_back_row() {
        let map = empty_map(8, 10);
        let picked = allocate_default(&map, 2).unwrap();
        assert_eq!(picked, seats(&["H5", "H6"]));
    }

    #[test]
    fn default_allocation_overflows_toward_the_screen() {
        let map = empty_map(5, 5);
        let picked = allocate_default(&map, 7).unwrap();
        assert_eq!(picked, seats(&["E1", "E2", "E3", "E4", "E5", "D2", "D3"]));
    }

    #[test]
    fn positional_allocation_fills_rightward() {
        let map = empty_map(8, 10);
        let picked = allocate_from_position(&map, "B3".parse().unwrap(), 4).unwrap();
        assert_eq!(picked, seats(&["B3", "B4", "B5", "B6"]));
    }

    #[test]
    fn positional_allocation_skips_occupied_seats_rightward() {
        let mut map = empty_map(8, 10);
        map.apply(&seats(&["B4", "B5"])).unwrap();
        let picked = allocate_from_position(&map, "B3".parse().unwrap(), 3).unwrap();
        assert_eq!(picked, seats(&["B3", "B6", "B7"]));
    }

    #[test]
    fn positional_allocation_never_looks_behind_the_start_row() {
        // Весь зал свободен, но от A3 достижимы только A3..A5
        let map = empty_map(2, 5);
        let result = allocate_from_position(&map, "A3".parse().unwrap(), 4);
        assert_eq!(
            result,
            Err(AllocationError::InsufficientSeats {
                requested: 4,
                available: 3
            })
        );
    }
}
