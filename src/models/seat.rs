use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::AllocationError;
use crate::models::movie::MAX_SEATS_PER_ROW;

// Идентификатор места: буква ряда + номер, например "B7" или "H10".
// Ряд 'A' ближе всего к экрану, номера идут слева направо от 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    pub row: char,
    pub number: u32,
}

impl SeatId {
    pub fn new(row: char, number: u32) -> Self {
        Self { row, number }
    }

    // Индекс ряда от экрана: 'A' -> 0, 'B' -> 1, ...
    pub fn row_index(&self) -> u32 {
        self.row as u32 - 'A' as u32
    }
}

// Обратное преобразование индекса ряда в букву
pub(crate) fn row_letter(index: u32) -> char {
    (b'A' + index as u8) as char
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for SeatId {
    type Err = AllocationError;

    // Принимает "B7", "b7", " B7 "; без ведущих нулей, ряды A-Z, номера 1-50
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AllocationError::InvalidPosition {
            detail: format!("malformed seat label '{}'", s.trim()),
        };

        let trimmed = s.trim();
        let mut chars = trimmed.chars();

        let row = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .ok_or_else(|| malformed())?;

        let digits = chars.as_str();
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let number: u32 = digits.parse().map_err(|_| malformed())?;
        if number > MAX_SEATS_PER_ROW {
            return Err(AllocationError::InvalidPosition {
                detail: format!(
                    "seat number {} exceeds the maximum of {}",
                    number, MAX_SEATS_PER_ROW
                ),
            });
        }

        Ok(SeatId { row, number })
    }
}

// По протоколу места передаются строками ("H10"), а не объектами
impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
