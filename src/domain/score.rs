use core::fmt;

use serde::{Deserialize, Serialize};

/// Счёт одной команды в матче. Обёртка над u32, отрицательным быть не может.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub u32);

impl Score {
    pub const ZERO: Score = Score(0);

    /// Перевести "сырое" значение от клиента в счёт.
    ///
    /// None — если значение отрицательное или не влезает в u32.
    pub fn from_raw(raw: i64) -> Option<Score> {
        u32::try_from(raw).ok().map(Score)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
