// src/domain/game.rs

use core::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::score::Score;
use crate::domain::team::TeamName;
use crate::domain::MatchSequence;

/// Недопустимый счёт.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidScore {
    #[error("Счёт не может быть отрицательным: {home}:{away}")]
    Negative { home: i64, away: i64 },

    #[error("Счёт вне допустимого диапазона (0..={max}): {home}:{away}", max = u32::MAX)]
    OutOfRange { home: i64, away: i64 },
}

/// Один идущий матч.
///
/// Имена команд и порядковый номер задаются при создании и больше не меняются,
/// меняется только счёт (через `set_score`).
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Match {
    home: TeamName,
    away: TeamName,
    home_score: Score,
    away_score: Score,
    sequence: MatchSequence,
}

impl Match {
    /// Новый матч со счётом 0:0.
    ///
    /// Имена не проверяются: это делает `ScoreBoard` до создания.
    pub fn new(home: TeamName, away: TeamName, sequence: MatchSequence) -> Self {
        Self {
            home,
            away,
            home_score: Score::ZERO,
            away_score: Score::ZERO,
            sequence,
        }
    }

    pub fn home(&self) -> &str {
        self.home.as_str()
    }

    pub fn away(&self) -> &str {
        self.away.as_str()
    }

    pub fn home_score(&self) -> Score {
        self.home_score
    }

    pub fn away_score(&self) -> Score {
        self.away_score
    }

    pub fn sequence(&self) -> MatchSequence {
        self.sequence
    }

    /// Сумма голов обеих команд.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score.0) + u64::from(self.away_score.0)
    }

    /// Выставить новый счёт.
    ///
    /// Либо меняются оба значения, либо ни одно.
    /// Отрицательный счёт проверяется раньше слишком большого.
    pub fn set_score(&mut self, home: i64, away: i64) -> Result<(), InvalidScore> {
        if home < 0 || away < 0 {
            return Err(InvalidScore::Negative { home, away });
        }
        let (Some(home_score), Some(away_score)) = (Score::from_raw(home), Score::from_raw(away))
        else {
            return Err(InvalidScore::OutOfRange { home, away });
        };

        self.home_score = home_score;
        self.away_score = away_score;
        Ok(())
    }

    /// Играет ли команда `name` в этом матче (без учёта регистра).
    pub fn involves(&self, name: &str) -> bool {
        self.home.matches(name) || self.away.matches(name)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home, self.home_score, self.away, self.away_score
        )
    }
}
