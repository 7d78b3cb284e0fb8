use thiserror::Error;

use crate::domain::game::InvalidScore;
use crate::domain::Side;

/// Некорректные входные данные. Проверяются до любого изменения состояния.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("Имя команды ({side}) пустое")]
    BlankTeamName { side: Side },

    #[error("Имя команды ({side}) слишком длинное: {len} > {max}")]
    TeamNameTooLong { side: Side, len: usize, max: usize },

    #[error("Счёт не может быть отрицательным: {home}:{away}")]
    NegativeScore { home: i64, away: i64 },

    #[error("Счёт вне допустимого диапазона: {home}:{away}")]
    ScoreOutOfRange { home: i64, away: i64 },
}

/// Нарушение правил табло.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Команда {team} не может играть сама с собой")]
    SameTeam { team: String },

    #[error("Команда {team} уже играет")]
    AlreadyPlaying { team: String },
}

/// Ошибки табло.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Некорректный аргумент: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Нарушение правил: {0}")]
    RuleViolation(#[from] RuleViolation),

    #[error("Матч {home} - {away} не найден")]
    MatchNotFound { home: String, away: String },

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl From<InvalidScore> for BoardError {
    fn from(e: InvalidScore) -> Self {
        let arg = match e {
            InvalidScore::Negative { home, away } => InvalidArgument::NegativeScore { home, away },
            InvalidScore::OutOfRange { home, away } => {
                InvalidArgument::ScoreOutOfRange { home, away }
            }
        };
        BoardError::InvalidArgument(arg)
    }
}
