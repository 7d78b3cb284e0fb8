use serde::{Deserialize, Serialize};

use crate::board::BoardError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Пустое имя команды, отрицательный счёт и т.п.
    InvalidArgument(String),

    /// Команда нарушает правила табло (та же команда, уже играет).
    RuleViolation(String),

    /// Матч не найден.
    MatchNotFound { home: String, away: String },

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidArgument(e) => ApiError::InvalidArgument(e.to_string()),
            BoardError::RuleViolation(e) => ApiError::RuleViolation(e.to_string()),
            BoardError::MatchNotFound { home, away } => ApiError::MatchNotFound { home, away },
            e @ (BoardError::InvalidConfig(_) | BoardError::Internal(_)) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}
