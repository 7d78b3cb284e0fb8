use serde::{Deserialize, Serialize};

use crate::domain::score::Score;
use crate::domain::MatchSequence;

/// DTO одного матча.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchDto {
    pub home: String,
    pub away: String,
    pub home_score: Score,
    pub away_score: Score,
    pub total_score: u64,
    /// Порядок старта (чем больше, тем позже начат матч).
    pub sequence: MatchSequence,
}

/// DTO сводки: матчи уже отсортированы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryDto {
    pub board: String,
    pub matches: Vec<MatchDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Матч начат, счёт 0:0.
    MatchStarted(MatchDto),

    /// Счёт обновлён.
    ScoreUpdated(MatchDto),

    /// Матч завершён и убран с табло (финальный счёт).
    MatchFinished(MatchDto),
}
