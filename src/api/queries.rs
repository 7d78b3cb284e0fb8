use serde::{Deserialize, Serialize};

use crate::board::ScoreBoard;
use crate::infra::mapping::{map_match_to_dto, map_summary_to_dto};

use super::dto::{MatchDto, SummaryDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Сводка по всем идущим матчам.
    GetSummary,

    /// Один матч по паре (home, away).
    GetMatch { home: String, away: String },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Summary(SummaryDto),
    Match(Option<MatchDto>),
}

/// Выполнить запрос. Табло не меняется.
pub fn run_query(board: &ScoreBoard, query: Query) -> QueryResponse {
    match query {
        Query::GetSummary => {
            QueryResponse::Summary(map_summary_to_dto(&board.config().name, &board.summary()))
        }
        Query::GetMatch { home, away } => {
            QueryResponse::Match(board.get(&home, &away).map(map_match_to_dto))
        }
    }
}
