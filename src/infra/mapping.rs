use crate::api::dto::{MatchDto, SummaryDto};
use crate::domain::game::Match;

/// Маппинг доменного матча в DTO.
pub fn map_match_to_dto(game: &Match) -> MatchDto {
    MatchDto {
        home: game.home().to_string(),
        away: game.away().to_string(),
        home_score: game.home_score(),
        away_score: game.away_score(),
        total_score: game.total_score(),
        sequence: game.sequence(),
    }
}

/// Маппинг сводки в DTO. Порядок матчей сохраняется как есть.
pub fn map_summary_to_dto(board_name: &str, matches: &[Match]) -> SummaryDto {
    SummaryDto {
        board: board_name.to_string(),
        matches: matches.iter().map(map_match_to_dto).collect(),
    }
}
