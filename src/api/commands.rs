use serde::{Deserialize, Serialize};

use crate::board::ScoreBoard;
use crate::infra::mapping::map_match_to_dto;

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня (всё, что меняет состояние табло).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать матч.
    StartGame(StartGameCommand),

    /// Обновить счёт идущего матча.
    UpdateScore(UpdateScoreCommand),

    /// Завершить матч.
    FinishGame(FinishGameCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartGameCommand {
    pub home: String,
    pub away: String,
}

/// Новый счёт. Значения знаковые: отрицательные отклоняются табло,
/// а не падают на десериализации.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateScoreCommand {
    pub home: String,
    pub away: String,
    pub home_score: i64,
    pub away_score: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinishGameCommand {
    pub home: String,
    pub away: String,
}

/// Разобрать команду из JSON.
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Выполнить команду над табло.
pub fn execute_command(board: &mut ScoreBoard, command: Command) -> Result<CommandResponse, ApiError> {
    let response = match command {
        Command::StartGame(cmd) => {
            let game = board.start_game(&cmd.home, &cmd.away)?;
            CommandResponse::MatchStarted(map_match_to_dto(game))
        }
        Command::UpdateScore(cmd) => {
            let game = board.update_score(&cmd.home, &cmd.away, cmd.home_score, cmd.away_score)?;
            CommandResponse::ScoreUpdated(map_match_to_dto(game))
        }
        Command::FinishGame(cmd) => {
            let game = board.finish_game(&cmd.home, &cmd.away)?;
            CommandResponse::MatchFinished(map_match_to_dto(&game))
        }
    };

    Ok(response)
}
