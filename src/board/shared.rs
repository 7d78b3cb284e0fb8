// src/board/shared.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::board::config::ScoreBoardConfig;
use crate::board::errors::BoardError;
use crate::board::scoreboard::ScoreBoard;
use crate::domain::game::Match;

/// Табло, которым можно пользоваться из нескольких потоков.
///
/// Каждая операция целиком выполняется под одним мьютексом: все они
/// трогают общее состояние (уникальность команд и счётчик номеров),
/// поэтому более мелкие блокировки смысла не имеют.
///
/// Наружу отдаются копии матчей.
#[derive(Clone, Debug, Default)]
pub struct SharedScoreBoard {
    inner: Arc<Mutex<ScoreBoard>>,
}

impl SharedScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoreBoardConfig) -> Result<Self, BoardError> {
        Ok(Self::from(ScoreBoard::with_config(config)?))
    }

    pub fn start_game(&self, home: &str, away: &str) -> Result<Match, BoardError> {
        self.lock()?.start_game(home, away).cloned()
    }

    pub fn update_score(
        &self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<Match, BoardError> {
        self.lock()?
            .update_score(home, away, home_score, away_score)
            .cloned()
    }

    pub fn finish_game(&self, home: &str, away: &str) -> Result<Match, BoardError> {
        self.lock()?.finish_game(home, away)
    }

    pub fn summary(&self) -> Result<Vec<Match>, BoardError> {
        Ok(self.lock()?.summary())
    }

    /// Выполнить несколько операций атомарно, под одной блокировкой.
    pub fn with_board<T>(&self, f: impl FnOnce(&mut ScoreBoard) -> T) -> Result<T, BoardError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ScoreBoard>, BoardError> {
        self.inner
            .lock()
            .map_err(|_| BoardError::Internal("scoreboard lock poisoned"))
    }
}

impl From<ScoreBoard> for SharedScoreBoard {
    fn from(board: ScoreBoard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }
}
