//! Табло идущих матчей.
//!
//! Высокоуровневый объект: `ScoreBoard`
//! Основные операции:
//!   - `start_game` – начать матч 0:0
//!   - `update_score` – выставить новый счёт
//!   - `finish_game` – завершить матч и убрать его с табло
//!   - `summary` – сводка по всем идущим матчам

pub mod config;
pub mod errors;
pub mod scoreboard;
pub mod shared;
pub mod summary;

pub use config::ScoreBoardConfig;
pub use errors::{BoardError, InvalidArgument, RuleViolation};
pub use scoreboard::ScoreBoard;
pub use shared::SharedScoreBoard;
pub use summary::{rank_order, render_summary};
