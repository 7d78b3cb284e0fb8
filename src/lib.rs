//! Табло идущих футбольных матчей.
//!
//! Хранит матчи в памяти, следит за уникальностью команд,
//! обновляет счёт, завершает матчи и строит отсортированную сводку.

pub mod api;
pub mod board;
pub mod domain;
pub mod infra;

pub use board::{BoardError, ScoreBoard, ScoreBoardConfig, SharedScoreBoard};
pub use domain::{Match, Score};
