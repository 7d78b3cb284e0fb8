//! Доменная модель табло: команды, счёт, матч.

pub mod game;
pub mod score;
pub mod team;

/// Порядковый номер матча (порядок старта).
pub type MatchSequence = u64;

pub use game::*;
pub use score::*;
pub use team::*;
