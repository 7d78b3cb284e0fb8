//! Инфраструктурный слой вокруг табло:
//! - счётчик порядковых номеров матчей;
//! - RNG для симуляции голов;
//! - маппинги между domain и API.

pub mod ids;
pub mod mapping;
pub mod rng;

pub use ids::*;
pub use mapping::*;
pub use rng::*;
