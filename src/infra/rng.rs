use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Источник случайных голов для симуляции игрового дня (dev CLI, тесты).
pub trait GoalSource {
    /// Сколько голов забито за отрезок: от 0 до `max` включительно.
    fn goals(&mut self, max: u32) -> u32;
}

/// Системный RNG.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl GoalSource for SystemRng {
    fn goals(&mut self, max: u32) -> u32 {
        rand::thread_rng().gen_range(0..=max)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed даёт одинаковую последовательность голов.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl GoalSource for DeterministicRng {
    fn goals(&mut self, max: u32) -> u32 {
        self.inner.gen_range(0..=max)
    }
}
