use serde::{Deserialize, Serialize};

use crate::domain::MatchSequence;

/// Монотонный счётчик порядковых номеров матчей.
///
/// Номера начинаются с 1, только растут и никогда не переиспользуются,
/// даже если матч с этим номером уже завершён.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceGenerator {
    next: MatchSequence,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Выдать следующий номер.
    #[inline]
    pub fn next_sequence(&mut self) -> MatchSequence {
        let seq = self.next;
        self.next += 1;
        seq
    }

    /// Какой номер будет выдан следующим (без выдачи).
    #[inline]
    pub fn peek(&self) -> MatchSequence {
        self.next
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
