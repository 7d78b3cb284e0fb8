// src/domain/team.rs

use core::fmt;

use serde::{Deserialize, Serialize};

/// Сторона в матче: хозяева или гости.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

/// Нормализация имени команды: обрезаем пробелы и приводим к нижнему регистру.
///
/// Все сравнения имён (уникальность, ключ матча, `involves`) идут через неё.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Имя команды.
///
/// `display` — то, что прислал клиент, без пробелов по краям (регистр сохраняем),
/// `key` — нормализованная форма для сравнений.
#[derive(Clone, Debug, Serialize)]
pub struct TeamName {
    display: String,
    key: String,
}

impl TeamName {
    /// Построить имя из сырой строки.
    ///
    /// None — если после обрезки пробелов ничего не осталось.
    pub fn parse(raw: &str) -> Option<TeamName> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(TeamName {
            display: trimmed.to_string(),
            key: trimmed.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Длина имени в символах (не в байтах).
    pub fn char_len(&self) -> usize {
        self.display.chars().count()
    }

    /// Совпадает ли имя с `other` без учёта регистра и пробелов по краям.
    pub fn matches(&self, other: &str) -> bool {
        self.key == normalize(other)
    }
}

impl PartialEq for TeamName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TeamName {}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Ключ матча: упорядоченная пара нормализованных имён (home, away).
///
/// Пара, а не склеенная строка: "a#b" + "c" и "a" + "b#c" не сталкиваются.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MatchKey {
    home: String,
    away: String,
}

impl MatchKey {
    pub fn new(home: &TeamName, away: &TeamName) -> Self {
        Self {
            home: home.key().to_string(),
            away: away.key().to_string(),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.home, self.away)
    }
}
