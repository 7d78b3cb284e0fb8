// src/board/scoreboard.rs

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::board::config::ScoreBoardConfig;
use crate::board::errors::{BoardError, InvalidArgument, RuleViolation};
use crate::board::summary::rank_order;
use crate::domain::game::Match;
use crate::domain::team::{MatchKey, Side, TeamName};
use crate::infra::ids::SequenceGenerator;

/// Табло идущих матчей:
/// - хранит матчи по нормализованному ключу (home, away);
/// - следит, чтобы команда играла не больше чем в одном матче;
/// - выдаёт порядковые номера матчей;
/// - строит отсортированную сводку.
#[derive(Debug)]
pub struct ScoreBoard {
    config: ScoreBoardConfig,
    matches: HashMap<MatchKey, Match>,
    sequence: SequenceGenerator,
}

impl ScoreBoard {
    /// Пустое табло с конфигом по умолчанию.
    pub fn new() -> Self {
        Self {
            config: ScoreBoardConfig::default(),
            matches: HashMap::new(),
            sequence: SequenceGenerator::new(),
        }
    }

    /// Пустое табло с заданным конфигом.
    pub fn with_config(config: ScoreBoardConfig) -> Result<Self, BoardError> {
        config.validate().map_err(BoardError::InvalidConfig)?;
        Ok(Self {
            config,
            matches: HashMap::new(),
            sequence: SequenceGenerator::new(),
        })
    }

    pub fn config(&self) -> &ScoreBoardConfig {
        &self.config
    }

    /// Начать матч со счётом 0:0.
    ///
    /// Ошибки:
    /// - `InvalidArgument` — пустое или слишком длинное имя;
    /// - `RuleViolation::SameTeam` — home и away одна и та же команда;
    /// - `RuleViolation::AlreadyPlaying` — одна из команд уже в другом матче.
    pub fn start_game(&mut self, home: &str, away: &str) -> Result<&Match, BoardError> {
        let (home, away) = self.parse_names(home, away)?;

        if home == away {
            warn!(team = %home, "rejected: same team on both sides");
            return Err(RuleViolation::SameTeam {
                team: home.to_string(),
            }
            .into());
        }

        for team in [&home, &away] {
            if self.is_playing(team.as_str()) {
                warn!(team = %team, "rejected: team already playing");
                return Err(RuleViolation::AlreadyPlaying {
                    team: team.to_string(),
                }
                .into());
            }
        }

        let key = MatchKey::new(&home, &away);
        let sequence = self.sequence.next_sequence();

        debug!(home = %home, away = %away, sequence, "match started");

        self.matches.insert(key.clone(), Match::new(home, away, sequence));

        self.matches
            .get(&key)
            .ok_or(BoardError::Internal("started match missing from board"))
    }

    /// Обновить счёт идущего матча.
    ///
    /// Поиск строго по паре (home, away): матч, начатый как (B, A),
    /// по запросу (A, B) не находится.
    pub fn update_score(
        &mut self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<&Match, BoardError> {
        let (home, away) = self.parse_names(home, away)?;
        let key = MatchKey::new(&home, &away);

        let game = self
            .matches
            .get_mut(&key)
            .ok_or_else(|| not_found(&home, &away))?;

        game.set_score(home_score, away_score)?;

        debug!(
            home = %home,
            away = %away,
            home_score,
            away_score,
            "score updated"
        );

        Ok(&*game)
    }

    /// Завершить матч: он удаляется с табло, команды снова свободны.
    ///
    /// Возвращает матч с финальным счётом.
    pub fn finish_game(&mut self, home: &str, away: &str) -> Result<Match, BoardError> {
        let (home, away) = self.parse_names(home, away)?;
        let key = MatchKey::new(&home, &away);

        let game = self
            .matches
            .remove(&key)
            .ok_or_else(|| not_found(&home, &away))?;

        debug!(
            home = %home,
            away = %away,
            sequence = game.sequence(),
            final_score = %game,
            "match finished"
        );

        Ok(game)
    }

    /// Сводка: все идущие матчи, по убыванию суммы голов,
    /// при равенстве — сначала начатые позже.
    ///
    /// Возвращается копия, дальнейшие изменения табло её не трогают.
    pub fn summary(&self) -> Vec<Match> {
        let mut out: Vec<Match> = self.matches.values().cloned().collect();
        out.sort_by(rank_order);
        out
    }

    /// Найти матч по паре (home, away), только чтение.
    pub fn get(&self, home: &str, away: &str) -> Option<&Match> {
        let home = TeamName::parse(home)?;
        let away = TeamName::parse(away)?;
        self.matches.get(&MatchKey::new(&home, &away))
    }

    /// Играет ли команда сейчас в каком-либо матче.
    pub fn is_playing(&self, team: &str) -> bool {
        self.matches.values().any(|m| m.involves(team))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn parse_names(&self, home: &str, away: &str) -> Result<(TeamName, TeamName), BoardError> {
        let home = self.parse_name(home, Side::Home)?;
        let away = self.parse_name(away, Side::Away)?;
        Ok((home, away))
    }

    fn parse_name(&self, raw: &str, side: Side) -> Result<TeamName, InvalidArgument> {
        let name = TeamName::parse(raw).ok_or(InvalidArgument::BlankTeamName { side })?;

        let max = self.config.max_team_name_len;
        let len = name.char_len();
        if len > max {
            return Err(InvalidArgument::TeamNameTooLong { side, len, max });
        }

        Ok(name)
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(home: &TeamName, away: &TeamName) -> BoardError {
    BoardError::MatchNotFound {
        home: home.to_string(),
        away: away.to_string(),
    }
}
