use serde::{Deserialize, Serialize};

/// Конфигурация табло.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoreBoardConfig {
    /// Название табло (для логов и текстового отчёта).
    pub name: String,

    /// Максимальная длина имени команды в символах (после обрезки пробелов).
    pub max_team_name_len: usize,
}

impl ScoreBoardConfig {
    pub const DEFAULT_MAX_TEAM_NAME_LEN: usize = 64;

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("ScoreBoardConfig: name is empty".into());
        }
        if self.max_team_name_len == 0 {
            return Err("ScoreBoardConfig: max_team_name_len = 0".into());
        }
        Ok(())
    }

    /// Загрузить конфиг из JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: ScoreBoardConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ScoreBoardConfig {
    fn default() -> Self {
        Self {
            name: "Live Football World Cup".to_string(),
            max_team_name_len: Self::DEFAULT_MAX_TEAM_NAME_LEN,
        }
    }
}
