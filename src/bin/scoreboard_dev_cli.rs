// src/bin/scoreboard_dev_cli.rs
//
// Симуляция игрового дня: стартуем матчи, накидываем случайные голы,
// печатаем сводку, завершаем часть матчей и печатаем ещё раз.
//
// Запуск: cargo run --bin scoreboard_dev_cli -- [config.json]

use scoreboard::board::{render_summary, ScoreBoard, ScoreBoardConfig};
use scoreboard::infra::{GoalSource, SystemRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FIXTURES: [(&str, &str); 5] = [
    ("Mexico", "Canada"),
    ("Spain", "Brazil"),
    ("Germany", "France"),
    ("Uruguay", "Italy"),
    ("Argentina", "Australia"),
];

/// Сколько отрезков матча симулируем (голы добавляются на каждом).
const PERIODS: u32 = 3;

fn load_config() -> Result<ScoreBoardConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let config = ScoreBoardConfig::from_json(&json)?;
            tracing::info!(path = %path, "config loaded");
            Ok(config)
        }
        None => Ok(ScoreBoardConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoreboard=info,scoreboard_dev_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    let mut board = ScoreBoard::with_config(config)?;
    let mut rng = SystemRng;

    tracing::info!(board = %board.config().name, fixtures = FIXTURES.len(), "match day starting");

    for (home, away) in FIXTURES {
        board.start_game(home, away)?;
    }

    for _ in 0..PERIODS {
        for (home, away) in FIXTURES {
            let current = board
                .get(home, away)
                .map(|m| (m.home_score().0, m.away_score().0))
                .unwrap_or_default();

            let home_score = i64::from(current.0 + rng.goals(2));
            let away_score = i64::from(current.1 + rng.goals(2));
            board.update_score(home, away, home_score, away_score)?;
        }
    }

    println!("{}", render_summary(&board.config().name, &board.summary()));

    // Пара матчей заканчивается, остальные продолжаются.
    for (home, away) in FIXTURES.iter().take(2) {
        let finished = board.finish_game(home, away)?;
        println!("FT: {}", finished);
    }

    // Повторный старт с уже играющей командой — ожидаемая ошибка.
    if let Err(err) = board.start_game("Italy", "Spain") {
        println!("Italy - Spain не начат: {}", err);
    }

    println!();
    println!("{}", render_summary(&board.config().name, &board.summary()));

    tracing::info!(active = board.len(), "match day done");
    Ok(())
}
