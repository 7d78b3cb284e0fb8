// tests/board_core_tests.rs
//
// Основной цикл табло: старт -> обновление счёта -> завершение.

use scoreboard::board::{ScoreBoard, ScoreBoardConfig};
use scoreboard::domain::Score;

//
// TEST 1 — новый матч стартует 0:0
//
#[test]
fn start_game_begins_at_zero() {
    let mut board = ScoreBoard::new();

    let m = board.start_game("Mexico", "Canada").unwrap();

    assert_eq!(m.home(), "Mexico");
    assert_eq!(m.away(), "Canada");
    assert_eq!(m.home_score(), Score::ZERO);
    assert_eq!(m.away_score(), Score::ZERO);
    assert_eq!(board.len(), 1);
}

//
// TEST 2 — пробелы по краям обрезаются, регистр сохраняется
//
#[test]
fn start_game_trims_names() {
    let mut board = ScoreBoard::new();

    let m = board.start_game("  Spain ", "\tBrazil").unwrap();

    assert_eq!(m.home(), "Spain");
    assert_eq!(m.away(), "Brazil");
}

//
// TEST 3 — сразу после старта матч виден в сводке
//
#[test]
fn started_game_appears_in_summary() {
    let mut board = ScoreBoard::new();
    board.start_game("Mexico", "Canada").unwrap();

    let summary = board.summary();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].home(), "Mexico");
    assert_eq!(summary[0].away(), "Canada");
    assert_eq!(summary[0].total_score(), 0);
}

//
// TEST 4 — порядковые номера растут и не переиспользуются после finish
//
#[test]
fn sequence_is_monotonic_across_finish() {
    let mut board = ScoreBoard::new();

    let first = board.start_game("A", "B").unwrap().sequence();
    board.finish_game("A", "B").unwrap();
    let second = board.start_game("A", "B").unwrap().sequence();
    let third = board.start_game("C", "D").unwrap().sequence();

    assert!(first < second);
    assert!(second < third);
}

//
// TEST 5 — обновление счёта меняет сохранённый матч
//
#[test]
fn update_score_mutates_stored_match() {
    let mut board = ScoreBoard::new();
    board.start_game("Brazil", "Argentina").unwrap();

    let m = board.update_score("Brazil", "Argentina", 2, 3).unwrap();
    assert_eq!(m.home_score(), Score(2));
    assert_eq!(m.away_score(), Score(3));

    let stored = board.get("Brazil", "Argentina").unwrap();
    assert_eq!(stored.total_score(), 5);
}

//
// TEST 6 — поиск матча без учёта регистра и пробелов
//
#[test]
fn update_score_lookup_is_case_insensitive() {
    let mut board = ScoreBoard::new();
    board.start_game("Brazil", "Argentina").unwrap();

    let m = board.update_score(" BRAZIL", "argentina ", 1, 0).unwrap();

    // Имена остаются такими, как были при старте.
    assert_eq!(m.home(), "Brazil");
    assert_eq!(m.home_score(), Score(1));
}

//
// TEST 7 — счёт можно и уменьшить (исправление ошибки оператора)
//
#[test]
fn update_score_can_correct_downwards() {
    let mut board = ScoreBoard::new();
    board.start_game("Germany", "France").unwrap();
    board.update_score("Germany", "France", 3, 1).unwrap();

    let m = board.update_score("Germany", "France", 2, 1).unwrap();

    assert_eq!(m.total_score(), 3);
}

//
// TEST 8 — finish убирает матч и освобождает команды
//
#[test]
fn finish_game_frees_teams() {
    let mut board = ScoreBoard::new();
    board.start_game("Brazil", "Argentina").unwrap();
    board.update_score("Brazil", "Argentina", 1, 1).unwrap();

    let finished = board.finish_game("Brazil", "Argentina").unwrap();

    assert_eq!(finished.total_score(), 2);
    assert!(board.summary().is_empty());
    assert!(!board.is_playing("Brazil"));

    // Обе команды снова могут играть, в том числе друг с другом в другой роли.
    board.start_game("Argentina", "Brazil").unwrap();
    assert_eq!(board.len(), 1);
}

//
// TEST 9 — конфиг применяется
//
#[test]
fn with_config_keeps_config() {
    let cfg = ScoreBoardConfig {
        name: "Euro".into(),
        max_team_name_len: 16,
    };

    let board = ScoreBoard::with_config(cfg.clone()).unwrap();

    assert_eq!(board.config(), &cfg);
    assert!(board.is_empty());
}

//
// TEST 10 — start_game возвращает ровно тот матч, что лежит на табло
//
#[test]
fn start_game_returns_the_stored_match() {
    let mut board = ScoreBoard::new();
    board.start_game("A", "B").unwrap();

    let started = board.start_game("C", "D").unwrap().clone();
    let stored = board.get("C", "D").unwrap();

    assert_eq!(&started, stored);
    assert_eq!(started.sequence(), 2);
    assert_eq!(board.len(), 2);
}
