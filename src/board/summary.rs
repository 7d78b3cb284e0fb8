// src/board/summary.rs

use std::cmp::Ordering;

use crate::domain::game::Match;

/// Порядок матчей в сводке.
///
/// 1) сумма голов — по убыванию;
/// 2) порядковый номер — по убыванию (позже начатый матч выше).
///
/// Номера уникальны, так что порядок строгий.
pub fn rank_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.sequence().cmp(&a.sequence()))
}

/// Текстовый отчёт по сводке.
///
/// `matches` ожидаются уже в порядке сводки (см. `ScoreBoard::summary`).
pub fn render_summary(board_name: &str, matches: &[Match]) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== {} ===\n", board_name));

    if matches.is_empty() {
        report.push_str("(no active matches)\n");
        return report;
    }

    for (idx, m) in matches.iter().enumerate() {
        report.push_str(&format!("{}. {}\n", idx + 1, m));
    }

    report
}
