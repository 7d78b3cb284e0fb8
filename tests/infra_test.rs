// tests/infra_test.rs

use scoreboard::{
    domain::{Match, Score, TeamName},
    infra::{
        ids::SequenceGenerator,
        mapping::{map_match_to_dto, map_summary_to_dto},
        rng::{DeterministicRng, GoalSource, SystemRng},
    },
};

//
// ---------- helpers ----------
//

fn make_match(home: &str, away: &str, seq: u64) -> Match {
    Match::new(
        TeamName::parse(home).unwrap(),
        TeamName::parse(away).unwrap(),
        seq,
    )
}

//
// ---------- ids ----------
//

#[test]
fn sequence_generator_starts_at_one_and_grows() {
    let mut ids = SequenceGenerator::new();

    assert_eq!(ids.peek(), 1);
    assert_eq!(ids.next_sequence(), 1);
    assert_eq!(ids.next_sequence(), 2);
    assert_eq!(ids.peek(), 3);
}

//
// ---------- mapping ----------
//

#[test]
fn match_maps_to_dto() {
    let mut m = make_match("Uruguay", "Italy", 4);
    m.set_score(6, 6).unwrap();

    let dto = map_match_to_dto(&m);

    assert_eq!(dto.home, "Uruguay");
    assert_eq!(dto.away, "Italy");
    assert_eq!(dto.home_score, Score(6));
    assert_eq!(dto.away_score, Score(6));
    assert_eq!(dto.total_score, 12);
    assert_eq!(dto.sequence, 4);
}

#[test]
fn summary_mapping_keeps_order() {
    let matches = vec![make_match("B", "B2", 2), make_match("A", "A2", 1)];

    let dto = map_summary_to_dto("Board", &matches);

    assert_eq!(dto.board, "Board");
    assert_eq!(dto.matches.len(), 2);
    assert_eq!(dto.matches[0].home, "B");
    assert_eq!(dto.matches[1].home, "A");
}

//
// ---------- rng ----------
//

#[test]
fn deterministic_rng_replays() {
    let mut a = DeterministicRng::from_seed(42);
    let mut b = DeterministicRng::from_seed(42);

    let seq_a: Vec<u32> = (0..32).map(|_| a.goals(3)).collect();
    let seq_b: Vec<u32> = (0..32).map(|_| b.goals(3)).collect();

    assert_eq!(seq_a, seq_b);
    assert!(seq_a.iter().all(|&g| g <= 3));
}

#[test]
fn system_rng_stays_in_range() {
    let mut rng = SystemRng;

    for _ in 0..100 {
        assert!(rng.goals(2) <= 2);
    }
    assert_eq!(rng.goals(0), 0);
}
