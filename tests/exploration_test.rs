//! Exploration session integration tests
//!
//! Location gating, the ten-round session loop and the health reset that
//! follows defeat or escape.

use ermanda::combat::{ActionSource, AlwaysAttack};
use ermanda::core::EXPLORATION_ROUNDS;
use ermanda::{
    explore, start_encounter, Archetype, Catalog, Enemy, ExplorationOutcome, GameError, Player,
    PlayerAction,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Attacks a fixed number of times, then flees every turn.
struct FleeAfter(u32);

impl ActionSource for FleeAfter {
    fn next_action(&mut self, _player: &Player, _enemy: &Enemy) -> PlayerAction {
        if self.0 == 0 {
            PlayerAction::Escape
        } else {
            self.0 -= 1;
            PlayerAction::Attack
        }
    }
}

#[test]
fn test_locations_unlock_by_level() {
    let catalog = Catalog::default_world();
    let names = |level| {
        catalog
            .available_locations(level)
            .iter()
            .map(|l| l.name().to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(names(1), vec!["Ermanda"]);
    assert_eq!(names(3), vec!["Ermanda", "Salal Town"]);
    assert_eq!(names(5), vec!["Ermanda", "Salal Town", "Hazard City"]);
}

#[test]
fn test_locked_location_is_refused() {
    let catalog = Catalog::default_world();
    let hazard = catalog.get("hazard city").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut player = Player::new();
    let before = player.clone();

    let err = explore(&mut player, hazard, &mut AlwaysAttack, &mut rng).unwrap_err();

    assert!(matches!(
        err,
        GameError::LocationLocked {
            required_level: 5,
            level: 1,
            ..
        }
    ));
    assert_eq!(player, before);
}

#[test]
fn test_encounters_come_from_location_pool() {
    let catalog = Catalog::default_world();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for (name, archetype, max_level) in [
        ("Ermanda", Archetype::Wolf, 10),
        ("Salal Town", Archetype::Bandit, 15),
        ("Hazard City", Archetype::Alpha, 20),
    ] {
        let location = catalog.get(name).unwrap();
        for _ in 0..200 {
            let enemy = start_encounter(location, &mut rng).unwrap();
            assert_eq!(enemy.archetype, archetype);
            assert!((1..=max_level).contains(&enemy.level));
        }
    }
}

#[test]
fn test_session_never_exceeds_round_limit() {
    let catalog = Catalog::default_world();
    let ermanda = catalog.get("Ermanda").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut player = Player::new();

    for _ in 0..20 {
        let report = explore(&mut player, ermanda, &mut AlwaysAttack, &mut rng).unwrap();
        assert!(report.rounds_fought >= 1 && report.rounds_fought <= EXPLORATION_ROUNDS);
        match report.outcome {
            ExplorationOutcome::Completed => {
                assert_eq!(report.victories, EXPLORATION_ROUNDS);
            }
            ExplorationOutcome::Defeated => {
                assert_eq!(report.victories, report.rounds_fought - 1);
                assert_eq!(player.health, player.max_health);
            }
            ExplorationOutcome::Escaped => panic!("AlwaysAttack never flees"),
        }
    }
    assert!(player.level > 1, "Twenty sessions of wolves should level the player");
}

#[test]
fn test_escape_ends_session_and_restores_health() {
    let catalog = Catalog::default_world();
    let ermanda = catalog.get("Ermanda").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    for _ in 0..20 {
        let mut player = Player::new();
        let report = explore(&mut player, ermanda, &mut FleeAfter(0), &mut rng).unwrap();

        assert_ne!(report.outcome, ExplorationOutcome::Completed);
        assert_eq!(report.victories, 0);
        assert_eq!(report.rounds_fought, 1);
        assert_eq!(player.health, player.max_health);
    }
}

#[test]
fn test_report_totals_match_player_progress() {
    let catalog = Catalog::default_world();
    let ermanda = catalog.get("Ermanda").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut player = Player::new();

    let report = explore(&mut player, ermanda, &mut FleeAfter(3), &mut rng).unwrap();

    assert_eq!(player.inventory, report.loot);
    assert_eq!(player.level, 1 + report.levels_gained);
    if report.levels_gained == 0 {
        assert_eq!(player.experience, report.experience_gained);
    }
}
