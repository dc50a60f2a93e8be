//! Experience curve and level-up growth.

use super::player::Player;
use crate::core::constants::*;

/// XP needed to advance from `level` to `level + 1`: floor(100 * level^1.5).
pub fn experience_needed(level: u32) -> u64 {
    (XP_CURVE_BASE * (level as f64).powf(XP_CURVE_EXPONENT)).floor() as u64
}

/// Result of an experience award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpOutcome {
    pub levels_gained: u32,
    pub new_level: u32,
}

impl LevelUpOutcome {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

impl Player {
    /// XP threshold for the player's current level.
    pub fn experience_to_next_level(&self) -> u64 {
        experience_needed(self.level)
    }

    /// Adds XP and applies every level-up it pays for.
    ///
    /// The leftover below the next threshold carries over.
    pub fn add_experience(&mut self, amount: u64) -> LevelUpOutcome {
        self.experience += amount;
        tracing::debug!(gained = amount, total = self.experience, "experience awarded");

        let mut levels_gained = 0;
        let mut needed = experience_needed(self.level);
        while self.experience >= needed {
            self.experience -= needed;
            self.apply_level_up();
            levels_gained += 1;
            needed = experience_needed(self.level);
        }

        LevelUpOutcome {
            levels_gained,
            new_level: self.level,
        }
    }

    fn apply_level_up(&mut self) {
        self.level += 1;
        let level = self.level;

        self.max_health += LEVEL_UP_HEALTH_FLAT + LEVEL_UP_HEALTH_PER_LEVEL * level;
        self.health = self.max_health;
        self.attack_power += LEVEL_UP_ATTACK_FLAT + LEVEL_UP_ATTACK_PER_LEVEL * level;
        self.magic_power += LEVEL_UP_MAGIC_FLAT + LEVEL_UP_MAGIC_PER_LEVEL * level;

        tracing::info!(
            level,
            max_health = self.max_health,
            attack_power = self.attack_power,
            magic_power = self.magic_power,
            "level up"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_needed_known_values() {
        assert_eq!(experience_needed(1), 100);
        assert_eq!(experience_needed(2), 282);
        assert_eq!(experience_needed(3), 519);
        assert_eq!(experience_needed(4), 800);
        assert_eq!(experience_needed(5), 1118);
    }

    #[test]
    fn test_experience_needed_matches_formula() {
        for level in 1..=50u32 {
            let expected = (100.0 * (level as f64).powf(1.5)).floor() as u64;
            assert_eq!(experience_needed(level), expected, "level {level}");
        }
    }

    #[test]
    fn test_experience_needed_strictly_increasing() {
        for level in 1..50 {
            assert!(experience_needed(level + 1) > experience_needed(level));
        }
    }

    #[test]
    fn test_below_threshold_no_level() {
        let mut player = Player::new();
        let outcome = player.add_experience(99);
        assert!(!outcome.leveled_up());
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 99);
    }

    #[test]
    fn test_single_level_up_growth() {
        let mut player = Player::new();
        player.take_damage(40);

        let outcome = player.add_experience(130);
        assert_eq!(outcome, LevelUpOutcome { levels_gained: 1, new_level: 2 });
        assert_eq!(player.experience, 30);
        // 100 + 20 + 5*2
        assert_eq!(player.max_health, 130);
        assert_eq!(player.health, 130);
        // 10 + 5 + 2*2
        assert_eq!(player.attack_power, 19);
        // 5 + 3 + 2
        assert_eq!(player.magic_power, 10);
    }

    #[test]
    fn test_multiple_level_ups_in_one_award() {
        let mut player = Player::new();
        // 100 + 282 + 519 = 901 reaches level 4, 7 left over
        let outcome = player.add_experience(908);

        assert_eq!(outcome.levels_gained, 3);
        assert_eq!(player.level, 4);
        assert_eq!(player.experience, 7);
        // health: 100 + 30 + 35 + 40
        assert_eq!(player.max_health, 205);
        assert_eq!(player.health, 205);
        // attack: 10 + 9 + 11 + 13
        assert_eq!(player.attack_power, 43);
        // magic: 5 + 5 + 6 + 7
        assert_eq!(player.magic_power, 23);
    }

    #[test]
    fn test_exact_threshold_levels() {
        let mut player = Player::new();
        player.add_experience(100);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn test_accumulates_across_awards() {
        let mut player = Player::new();
        player.add_experience(60);
        assert_eq!(player.level, 1);
        player.add_experience(60);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 20);
        assert_eq!(player.experience_to_next_level(), 282);
    }
}
