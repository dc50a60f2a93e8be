use rand::seq::SliceRandom;
use rand::Rng;

use super::types::Item;
use crate::core::constants::LOOT_DROP_PERCENT;
use crate::zones::Location;

/// Rolls the post-victory drop: 30% chance of one item, uniform over the pool.
pub fn roll_loot(location: &Location, rng: &mut impl Rng) -> Option<Item> {
    roll_from_pool(location.loot(), rng)
}

pub fn roll_from_pool(pool: &[Item], rng: &mut impl Rng) -> Option<Item> {
    if rng.gen_range(0..100) >= LOOT_DROP_PERCENT {
        return None;
    }
    pool.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Archetype;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_drop_rate_near_thirty_percent() {
        let pool = vec![Item::weapon("Beginner's sword", 50, 15)];
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let trials = 10_000;
        let drops = (0..trials)
            .filter(|_| roll_from_pool(&pool, &mut rng).is_some())
            .count();

        assert!(
            drops > 2700 && drops < 3300,
            "Expected ~30% drops, got {drops}/{trials}"
        );
    }

    #[test]
    fn test_drop_is_drawn_from_pool() {
        let location = Location::new(
            "Armory",
            1,
            vec![Archetype::Wolf],
            vec![
                Item::weapon("Steel sword", 100, 25),
                Item::armor("Chainmail", 150, 40),
            ],
        )
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..1000 {
            if let Some(item) = roll_loot(&location, &mut rng) {
                assert!(location.loot().contains(&item));
                seen.insert(item.name().to_string());
            }
        }

        assert_eq!(seen.len(), 2, "both items should drop eventually");
    }

    #[test]
    fn test_empty_pool_never_drops() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            assert!(roll_from_pool(&[], &mut rng).is_none());
        }
    }
}
