//! Location and world catalog definitions.

use serde::{Deserialize, Serialize};

use crate::combat::Archetype;
use crate::core::error::{GameError, GameResult};
use crate::items::Item;

/// A zone the player can explore once they reach `required_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    name: String,
    required_level: u32,
    enemies: Vec<Archetype>,
    loot: Vec<Item>,
}

/// Unvalidated shape used when reading a catalog from JSON.
#[derive(Deserialize)]
struct RawLocation {
    name: String,
    required_level: u32,
    enemies: Vec<Archetype>,
    loot: Vec<Item>,
}

impl TryFrom<RawLocation> for Location {
    type Error = GameError;

    fn try_from(raw: RawLocation) -> GameResult<Self> {
        Location::new(raw.name, raw.required_level, raw.enemies, raw.loot)
    }
}

impl Location {
    /// Builds a location. Both pools must be non-empty.
    pub fn new(
        name: impl Into<String>,
        required_level: u32,
        enemies: Vec<Archetype>,
        loot: Vec<Item>,
    ) -> GameResult<Self> {
        let name = name.into();
        if enemies.is_empty() {
            return Err(GameError::EmptyPool {
                location: name,
                pool: "enemy",
            });
        }
        if loot.is_empty() {
            return Err(GameError::EmptyPool {
                location: name,
                pool: "loot",
            });
        }
        Ok(Self {
            name,
            required_level,
            enemies,
            loot,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_level(&self) -> u32 {
        self.required_level
    }

    pub fn enemies(&self) -> &[Archetype] {
        &self.enemies
    }

    pub fn loot(&self) -> &[Item] {
        &self.loot
    }

    pub fn is_unlocked_for(&self, level: u32) -> bool {
        self.required_level <= level
    }
}

/// Immutable table of every location in the world.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// The three starting zones: Ermanda, Salal Town and Hazard City.
    pub fn default_world() -> Self {
        let locations = vec![
            Location {
                name: "Ermanda".to_string(),
                required_level: 1,
                enemies: vec![Archetype::Wolf],
                loot: vec![
                    Item::weapon("Beginner's sword", 50, 15),
                    Item::armor("Leather armor", 75, 20),
                ],
            },
            Location {
                name: "Salal Town".to_string(),
                required_level: 3,
                enemies: vec![Archetype::Bandit],
                loot: vec![
                    Item::weapon("Steel sword", 100, 25),
                    Item::armor("Chainmail", 150, 40),
                ],
            },
            Location {
                name: "Hazard City".to_string(),
                required_level: 5,
                enemies: vec![Archetype::Alpha],
                loot: vec![
                    Item::weapon("Magic sword", 200, 35),
                    Item::armor("Plate armor", 250, 60),
                ],
            },
        ];
        Self { locations }
    }

    /// Parses a catalog from JSON. Unknown archetypes and empty pools are rejected.
    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Locations open to a player of `level`, in catalog order.
    pub fn available_locations(&self, level: u32) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|l| l.is_unlocked_for(level))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_world()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world_has_three_locations() {
        let catalog = Catalog::default_world();
        let names: Vec<&str> = catalog.locations().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Ermanda", "Salal Town", "Hazard City"]);
    }

    #[test]
    fn test_every_location_has_pools() {
        for location in Catalog::default_world().locations() {
            assert!(!location.enemies().is_empty(), "{}", location.name());
            assert!(!location.loot().is_empty(), "{}", location.name());
        }
    }

    #[test]
    fn test_available_locations_by_level() {
        let catalog = Catalog::default_world();
        assert_eq!(catalog.available_locations(1).len(), 1);
        assert_eq!(catalog.available_locations(2).len(), 1);
        assert_eq!(catalog.available_locations(3).len(), 2);
        assert_eq!(catalog.available_locations(5).len(), 3);
        assert_eq!(catalog.available_locations(50).len(), 3);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let catalog = Catalog::default_world();
        assert_eq!(catalog.get("salal town").map(|l| l.required_level()), Some(3));
        assert!(catalog.get("Atlantis").is_none());
    }

    #[test]
    fn test_new_rejects_empty_enemy_pool() {
        let err = Location::new("Void", 1, vec![], vec![Item::weapon("Stick", 1, 1)]);
        assert!(matches!(err, Err(GameError::EmptyPool { pool: "enemy", .. })));
    }

    #[test]
    fn test_new_rejects_empty_loot_pool() {
        let err = Location::new("Barren", 1, vec![Archetype::Wolf], vec![]);
        assert!(matches!(err, Err(GameError::EmptyPool { pool: "loot", .. })));
    }

    #[test]
    fn test_from_json_parses_archetype_names() {
        let json = r#"{
            "locations": [{
                "name": "Den",
                "required_level": 2,
                "enemies": ["wolf", "Alpha"],
                "loot": [{"kind": "Armor", "name": "Hide", "value": 10, "health_bonus": 5}]
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let den = catalog.get("Den").unwrap();
        assert_eq!(den.enemies(), &[Archetype::Wolf, Archetype::Alpha]);
        assert_eq!(den.loot()[0].name(), "Hide");
    }

    #[test]
    fn test_from_json_rejects_unknown_archetype() {
        let json = r#"{
            "locations": [{
                "name": "Den",
                "required_level": 1,
                "enemies": ["Dragon"],
                "loot": [{"kind": "Weapon", "name": "Stick", "value": 1, "attack_bonus": 1}]
            }]
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Dragon"));
    }

    #[test]
    fn test_from_json_rejects_empty_pool() {
        let json = r#"{"locations": [{"name": "Den", "required_level": 1, "enemies": [], "loot": []}]}"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = Catalog::default_world();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }
}
