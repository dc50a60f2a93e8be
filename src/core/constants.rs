// Player starting stats
pub const STARTING_MAX_HEALTH: u32 = 100;
pub const STARTING_ATTACK_POWER: u32 = 10;
pub const STARTING_MAGIC_POWER: u32 = 5;

// XP curve: floor(XP_CURVE_BASE * level^XP_CURVE_EXPONENT)
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;

// Level-up growth: flat + per_level * new_level
pub const LEVEL_UP_HEALTH_FLAT: u32 = 20;
pub const LEVEL_UP_HEALTH_PER_LEVEL: u32 = 5;
pub const LEVEL_UP_ATTACK_FLAT: u32 = 5;
pub const LEVEL_UP_ATTACK_PER_LEVEL: u32 = 2;
pub const LEVEL_UP_MAGIC_FLAT: u32 = 3;
pub const LEVEL_UP_MAGIC_PER_LEVEL: u32 = 1;

// Enemy scaling per level above 1 (compounded), as exact fractions:
// 23/20 = 1.15, 11/10 = 1.10
pub const ENEMY_HEALTH_GROWTH: (u32, u32) = (23, 20);
pub const ENEMY_ATTACK_GROWTH: (u32, u32) = (11, 10);

// Escape chance: base + per_level * max(0, player_level - enemy_level), capped
pub const ESCAPE_BASE_CHANCE: f64 = 0.3;
pub const ESCAPE_CHANCE_PER_LEVEL: f64 = 0.05;
pub const ESCAPE_MAX_CHANCE: f64 = 0.9;

// Loot
pub const LOOT_DROP_PERCENT: u32 = 30;

// Exploration
pub const EXPLORATION_ROUNDS: u32 = 10;

// Save file
pub const SAVE_DIR_NAME: &str = ".ermanda";
pub const SAVE_FILE_NAME: &str = "savegame.json";
