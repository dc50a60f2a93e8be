//! Enemy stat scaling by level.
//!
//! Growth compounds per level above 1. Health grows faster than attack so
//! high-level fights last longer without one-shotting the player.

use crate::core::constants::{ENEMY_ATTACK_GROWTH, ENEMY_HEALTH_GROWTH};

/// `round(base * growth^(level - 1))` with halves rounded up; level 1 (or 0)
/// returns `base` untouched.
///
/// `growth` is an exact fraction `(numerator, denominator)`. The product is
/// computed in integers so that values landing exactly on `.5` (a level 2
/// Wolf's 57.5 HP) round up instead of drifting below in binary floats.
pub fn scale_stat(base: u32, growth: (u32, u32), level: u32) -> u32 {
    if level <= 1 {
        return base;
    }
    let (num, den) = growth;
    let exponent = level - 1;

    match exact_scale(base, num, den, exponent) {
        Some(value) => value,
        // Past ~level 27 the integer powers overflow; the float result is
        // far from any half there.
        None => {
            let ratio = num as f64 / den as f64;
            (base as f64 * ratio.powi(exponent as i32)).round() as u32
        }
    }
}

fn exact_scale(base: u32, num: u32, den: u32, exponent: u32) -> Option<u32> {
    let numerator = (num as u128).checked_pow(exponent)?.checked_mul(base as u128)?;
    let denominator = (den as u128).checked_pow(exponent)?;
    if denominator == 0 {
        return None;
    }
    let rounded = (numerator.checked_mul(2)?.checked_add(denominator)?) / (denominator * 2);
    u32::try_from(rounded).ok()
}

/// Returns scaled `(health, attack_power)` for an enemy at `level`.
pub fn scale_enemy_stats(base_health: u32, base_attack_power: u32, level: u32) -> (u32, u32) {
    (
        scale_stat(base_health, ENEMY_HEALTH_GROWTH, level),
        scale_stat(base_attack_power, ENEMY_ATTACK_GROWTH, level),
    )
}
