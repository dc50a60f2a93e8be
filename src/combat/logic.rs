use rand::Rng;

use super::types::Enemy;
use crate::character::Player;
use crate::core::constants::{ESCAPE_BASE_CHANCE, ESCAPE_CHANCE_PER_LEVEL, ESCAPE_MAX_CHANCE};

/// One player decision per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Escape,
    /// Unrecognized input. The turn is spent doing nothing.
    Hesitate,
}

impl PlayerAction {
    /// Maps a menu choice to an action. Anything unrecognized wastes the turn.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().to_ascii_lowercase().as_str() {
            "1" | "a" | "attack" => PlayerAction::Attack,
            "2" | "e" | "escape" => PlayerAction::Escape,
            _ => PlayerAction::Hesitate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightState {
    InProgress,
    Victory,
    Defeat,
    Escaped,
}

impl FightState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FightState::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { damage: u32 },
    EnemyAttack { damage: u32 },
    EscapeSucceeded,
    EscapeFailed,
    TurnWasted,
    EnemyDied { experience_value: u32 },
    PlayerDied,
}

/// What happened during a single call to [`resolve_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub damage_dealt: Option<u32>,
    pub damage_taken: Option<u32>,
    pub events: Vec<CombatEvent>,
    pub state: FightState,
}

impl TurnOutcome {
    fn settled(state: FightState) -> Self {
        Self {
            damage_dealt: None,
            damage_taken: None,
            events: Vec::new(),
            state,
        }
    }
}

/// Chance to flee: 30% base, +5% per level above the enemy, capped at 90%.
///
/// Being under-leveled never lowers it below the base.
pub fn escape_chance(player_level: u32, enemy_level: u32) -> f64 {
    let level_difference = player_level as f64 - enemy_level as f64;
    let bonus = (level_difference * ESCAPE_CHANCE_PER_LEVEL).max(0.0);
    (ESCAPE_BASE_CHANCE + bonus).min(ESCAPE_MAX_CHANCE)
}

/// Rolls `round(power * (1 + U))` for a fresh `U` in `[0, 1)`.
///
/// Kept strictly below `2 * power`, so the result lies in `[power, 2 * power)`.
pub fn roll_attack_damage(power: u32, rng: &mut impl Rng) -> u32 {
    let roll: f64 = rng.gen();
    let damage = (power as f64 * (roll + 1.0)).round() as u32;
    if power == 0 {
        0
    } else {
        damage.clamp(power, 2 * power - 1)
    }
}

/// Advances combat by one player action plus any enemy retaliation.
///
/// The player's attack is checked before the enemy acts, so an enemy killed
/// this turn never strikes back.
pub fn resolve_turn(
    player: &mut Player,
    enemy: &mut Enemy,
    action: PlayerAction,
    rng: &mut impl Rng,
) -> TurnOutcome {
    if !enemy.is_alive() {
        return TurnOutcome::settled(FightState::Victory);
    }
    if !player.is_alive() {
        return TurnOutcome::settled(FightState::Defeat);
    }

    let mut outcome = TurnOutcome::settled(FightState::InProgress);

    match action {
        PlayerAction::Attack => {
            let damage = roll_attack_damage(player.attack_power, rng);
            enemy.take_damage(damage);
            outcome.damage_dealt = Some(damage);
            outcome.events.push(CombatEvent::PlayerAttack { damage });

            if !enemy.is_alive() {
                outcome.events.push(CombatEvent::EnemyDied {
                    experience_value: enemy.experience_value,
                });
                outcome.state = FightState::Victory;
            } else {
                enemy_retaliates(player, enemy, &mut outcome);
            }
        }
        PlayerAction::Escape => {
            let chance = escape_chance(player.level, enemy.level);
            let roll: f64 = rng.gen();
            if roll < chance {
                outcome.events.push(CombatEvent::EscapeSucceeded);
                outcome.state = FightState::Escaped;
            } else {
                outcome.events.push(CombatEvent::EscapeFailed);
                enemy_retaliates(player, enemy, &mut outcome);
            }
        }
        PlayerAction::Hesitate => {
            outcome.events.push(CombatEvent::TurnWasted);
        }
    }

    tracing::debug!(
        action = ?action,
        enemy = enemy.name(),
        enemy_health = enemy.health,
        player_health = player.health,
        state = ?outcome.state,
        "turn resolved"
    );

    outcome
}

fn enemy_retaliates(player: &mut Player, enemy: &Enemy, outcome: &mut TurnOutcome) {
    let damage = enemy.attack_damage();
    player.take_damage(damage);
    outcome.damage_taken = Some(damage);
    outcome.events.push(CombatEvent::EnemyAttack { damage });

    if !player.is_alive() {
        outcome.events.push(CombatEvent::PlayerDied);
        outcome.state = FightState::Defeat;
    }
}

/// Supplies the player's decision for each turn.
///
/// The menu reads stdin; the simulator and tests use fixed policies.
pub trait ActionSource {
    fn next_action(&mut self, player: &Player, enemy: &Enemy) -> PlayerAction;

    /// Called after every resolved turn. Presentation layers render here.
    fn observe(&mut self, _outcome: &TurnOutcome, _player: &Player, _enemy: &Enemy) {}
}

/// Attacks every turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysAttack;

impl ActionSource for AlwaysAttack {
    fn next_action(&mut self, _player: &Player, _enemy: &Enemy) -> PlayerAction {
        PlayerAction::Attack
    }
}

/// Attacks until health drops below a percentage of max, then tries to flee.
#[derive(Debug, Clone, Copy)]
pub struct Cautious {
    pub escape_below_percent: u32,
}

impl ActionSource for Cautious {
    fn next_action(&mut self, player: &Player, _enemy: &Enemy) -> PlayerAction {
        let threshold = player.max_health as u64 * self.escape_below_percent as u64 / 100;
        if (player.health as u64) < threshold {
            PlayerAction::Escape
        } else {
            PlayerAction::Attack
        }
    }
}

/// A single encounter: the enemy plus the fight's current state.
#[derive(Debug, Clone)]
pub struct Fight {
    enemy: Enemy,
    state: FightState,
    turns: u32,
}

impl Fight {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            state: FightState::InProgress,
            turns: 0,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn state(&self) -> FightState {
        self.state
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Resolves one turn. Once the fight is over this is a no-op.
    pub fn resolve_turn(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> TurnOutcome {
        if self.state.is_terminal() {
            return TurnOutcome::settled(self.state);
        }
        let outcome = resolve_turn(player, &mut self.enemy, action, rng);
        self.turns += 1;
        self.state = outcome.state;
        outcome
    }

    pub fn into_enemy(self) -> Enemy {
        self.enemy
    }
}

/// Runs the fight until Victory, Defeat or Escape.
pub fn run_fight(
    player: &mut Player,
    fight: &mut Fight,
    source: &mut impl ActionSource,
    rng: &mut impl Rng,
) -> FightState {
    while !fight.state().is_terminal() {
        let action = source.next_action(player, fight.enemy());
        let outcome = fight.resolve_turn(player, action, rng);
        source.observe(&outcome, player, fight.enemy());
    }
    tracing::debug!(
        enemy = fight.enemy().name(),
        turns = fight.turns(),
        state = ?fight.state(),
        "fight finished"
    );
    fight.state()
}
