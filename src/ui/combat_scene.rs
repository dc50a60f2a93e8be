use crossterm::style::Stylize;
use std::io::BufRead;

use super::input::Prompt;
use ermanda::combat::{ActionSource, CombatEvent, Enemy, PlayerAction, TurnOutcome};
use ermanda::core::{ExplorationObserver, VictoryReward, EXPLORATION_ROUNDS};
use ermanda::Player;

/// Asks the player for each combat action and narrates the result.
pub struct ConsoleFighter<'a, R: BufRead> {
    prompt: &'a mut Prompt<R>,
}

impl<'a, R: BufRead> ConsoleFighter<'a, R> {
    pub fn new(prompt: &'a mut Prompt<R>) -> Self {
        Self { prompt }
    }
}

impl<R: BufRead> ActionSource for ConsoleFighter<'_, R> {
    fn next_action(&mut self, player: &Player, enemy: &Enemy) -> PlayerAction {
        println!();
        println!(
            "Your HP: {}, Opponent's HP: {}",
            player.health.to_string().green(),
            enemy.health.to_string().red()
        );
        println!("{}", "1. Attack".cyan());
        println!("{}", "2. Escape".yellow());

        match self.prompt.ask("Select an action: ") {
            Some(choice) => PlayerAction::from_choice(&choice),
            // Input closed: keep trying to leave so the fight still ends.
            None => PlayerAction::Escape,
        }
    }

    fn observe(&mut self, outcome: &TurnOutcome, player: &Player, enemy: &Enemy) {
        for event in &outcome.events {
            match event {
                CombatEvent::PlayerAttack { damage } => {
                    println!("{}", format!("You dealt {} damage!", damage).cyan());
                    println!(
                        "{} received {} damage. Left health: {}",
                        enemy.name(),
                        damage,
                        enemy.health
                    );
                }
                CombatEvent::EnemyAttack { damage } => {
                    println!("{} {}!", enemy.name(), enemy.archetype.attack_verb());
                    println!(
                        "You received {} damage. Your health: {}",
                        damage, player.health
                    );
                }
                CombatEvent::EscapeFailed => {
                    println!("{}", "You failed to escape. The opponent is attacking!".red());
                }
                CombatEvent::EscapeSucceeded => {
                    println!("{}", "You slip away from the fight.".yellow());
                }
                CombatEvent::TurnWasted => {
                    println!("{}", "Incorrect choice. You lose a turn!".red());
                }
                CombatEvent::EnemyDied { .. } | CombatEvent::PlayerDied => {}
            }
        }
    }
}

/// Prints round headers and victory rewards during exploration.
pub struct Narrator;

impl ExplorationObserver for Narrator {
    fn encounter_started(&mut self, round: u32, enemy: &Enemy) {
        println!();
        println!("{}", format!("Round {}/{}", round, EXPLORATION_ROUNDS).magenta());
        println!(
            "You encounter {} (Level {}, HP {}, Attack Power {})",
            enemy.name().red(),
            enemy.level,
            enemy.health.to_string().green(),
            enemy.attack_power
        );
    }

    fn victory(&mut self, reward: &VictoryReward) {
        println!(
            "{}",
            "Congratulations! You have defeated your opponent!".green()
        );
        println!(
            "You have gained {} experience points!",
            reward.experience_gained
        );
        if reward.leveled_up {
            println!(
                "{}",
                format!(
                    "Congratulations, you have advanced to level {}!",
                    reward.new_level
                )
                .green()
            );
        }
        if let Some(item) = &reward.loot {
            println!("Item obtained: {}!", item.name().magenta());
        }
    }
}
