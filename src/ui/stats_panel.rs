use crossterm::style::Stylize;

use ermanda::core::{ExplorationOutcome, ExplorationReport};
use ermanda::{Location, Player, SlotKind};

const MENU_WIDTH: usize = 50;

/// Boxed main menu listing the unlocked locations and the other actions.
pub fn draw_main_menu(locations: &[&Location]) {
    let options = [
        "Q. Save game",
        "I. Inventory",
        "E. Equip item",
        "U. Unequip item",
        "S. Stats",
        "X. Exit",
    ];

    println!("╔{}╗", "═".repeat(MENU_WIDTH - 2));
    boxed_line("Available locations:", |s| s.yellow().to_string());
    for (i, location) in locations.iter().enumerate() {
        let text = format!(
            "{}. {} (Required level: {})",
            i + 1,
            location.name(),
            location.required_level()
        );
        boxed_line(&text, |s| s.cyan().to_string());
    }
    for option in options {
        boxed_line(option, |s| s.green().to_string());
    }
    println!("╚{}╝", "═".repeat(MENU_WIDTH - 2));
}

fn boxed_line(text: &str, paint: impl Fn(&str) -> String) {
    let padding = (MENU_WIDTH - 3).saturating_sub(text.chars().count());
    println!("║ {}{}║", paint(text), " ".repeat(padding));
}

pub fn draw_stats(player: &Player) {
    println!(
        "Level {} ({}/{})",
        player.level,
        player.experience,
        player.experience_to_next_level()
    );
    println!("HP: {}/{}", player.health, player.max_health);
    println!(
        "Attack Power: {} Magic Power: {}",
        player.attack_power, player.magic_power
    );
    for slot in [SlotKind::Weapon, SlotKind::Armor] {
        let name = player.equipped_item(slot).map_or("-", |item| item.name());
        println!("{}: {}", slot, name);
    }
}

pub fn draw_inventory(player: &Player) {
    if player.inventory.is_empty() {
        println!("Your inventory is empty.");
        return;
    }
    let worn: Vec<usize> = [SlotKind::Weapon, SlotKind::Armor]
        .into_iter()
        .filter_map(|slot| player.equipped_inventory_index(slot))
        .collect();
    for (i, item) in player.inventory.iter().enumerate() {
        let marker = if worn.contains(&i) {
            " (equipped)".green().to_string()
        } else {
            String::new()
        };
        println!("{}. {}{}", i + 1, item, marker);
    }
}

pub fn draw_exploration_summary(report: &ExplorationReport) {
    match report.outcome {
        ExplorationOutcome::Completed => println!(
            "{}",
            "You have completed the exploration of the location!".green()
        ),
        ExplorationOutcome::Defeated => println!(
            "{}",
            "You have lost the battle. You return to the main menu.".red()
        ),
        ExplorationOutcome::Escaped => println!(
            "{}",
            "You have successfully escaped. You return to the main menu.".yellow()
        ),
    }
    println!(
        "{}: {} victories in {} rounds, {} XP, {} item(s) found",
        report.location,
        report.victories,
        report.rounds_fought,
        report.experience_gained,
        report.loot.len()
    );
}
