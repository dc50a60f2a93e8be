mod ui;

use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use ermanda::build_info;
use ermanda::core::explore_with_observer;
use ermanda::items::unequip;
use ermanda::{Catalog, GameError, Player, SaveManager, SlotKind};
use ui::stats_panel::{draw_exploration_summary, draw_inventory, draw_main_menu, draw_stats};
use ui::{ConsoleFighter, Narrator, Prompt};

struct Options {
    save_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn main() {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'ermanda --help' for usage.");
            process::exit(1);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        save_path: None,
        seed: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!(
                    "ermanda {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                process::exit(0);
            }
            "--help" | "-h" => {
                println!("Ermanda - Turn-Based Console RPG\n");
                println!("Usage: ermanda [options]\n");
                println!("Options:");
                println!("  --save <path>  Use a specific save file");
                println!("  --seed <n>     Seed the random number generator");
                println!("  --version      Show version information");
                println!("  --help         Show this help message");
                println!("\nSet RUST_LOG=debug to trace combat on stderr.");
                process::exit(0);
            }
            "--save" => {
                let path = args.next().ok_or("--save needs a path")?;
                options.save_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let seed = args.next().ok_or("--seed needs a number")?;
                let seed = seed
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", seed))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn run(options: Options) -> Result<(), GameError> {
    let save_manager = match options.save_path {
        Some(path) => SaveManager::with_path(path),
        None => SaveManager::new().map_err(|e| GameError::SaveFailed(e.to_string()))?,
    };
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let catalog = Catalog::default_world();

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());

    let Some(mut player) = start_game(&mut prompt, &save_manager) else {
        return Ok(());
    };

    loop {
        if prompt.pause().is_none() {
            return Ok(());
        }
        let locations = catalog.available_locations(player.level);
        draw_main_menu(&locations);

        let Some(choice) = prompt.ask("Select a location or action: ") else {
            return Ok(());
        };

        match choice.to_lowercase().as_str() {
            "" => println!("{}", "Enter proper input.".red()),
            "q" => {
                save_manager.save(&player)?;
                println!("{}", "The game has been saved.".green());
            }
            "i" => draw_inventory(&player),
            "s" => draw_stats(&player),
            "e" => equip_menu(&mut prompt, &mut player),
            "u" => unequip_menu(&mut prompt, &mut player),
            "x" => return Ok(()),
            other => match other.parse::<usize>() {
                Ok(index) if (1..=locations.len()).contains(&index) => {
                    let location = locations[index - 1];
                    println!("\n{}", format!("Exploring {}", location.name()).yellow());
                    let mut fighter = ConsoleFighter::new(&mut prompt);
                    let report = explore_with_observer(
                        &mut player,
                        location,
                        &mut fighter,
                        &mut Narrator,
                        &mut rng,
                    )?;
                    draw_exploration_summary(&report);
                }
                _ => println!("{}", "Invalid choice. Try again.".red()),
            },
        }
    }
}

/// New game or load. A failed load falls back to a fresh character.
fn start_game<R: BufRead>(prompt: &mut Prompt<R>, save_manager: &SaveManager) -> Option<Player> {
    println!("Welcome to Ermanda!");
    println!("1. New game");
    println!("2. Load game");

    match prompt.ask("> ")?.as_str() {
        "2" => match save_manager.load() {
            Ok(player) => Some(player),
            Err(e) => {
                tracing::warn!(error = %e, "load failed, starting a new game");
                println!("Saved game not found. Starting a new game...");
                Some(Player::new())
            }
        },
        _ => Some(Player::new()),
    }
}

fn equip_menu<R: BufRead>(prompt: &mut Prompt<R>, player: &mut Player) {
    if player.inventory.is_empty() {
        println!("Your inventory is empty.");
        return;
    }
    draw_inventory(player);

    let Some(choice) = prompt.ask("Item number to equip: ") else {
        return;
    };
    match choice.parse::<usize>() {
        Ok(n) if (1..=player.inventory.len()).contains(&n) => {
            let name = player.inventory[n - 1].name().to_string();
            player.equip_from_inventory(n - 1);
            println!("Equipped item: {}", name.magenta());
        }
        _ => println!("{}", "Invalid choice.".red()),
    }
}

fn unequip_menu<R: BufRead>(prompt: &mut Prompt<R>, player: &mut Player) {
    let Some(choice) = prompt.ask("Unequip (W)eapon or (A)rmor: ") else {
        return;
    };
    let slot = match choice.to_lowercase().as_str() {
        "w" | "weapon" => SlotKind::Weapon,
        "a" | "armor" => SlotKind::Armor,
        _ => {
            println!("{}", "Invalid choice.".red());
            return;
        }
    };
    match unequip(player, slot) {
        Some(item) => println!("Unequipped item: {}", item.name()),
        None => println!("Nothing is equipped in the {} slot.", slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(args(&[])).unwrap();
        assert!(options.save_path.is_none());
        assert!(options.seed.is_none());
    }

    #[test]
    fn test_parse_args_save_and_seed() {
        let options = parse_args(args(&["--save", "/tmp/s.json", "--seed", "42"])).unwrap();
        assert_eq!(options.save_path, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(options.seed, Some(42));
    }

    #[test]
    fn test_parse_args_rejects_unknown() {
        assert!(parse_args(args(&["--turbo"])).is_err());
        assert!(parse_args(args(&["--seed", "abc"])).is_err());
        assert!(parse_args(args(&["--save"])).is_err());
    }
}
