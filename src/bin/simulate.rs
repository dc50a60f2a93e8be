//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations of exploration sessions to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 runs in Ermanda
//!   cargo run --bin simulate -- -l "Salal Town" --level 3
//!   cargo run --bin simulate -- --seed 42             # Reproducible run

use ermanda::simulator::{run_simulation, SimConfig, SimPolicy};
use ermanda::Catalog;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

struct CliOptions {
    config: SimConfig,
    json: bool,
    show_level_curve: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            process::exit(1);
        }
    };
    let config = options.config;

    if !options.json {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              ERMANDA BALANCE SIMULATOR                        ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Location:       {}", config.location);
        println!("  Starting Level: {}", config.starting_level);
        println!("  Sessions:       {}", config.sessions_per_run);
        println!("  Policy:         {:?}", config.policy);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = match run_simulation(&config, &Catalog::default_world()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if options.json {
        println!("{}", report.to_json());
        return;
    }

    println!("{}", report.to_text());
    if options.show_level_curve {
        println!("{}", report.level_curve_text());
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        config: SimConfig::default(),
        json: false,
        show_level_curve: false,
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                options.config.num_runs = parse_value(&args[i], value)?;
                i += 1;
            }
            "-l" | "--location" => {
                options.config.location = value.ok_or("--location needs a name")?.clone();
                i += 1;
            }
            "-s" | "--seed" => {
                options.config.seed = Some(parse_value(&args[i], value)?);
                i += 1;
            }
            "--level" => {
                options.config.starting_level = parse_value(&args[i], value)?;
                i += 1;
            }
            "--sessions" => {
                options.config.sessions_per_run = parse_value(&args[i], value)?;
                i += 1;
            }
            "--cautious" => {
                options.config.policy = SimPolicy::Cautious {
                    escape_below_percent: 30,
                };
            }
            "--no-equip" => {
                options.config.auto_equip = false;
            }
            "--quick" => {
                options.config = SimConfig::location_balance_test(
                    &options.config.location,
                    options.config.starting_level,
                );
            }
            "--level-curve" => {
                options.show_level_curve = true;
            }
            "--json" => {
                options.json = true;
            }
            "-v" | "--verbose" => {
                options.config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("{} needs a value", flag))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn print_help() {
    println!("Ermanda Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated players (default: 1000)");
    println!("    -l, --location <L>    Location to explore (default: Ermanda)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --level <L>           Starting player level (default: 1)");
    println!("    --sessions <N>        Exploration sessions per run (default: 10)");
    println!("    --cautious            Flee below 30% health instead of always attacking");
    println!("    --no-equip            Never equip dropped items");
    println!("    --quick               Quick test (200 runs, 5 sessions)");
    println!("    --level-curve         Show final level distribution");
    println!("    --json                Print the report as JSON");
    println!("    -v, --verbose         Per-run output");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate -- --seed 42 --level-curve");
    println!("    cargo run --bin simulate -- -l \"Hazard City\" --level 5 --cautious");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.config.num_runs, 1000);
        assert_eq!(options.config.location, "Ermanda");
        assert!(!options.json);
    }

    #[test]
    fn test_parse_full_command_line() {
        let options = parse_args(&args(&[
            "-n", "50", "-l", "Salal Town", "--seed", "7", "--level", "3", "--cautious", "--json",
        ]))
        .unwrap();
        assert_eq!(options.config.num_runs, 50);
        assert_eq!(options.config.location, "Salal Town");
        assert_eq!(options.config.seed, Some(7));
        assert_eq!(options.config.starting_level, 3);
        assert!(matches!(options.config.policy, SimPolicy::Cautious { .. }));
        assert!(options.json);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--runs"])).is_err());
        assert!(parse_args(&args(&["--runs", "many"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
