//! Headless session simulator CLI.
//!
//! Plays many seeded sessions with a scripted gesture policy and reports
//! how long the agent survives. Useful for tuning gravity, gap and speed.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 100 autopilot runs
//!   cargo run --bin simulate -- -p random -n 500      # 500 random-flap runs
//!   cargo run --bin simulate -- --seed 42 --json      # Reproducible, save JSON

use handflap::core::logging::init_stderr_logging;
use handflap::simulator::{run_simulation, Policy, SimConfig};
use handflap::SessionConfig;
use std::env;
use std::path::Path;

fn main() {
    init_stderr_logging();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(1);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 HANDFLAP SESSION SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Policy:         {}", config.policy.name());
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!(
        "  Gravity / Jump: {} / {}",
        config.session.gravity, config.session.jump_force
    );
    println!("  Pipe Gap:       {}", config.session.pipe_gap);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(args[i].as_str(), value)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args[i].as_str(), value)?);
                i += 1;
            }
            "-t" | "--ticks" => {
                config.max_ticks_per_run = parse_value(args[i].as_str(), value)?;
                i += 1;
            }
            "-p" | "--policy" => {
                let name = value.ok_or("--policy needs a value")?;
                config.policy =
                    Policy::parse(name).ok_or_else(|| format!("Unknown policy: {}", name))?;
                i += 1;
            }
            "--flap-chance" => {
                let chance: f64 = parse_value(args[i].as_str(), value)?;
                if !(0.0..=1.0).contains(&chance) {
                    return Err("--flap-chance must be between 0 and 1".to_string());
                }
                config.policy = Policy::Random { flap_chance: chance };
                i += 1;
            }
            "-c" | "--config" => {
                let path = value.ok_or("--config needs a path")?;
                config.session = SessionConfig::load(Path::new(path)).map_err(|e| e.to_string())?;
                i += 1;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn print_help() {
    println!("Handflap Session Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of sessions (default: 100)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --ticks <T>       Max ticks per session (default: 18000)");
    println!("    -p, --policy <P>      idle | random | autopilot (default: autopilot)");
    println!("    --flap-chance <F>     Random policy flap probability per tick");
    println!("    -c, --config <PATH>   Session config JSON");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
}
