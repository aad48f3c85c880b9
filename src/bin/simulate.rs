//! Dice simulator CLI.
//!
//! Roll weighted dice and print jackpot, face frequency and
//! combination/permutation statistics.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                              # 3d6, 1000 rolls
//!   cargo run --bin simulate -- --faces H,T -d 2 -n 5     # two coins, 5 tosses
//!   cargo run --bin simulate -- --weight 6=5 --seed 42    # loaded sixes, reproducible

use montecarlo::build_info::version_line;
use montecarlo::simulator::{run_simulation, SimConfig};
use montecarlo::{Form, GameView};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            process::exit(2);
        }
    };

    let level = match config.verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if json {
        println!("{}", report.to_json());
        return;
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MONTE CARLO DICE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Faces:          {}", config.faces.join(", "));
    println!("  Dice:           {}", config.num_dice);
    println!("  Rolls:          {}", config.num_rolls);
    for (face, weight) in &config.weights {
        println!("  Weight:         {} = {}", face, weight);
    }
    if config.independent_dice {
        println!("  Dice:           independent weight tables");
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    // Small plays are printed in full, large ones only when verbose
    if config.verbosity >= 2 || (config.verbosity == 1 && config.num_rolls <= 50) {
        print_outcomes(report.view.as_ref());
    }

    println!("{}", report.to_text());
}

fn print_outcomes(view: Option<&GameView>) {
    match view {
        Some(GameView::Wide(table)) => {
            let header: Vec<String> = (0..table.num_dice()).map(|d| format!("{:>6}", d)).collect();
            println!("roll_number {}", header.join(""));
            for (roll_number, row) in table.rows().iter().enumerate() {
                let cells: Vec<String> = row.iter().map(|f| format!("{:>6}", f.to_string())).collect();
                println!("{:>11} {}", roll_number, cells.join(""));
            }
        }
        Some(GameView::Narrow(table)) => {
            println!("roll_number  die_number  outcome");
            for row in table.rows() {
                println!(
                    "{:>11} {:>11}  {}",
                    row.roll_number, row.die_number, row.outcome
                );
            }
        }
        None => println!("(no rolls)"),
    }
    println!();
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--faces" => {
                config.faces = next_value(args, &mut i, "--faces")?
                    .split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect();
            }
            "-d" | "--dice" => {
                config.num_dice = next_value(args, &mut i, "--dice")?
                    .parse()
                    .map_err(|_| "--dice requires a number".to_string())?;
            }
            "-n" | "--rolls" => {
                config.num_rolls = next_value(args, &mut i, "--rolls")?
                    .parse()
                    .map_err(|_| "--rolls requires a number".to_string())?;
            }
            "-s" | "--seed" => {
                config.seed = Some(
                    next_value(args, &mut i, "--seed")?
                        .parse()
                        .map_err(|_| "--seed requires a number".to_string())?,
                );
            }
            "-w" | "--weight" => {
                let spec = next_value(args, &mut i, "--weight")?;
                let (face, weight) = spec
                    .split_once('=')
                    .ok_or_else(|| format!("--weight expects FACE=WEIGHT, got '{}'", spec))?;
                config.weights.push((face.to_string(), weight.to_string()));
            }
            "--form" => {
                config.form = next_value(args, &mut i, "--form")?
                    .parse::<Form>()
                    .map_err(|e| e.to_string())?;
            }
            "--independent" => config.independent_dice = true,
            "--coins" => config = SimConfig::coin_toss(2, config.num_rolls),
            "--json" => json = true,
            "-q" | "--quiet" => config.verbosity = 0,
            "-v" | "--verbose" => config.verbosity = 2,
            "-V" | "--version" => {
                println!("{}", version_line());
                process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => return Err(format!("unknown option '{}'", other)),
        }
        i += 1;
    }

    Ok((config, json))
}

fn print_help() {
    println!("Monte Carlo Dice Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -f, --faces <A,B,..>  Comma-separated face labels (default: 1,2,3,4,5,6)");
    println!("    -d, --dice <N>        Number of dice rolled together (default: 3)");
    println!("    -n, --rolls <N>       Number of rolls (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -w, --weight <F=W>    Set the weight of face F to W (repeatable)");
    println!("    --independent         Give each die its own weight table");
    println!("    --form <wide|narrow>  Layout of the printed outcome table");
    println!("    --coins               Two fair coins");
    println!("    --json                Print the report as JSON");
    println!("    -q, --quiet           Summary only");
    println!("    -v, --verbose         Log every roll");
    println!("    -V, --version         Show version and build info");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate -- --faces H,T -d 2 -n 5 --seed 42");
    println!("    cargo run --bin simulate -- --weight 6=5 -n 10000");
    println!("    cargo run --bin simulate -- --coins -n 20 --form narrow");
}
