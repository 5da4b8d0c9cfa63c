use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an investment opportunity from a JSON request
    Score {
        /// Path to a JSON analysis request ({"region": {...}, "company": {...}});
        /// reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the raw JSON result instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Rank registry regions for an entity
    Match {
        /// Entity id to match (e.g. COMP-TECH in the sample registry)
        entity_id: String,

        /// Maximum number of matches to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the raw JSON results instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List registry regions with their development tiers
    Regions,
}

#[derive(Parser, Debug)]
#[command(name = "regiq")]
#[command(about = "Regional investment scoring and matching CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging (data-quality notes go to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/regiq/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to a YAML registry data file (overrides config and the built-in
    /// sample registry)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match regiq::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match cli.command {
        Commands::Score { input, json } => run_score(input, json, cli.verbose),
        Commands::Match {
            entity_id,
            limit,
            json,
        } => {
            let registry = load_registry(cli.data.or(config.data.clone()), cli.verbose);
            let limit = limit.or(config.limit).unwrap_or(5);
            run_match(&entity_id, &registry, limit, config.match_floor, json);
        }
        Commands::Regions => {
            let registry = load_registry(cli.data.or(config.data.clone()), cli.verbose);
            let use_colors = regiq::output::should_use_colors();
            println!("{}", regiq::output::format_region_list(&registry, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_score(input: Option<PathBuf>, json: bool, verbose: bool) {
    let content = match input {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to read {}: {}", path.display(), e);
                std::process::exit(EXIT_INPUT);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read stdin: {}", e);
                std::process::exit(EXIT_INPUT);
            }
            buf
        }
    };

    let request: regiq::metrics::AnalysisRequest = match serde_json::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid analysis request: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let mut notes = Vec::new();
    let region = request.region.normalize(&mut notes);
    let company = request.company.normalize();

    if verbose && !notes.is_empty() {
        eprintln!("Data-quality notes:");
        for note in &notes {
            eprintln!("  - {}", note);
        }
    }

    let result = regiq::score_investment(&region, &company);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        let use_colors = regiq::output::should_use_colors();
        println!("{}", regiq::output::format_result_report(&result, use_colors));
    }
}

fn run_match(
    entity_id: &str,
    registry: &regiq::Registry,
    limit: usize,
    floor: Option<f64>,
    json: bool,
) {
    let outcome = match floor {
        Some(f) => regiq::matching::find_matches_with_floor(entity_id, registry, limit, f),
        None => regiq::find_matches(entity_id, registry, limit),
    };

    match outcome {
        regiq::MatchOutcome::UnknownEntity(id) => {
            eprintln!("Entity not found: {}", id);
            std::process::exit(EXIT_INPUT);
        }
        regiq::MatchOutcome::Ranked(matches) => {
            if json {
                match serde_json::to_string_pretty(&matches) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to serialize matches: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                let use_colors = regiq::output::should_use_colors();
                println!("{}", regiq::output::format_match_table(&matches, use_colors));
            }
        }
    }
}

fn load_registry(data: Option<PathBuf>, verbose: bool) -> regiq::Registry {
    match data {
        Some(path) => {
            let mut notes = Vec::new();
            match regiq::seed::load_registry(&path, &mut notes) {
                Ok(registry) => {
                    if verbose && !notes.is_empty() {
                        eprintln!("Data-quality notes:");
                        for note in &notes {
                            eprintln!("  - {}", note);
                        }
                    }
                    registry
                }
                Err(e) => {
                    eprintln!("Data file error: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        None => regiq::seed::sample_registry(),
    }
}
