use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use cohort::config::Config;
use cohort::roster::loader;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/roster.csv")]
    matrix: String,

    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Group(cmd::group::GroupArgs),
    Accept(cmd::accept::AcceptArgs),
}

fn main() {
    // 1. Parse Raw Matches (to tell typed flags apart from clap defaults)
    let matches = Cli::command().get_matches();

    // 2. Construct CLI struct (populated with defaults)
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // 3. Initialize logging on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("🚀 Initializing Cohort...");

    // 4. Load the affinity table (Loading ends in a frozen Roster)
    let roster = loader::load_roster(&cli.matrix).unwrap_or_else(|e| {
        error!("❌ Could not load affinity table '{}': {}", cli.matrix, e);
        process::exit(1);
    });

    // 5. Execute
    let outcome = match cli.command {
        Commands::Group(args) => {
            // A. Resolve search settings: JSON file is the base when given
            let mut params = match &cli.config_file {
                Some(path) => {
                    info!("⚙️  Loading settings from: {}", path);
                    Config::load_from_file(path)
                        .unwrap_or_else(|e| {
                            error!("❌ {}", e);
                            process::exit(1);
                        })
                        .search
                }
                None => args.config.search.clone(),
            };
            // B. Merge explicit flags onto the file settings; clap defaults do not count
            if cli.config_file.is_some() {
                if let Some(sub_matches) = matches.subcommand_matches("group") {
                    params.merge_from_cli(&args.config.search, sub_matches);
                }
            }
            cmd::group::run(&args, params, &roster)
        }
        // Accept writes back to --output, or over the matrix it loaded
        Commands::Accept(args) => cmd::accept::run(&args, roster, &cli.matrix),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
