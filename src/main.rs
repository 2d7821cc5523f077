use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use qea::config::QeaConfig;
use qea::error::QeaResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags given on the command line override its values.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Evaluate(cmd::evaluate::EvaluateArgs),
}

fn main() {
    // Raw matches tell user-typed flags apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Search(args) => {
            let sub_matches = matches.subcommand_matches("search").unwrap_or(&matches);
            resolve_config(cli.config.as_deref(), &args.config, sub_matches)
                .and_then(|config| cmd::search::run(args, config))
        }
        Commands::Evaluate(args) => cmd::evaluate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &QeaConfig,
    matches: &ArgMatches,
) -> QeaResult<QeaConfig> {
    match path {
        Some(path) => {
            info!("📂 Loading config from: {}", path);
            let mut config = QeaConfig::load_from_file(path)?;
            config.merge_from_cli(cli_config, matches);
            Ok(config)
        }
        None => Ok(cli_config.clone()),
    }
}
