use crate::reports;
use clap::Args;
use qea::api;
use qea::config::QeaConfig;
use qea::error::{QeaError, QeaResult};
use qea::history::HistoryRecorder;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: QeaConfig,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Independent optimizers to run in parallel.
    #[arg(short = 'r', long, default_value_t = 1)]
    pub runs: usize,

    /// Per-generation trace as CSV (single run only).
    #[arg(long)]
    pub history: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SearchArgs, config: QeaConfig) -> QeaResult<()> {
    if args.runs == 0 {
        return Err(QeaError::InvalidParameter(
            "--runs must be at least 1".to_string(),
        ));
    }

    info!(
        "🔬 Optimizing {} in {} dimensions ({} iterations x {} samples, elite {})",
        config.problem.function,
        config.problem.n_dims,
        config.search.n_iterations,
        config.search.sample_size,
        config.search.elitist_count
    );

    let start = Instant::now();

    let summaries = if args.runs == 1 {
        let mut recorder = HistoryRecorder::new();
        let summary = api::optimize_with(&config, 0, args.seed, &mut recorder)?;

        if let Some(path) = &args.history {
            recorder.write_csv(path)?;
            info!("📝 History written to {}", path.display());
        }
        vec![summary]
    } else {
        if args.history.is_some() {
            warn!("⚠️  --history is only recorded for single runs. Ignoring.");
        }
        info!("🔥 Spawning {} independent runs", args.runs);
        api::optimize_many(&config, args.runs, args.seed)?
    };

    info!("Took {:?}", start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    reports::runs(&summaries);
    if let Some(best) = summaries.first() {
        println!("Best cost: {:.6}", best.best_cost);
    }

    Ok(())
}
