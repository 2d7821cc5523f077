use crate::config::QeaConfig;
use crate::error::QeaResult;
use crate::optimizer::{ProgressCallback, Qea, Silent};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub run: usize,
    pub seed: Option<u64>,
    pub best_cost: f64,
    pub best_point: Vec<f64>,
    pub generations: usize,
    pub elapsed_ms: u128,
}

/// Service: one optimization of the configured benchmark.
pub fn optimize(config: &QeaConfig, seed: Option<u64>) -> QeaResult<RunSummary> {
    optimize_with(config, 0, seed, &mut Silent)
}

/// Service: one optimization with a caller-supplied progress callback.
pub fn optimize_with<P: ProgressCallback + ?Sized>(
    config: &QeaConfig,
    run: usize,
    seed: Option<u64>,
    progress: &mut P,
) -> QeaResult<RunSummary> {
    let settings = config.settings()?;
    let mut qea = Qea::new(settings, config.problem.function, seed)?;

    let start = Instant::now();
    let outcome = qea.train(
        config.search.n_iterations,
        config.search.sample_size,
        progress,
    )?;
    let elapsed = start.elapsed();

    info!(
        "Run {} finished: cost {:.6} after {} generations in {:?}",
        run, outcome.best_cost, outcome.generations, elapsed
    );

    Ok(RunSummary {
        run,
        seed,
        best_cost: outcome.best_cost,
        best_point: outcome.best_point,
        generations: outcome.generations,
        elapsed_ms: elapsed.as_millis(),
    })
}

/// Service: `runs` independent optimizations in parallel, sorted by best cost.
///
/// Run `i` is seeded with `seed + i`, so a seeded batch is reproducible.
/// Each run owns its own optimizer and generator; nothing is shared.
pub fn optimize_many(
    config: &QeaConfig,
    runs: usize,
    seed: Option<u64>,
) -> QeaResult<Vec<RunSummary>> {
    // Validate once up front so a bad config fails before any thread starts
    config.settings()?;

    let mut summaries = (0..runs)
        .into_par_iter()
        .map(|i| {
            let run_seed = seed.map(|s| s.wrapping_add(i as u64));
            optimize_with(config, i, run_seed, &mut Silent)
        })
        .collect::<QeaResult<Vec<_>>>()?;

    summaries.sort_by(|a, b| a.best_cost.total_cmp(&b.best_cost));
    Ok(summaries)
}
