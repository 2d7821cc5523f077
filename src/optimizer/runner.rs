use super::sampling::BoundedGaussianSampler;
use super::selection;
use super::types::{Bounds, Individual, Scalers};
use super::update::QuantumUpdateRule;
use crate::cost::CostFunction;
use crate::error::{QeaError, QeaResult};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_REPORT_INTERVAL: usize = 100;

#[derive(Debug, Clone)]
pub struct QeaSettings {
    pub n_dims: usize,
    pub bounds: Bounds,
    pub scalers: Scalers,
    pub elitist_count: usize,
    /// Generations between progress log lines. Zero disables them.
    pub report_interval: usize,
}

impl QeaSettings {
    pub fn new(n_dims: usize, bounds: Bounds, scalers: Scalers, elitist_count: usize) -> Self {
        Self {
            n_dims,
            bounds,
            scalers,
            elitist_count,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }

    pub fn with_report_interval(mut self, report_interval: usize) -> Self {
        self.report_interval = report_interval;
        self
    }

    pub fn validate(&self) -> QeaResult<()> {
        if self.n_dims == 0 {
            return Err(QeaError::InvalidParameter(
                "n_dims must be at least 1".to_string(),
            ));
        }
        if self.bounds.dims() != self.n_dims {
            return Err(QeaError::DimensionMismatch {
                what: "bounds",
                expected: self.n_dims,
                found: self.bounds.dims(),
            });
        }
        if self.scalers.dims() != self.n_dims {
            return Err(QeaError::DimensionMismatch {
                what: "scalers",
                expected: self.n_dims,
                found: self.scalers.dims(),
            });
        }
        if self.elitist_count == 0 {
            return Err(QeaError::InvalidParameter(
                "elitist count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lifecycle of a [`Qea`] instance.
///
/// `Running` covers the elitist generations; `Finalizing` is the single trailing
/// generation that selects only the best sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Ready,
    Running,
    Finalizing,
    Done,
}

impl Phase {
    pub fn elite_count(&self, configured: usize) -> usize {
        match self {
            Phase::Finalizing => 1,
            _ => configured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalBest {
    pub point: Vec<f64>,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Index within the current training call.
    pub generation: usize,
    pub phase: Phase,
    pub elite_count: usize,
    /// Single-point cost of the elite centroid.
    pub elite_cost: f64,
    /// Lowest cost among the raw samples of this generation.
    pub batch_best_cost: f64,
    pub global_best_cost: f64,
}

/// Receives a report after every generation.
/// Returning `false` stops training before the next generation starts.
pub trait ProgressCallback {
    fn on_generation(&mut self, report: &GenerationReport) -> bool;
}

impl<F> ProgressCallback for F
where
    F: FnMut(&GenerationReport) -> bool,
{
    fn on_generation(&mut self, report: &GenerationReport) -> bool {
        self(report)
    }
}

/// Callback that never interrupts and records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_generation(&mut self, _report: &GenerationReport) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub best_point: Vec<f64>,
    pub best_cost: f64,
    /// Final mean of the individual; usually close to `best_point` but not equal.
    pub mean: Vec<f64>,
    pub generations: usize,
    /// False when a progress callback stopped the run early.
    pub completed: bool,
}

/// Quantum-inspired evolutionary optimizer over a single Gaussian individual.
pub struct Qea<C, R = SmallRng> {
    settings: QeaSettings,
    cost_fn: C,
    update_rule: QuantumUpdateRule,
    rng: R,
    individual: Option<Individual>,
    global_best: Option<GlobalBest>,
    phase: Phase,
    generations_run: usize,
}

impl<C: CostFunction> Qea<C, SmallRng> {
    /// Seeded when `seed` is given, otherwise drawn from OS entropy.
    pub fn new(settings: QeaSettings, cost_fn: C, seed: Option<u64>) -> QeaResult<Self> {
        let rng = if let Some(s) = seed {
            SmallRng::seed_from_u64(s)
        } else {
            SmallRng::from_entropy()
        };
        Self::with_rng(settings, cost_fn, rng)
    }
}

impl<C: CostFunction, R: Rng> Qea<C, R> {
    pub fn with_rng(settings: QeaSettings, cost_fn: C, rng: R) -> QeaResult<Self> {
        settings.validate()?;
        let update_rule = QuantumUpdateRule::new(settings.scalers.clone());

        Ok(Self {
            settings,
            cost_fn,
            update_rule,
            rng,
            individual: None,
            global_best: None,
            phase: Phase::Ready,
            generations_run: 0,
        })
    }

    /// Draws a fresh individual uniformly inside the bounds with spread equal to
    /// the bound width, and resets the global best to its mean.
    pub fn initialize(&mut self) -> &Individual {
        let bounds = &self.settings.bounds;
        let n_dims = self.settings.n_dims;

        let mut mean = Vec::with_capacity(n_dims);
        let mut spread = Vec::with_capacity(n_dims);
        for d in 0..n_dims {
            let u: f64 = self.rng.gen();
            mean.push(bounds.lower()[d] + u * bounds.width(d));
            spread.push(bounds.width(d));
        }

        let cost = self.cost_fn.cost(&mean);
        self.global_best = Some(GlobalBest {
            point: mean.clone(),
            cost,
        });
        self.phase = Phase::Ready;
        self.individual.insert(Individual::new(mean, spread))
    }

    /// Runs `n_iterations` elitist generations followed by one greedy generation.
    ///
    /// Training continues from the current individual when one exists, so calling
    /// this again on a finished optimizer accumulates further generations.
    pub fn train<P: ProgressCallback + ?Sized>(
        &mut self,
        n_iterations: usize,
        sample_size: usize,
        progress: &mut P,
    ) -> QeaResult<TrainingOutcome> {
        if sample_size == 0 {
            return Err(QeaError::InvalidParameter(
                "sample size must be at least 1".to_string(),
            ));
        }
        if self.settings.elitist_count > sample_size {
            return Err(QeaError::EliteExceedsSample {
                elitist_count: self.settings.elitist_count,
                sample_size,
            });
        }

        if self.individual.is_none() {
            self.initialize();
        }

        let mut generations = 0;
        let mut completed = true;

        for generation in 0..=n_iterations {
            let phase = if generation < n_iterations {
                Phase::Running
            } else {
                Phase::Finalizing
            };
            self.phase = phase;

            let report = match self.step(generation, phase, sample_size) {
                Ok(report) => report,
                Err(e) => {
                    self.phase = Phase::Done;
                    return Err(e);
                }
            };
            generations += 1;
            self.generations_run += 1;

            let interval = self.settings.report_interval;
            if interval > 0 && generation % interval == 0 {
                info!(
                    "Generation {:5} | Elite: {:.6} | Best: {:.6}",
                    generation, report.elite_cost, report.global_best_cost
                );
            }
            if phase == Phase::Finalizing {
                debug!(
                    "Greedy pass | Elite: {:.6} | Best: {:.6}",
                    report.elite_cost, report.global_best_cost
                );
            }

            if !progress.on_generation(&report) {
                debug!("Training interrupted after generation {}", generation);
                completed = false;
                break;
            }
        }

        self.phase = Phase::Done;
        self.outcome(generations, completed)
    }

    fn step(
        &mut self,
        generation: usize,
        phase: Phase,
        sample_size: usize,
    ) -> QeaResult<GenerationReport> {
        let elite_count = phase.elite_count(self.settings.elitist_count);

        let (Some(individual), Some(best)) = (self.individual.as_mut(), self.global_best.as_mut())
        else {
            return Err(QeaError::Config(
                "optimizer stepped before initialization".to_string(),
            ));
        };

        let batch = BoundedGaussianSampler::new(&self.settings.bounds).sample(
            &mut self.rng,
            individual,
            sample_size,
        )?;

        let elite = selection::select(&batch, &self.cost_fn, elite_count)?;
        let elite_cost = self.cost_fn.cost(&elite.point);

        if elite_cost < best.cost {
            best.point.clone_from(&elite.point);
            best.cost = elite_cost;
        }

        self.update_rule.apply(individual, &elite.point, &best.point);

        Ok(GenerationReport {
            generation,
            phase,
            elite_count,
            elite_cost,
            batch_best_cost: elite.best_cost,
            global_best_cost: best.cost,
        })
    }

    fn outcome(&self, generations: usize, completed: bool) -> QeaResult<TrainingOutcome> {
        match (&self.individual, &self.global_best) {
            (Some(individual), Some(best)) => Ok(TrainingOutcome {
                best_point: best.point.clone(),
                best_cost: best.cost,
                mean: individual.mean.clone(),
                generations,
                completed,
            }),
            _ => Err(QeaError::Config(
                "optimizer has not been initialized".to_string(),
            )),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &QeaSettings {
        &self.settings
    }

    pub fn cost_fn(&self) -> &C {
        &self.cost_fn
    }

    pub fn individual(&self) -> Option<&Individual> {
        self.individual.as_ref()
    }

    pub fn global_best(&self) -> Option<&GlobalBest> {
        self.global_best.as_ref()
    }

    pub fn global_best_cost(&self) -> Option<f64> {
        self.global_best.as_ref().map(|best| best.cost)
    }

    /// Generations executed across every training call.
    pub fn generations_run(&self) -> usize {
        self.generations_run
    }
}
