use crate::cost::Benchmark;
use crate::error::{QeaError, QeaResult};
use crate::optimizer::runner::DEFAULT_REPORT_INTERVAL;
use crate::optimizer::{Bounds, QeaSettings, Scalers};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QeaConfig {
    #[command(flatten)]
    pub problem: ProblemParams,
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemParams {
    #[arg(long, value_enum, default_value_t = Benchmark::ShiftedSphere)]
    pub function: Benchmark,
    #[arg(long, default_value_t = 1000)]
    pub n_dims: usize,

    // One value for every dimension, or exactly n_dims comma-separated values
    #[arg(long, default_value = "5.12", allow_hyphen_values = true)]
    pub upper: String,
    #[arg(long, default_value = "-5", allow_hyphen_values = true)]
    pub lower: String,
}

impl Default for ProblemParams {
    fn default() -> Self {
        Self {
            function: Benchmark::ShiftedSphere,
            n_dims: 1000,
            upper: "5.12".to_string(),
            lower: "-5".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value = "1.003")]
    pub sigma_scaler: String,
    #[arg(long, default_value = "10")]
    pub mu_scaler: String,
    #[arg(long, default_value_t = 6)]
    pub elitist_count: usize,
    #[arg(long, default_value_t = 1000)]
    pub n_iterations: usize,
    #[arg(long, default_value_t = 200)]
    pub sample_size: usize,
    #[arg(long, default_value_t = DEFAULT_REPORT_INTERVAL)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            sigma_scaler: "1.003".to_string(),
            mu_scaler: "10".to_string(),
            elitist_count: 6,
            n_iterations: 1000,
            sample_size: 200,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

impl QeaConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> QeaResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            QeaError::Config(format!("could not read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every flag that was typed on the command line from `cli` into `self`.
    pub fn merge_from_cli(&mut self, cli: &QeaConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(problem, function);
        update_if_present!(problem, n_dims);
        update_if_present!(problem, upper);
        update_if_present!(problem, lower);

        update_if_present!(search, sigma_scaler);
        update_if_present!(search, mu_scaler);
        update_if_present!(search, elitist_count);
        update_if_present!(search, n_iterations);
        update_if_present!(search, sample_size);
        update_if_present!(search, report_interval);
    }

    pub fn settings(&self) -> QeaResult<QeaSettings> {
        let n_dims = self.problem.n_dims;

        let upper = parse_f64_list(&self.problem.upper, n_dims, "upper bounds")?;
        let lower = parse_f64_list(&self.problem.lower, n_dims, "lower bounds")?;
        let mu = parse_f64_list(&self.search.mu_scaler, n_dims, "mu scalers")?;
        let sigma = parse_f64_list(&self.search.sigma_scaler, n_dims, "sigma scalers")?;

        let settings = QeaSettings::new(
            n_dims,
            Bounds::new(lower, upper)?,
            Scalers::new(mu, sigma)?,
            self.search.elitist_count,
        )
        .with_report_interval(self.search.report_interval);

        settings.validate()?;
        Ok(settings)
    }
}

/// Parses `"v"` (broadcast to every dimension) or `"v0,v1,...,vn"`.
pub fn parse_f64_list(s: &str, n_dims: usize, what: &'static str) -> QeaResult<Vec<f64>> {
    let values = s
        .split(',')
        .map(|p| {
            p.trim().parse::<f64>().map_err(|_| {
                QeaError::InvalidParameter(format!("invalid number '{}' in {}", p.trim(), what))
            })
        })
        .collect::<QeaResult<Vec<f64>>>()?;

    match values.len() {
        1 => Ok(vec![values[0]; n_dims]),
        len if len == n_dims => Ok(values),
        len => Err(QeaError::DimensionMismatch {
            what,
            expected: n_dims,
            found: len,
        }),
    }
}
