use crate::optimizer::CandidateBatch;
use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use strum_macros::{Display, EnumIter, EnumString};

/// A black-box objective. Lower is better.
///
/// Implementations must be pure: the optimizer may evaluate the same point more
/// than once and relies on the batch and single-point forms agreeing.
pub trait CostFunction {
    fn cost(&self, point: &[f64]) -> f64;

    /// One cost per row, aligned by row index.
    fn cost_batch(&self, batch: &CandidateBatch) -> Vec<f64> {
        batch.rows().map(|row| self.cost(row)).collect()
    }
}

impl<F> CostFunction for F
where
    F: Fn(&[f64]) -> f64,
{
    fn cost(&self, point: &[f64]) -> f64 {
        self(point)
    }
}

/// Sum of squared distances from `center` in every dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftedSphere {
    pub center: f64,
}

impl Default for ShiftedSphere {
    fn default() -> Self {
        Self { center: 3.8 }
    }
}

impl CostFunction for ShiftedSphere {
    fn cost(&self, point: &[f64]) -> f64 {
        point.iter().map(|&x| (x - self.center).powi(2)).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rastrigin;

impl CostFunction for Rastrigin {
    fn cost(&self, point: &[f64]) -> f64 {
        let a = 10.0;
        a * point.len() as f64
            + point
                .iter()
                .map(|&x| x * x - a * (2.0 * PI * x).cos())
                .sum::<f64>()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rosenbrock;

impl CostFunction for Rosenbrock {
    fn cost(&self, point: &[f64]) -> f64 {
        point
            .windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ackley;

impl CostFunction for Ackley {
    fn cost(&self, point: &[f64]) -> f64 {
        if point.is_empty() {
            return 0.0;
        }
        let n = point.len() as f64;
        let sum_sq: f64 = point.iter().map(|x| x * x).sum();
        let sum_cos: f64 = point.iter().map(|x| (2.0 * PI * x).cos()).sum();

        -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
    }
}

/// Built-in objectives selectable from the command line or a config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Benchmark {
    #[default]
    ShiftedSphere,
    Rastrigin,
    Rosenbrock,
    Ackley,
}

impl Benchmark {
    /// Location of the global minimum in one dimension (the same for every axis).
    pub fn optimum_coordinate(&self) -> f64 {
        match self {
            Self::ShiftedSphere => ShiftedSphere::default().center,
            Self::Rastrigin | Self::Ackley => 0.0,
            Self::Rosenbrock => 1.0,
        }
    }
}

impl CostFunction for Benchmark {
    fn cost(&self, point: &[f64]) -> f64 {
        match self {
            Self::ShiftedSphere => ShiftedSphere::default().cost(point),
            Self::Rastrigin => Rastrigin.cost(point),
            Self::Rosenbrock => Rosenbrock.cost(point),
            Self::Ackley => Ackley.cost(point),
        }
    }
}
