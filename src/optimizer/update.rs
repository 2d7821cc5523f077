use super::types::{Individual, Scalers};

/// Moves the mean toward the elite and global best, then shrinks or grows the spread.
///
/// Per dimension, with `mu = mean[d]` and `sigma = spread[d]`:
///
/// ```text
/// mean'   = mu + ((elite - mu) + (best - mu)) / mu_scaler
/// spread' = sigma / sigma_scaler   if |elite - mu| <= sigma
///           sigma * sigma_scaler   otherwise
/// ```
///
/// Neither mean nor spread is clamped here; bounds apply only at sampling time.
#[derive(Debug, Clone)]
pub struct QuantumUpdateRule {
    scalers: Scalers,
}

impl QuantumUpdateRule {
    pub fn new(scalers: Scalers) -> Self {
        Self { scalers }
    }

    pub fn scalers(&self) -> &Scalers {
        &self.scalers
    }

    pub fn apply(&self, individual: &mut Individual, elite: &[f64], global_best: &[f64]) {
        let n_dims = individual.dims();
        debug_assert_eq!(elite.len(), n_dims);
        debug_assert_eq!(global_best.len(), n_dims);

        for d in 0..n_dims {
            let mu = individual.mean[d];
            let sigma = individual.spread[d];

            let delta_elite = elite[d] - mu;
            let delta_global = global_best[d] - mu;

            individual.mean[d] = mu + (delta_elite + delta_global) / self.scalers.mu[d];

            let decision = delta_elite.abs() / sigma;
            individual.spread[d] = if decision <= 1.0 {
                sigma / self.scalers.sigma[d]
            } else {
                sigma * self.scalers.sigma[d]
            };
        }
    }
}
