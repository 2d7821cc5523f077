use super::types::{Bounds, CandidateBatch, Individual};
use crate::error::{QeaError, QeaResult};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Draws candidate points around an individual and clamps them into the box.
#[derive(Debug, Clone)]
pub struct BoundedGaussianSampler<'a> {
    bounds: &'a Bounds,
}

impl<'a> BoundedGaussianSampler<'a> {
    pub fn new(bounds: &'a Bounds) -> Self {
        Self { bounds }
    }

    /// Samples `n_samples` rows from `N(mean[d], spread[d])` per dimension.
    ///
    /// Values are drawn dimension-major (every sample of dimension 0 first), so a
    /// seeded generator always yields the same batch for the same individual.
    /// Each value is clamped into `[lower[d], upper[d]]` independently.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        individual: &Individual,
        n_samples: usize,
    ) -> QeaResult<CandidateBatch> {
        let n_dims = self.bounds.dims();
        if individual.dims() != n_dims {
            return Err(QeaError::DimensionMismatch {
                what: "individual mean",
                expected: n_dims,
                found: individual.dims(),
            });
        }
        if individual.spread.len() != n_dims {
            return Err(QeaError::DimensionMismatch {
                what: "individual spread",
                expected: n_dims,
                found: individual.spread.len(),
            });
        }

        // An infinite spread is allowed: its draws land on the box faces
        for (d, &sigma) in individual.spread.iter().enumerate() {
            if sigma.is_nan() || sigma <= 0.0 {
                return Err(QeaError::InvalidParameter(format!(
                    "spread of dimension {} must be positive, got {}",
                    d, sigma
                )));
            }
        }

        let mut batch = CandidateBatch::zeros(n_samples, n_dims);

        for d in 0..n_dims {
            let mu = individual.mean[d];
            let sigma = individual.spread[d];

            for s in 0..n_samples {
                let z: f64 = StandardNormal.sample(rng);
                let mut x = mu + sigma * z;
                if x.is_nan() {
                    // inf * 0
                    x = mu;
                }
                batch.set(s, d, self.bounds.clamp(d, x));
            }
        }

        Ok(batch)
    }
}
