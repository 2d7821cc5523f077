use crate::error::{QeaError, QeaResult};

/// Per-dimension box constraints. Fixed for the optimizer's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> QeaResult<Self> {
        if lower.len() != upper.len() {
            return Err(QeaError::DimensionMismatch {
                what: "lower bounds",
                expected: upper.len(),
                found: lower.len(),
            });
        }

        for (d, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(QeaError::InvalidParameter(format!(
                    "bounds of dimension {} must be finite (lower={}, upper={})",
                    d, lo, hi
                )));
            }
            if hi <= lo {
                return Err(QeaError::InvalidParameter(format!(
                    "upper bound {} must exceed lower bound {} in dimension {}",
                    hi, lo, d
                )));
            }
        }

        Ok(Self { lower, upper })
    }

    /// Same `[lower, upper]` interval for every dimension.
    pub fn uniform(n_dims: usize, lower: f64, upper: f64) -> QeaResult<Self> {
        Self::new(vec![lower; n_dims], vec![upper; n_dims])
    }

    pub fn dims(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    #[inline(always)]
    pub fn width(&self, dim: usize) -> f64 {
        self.upper[dim] - self.lower[dim]
    }

    #[inline(always)]
    pub fn clamp(&self, dim: usize, value: f64) -> f64 {
        if value > self.upper[dim] {
            self.upper[dim]
        } else if value < self.lower[dim] {
            self.lower[dim]
        } else {
            value
        }
    }

    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dims()
            && point
                .iter()
                .enumerate()
                .all(|(d, &v)| v >= self.lower[d] && v <= self.upper[d])
    }
}

/// Step-size multipliers for the mean (`mu`) and spread (`sigma`) updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalers {
    pub mu: Vec<f64>,
    pub sigma: Vec<f64>,
}

impl Scalers {
    pub fn new(mu: Vec<f64>, sigma: Vec<f64>) -> QeaResult<Self> {
        if mu.len() != sigma.len() {
            return Err(QeaError::DimensionMismatch {
                what: "sigma scalers",
                expected: mu.len(),
                found: sigma.len(),
            });
        }

        let positive = |v: &f64| v.is_finite() && *v > 0.0;
        if let Some(bad) = mu.iter().find(|v| !positive(v)) {
            return Err(QeaError::InvalidParameter(format!(
                "mu scaler must be positive and finite, got {}",
                bad
            )));
        }
        if let Some(bad) = sigma.iter().find(|v| !positive(v)) {
            return Err(QeaError::InvalidParameter(format!(
                "sigma scaler must be positive and finite, got {}",
                bad
            )));
        }

        Ok(Self { mu, sigma })
    }

    pub fn uniform(n_dims: usize, mu: f64, sigma: f64) -> QeaResult<Self> {
        Self::new(vec![mu; n_dims], vec![sigma; n_dims])
    }

    pub fn dims(&self) -> usize {
        self.mu.len()
    }
}

/// The optimizer's belief state: a Gaussian per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub mean: Vec<f64>,
    pub spread: Vec<f64>,
}

impl Individual {
    pub fn new(mean: Vec<f64>, spread: Vec<f64>) -> Self {
        debug_assert_eq!(mean.len(), spread.len());
        Self { mean, spread }
    }

    pub fn dims(&self) -> usize {
        self.mean.len()
    }
}

/// Row-major `n_samples x n_dims` matrix of candidate points.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateBatch {
    data: Vec<f64>,
    n_samples: usize,
    n_dims: usize,
}

impl CandidateBatch {
    pub fn zeros(n_samples: usize, n_dims: usize) -> Self {
        Self {
            data: vec![0.0; n_samples * n_dims],
            n_samples,
            n_dims,
        }
    }

    /// Builds a batch from explicit rows. All rows must share one length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> QeaResult<Self> {
        let n_dims = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * n_dims);

        for row in rows {
            let row = row.as_ref();
            if row.len() != n_dims {
                return Err(QeaError::DimensionMismatch {
                    what: "candidate row",
                    expected: n_dims,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            n_samples: rows.len(),
            n_dims,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn n_dims(&self) -> usize {
        self.n_dims
    }

    #[inline(always)]
    pub fn get(&self, sample: usize, dim: usize) -> f64 {
        self.data[sample * self.n_dims + dim]
    }

    #[inline(always)]
    pub fn set(&mut self, sample: usize, dim: usize, value: f64) {
        self.data[sample * self.n_dims + dim] = value;
    }

    pub fn row(&self, sample: usize) -> &[f64] {
        let start = sample * self.n_dims;
        &self.data[start..start + self.n_dims]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.n_dims.max(1)).take(self.n_samples)
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }
}
