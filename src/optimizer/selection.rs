use super::types::CandidateBatch;
use crate::cost::CostFunction;
use crate::error::{QeaError, QeaResult};
use std::cmp::Ordering;

/// Centroid of the best `k` candidates of one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Elite {
    pub point: Vec<f64>,
    /// Lowest cost observed in the batch.
    pub best_cost: f64,
}

/// Ranks a batch with a single `cost_batch` call and averages the top `k` rows.
///
/// Ranking is a stable ascending sort, so equal costs keep their row order.
/// NaN costs sort after every real cost.
pub fn select<C: CostFunction + ?Sized>(
    batch: &CandidateBatch,
    cost_fn: &C,
    k: usize,
) -> QeaResult<Elite> {
    let n_samples = batch.n_samples();
    if k == 0 || k > n_samples {
        return Err(QeaError::InvalidParameter(format!(
            "elite count must be within 1..={}, got {}",
            n_samples, k
        )));
    }

    let costs = cost_fn.cost_batch(batch);
    if costs.len() != n_samples {
        return Err(QeaError::DimensionMismatch {
            what: "cost vector",
            expected: n_samples,
            found: costs.len(),
        });
    }

    let ranked = argsort(&costs);
    let elite_rows = &ranked[..k];

    let n_dims = batch.n_dims();
    let mut point = vec![0.0; n_dims];
    for &row in elite_rows {
        for (acc, &v) in point.iter_mut().zip(batch.row(row)) {
            *acc += v;
        }
    }
    for v in point.iter_mut() {
        *v /= k as f64;
    }

    Ok(Elite {
        point,
        best_cost: costs[ranked[0]],
    })
}

/// Stable ascending argsort. NaN compares greater than any number.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| {
        let (x, y) = (values[a], values[b]);
        match (x.is_nan(), y.is_nan()) {
            (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => Ordering::Equal,
        }
    });
    indices
}
