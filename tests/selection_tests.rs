use qea::cost::{CostFunction, ShiftedSphere};
use qea::error::QeaError;
use qea::optimizer::selection::{argsort, select};
use qea::optimizer::CandidateBatch;
use rstest::rstest;
use std::cell::Cell;

fn four_by_two() -> CandidateBatch {
    CandidateBatch::from_rows(&[[4.1, 4.1], [4.0, 4.0], [3.9, 3.9], [3.8, 3.8]]).unwrap()
}

#[test]
fn test_elite_is_centroid_of_top_two() {
    // Costs around 3.8: 0.18, 0.08, 0.02, 0.0 -> top two are rows 3 and 2
    let elite = select(&four_by_two(), &ShiftedSphere::default(), 2).unwrap();
    assert_eq!(elite.point.len(), 2);
    assert!((elite.point[0] - 3.85).abs() < 1e-12);
    assert!((elite.point[1] - 3.85).abs() < 1e-12);
    assert!(elite.best_cost.abs() < 1e-12);
}

#[rstest]
#[case(1, 3.8)]
#[case(2, 3.85)]
#[case(3, 3.9)]
#[case(4, 3.95)]
fn test_elite_window_sizes(#[case] k: usize, #[case] expected: f64) {
    let elite = select(&four_by_two(), &ShiftedSphere::default(), k).unwrap();
    for v in &elite.point {
        assert!((v - expected).abs() < 1e-12, "k={} got {:?}", k, elite.point);
    }
}

#[test]
fn test_centroid_need_not_be_a_row() {
    let batch = CandidateBatch::from_rows(&[[0.0, 10.0], [10.0, 0.0], [50.0, 50.0]]).unwrap();
    let cost = |x: &[f64]| x[0] + x[1];
    let elite = select(&batch, &cost, 2).unwrap();
    assert_eq!(elite.point, vec![5.0, 5.0]);
    assert!(batch.rows().all(|r| r != elite.point.as_slice()));
}

#[test]
fn test_ties_keep_row_order() {
    // Rows 1 and 2 tie; stability keeps row 1 ahead of row 2
    let batch = CandidateBatch::from_rows(&[[0.0], [1.0], [-1.0], [5.0]]).unwrap();
    let cost = |x: &[f64]| x[0].abs();
    let elite = select(&batch, &cost, 2).unwrap();
    assert_eq!(elite.point, vec![0.5]);

    assert_eq!(argsort(&[2.0, 1.0, 1.0, 0.0]), vec![3, 1, 2, 0]);
}

#[test]
fn test_nan_costs_rank_last() {
    assert_eq!(argsort(&[f64::NAN, 3.0, -f64::NAN, 1.0]), vec![3, 1, 0, 2]);

    let batch = CandidateBatch::from_rows(&[[1.0], [2.0], [3.0]]).unwrap();
    let cost = |x: &[f64]| if x[0] < 2.0 { f64::NAN } else { x[0] };
    let elite = select(&batch, &cost, 1).unwrap();
    assert_eq!(elite.point, vec![2.0]);
}

struct CountingCost {
    batch_calls: Cell<usize>,
}

impl CostFunction for CountingCost {
    fn cost(&self, point: &[f64]) -> f64 {
        point[0]
    }

    fn cost_batch(&self, batch: &CandidateBatch) -> Vec<f64> {
        self.batch_calls.set(self.batch_calls.get() + 1);
        batch.rows().map(|r| self.cost(r)).collect()
    }
}

#[test]
fn test_cost_function_called_once_per_selection() {
    let counting = CountingCost {
        batch_calls: Cell::new(0),
    };
    let batch = CandidateBatch::from_rows(&[[3.0], [1.0], [2.0]]).unwrap();
    let elite = select(&batch, &counting, 2).unwrap();
    assert_eq!(elite.point, vec![1.5]);
    assert_eq!(counting.batch_calls.get(), 1);
}

#[rstest]
#[case(0)]
#[case(5)]
fn test_out_of_range_elite_count_is_rejected(#[case] k: usize) {
    let result = select(&four_by_two(), &ShiftedSphere::default(), k);
    assert!(matches!(result, Err(QeaError::InvalidParameter(_))));
}
