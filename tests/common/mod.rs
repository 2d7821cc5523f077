#![allow(dead_code)]

use qea::cost::ShiftedSphere;
use qea::optimizer::{Bounds, Qea, QeaSettings, Scalers};

/// Settings on the classic `[-5, 5.12]` box used throughout the tests.
pub fn small_settings(n_dims: usize, elitist_count: usize) -> QeaSettings {
    QeaSettings::new(
        n_dims,
        Bounds::uniform(n_dims, -5.0, 5.12).unwrap(),
        Scalers::uniform(n_dims, 10.0, 1.003).unwrap(),
        elitist_count,
    )
    .with_report_interval(0)
}

pub fn sphere_qea(elitist_count: usize, seed: Option<u64>) -> Qea<ShiftedSphere> {
    Qea::new(small_settings(2, elitist_count), ShiftedSphere::default(), seed).unwrap()
}
