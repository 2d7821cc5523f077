pub mod api;
pub mod config;
pub mod cost;
pub mod error;
pub mod history;
pub mod optimizer;

pub use crate::cost::{Benchmark, CostFunction};
pub use crate::error::{QeaError, QeaResult};
pub use crate::optimizer::{Qea, QeaSettings};
