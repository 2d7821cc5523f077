pub mod runner;
pub mod sampling;
pub mod selection;
pub mod types;
pub mod update;

pub use self::runner::{
    GenerationReport, GlobalBest, Phase, ProgressCallback, Qea, QeaSettings, Silent,
    TrainingOutcome,
};
pub use self::sampling::BoundedGaussianSampler;
pub use self::selection::Elite;
pub use self::types::{Bounds, CandidateBatch, Individual, Scalers};
pub use self::update::QuantumUpdateRule;
