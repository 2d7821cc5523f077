use crate::reports;
use clap::Args;
use qea::config::parse_f64_list;
use qea::cost::{Benchmark, CostFunction};
use qea::error::QeaResult;
use qea::optimizer::CandidateBatch;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long, value_enum, default_value_t = Benchmark::ShiftedSphere)]
    pub function: Benchmark,

    /// Comma-separated coordinates, e.g. `4,4`.
    #[arg(short, long, allow_hyphen_values = true)]
    pub point: String,
}

pub fn run(args: EvaluateArgs) -> QeaResult<()> {
    let n_dims = args.point.split(',').count();
    let point = parse_f64_list(&args.point, n_dims, "point")?;

    let single = args.function.cost(&point);
    let batch = CandidateBatch::from_rows(&[point.as_slice()])?;
    let batched = args.function.cost_batch(&batch);

    reports::evaluation(args.function, &point, single, batched[0]);
    println!("Cost: {:.6}", single);

    Ok(())
}
