mod run_sweep;
mod summarize_sweep;

pub use run_sweep::{RunSweepUseCase, SweepRequest};
pub use summarize_sweep::SummarizeSweepUseCase;
