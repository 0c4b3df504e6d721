pub mod sweep;
pub mod target;

pub use sweep::{RunSweepUseCase, SummarizeSweepUseCase, SweepRequest};
pub use target::ResolveTargetUseCase;
