mod resolve_target;

pub use resolve_target::ResolveTargetUseCase;
