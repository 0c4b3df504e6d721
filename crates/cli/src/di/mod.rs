use nsidenum_application::use_cases::{
    ResolveTargetUseCase, RunSweepUseCase, SummarizeSweepUseCase,
};
use nsidenum_domain::QuerySpec;
use nsidenum_infrastructure::dns::UdpNsidProbe;
use nsidenum_infrastructure::system::SystemTargetResolver;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct UseCases {
    pub resolve_target: ResolveTargetUseCase,
    pub run_sweep: RunSweepUseCase,
    pub summarize: SummarizeSweepUseCase,
}

impl UseCases {
    /// Fails before any network I/O when the query cannot be encoded.
    pub fn new(query: QuerySpec, cancel: CancellationToken) -> anyhow::Result<Self> {
        let probe = Arc::new(UdpNsidProbe::new(query)?);

        Ok(Self {
            resolve_target: ResolveTargetUseCase::new(Arc::new(SystemTargetResolver::new())),
            run_sweep: RunSweepUseCase::new(probe).with_cancellation(cancel),
            summarize: SummarizeSweepUseCase::new(),
        })
    }
}
