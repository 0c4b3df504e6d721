use nsidenum_domain::{QueryStatistics, Report, SweepResult};

/// Turns a finished sweep into its report; no I/O.
pub struct SummarizeSweepUseCase;

impl SummarizeSweepUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, result: &SweepResult) -> Report {
        // BTreeSet iteration is already byte-lexicographic and duplicate-free.
        let nsids = result.nsids.iter().cloned().collect();
        let identities = result
            .identity_probe
            .then(|| result.identities.iter().cloned().collect());

        Report {
            nsids,
            identities,
            warnings: result.warnings.clone(),
            statistics: QueryStatistics {
                total_queries: result.total_queries,
                timeouts: result.timeouts,
                responses: result.responses,
                malformed: result.malformed,
                transport_errors: result.transport_errors,
                timeout_percentage: QueryStatistics::timeout_percentage(
                    result.timeouts,
                    result.total_queries,
                ),
            },
            cancelled: result.cancelled,
        }
    }
}

impl Default for SummarizeSweepUseCase {
    fn default() -> Self {
        Self::new()
    }
}
