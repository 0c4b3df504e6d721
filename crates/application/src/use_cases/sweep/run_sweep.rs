use crate::ports::{NsidProbe, ProbeReply};
use futures::stream::{self, StreamExt};
use nsidenum_domain::{
    display_identifier, DomainError, ExchangeOutcome, PortRange, SweepResult, Target,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub target: Target,
    pub ports: PortRange,
    pub timeout: Duration,
    /// Exchanges in flight at once; 1 is strictly sequential.
    pub concurrency: usize,
}

/// Drives one probe per source port and folds every outcome into a [`SweepResult`].
///
/// Exchanges are independent: a timeout, a malformed reply or a transport
/// failure on one port is counted and the sweep moves on. Any other probe error
/// would repeat on every port, so it ends the sweep instead. Outcomes are merged
/// by this task alone, so the accumulator needs no locking even when several
/// exchanges are in flight.
pub struct RunSweepUseCase {
    probe: Arc<dyn NsidProbe>,
    cancel: CancellationToken,
}

impl RunSweepUseCase {
    pub fn new(probe: Arc<dyn NsidProbe>) -> Self {
        Self {
            probe,
            cancel: CancellationToken::new(),
        }
    }

    /// Once `cancel` fires no further exchange is started; in-flight ones run to completion.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub async fn execute(&self, request: &SweepRequest) -> Result<SweepResult, DomainError> {
        let query = self.probe.query();
        let mut result = SweepResult::new(query.identity_probe);

        info!(
            target = %request.target,
            paths = request.ports.len(),
            base_sport = request.ports.start(),
            timeout_ms = request.timeout.as_millis() as u64,
            concurrency = request.concurrency,
            "Enumerating paths"
        );

        let cancel = self.cancel.clone();
        let ports = request
            .ports
            .ports()
            .take_while(move |_| !cancel.is_cancelled());

        let mut exchanges = stream::iter(ports)
            .map(|port| async move { (port, self.exchange(request, port).await) })
            .buffer_unordered(request.concurrency.max(1));

        while let Some((port, outcome)) = exchanges.next().await {
            result.record(port, outcome?);
        }

        result.cancelled = result.total_queries < u64::from(request.ports.len());
        if result.cancelled {
            warn!(
                completed = result.total_queries,
                planned = request.ports.len(),
                "Sweep cancelled before exhausting the port range"
            );
        }

        debug!(
            total = result.total_queries,
            timeouts = result.timeouts,
            nsids = result.nsids.len(),
            identities = result.identities.len(),
            warnings = result.warnings.len(),
            "Sweep finished"
        );

        Ok(result)
    }

    async fn exchange(
        &self,
        request: &SweepRequest,
        source_port: u16,
    ) -> Result<ExchangeOutcome, DomainError> {
        let query = self.probe.query();
        let server = request.target.socket_addr();

        debug!(
            target = %request.target,
            query = %query,
            sport = source_port,
            dport = server.port(),
            timeout_ms = request.timeout.as_millis() as u64,
            "DNS query"
        );

        let outcome = match self.probe.probe(server, source_port, request.timeout).await {
            Ok(ProbeReply::Responded(options)) => {
                debug!(
                    sport = source_port,
                    nsid = ?options.nsid.as_deref().map(display_identifier),
                    identities = options.identities.len(),
                    "Response received"
                );
                ExchangeOutcome::Responded(options)
            }
            Ok(ProbeReply::TimedOut) => {
                debug!(sport = source_port, "Query timed out");
                ExchangeOutcome::TimedOut
            }
            Err(DomainError::MalformedResponse(reason)) => {
                warn!(sport = source_port, reason = %reason, "Discarding malformed response");
                ExchangeOutcome::Malformed(reason)
            }
            Err(e @ DomainError::Transport { .. }) => {
                warn!(sport = source_port, error = %e, "Exchange failed");
                ExchangeOutcome::TransportFailed(e.to_string())
            }
            Err(e) => {
                error!(sport = source_port, error = %e, "Probe failed, aborting sweep");
                return Err(e);
            }
        };
        Ok(outcome)
    }
}
