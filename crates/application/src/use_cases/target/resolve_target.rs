use crate::ports::TargetResolver;
use nsidenum_domain::{AddressFamily, DomainError, Target};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Turns the operator-supplied host into the single address the sweep will hit.
///
/// IP literals are used as-is (after checking the requested family); names
/// go through the resolver once and the first address of the right family
/// wins.
pub struct ResolveTargetUseCase {
    resolver: Arc<dyn TargetResolver>,
}

impl ResolveTargetUseCase {
    pub fn new(resolver: Arc<dyn TargetResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Target, DomainError> {
        let host = host.trim();
        if let Ok(ip) = host.parse::<IpAddr>() {
            if !family.matches(&ip) {
                return Err(DomainError::ResolutionFailed(format!(
                    "Invalid {}: {}",
                    family.label(),
                    ip
                )));
            }
            return Ok(Target::new(host, ip, port));
        }

        let addresses = self.resolver.lookup(host).await?;
        debug!(host = %host, candidates = addresses.len(), "Target resolved");

        addresses
            .into_iter()
            .find(|ip| family.matches(ip))
            .map(|ip| Target::new(host, ip, port))
            .ok_or_else(|| {
                DomainError::ResolutionFailed(format!(
                    "No valid {} found for {}",
                    family.label(),
                    host
                ))
            })
    }
}
