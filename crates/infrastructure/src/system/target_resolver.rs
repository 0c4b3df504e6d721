use async_trait::async_trait;
use nsidenum_application::ports::TargetResolver;
use nsidenum_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

/// Resolves names through the operating system (`getaddrinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTargetResolver;

impl SystemTargetResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TargetResolver for SystemTargetResolver {
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        debug!(host = %host, "Performing system lookup");

        let addresses = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| DomainError::ResolutionFailed(format!("{}: {}", host, e)))?;

        let mut ips: Vec<IpAddr> = Vec::new();
        for addr in addresses {
            if !ips.contains(&addr.ip()) {
                ips.push(addr.ip());
            }
        }

        debug!(host = %host, addresses = ips.len(), "System lookup finished");
        Ok(ips)
    }
}
