use async_trait::async_trait;
use nsidenum_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait TargetResolver: Send + Sync {
    /// All addresses the system knows for `host`, in resolver order.
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;
}
