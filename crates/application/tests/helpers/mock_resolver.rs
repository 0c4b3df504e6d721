#![allow(dead_code)]

use async_trait::async_trait;
use nsidenum_application::ports::TargetResolver;
use nsidenum_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct MockTargetResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
    lookups: AtomicUsize,
}

impl MockTargetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, name: &str, addresses: &[&str]) -> Self {
        self.hosts.insert(
            name.to_string(),
            addresses.iter().map(|a| a.parse().unwrap()).collect(),
        );
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TargetResolver for MockTargetResolver {
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.hosts
            .get(host)
            .cloned()
            .ok_or_else(|| DomainError::ResolutionFailed(format!("unknown host {}", host)))
    }
}
