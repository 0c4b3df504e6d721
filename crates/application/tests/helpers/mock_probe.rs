#![allow(dead_code)]

use async_trait::async_trait;
use nsidenum_application::ports::{NsidProbe, ProbeReply};
use nsidenum_domain::{DomainError, EdnsSettings, QuerySpec, ResponseOptions};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Scripted probe: unscripted ports time out.
pub struct MockNsidProbe {
    query: QuerySpec,
    replies: HashMap<u16, Result<ProbeReply, DomainError>>,
    delay: Duration,
    cancel_on: Option<(u16, CancellationToken)>,
    probed: Mutex<Vec<u16>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockNsidProbe {
    pub fn new() -> Self {
        Self::with_query(QuerySpec::new(".", "A", "IN", EdnsSettings::default(), false).unwrap())
    }

    pub fn identity() -> Self {
        Self::with_query(QuerySpec::identity(EdnsSettings::default()))
    }

    fn with_query(query: QuerySpec) -> Self {
        Self {
            query,
            replies: HashMap::new(),
            delay: Duration::ZERO,
            cancel_on: None,
            probed: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn nsid(mut self, port: u16, nsid: &str) -> Self {
        self.replies.insert(
            port,
            Ok(ProbeReply::Responded(ResponseOptions {
                nsid: Some(nsid.as_bytes().to_vec()),
                identities: vec![],
            })),
        );
        self
    }

    pub fn reply(mut self, port: u16, nsid: Option<&str>, identities: &[&str]) -> Self {
        self.replies.insert(
            port,
            Ok(ProbeReply::Responded(ResponseOptions {
                nsid: nsid.map(|n| n.as_bytes().to_vec()),
                identities: identities.iter().map(|i| i.as_bytes().to_vec()).collect(),
            })),
        );
        self
    }

    pub fn fail(mut self, port: u16, error: DomainError) -> Self {
        self.replies.insert(port, Err(error));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn cancel_after(mut self, port: u16, token: CancellationToken) -> Self {
        self.cancel_on = Some((port, token));
        self
    }

    pub fn probed_ports(&self) -> Vec<u16> {
        self.probed.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for MockNsidProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NsidProbe for MockNsidProbe {
    async fn probe(
        &self,
        _target: SocketAddr,
        source_port: u16,
        _timeout: Duration,
    ) -> Result<ProbeReply, DomainError> {
        self.probed.lock().unwrap().push(source_port);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some((port, token)) = &self.cancel_on {
            if *port == source_port {
                token.cancel();
            }
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.replies
            .get(&source_port)
            .cloned()
            .unwrap_or(Ok(ProbeReply::TimedOut))
    }

    fn query(&self) -> &QuerySpec {
        &self.query
    }
}
