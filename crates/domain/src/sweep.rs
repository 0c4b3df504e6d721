use std::collections::BTreeSet;

/// Identifiers leaked by one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseOptions {
    pub nsid: Option<Vec<u8>>,
    pub identities: Vec<Vec<u8>>,
}

impl ResponseOptions {
    pub fn is_empty(&self) -> bool {
        self.nsid.is_none() && self.identities.is_empty()
    }

    /// Distinct identity values, byte-ordered.
    pub fn distinct_identities(&self) -> BTreeSet<&[u8]> {
        self.identities.iter().map(Vec::as_slice).collect()
    }
}

/// Terminal state of one source-port attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Responded(ResponseOptions),
    TimedOut,
    Malformed(String),
    TransportFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrelationWarning {
    /// NSID and the single identity value of the same exchange disagree.
    Mismatch {
        source_port: u16,
        nsid: Vec<u8>,
        identity: Vec<u8>,
    },
    /// The identity probe answered with several distinct values; not correlated.
    Ambiguous {
        source_port: u16,
        identities: Vec<Vec<u8>>,
    },
}

/// Accumulator of a sweep; every exchange outcome is folded in via [`SweepResult::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepResult {
    pub identity_probe: bool,
    pub nsids: BTreeSet<Vec<u8>>,
    pub identities: BTreeSet<Vec<u8>>,
    pub total_queries: u64,
    pub timeouts: u64,
    pub responses: u64,
    pub malformed: u64,
    pub transport_errors: u64,
    pub warnings: Vec<CorrelationWarning>,
    pub cancelled: bool,
}

impl SweepResult {
    pub fn new(identity_probe: bool) -> Self {
        Self {
            identity_probe,
            ..Self::default()
        }
    }

    pub fn record(&mut self, source_port: u16, outcome: ExchangeOutcome) {
        self.total_queries += 1;
        match outcome {
            ExchangeOutcome::TimedOut => self.timeouts += 1,
            ExchangeOutcome::Malformed(_) => self.malformed += 1,
            ExchangeOutcome::TransportFailed(_) => self.transport_errors += 1,
            ExchangeOutcome::Responded(options) => {
                self.responses += 1;
                self.merge_response(source_port, options);
            }
        }
    }

    fn merge_response(&mut self, source_port: u16, options: ResponseOptions) {
        if self.identity_probe {
            if let Some(warning) = correlate(source_port, &options) {
                self.warnings.push(warning);
            }
            self.identities.extend(options.identities);
        }
        if let Some(nsid) = options.nsid {
            self.nsids.insert(nsid);
        }
    }
}

fn correlate(source_port: u16, options: &ResponseOptions) -> Option<CorrelationWarning> {
    let distinct = options.distinct_identities();
    if distinct.len() > 1 {
        return Some(CorrelationWarning::Ambiguous {
            source_port,
            identities: distinct.into_iter().map(<[u8]>::to_vec).collect(),
        });
    }

    let identity = distinct.into_iter().next()?;
    let nsid = options.nsid.as_deref()?;
    (nsid != identity).then(|| CorrelationWarning::Mismatch {
        source_port,
        nsid: nsid.to_vec(),
        identity: identity.to_vec(),
    })
}
