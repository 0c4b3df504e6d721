mod nsid_probe;
mod target_resolver;

pub use nsid_probe::{NsidProbe, ProbeReply};
pub use target_resolver::TargetResolver;
