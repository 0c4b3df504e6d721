#![allow(unused_imports)]

mod mock_probe;
mod mock_resolver;

pub use mock_probe::MockNsidProbe;
pub use mock_resolver::MockTargetResolver;
