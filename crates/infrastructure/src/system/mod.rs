pub mod target_resolver;

pub use target_resolver::SystemTargetResolver;
