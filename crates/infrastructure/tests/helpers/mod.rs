#![allow(unused_imports)]

pub mod dns_server_mock;
pub mod messages;

pub use dns_server_mock::{MockNsidServer, ServerBehavior};
pub use messages::{identity_response, nsid_response, query_for};
