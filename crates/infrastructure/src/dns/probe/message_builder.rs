//! DNS Message Builder
//!
//! Turns a [`QuerySpec`] into a hickory `Message` once; every exchange then
//! re-serializes that template under its own transaction ID.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::opt::EdnsOption;
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nsidenum_domain::{DomainError, QuerySpec, NSID_OPTION_CODE};
use std::str::FromStr;

/// A fully built query, reusable across exchanges.
#[derive(Debug, Clone)]
pub struct QueryMessage {
    message: Message,
}

impl QueryMessage {
    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::serialize_message(&self.message)
    }

    /// Serialize a copy of the template carrying `id` in its header.
    pub fn to_bytes_with_id(&self, id: u16) -> Result<Vec<u8>, DomainError> {
        let mut message = self.message.clone();
        message.set_id(id);
        MessageBuilder::serialize_message(&message)
    }
}

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the query described by `spec`
    ///
    /// Creates a standard query with:
    /// - Random ID
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    /// - An OPT record advertising the payload size when EDNS is enabled,
    ///   carrying an empty NSID option when requested
    pub fn build_query(spec: &QuerySpec) -> Result<QueryMessage, DomainError> {
        let mut name = Name::from_str(&spec.name).map_err(|e| {
            DomainError::InvalidQuerySpec(format!("Invalid query name '{}': {}", spec.name, e))
        })?;
        name.set_fqdn(true);

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(&spec.record_type));
        query.set_query_class(RecordTypeMapper::class_to_hickory(&spec.record_class));

        let mut message = Message::new();
        message
            .set_id(fastrand::u16(..))
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        message.add_query(query);

        if spec.edns.enabled {
            let mut edns = Edns::new();
            edns.set_max_payload(spec.edns.payload_size);
            edns.set_version(0);
            if spec.edns.request_nsid {
                edns.options_mut()
                    .insert(EdnsOption::Unknown(NSID_OPTION_CODE, Vec::new()));
            }
            message.set_edns(edns);
        }

        Ok(QueryMessage { message })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidQuerySpec(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
