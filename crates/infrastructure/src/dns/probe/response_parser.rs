use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use hickory_proto::rr::{DNSClass, RData};
use nsidenum_domain::{DomainError, ResponseOptions};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a reply and check it answers the query sent under `expected_id`.
    pub fn parse_reply(
        response_bytes: &[u8],
        expected_id: u16,
        identity_probe: bool,
    ) -> Result<ResponseOptions, DomainError> {
        let message = Self::decode(response_bytes)?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::MalformedResponse(
                "Received a query instead of a response".to_string(),
            ));
        }

        if message.id() != expected_id {
            return Err(DomainError::MalformedResponse(format!(
                "Response ID {} does not match query ID {}",
                message.id(),
                expected_id
            )));
        }

        Ok(Self::extract(&message, identity_probe))
    }

    /// Extract NSID and, for identity probes, the CH TXT answers.
    pub fn parse(
        response_bytes: &[u8],
        identity_probe: bool,
    ) -> Result<ResponseOptions, DomainError> {
        let message = Self::decode(response_bytes)?;
        Ok(Self::extract(&message, identity_probe))
    }

    pub fn decode(response_bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(response_bytes).map_err(|e| {
            DomainError::MalformedResponse(format!("Failed to parse DNS response: {}", e))
        })
    }

    fn extract(message: &Message, identity_probe: bool) -> ResponseOptions {
        let nsid = Self::nsid(message);
        let identities = if identity_probe {
            Self::identities(message)
        } else {
            Vec::new()
        };

        debug!(
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            has_nsid = nsid.is_some(),
            identities = identities.len(),
            "DNS response parsed"
        );

        ResponseOptions { nsid, identities }
    }

    /// NSID payload of the OPT record, verbatim.
    fn nsid(message: &Message) -> Option<Vec<u8>> {
        let edns = message.extensions().as_ref()?;
        match edns.options().get(EdnsCode::NSID)? {
            EdnsOption::Unknown(_, data) => Some(data.clone()),
            _ => None,
        }
    }

    /// Each CH TXT answer yields one identity: its strings concatenated in order.
    fn identities(message: &Message) -> Vec<Vec<u8>> {
        message
            .answers()
            .iter()
            .filter(|record| record.dns_class() == DNSClass::CH)
            .filter_map(|record| match record.data() {
                RData::TXT(txt) => Some(txt.txt_data().concat()),
                _ => None,
            })
            .collect()
    }
}
