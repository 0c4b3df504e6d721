#![allow(dead_code)]
use hickory_proto::op::{Edns, Message, MessageType, OpCode};
use hickory_proto::rr::rdata::opt::EdnsOption;
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{DNSClass, RData, Record};
use nsidenum_domain::{EdnsSettings, QuerySpec, NSID_OPTION_CODE};
use nsidenum_infrastructure::dns::MessageBuilder;

pub fn query_for(name: &str, qtype: &str, qclass: &str) -> Message {
    let spec = QuerySpec::new(name, qtype, qclass, EdnsSettings::default(), false).unwrap();
    MessageBuilder::build_query(&spec).unwrap().message().clone()
}

/// Reply to `query` echoing its question, with `nsid` in the OPT record when given.
pub fn nsid_response(query: &Message, nsid: Option<&[u8]>) -> Message {
    let mut response = Message::new();
    response
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(query.recursion_desired());
    response.add_queries(query.queries().to_vec());

    if let Some(nsid) = nsid {
        let mut edns = Edns::new();
        edns.set_max_payload(4096);
        edns.options_mut()
            .insert(EdnsOption::Unknown(NSID_OPTION_CODE, nsid.to_vec()));
        response.set_edns(edns);
    }

    response
}

/// Like [`nsid_response`], plus one TXT answer in `class` per entry of `answers`;
/// each entry lists the character-strings of that record.
pub fn identity_response(
    query: &Message,
    nsid: Option<&[u8]>,
    class: DNSClass,
    answers: &[&[&str]],
) -> Message {
    let mut response = nsid_response(query, nsid);
    let name = query.queries()[0].name().clone();

    for strings in answers {
        let txt = TXT::new(strings.iter().map(|s| s.to_string()).collect());
        let mut record = Record::from_rdata(name.clone(), 0, RData::TXT(txt));
        record.set_dns_class(class);
        response.add_answer(record);
    }

    response
}
