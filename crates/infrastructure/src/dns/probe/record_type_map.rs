//! Mapping from the domain's type and class codes onto `hickory_proto`.

use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};
use nsidenum_domain::{DnsClass, RecordType};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Generic `TYPEnnn` values land on hickory's `Unknown` variant.
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    pub fn class_to_hickory(class: &DnsClass) -> DNSClass {
        match class {
            DnsClass::IN => DNSClass::IN,
            DnsClass::CH => DNSClass::CH,
            DnsClass::HS => DNSClass::HS,
            DnsClass::NONE => DNSClass::NONE,
            DnsClass::ANY => DNSClass::ANY,
        }
    }
}
