use dnsee_domain::{DnsRecord, DomainError, RecordData};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer section, in the order the server sent it.
    pub records: Vec<DnsRecord>,
}

impl DnsResponse {
    pub fn status(&self) -> &'static str {
        ResponseParser::rcode_to_status(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let records: Vec<DnsRecord> = message.answers().iter().map(Self::convert).collect();

        debug!(
            rcode = ?rcode,
            answers = records.len(),
            truncated = truncated,
            "DNS response parsed:\n{}",
            message
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            records,
        })
    }

    /// Convert one wire record into a domain record.
    ///
    /// Kinds outside the lookup registry become `RecordData::Other` so the
    /// answer section keeps its original length and order.
    pub fn convert(record: &Record) -> DnsRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(canonical) => RecordData::CNAME(canonical.to_utf8()),
            RData::NS(ns) => RecordData::NS(ns.to_utf8()),
            RData::PTR(ptr) => RecordData::PTR(ptr.to_utf8()),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::TXT(txt) => RecordData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                    .collect(),
            ),
            RData::SOA(soa) => RecordData::SOA {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
                refresh: soa.refresh(),
                retry: soa.retry(),
                expire: soa.expire(),
                minimum: soa.minimum(),
            },
            _ => RecordData::Other {
                code: u16::from(record.record_type()),
            },
        };

        DnsRecord::new(record.name().to_utf8(), record.ttl(), data)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
