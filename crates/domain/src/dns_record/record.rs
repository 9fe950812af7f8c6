use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of an answer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    MX {
        preference: u16,
        exchange: String,
    },
    /// Character strings in wire order
    TXT(Vec<String>),
    NS(String),
    SOA {
        mname: String,
        rname: String,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
    },
    PTR(String),
    /// Any record kind outside the supported set (RRSIG, OPT, SRV, ...)
    Other { code: u16 },
}

impl RecordData {
    /// Record type of this payload, `None` for unsupported kinds.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            RecordData::A(_) => Some(RecordType::A),
            RecordData::AAAA(_) => Some(RecordType::AAAA),
            RecordData::CNAME(_) => Some(RecordType::CNAME),
            RecordData::MX { .. } => Some(RecordType::MX),
            RecordData::TXT(_) => Some(RecordType::TXT),
            RecordData::NS(_) => Some(RecordType::NS),
            RecordData::SOA { .. } => Some(RecordType::SOA),
            RecordData::PTR(_) => Some(RecordType::PTR),
            RecordData::Other { .. } => None,
        }
    }

    /// Wire type number, including unsupported kinds.
    pub fn code(&self) -> u16 {
        match self {
            RecordData::Other { code } => *code,
            data => data.record_type().map(|rt| rt.code()).unwrap_or_default(),
        }
    }
}

/// A single answer-section resource record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Owner name as received (fully qualified)
    pub name: String,
    /// Time to live in seconds
    pub ttl: u32,
    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        self.data.record_type()
    }

    /// Whether this record answers a query of `record_type`.
    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type() == Some(record_type)
    }
}
