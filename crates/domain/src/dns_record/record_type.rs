use std::fmt;

/// Record types dnsee knows how to query and display.
///
/// The declaration order is the registry order: lookups without an explicit
/// `--query-types` selection are dispatched in exactly this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    SOA,
    PTR,
}

const SUPPORTED: [RecordType; 8] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::CNAME,
    RecordType::MX,
    RecordType::TXT,
    RecordType::NS,
    RecordType::SOA,
    RecordType::PTR,
];

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
        }
    }

    /// Wire format type number (RFC 1035, RFC 3596 for AAAA)
    pub fn code(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
        }
    }

    /// All supported record types in registry order.
    pub fn supported() -> &'static [RecordType] {
        &SUPPORTED
    }

    /// Narrow `all` to the entries named in `requested`, keeping the order of
    /// `all`. Names must match exactly (`"MX"`, not `"mx"`); unknown names are
    /// dropped.
    pub fn filter<S: AsRef<str>>(all: &[RecordType], requested: &[S]) -> Vec<RecordType> {
        all.iter()
            .copied()
            .filter(|rt| requested.iter().any(|name| name.as_ref() == rt.as_str()))
            .collect()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
