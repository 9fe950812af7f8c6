use super::ttl_formatter::format_ttl;
use dnsee_domain::dns_query::to_fqdn;
use dnsee_domain::{DnsRecord, QueryResult, RecordData, RecordType};
use tracing::trace;

/// One display line of the lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub record_type: RecordType,
    /// Queried domain, fully qualified
    pub domain: String,
    /// TTL rendered by [`format_ttl`]
    pub ttl: String,
    /// Kind-specific payload columns
    pub columns: Vec<String>,
}

impl RecordRow {
    /// All cells of the row in display order.
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = Vec::with_capacity(3 + self.columns.len());
        cells.push(self.record_type.as_str());
        cells.push(self.domain.as_str());
        cells.push(self.ttl.as_str());
        cells.extend(self.columns.iter().map(String::as_str));
        cells
    }
}

/// Turns typed answer records into table rows
pub struct RecordFormatter;

impl RecordFormatter {
    /// Format a single record answering a `record_type` query.
    ///
    /// Returns `None` when the record's kind does not match the query type
    /// (e.g. the CNAME that precedes A records in an alias chain).
    pub fn format(domain: &str, record_type: RecordType, record: &DnsRecord) -> Option<RecordRow> {
        if !record.is_type(record_type) {
            trace!(
                query_type = %record_type,
                record_code = record.data.code(),
                owner = %record.name,
                "Skipping record of mismatched type"
            );
            return None;
        }

        let columns = match &record.data {
            RecordData::A(ip) => vec![ip.to_string()],
            RecordData::AAAA(ip) => vec![ip.to_string()],
            RecordData::CNAME(target) | RecordData::NS(target) | RecordData::PTR(target) => {
                vec![target.clone()]
            }
            RecordData::MX {
                preference,
                exchange,
            } => vec![preference.to_string(), exchange.clone()],
            // Only the first character string is shown.
            RecordData::TXT(chunks) => vec![chunks.first().cloned().unwrap_or_default()],
            RecordData::SOA { mname, rname, .. } => vec![mname.clone(), rname.clone()],
            RecordData::Other { .. } => return None,
        };

        Some(RecordRow {
            record_type,
            domain: to_fqdn(domain),
            ttl: format_ttl(record.ttl),
            columns,
        })
    }

    /// Rows for every result, in dispatch order then answer-section order.
    pub fn rows(domain: &str, results: &[QueryResult]) -> Vec<RecordRow> {
        results
            .iter()
            .flat_map(|result| {
                result
                    .records
                    .iter()
                    .filter_map(move |record| Self::format(domain, result.record_type, record))
            })
            .collect()
    }
}
