use crate::ports::DnsExchanger;
use dnsee_domain::{DnsQuery, DomainError, QueryResult, RecordType, ResolverAddr};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: query each record type for a domain, one exchange at a time.
///
/// Queries are dispatched strictly in the order given. The first failed
/// exchange aborts the lookup; remaining types are not attempted.
pub struct LookupRecordsUseCase {
    exchanger: Arc<dyn DnsExchanger>,
}

impl LookupRecordsUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self { exchanger }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_types: &[RecordType],
        server: &ResolverAddr,
    ) -> Result<Vec<QueryResult>, DomainError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name cannot be empty".to_string(),
            ));
        }

        let domain: Arc<str> = Arc::from(domain);
        let mut results = Vec::with_capacity(record_types.len());

        for &record_type in record_types {
            let query = DnsQuery::new(Arc::clone(&domain), record_type);

            debug!(
                server = %server,
                query_type = %record_type,
                domain = %query.fqdn(),
                "Sending DNS query"
            );

            let answer = match self.exchanger.exchange(&query, server).await {
                Ok(answer) => answer,
                Err(e) => {
                    debug!(server = %server, query = %query, error = %e, "DNS query failed");
                    return Err(e);
                }
            };

            if answer.truncated {
                warn!(
                    server = %server,
                    query = %query,
                    "Response was truncated; answer section may be incomplete"
                );
            }

            debug!(
                server = %server,
                query_type = %record_type,
                rcode = %answer.response_code,
                answers = answer.records.len(),
                rtt_ms = answer.rtt.as_secs_f64() * 1000.0,
                "Received DNS response"
            );

            results.push(QueryResult {
                record_type,
                records: answer.records,
                response_code: answer.response_code,
                rtt: answer.rtt,
            });
        }

        Ok(results)
    }
}
