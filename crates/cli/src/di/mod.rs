use dnsee_application::services::ResolverSelector;
use dnsee_application::use_cases::LookupRecordsUseCase;
use dnsee_domain::Config;
use dnsee_infrastructure::dns::WireDnsExchanger;
use dnsee_infrastructure::system::ResolvConfReader;
use std::sync::Arc;

pub struct Services {
    pub resolver_selector: ResolverSelector,
    pub lookup: LookupRecordsUseCase,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let exchanger = Arc::new(WireDnsExchanger::new(
            config.resolver.protocol,
            config.resolver.timeout(),
        ));

        Self {
            resolver_selector: ResolverSelector::new(Arc::new(ResolvConfReader::new())),
            lookup: LookupRecordsUseCase::new(exchanger),
        }
    }
}
