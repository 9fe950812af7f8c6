use dnsee_application::services::ResolverSelector;
use dnsee_application::use_cases::LookupRecordsUseCase;
use dnsee_domain::{Config, TransportProtocol};
use dnsee_infrastructure::dns::WireDnsExchanger;
use dnsee_infrastructure::system::ResolvConfReader;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::io::Write;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn example() -> &'static str {
        "example.com"
    }

    pub fn alias() -> &'static str {
        "www.example.com"
    }
}

/// The same wiring the binary performs, pointed at a test resolv.conf
pub struct TestApp {
    pub resolver_selector: ResolverSelector,
    pub lookup: LookupRecordsUseCase,
    pub config: Config,
    _resolv_conf: Option<NamedTempFile>,
}

impl TestApp {
    /// `config_toml` is parsed like a `dnsee.toml`; `nameservers` becomes the
    /// content of the resolv.conf the selector reads.
    pub fn new(config_toml: &str, nameservers: &[&str]) -> Self {
        let config = Config::from_toml(config_toml).unwrap();
        config.validate().unwrap();

        let mut resolv_conf = NamedTempFile::new().unwrap();
        writeln!(resolv_conf, "# test resolv.conf").unwrap();
        for ns in nameservers {
            writeln!(resolv_conf, "nameserver {}", ns).unwrap();
        }
        let reader = ResolvConfReader::with_path(resolv_conf.path().to_string_lossy());

        Self::build(config, reader, Some(resolv_conf))
    }

    pub fn with_resolv_conf_path(config_toml: &str, path: &str) -> Self {
        let config = Config::from_toml(config_toml).unwrap();
        Self::build(config, ResolvConfReader::with_path(path), None)
    }

    fn build(config: Config, reader: ResolvConfReader, file: Option<NamedTempFile>) -> Self {
        let exchanger = Arc::new(WireDnsExchanger::new(
            config.resolver.protocol,
            config.resolver.timeout(),
        ));
        Self {
            resolver_selector: ResolverSelector::with_platform_support(Arc::new(reader), true),
            lookup: LookupRecordsUseCase::new(exchanger),
            config,
            _resolv_conf: file,
        }
    }
}

pub fn resolver_toml(port: u16, protocol: TransportProtocol, timeout_ms: u64) -> String {
    let protocol = match protocol {
        TransportProtocol::Udp => "udp",
        TransportProtocol::Tcp => "tcp",
    };
    format!(
        "[resolver]\nport = {}\nprotocol = \"{}\"\ntimeout_ms = {}\n",
        port, protocol, timeout_ms
    )
}

// ============================================================================
// Zone records
// ============================================================================

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

/// example.com with at least one record for most registry types
pub fn example_zone() -> Vec<Record> {
    let origin = name("example.com.");
    vec![
        Record::from_rdata(
            origin.clone(),
            300,
            RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
        ),
        Record::from_rdata(
            origin.clone(),
            300,
            RData::AAAA(AAAA(
                Ipv6Addr::from_str("2606:2800:220:1:248:1893:25c8:1946").unwrap(),
            )),
        ),
        Record::from_rdata(
            origin.clone(),
            3600,
            RData::MX(MX::new(10, name("mail.example.com."))),
        ),
        Record::from_rdata(
            origin.clone(),
            300,
            RData::TXT(TXT::new(vec![
                "v=spf1 -all".to_string(),
                "ignored".to_string(),
            ])),
        ),
        Record::from_rdata(
            origin.clone(),
            86400,
            RData::NS(NS(name("a.iana-servers.net."))),
        ),
        Record::from_rdata(
            origin.clone(),
            86400,
            RData::NS(NS(name("b.iana-servers.net."))),
        ),
        Record::from_rdata(
            origin,
            3600,
            RData::SOA(SOA::new(
                name("ns.icann.org."),
                name("noc.dns.icann.org."),
                2024010101,
                7200,
                3600,
                1_209_600,
                3600,
            )),
        ),
    ]
}

/// CNAME + A chain as returned for an A query on an alias
pub fn alias_chain() -> Vec<Record> {
    vec![
        Record::from_rdata(
            name("www.example.com."),
            300,
            RData::CNAME(CNAME(name("example.com."))),
        ),
        Record::from_rdata(
            name("example.com."),
            300,
            RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
        ),
    ]
}
