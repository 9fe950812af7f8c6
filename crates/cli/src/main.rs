use clap::error::ErrorKind;
use clap::Parser;
use dnsee_application::services::RecordFormatter;
use dnsee_domain::{CliOverrides, DomainError, RecordType, TransportProtocol};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

mod bootstrap;
mod di;
mod output;

use output::TableRenderer;

#[derive(Parser, Debug)]
#[command(name = "dnsee")]
#[command(version)]
#[command(about = "Query the DNS records of a domain and print them as a table")]
struct Cli {
    /// Domain name to look up
    domain: String,

    /// DNS server to query (IPv4, IPv6 or host name).
    /// Defaults to the first nameserver in /etc/resolv.conf
    #[arg(long = "dns-server-ip", value_name = "ADDR")]
    dns_server_ip: Option<String>,

    /// DNS server port [default: 53]
    #[arg(long = "dns-server-port", value_name = "PORT")]
    dns_server_port: Option<u16>,

    /// Record types to query, comma-separated or repeated [default: all]
    #[arg(
        short = 'q',
        long = "query-types",
        visible_alias = "query-type",
        value_name = "TYPES",
        value_delimiter = ','
    )]
    query_types: Vec<String>,

    /// Query over TCP instead of UDP
    #[arg(long)]
    tcp: bool,

    /// Per-query timeout in milliseconds [default: 5000]
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_server: self.dns_server_ip.clone(),
            dns_port: self.dns_server_port,
            timeout_ms: self.timeout,
            protocol: self.tcp.then_some(TransportProtocol::Tcp),
            no_color: self.no_color,
            log_level: self.debug.then(|| "debug".to_string()),
        }
    }

    /// Every supported type when none were requested; otherwise the
    /// requested ones that exist, in registry order.
    fn record_types(&self) -> Vec<RecordType> {
        if self.query_types.is_empty() {
            RecordType::supported().to_vec()
        } else {
            RecordType::filter(RecordType::supported(), &self.query_types)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors go to stdout alongside help and version text
            print!("{}", e.render());
            return ExitCode::from(usage_exit_code(e.kind()));
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", error_report(&e));
            ExitCode::FAILURE
        }
    }
}

/// Help and version requests are successful exits; every other parse
/// failure is a usage error.
fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Text printed on stderr for a fatal error.
fn error_report(err: &anyhow::Error) -> String {
    let mut report = format!("error: {:#}\n", err);
    if err
        .downcast_ref::<DomainError>()
        .is_some_and(DomainError::needs_explicit_server)
    {
        report.push_str("hint: pass --dns-server-ip to choose a DNS server explicitly\n");
    }
    report
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    let services = di::Services::new(&config);

    let server = services
        .resolver_selector
        .select(config.resolver.explicit_server(), config.resolver.port)
        .await?;

    let record_types = cli.record_types();
    debug!(
        server = %server,
        protocol = %config.resolver.protocol,
        types = record_types.len(),
        "Starting lookup"
    );

    let results = services
        .lookup
        .execute(&cli.domain, &record_types, &server)
        .await?;

    for result in results.iter().filter(|r| r.response_code != "NOERROR") {
        debug!(
            query_type = %result.record_type,
            rcode = %result.response_code,
            "Server did not report success"
        );
    }
    debug!(
        queries = results.len(),
        total_rtt_ms = results.iter().map(|r| r.rtt).sum::<Duration>().as_millis() as u64,
        "Lookup finished"
    );

    let rows = RecordFormatter::rows(&cli.domain, &results);
    let color = config.output.color && std::io::stdout().is_terminal();
    TableRenderer::new(color).write_to(&rows, &mut std::io::stdout().lock())?;

    Ok(())
}
