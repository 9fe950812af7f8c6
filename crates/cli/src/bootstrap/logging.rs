use dnsee_domain::Config;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 4] = [
    "dnsee",
    "dnsee_domain",
    "dnsee_application",
    "dnsee_infrastructure",
];

/// Logs go to stderr; stdout carries only the record table.
pub fn init_logging(config: &Config) {
    let level = config.logging.level.to_ascii_lowercase();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directives(&level)))
        .with_writer(std::io::stderr)
        .with_ansi(ansi_enabled(config, std::io::stderr().is_terminal()))
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    debug!(level = %level, "Logging initialized");
}

/// Third-party crates stay at warn regardless of our level.
fn filter_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{}={}", krate, level));
    }
    directives
}

fn ansi_enabled(config: &Config, stderr_is_terminal: bool) -> bool {
    config.output.color && stderr_is_terminal
}
