mod record_formatter;
mod resolver_selector;
mod ttl_formatter;

pub use record_formatter::{RecordFormatter, RecordRow};
pub use resolver_selector::ResolverSelector;
pub use ttl_formatter::format_ttl;
