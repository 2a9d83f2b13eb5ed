use crate::config::LogFormat;
use tracing_subscriber::{EnvFilter, filter::Directive, prelude::*};

const LOG_ENV: &str = "EDGESTASH_LOG";
const DEFAULT_DIRECTIVES: &[&str] = &["edgestash=info", "tower_http=info"];

/// Install the global tracing subscriber.
///
/// Filter directives are read from `EDGESTASH_LOG`, falling back to
/// `info` for this crate and the HTTP trace layer.
pub fn init(format: LogFormat) {
    let mut filter = EnvFilter::from_env(LOG_ENV);
    if std::env::var_os(LOG_ENV).is_none() {
        for directive in DEFAULT_DIRECTIVES {
            if let Ok(directive) = directive.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }
    }

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init(),
    }
}
