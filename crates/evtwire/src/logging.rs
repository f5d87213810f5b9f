use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Environment variable holding raw filter directives. When set, it wins
/// over the `--log-level` flag.
pub const LOG_ENV_VAR: &str = "EVTWIRE_LOG";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Directives for the `--log-level` flag: the level applies to the
/// evtwire crates only, so dependency noise stays out even at trace.
fn default_directives(level: LogLevel) -> String {
    let level = level.as_directive();
    format!(
        "evtwire={level},evtwire_transport={level},evtwire_frame={level},evtwire_session={level}"
    )
}

fn filter_directives(level: LogLevel) -> String {
    std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| default_directives(level))
}

pub fn init_logging(format: LogFormat, level: LogLevel) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter_directives(level)))
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
