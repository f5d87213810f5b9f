use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use evtwire_session::{Outcome, SenderSession};
use evtwire_transport::connect;

use crate::cmd::SendArgs;
use crate::exit::{
    io_error, session_error, transport_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE,
};
use crate::output::{print_report, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let delay = parse_delay(&args.delay)?;

    let input = File::open(&args.input)
        .map_err(|err| io_error(&format!("failed opening {}", args.input.display()), err))?;

    let endpoint = format!("{}:{}", args.host, args.port);
    let conn = connect(endpoint.as_str()).map_err(|err| transport_error("connect failed", err))?;
    tracing::info!(%endpoint, input = %args.input.display(), "connected, starting transfer");

    let report = SenderSession::new(BufReader::new(input), conn, delay)
        .run()
        .map_err(|err| session_error("send failed", err))?;

    print_report("sender", &endpoint, &report, format);

    // A truncated trailing record is a warning, not a failure: every
    // prior record already went out successfully.
    match report.outcome {
        Outcome::Clean | Outcome::Truncated { .. } => Ok(SUCCESS),
        Outcome::InvalidLength { .. } => Ok(DATA_INVALID),
    }
}

/// Parse the pacing delay. `0` (any unit) disables pacing.
fn parse_delay(input: &str) -> CliResult<Option<Duration>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "delay must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid delay value: {input}")))?;

    if value == 0 {
        return Ok(None);
    }

    match unit {
        "ms" => Ok(Some(Duration::from_millis(value))),
        "s" => Ok(Some(Duration::from_secs(value))),
        _ => Err(CliError::new(USAGE, format!("unsupported delay unit: {unit}"))),
    }
}
