use std::fs::File;
use std::net::SocketAddr;

use evtwire_session::{Outcome, ReceiverSession};
use evtwire_transport::Listener;
use tracing::info;

use crate::cmd::RecvArgs;
use crate::exit::{
    io_error, session_error, transport_error, CliResult, DATA_INVALID, SUCCESS,
};
use crate::output::{print_report, OutputFormat};

pub fn run(args: RecvArgs, format: OutputFormat) -> CliResult<i32> {
    let addr = SocketAddr::new(args.listen, args.port);
    let listener = Listener::bind(addr).map_err(|err| transport_error("bind failed", err))?;
    let endpoint = listener.local_addr().to_string();

    // One connection, one session; the file is created only once a peer
    // has actually connected.
    info!(%endpoint, "waiting for peer");
    let conn = listener
        .accept()
        .map_err(|err| transport_error("accept failed", err))?;

    let output = File::create(&args.output)
        .map_err(|err| io_error(&format!("failed creating {}", args.output.display()), err))?;

    let report = ReceiverSession::new(conn, output)
        .run()
        .map_err(|err| session_error("receive failed", err))?;

    print_report("receiver", &endpoint, &report, format);

    // Mid-stream truncation and an invalid prefix are both protocol
    // violations on the receiving side; records already written stay put.
    match report.outcome {
        Outcome::Clean => Ok(SUCCESS),
        Outcome::Truncated { .. } | Outcome::InvalidLength { .. } => Ok(DATA_INVALID),
    }
}
