use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod recv;
pub mod send;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a record file to a remote receiver.
    Send(SendArgs),
    /// Accept one connection and write received records to a file.
    Recv(RecvArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Send(args) => send::run(args, format),
        Command::Recv(args) => recv::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Input record file (concatenated length-prefixed records).
    pub input: PathBuf,
    /// Remote host or address.
    #[arg(long)]
    pub host: String,
    /// Remote TCP port.
    #[arg(long)]
    pub port: u16,
    /// Delay between records (e.g. 10ms, 1s; 0 disables pacing).
    #[arg(long, default_value = "0")]
    pub delay: String,
}

#[derive(Args, Debug)]
pub struct RecvArgs {
    /// Output file (created or truncated).
    pub output: PathBuf,
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    pub listen: IpAddr,
    /// TCP port to listen on.
    #[arg(long)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
