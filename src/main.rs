mod cli;
mod client;
mod commands;
mod config;
mod constants;
mod dbus;
mod dispatch;
mod paths;
mod testutil;

use std::io::IsTerminal;
use std::process::ExitCode;

use cli::Invocation;
use dbus::DbusClient;
use dispatch::Streams;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let invocation = Invocation::parse_from(std::env::args_os(), std::io::stdin().is_terminal());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut io = Streams {
        stdin: &mut stdin.lock(),
        stdout: &mut stdout.lock(),
        stderr: &mut stderr.lock(),
    };

    let connect = || -> anyhow::Result<DbusClient> {
        let config = config::load_default_config()?;
        Ok(DbusClient::connect(config)?)
    };

    match dispatch::run(&invocation, connect, &mut io) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout stays byte-exact for scripts.
fn init_logging() {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
