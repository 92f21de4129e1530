use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::process::ExitCode;

use crate::cli::{Invocation, Mode};
use crate::client::{Client, ClientError, Launcher};
use crate::commands::{self, Operation, Outcome};
use crate::constants::{version_string, DAEMON_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

pub struct Streams<'a> {
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

/// Runs one invocation to completion.
///
/// `connect` is only called once a remote call is actually needed, so help,
/// version and unknown commands never touch the daemon. An `Err` is fatal:
/// the caller prints it and exits with failure.
pub fn run<C, F>(invocation: &Invocation, connect: F, io: &mut Streams<'_>) -> Result<Status>
where
    C: Client + Launcher,
    F: FnOnce() -> Result<C>,
{
    let mode = invocation.classify();
    tracing::debug!(?mode, "classified invocation");

    match mode {
        Mode::ShowHelp => {
            io.stdout
                .write_all(commands::help_text(&invocation.program).as_bytes())?;
            Ok(Status::Success)
        }
        Mode::ShowVersion => {
            writeln!(io.stdout, "{}", version_string())?;
            Ok(Status::Success)
        }
        Mode::PipedAdd => {
            let client = open_client(connect)?;
            let text = commands::read_piped_text(io.stdin)?;
            execute(&client, &Operation::Add(text), invocation, io)
        }
        Mode::Dispatch(tokens) => {
            let Some(op) = commands::resolve(tokens) else {
                tracing::debug!(?tokens, "no command matches");
                // Usage goes to stdout here, same as an explicit `help`.
                io.stdout
                    .write_all(commands::help_text(&invocation.program).as_bytes())?;
                return Ok(Status::Failure);
            };
            let client = open_client(connect)?;
            execute(&client, &op, invocation, io)
        }
    }
}

/// Only client errors get the daemon diagnostic. Anything else `connect`
/// fails on, such as a broken config file, is reported as is.
fn open_client<C, F>(connect: F) -> Result<C>
where
    F: FnOnce() -> Result<C>,
{
    connect().map_err(|e| {
        if e.is::<ClientError>() {
            e.context(DAEMON_ERROR)
        } else {
            e
        }
    })
}

fn execute<C>(
    client: &C,
    op: &Operation,
    invocation: &Invocation,
    io: &mut Streams<'_>,
) -> Result<Status>
where
    C: Client + Launcher,
{
    let outcome = commands::cmd_exec(client, op, &invocation.cwd).context(DAEMON_ERROR)?;
    match outcome {
        Outcome::Done(reply) => {
            commands::write_reply(io.stdout, &reply).context("failed to write output")?;
            Ok(Status::Success)
        }
        Outcome::Failed(message) => {
            writeln!(io.stderr, "error: {}", message)?;
            Ok(Status::Failure)
        }
    }
}
