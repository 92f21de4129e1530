use std::path::Path;

use super::{Operation, Reply};
use crate::client::{Client, ClientResult, Launcher};
use crate::constants::REEXEC_SUCCESS;
use crate::paths::absolutize;

/// How an operation ended when the daemon itself did not report an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done(Reply),
    /// Non-fatal failure: the diagnostic goes to stderr and the exit code is 1.
    Failed(String),
}

/// Performs one operation. `cwd` anchors relative paths given to `file`.
///
/// Errors returned here are fatal. Failure to launch a helper is not: it is
/// reported as `Outcome::Failed`.
pub fn cmd_exec<C>(client: &C, op: &Operation, cwd: &Path) -> ClientResult<Outcome>
where
    C: Client + Launcher,
{
    tracing::debug!(?op, "executing");
    let reply = match op {
        Operation::History(flags) => {
            let items = if flags.raw {
                client.get_raw_history()?
            } else {
                client.get_history()?
            };
            Reply::History {
                items,
                flags: *flags,
            }
        }
        Operation::HistorySize => Reply::Count(client.get_history_size()?),
        Operation::ListHistories => Reply::List(client.list_histories()?),
        Operation::DaemonVersion => Reply::Line(client.daemon_version()?),
        Operation::About => unit(client.about())?,
        Operation::Empty => unit(client.empty())?,
        Operation::Track(enabled) => unit(client.track(*enabled))?,
        Operation::Reexecute => match client.reexecute() {
            Ok(()) => Reply::None,
            // The daemon replaces itself before it can answer.
            Err(e) if e.is_no_reply() => Reply::Message(REEXEC_SUCCESS.to_string()),
            Err(e) => return Err(e),
        },
        Operation::ShowHistory => unit(client.show_history())?,
        Operation::Launch(app) => {
            if let Err(e) = client.activate(*app) {
                tracing::debug!(%app, error = %e, "helper activation failed");
                return Ok(Outcome::Failed(format!("Couldn't spawn {}: {}", app, e)));
            }
            Reply::None
        }

        Operation::Add(text) => unit(client.add(text))?,
        Operation::AddFile(path) => unit(client.add_file(&absolutize(path, cwd)))?,
        Operation::Delete(index) => unit(client.delete(*index))?,
        Operation::DeletePassword(name) => unit(client.delete_password(name))?,
        Operation::DeleteHistory(name) => unit(client.delete_history(name))?,
        Operation::Get(index) => Reply::Text(client.get_element(*index)?),
        Operation::GetRaw(index) => Reply::Text(client.get_raw_element(*index)?),
        Operation::Select(index) => unit(client.select(*index))?,
        Operation::SwitchHistory(name) => unit(client.switch_history(name))?,
        Operation::BackupHistory(name) => unit(client.backup_history(name))?,
        Operation::Search(query) => Reply::Indexes(client.search(query)?),

        Operation::AddPassword { name, password } => unit(client.add_password(name, password))?,
        Operation::RenamePassword { old_name, new_name } => {
            unit(client.rename_password(old_name, new_name))?
        }
        Operation::SetPassword { index, name } => unit(client.set_password(*index, name))?,
    };

    debug_assert!(
        matches!(reply, Reply::Message(_)) || reply.shape() == op.shape(),
        "reply shape must match the operation"
    );
    Ok(Outcome::Done(reply))
}

fn unit(result: ClientResult<()>) -> ClientResult<Reply> {
    result.map(|()| Reply::None)
}
