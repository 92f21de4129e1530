#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::{Client, ClientError, ClientResult, ErrorKind, HelperApp, Launcher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Add(String),
    AddFile(String),
    AddPassword(String, String),
    RenamePassword(String, String),
    SetPassword(u32, String),
    DeletePassword(String),
    GetElement(u32),
    GetRawElement(u32),
    GetHistory,
    GetRawHistory,
    GetHistorySize,
    Search(String),
    ListHistories,
    BackupHistory(String),
    SwitchHistory(String),
    DeleteHistory(String),
    Select(u32),
    Delete(u32),
    Empty,
    Track(bool),
    Reexecute,
    DaemonVersion,
    ShowHistory,
    About,
    Activate(HelperApp),
}

/// In-memory stand-in for the daemon that records every call it receives.
/// Clones share the call log.
#[derive(Clone, Default)]
pub struct FakeClient {
    history: Vec<String>,
    matches: Vec<u32>,
    failure: Option<(&'static str, ErrorKind)>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeClient {
    pub fn with_history(items: &[&str]) -> Self {
        Self {
            history: items.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_matches(mut self, matches: &[u32]) -> Self {
        self.matches = matches.to_vec();
        self
    }

    /// Makes the named method fail with `kind`. Names are the trait method names.
    pub fn failing(mut self, method: &'static str, kind: ErrorKind) -> Self {
        self.failure = Some((method, kind));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, method: &'static str, call: Call) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);
        match self.failure {
            Some((failing, kind)) if failing == method => {
                Err(ClientError::new(kind, format!("{} failed", method)))
            }
            _ => Ok(()),
        }
    }

    fn item(&self, index: u32) -> ClientResult<String> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.history.get(i))
            .cloned()
            .ok_or_else(|| ClientError::new(ErrorKind::Remote, format!("no item at {}", index)))
    }
}

impl Client for FakeClient {
    fn add(&self, text: &str) -> ClientResult<()> {
        self.record("add", Call::Add(text.to_string()))
    }

    fn add_file(&self, path: &str) -> ClientResult<()> {
        self.record("add_file", Call::AddFile(path.to_string()))
    }

    fn add_password(&self, name: &str, password: &str) -> ClientResult<()> {
        self.record(
            "add_password",
            Call::AddPassword(name.to_string(), password.to_string()),
        )
    }

    fn rename_password(&self, old_name: &str, new_name: &str) -> ClientResult<()> {
        self.record(
            "rename_password",
            Call::RenamePassword(old_name.to_string(), new_name.to_string()),
        )
    }

    fn set_password(&self, index: u32, name: &str) -> ClientResult<()> {
        self.record("set_password", Call::SetPassword(index, name.to_string()))
    }

    fn delete_password(&self, name: &str) -> ClientResult<()> {
        self.record("delete_password", Call::DeletePassword(name.to_string()))
    }

    fn get_element(&self, index: u32) -> ClientResult<String> {
        self.record("get_element", Call::GetElement(index))?;
        self.item(index)
    }

    fn get_raw_element(&self, index: u32) -> ClientResult<String> {
        self.record("get_raw_element", Call::GetRawElement(index))?;
        self.item(index)
    }

    fn get_history(&self) -> ClientResult<Vec<String>> {
        self.record("get_history", Call::GetHistory)?;
        Ok(self.history.clone())
    }

    fn get_raw_history(&self) -> ClientResult<Vec<String>> {
        self.record("get_raw_history", Call::GetRawHistory)?;
        Ok(self.history.clone())
    }

    fn get_history_size(&self) -> ClientResult<u32> {
        self.record("get_history_size", Call::GetHistorySize)?;
        Ok(self.history.len() as u32)
    }

    fn search(&self, query: &str) -> ClientResult<Vec<u32>> {
        self.record("search", Call::Search(query.to_string()))?;
        Ok(self.matches.clone())
    }

    fn list_histories(&self) -> ClientResult<Vec<String>> {
        self.record("list_histories", Call::ListHistories)?;
        Ok(vec!["history".to_string(), "work".to_string()])
    }

    fn backup_history(&self, name: &str) -> ClientResult<()> {
        self.record("backup_history", Call::BackupHistory(name.to_string()))
    }

    fn switch_history(&self, name: &str) -> ClientResult<()> {
        self.record("switch_history", Call::SwitchHistory(name.to_string()))
    }

    fn delete_history(&self, name: &str) -> ClientResult<()> {
        self.record("delete_history", Call::DeleteHistory(name.to_string()))
    }

    fn select(&self, index: u32) -> ClientResult<()> {
        self.record("select", Call::Select(index))
    }

    fn delete(&self, index: u32) -> ClientResult<()> {
        self.record("delete", Call::Delete(index))
    }

    fn empty(&self) -> ClientResult<()> {
        self.record("empty", Call::Empty)
    }

    fn track(&self, enabled: bool) -> ClientResult<()> {
        self.record("track", Call::Track(enabled))
    }

    fn reexecute(&self) -> ClientResult<()> {
        self.record("reexecute", Call::Reexecute)
    }

    fn daemon_version(&self) -> ClientResult<String> {
        self.record("daemon_version", Call::DaemonVersion)?;
        Ok("3.99-test".to_string())
    }

    fn show_history(&self) -> ClientResult<()> {
        self.record("show_history", Call::ShowHistory)
    }

    fn about(&self) -> ClientResult<()> {
        self.record("about", Call::About)
    }
}

impl Launcher for FakeClient {
    fn activate(&self, app: HelperApp) -> ClientResult<()> {
        self.record("activate", Call::Activate(app))
    }
}
