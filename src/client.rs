//! The seam between the dispatcher and whatever talks to the daemon.
//!
//! Every method blocks until the daemon answers or the transport gives up.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call went out but no answer came back. The daemon does this on
    /// purpose when asked to re-execute itself.
    NoReply,
    /// The bus could not be reached or the connection broke.
    Transport,
    /// The daemon answered with an error.
    Remote,
    /// Anything else: bad names, unexpected reply signatures.
    Protocol,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ClientError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_no_reply(&self) -> bool {
        self.kind == ErrorKind::NoReply
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub trait Client {
    fn add(&self, text: &str) -> ClientResult<()>;
    fn add_file(&self, path: &str) -> ClientResult<()>;
    fn add_password(&self, name: &str, password: &str) -> ClientResult<()>;
    fn rename_password(&self, old_name: &str, new_name: &str) -> ClientResult<()>;
    fn set_password(&self, index: u32, name: &str) -> ClientResult<()>;
    fn delete_password(&self, name: &str) -> ClientResult<()>;

    fn get_element(&self, index: u32) -> ClientResult<String>;
    fn get_raw_element(&self, index: u32) -> ClientResult<String>;
    fn get_history(&self) -> ClientResult<Vec<String>>;
    fn get_raw_history(&self) -> ClientResult<Vec<String>>;
    fn get_history_size(&self) -> ClientResult<u32>;
    fn search(&self, query: &str) -> ClientResult<Vec<u32>>;

    fn list_histories(&self) -> ClientResult<Vec<String>>;
    fn backup_history(&self, name: &str) -> ClientResult<()>;
    fn switch_history(&self, name: &str) -> ClientResult<()>;
    fn delete_history(&self, name: &str) -> ClientResult<()>;

    fn select(&self, index: u32) -> ClientResult<()>;
    fn delete(&self, index: u32) -> ClientResult<()>;
    fn empty(&self) -> ClientResult<()>;
    fn track(&self, enabled: bool) -> ClientResult<()>;

    fn reexecute(&self) -> ClientResult<()>;
    fn daemon_version(&self) -> ClientResult<String>;
    fn show_history(&self) -> ClientResult<()>;
    fn about(&self) -> ClientResult<()>;
}

/// Graphical helpers shipped alongside the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperApp {
    Settings,
    #[cfg(feature = "applet")]
    Applet,
    #[cfg(feature = "app-indicator")]
    AppIndicator,
}

impl HelperApp {
    pub fn name(self) -> &'static str {
        match self {
            HelperApp::Settings => "Settings",
            #[cfg(feature = "applet")]
            HelperApp::Applet => "Applet",
            #[cfg(feature = "app-indicator")]
            HelperApp::AppIndicator => "AppIndicator",
        }
    }
}

impl std::fmt::Display for HelperApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Activates a helper application by name, with no activation parameters.
pub trait Launcher {
    fn activate(&self, app: HelperApp) -> ClientResult<()>;
}
