/// Commands are resolved into an `Operation`, executed into a `Reply`, and only
/// then rendered. Nothing in here writes to stdout directly except `render`.
mod exec;
mod help;
mod piped;
mod render;
mod resolve;

pub use exec::*;
pub use help::*;
pub use piped::*;
pub use render::*;
pub use resolve::*;

use crate::client::HelperApp;

/// Rendering toggles for history listings. Fixed per history operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Fetch the raw history and print it without index prefixes.
    pub raw: bool,
    /// Terminate each item with NUL instead of a newline.
    pub zero: bool,
    /// Flatten newlines inside each item to spaces.
    pub oneline: bool,
}

impl DisplayFlags {
    pub const INDEXED: Self = Self {
        raw: false,
        zero: false,
        oneline: false,
    };
    pub const RAW: Self = Self {
        raw: true,
        zero: false,
        oneline: false,
    };
    pub const ONELINE: Self = Self {
        raw: false,
        zero: false,
        oneline: true,
    };
    pub const ZERO: Self = Self {
        raw: false,
        zero: true,
        oneline: false,
    };
}

/// What a successful operation hands back for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    None,
    Text,
    Line,
    List,
    IndexedList,
    Count,
    Indexes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    History(DisplayFlags),
    HistorySize,
    ListHistories,
    DaemonVersion,
    About,
    Empty,
    Track(bool),
    Reexecute,
    ShowHistory,
    Launch(HelperApp),

    Add(String),
    AddFile(String),
    Delete(u32),
    DeletePassword(String),
    DeleteHistory(String),
    Get(u32),
    GetRaw(u32),
    Select(u32),
    SwitchHistory(String),
    BackupHistory(String),
    Search(String),

    AddPassword { name: String, password: String },
    RenamePassword { old_name: String, new_name: String },
    SetPassword { index: u32, name: String },
}

impl Operation {
    pub fn shape(&self) -> Shape {
        match self {
            Operation::History(_) => Shape::IndexedList,
            Operation::ListHistories => Shape::List,
            Operation::HistorySize => Shape::Count,
            Operation::Search(_) => Shape::Indexes,
            Operation::DaemonVersion => Shape::Line,
            Operation::Get(_) | Operation::GetRaw(_) => Shape::Text,
            _ => Shape::None,
        }
    }
}
