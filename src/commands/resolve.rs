use super::{DisplayFlags, Operation};
use crate::client::HelperApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    History,
    RawHistory,
    OnelineHistory,
    ZeroHistory,
    HistorySize,
    ListHistories,
    DaemonVersion,
    About,
    Empty,
    Start,
    Stop,
    DaemonReexec,
    ShowHistory,
    Settings,
    #[cfg(feature = "applet")]
    Applet,
    #[cfg(feature = "app-indicator")]
    AppIndicator,

    Add,
    File,
    Delete,
    DeletePassword,
    DeleteHistory,
    Get,
    GetRaw,
    Select,
    SwitchHistory,
    BackupHistory,
    Search,

    AddPassword,
    RenamePassword,
    SetPassword,
}

/// One row of the dispatch table. `names[0]` is the canonical name.
#[derive(Debug)]
pub struct Entry {
    pub names: &'static [&'static str],
    pub operands: usize,
    pub action: Action,
}

impl Entry {
    pub fn canonical(&self) -> &'static str {
        self.names[0]
    }
}

const fn entry(names: &'static [&'static str], operands: usize, action: Action) -> Entry {
    Entry {
        names,
        operands,
        action,
    }
}

/// Lookup is by (operand count, token), first match wins, so `d` means `start`
/// with no operands and `delete` with one.
pub static TABLE: &[Entry] = &[
    // no operands
    entry(&["about"], 0, Action::About),
    entry(&["daemon-reexec", "dr"], 0, Action::DaemonReexec),
    entry(&["daemon-version", "dv"], 0, Action::DaemonVersion),
    entry(&["empty", "e"], 0, Action::Empty),
    entry(&["history", "h"], 0, Action::History),
    entry(&["history-size", "hs"], 0, Action::HistorySize),
    entry(&["list-histories", "lh"], 0, Action::ListHistories),
    entry(&["oneline-history", "oh"], 0, Action::OnelineHistory),
    entry(&["raw-history", "rh"], 0, Action::RawHistory),
    entry(&["settings", "s", "preferences", "p"], 0, Action::Settings),
    entry(&["show-history"], 0, Action::ShowHistory),
    entry(&["start", "d", "daemon"], 0, Action::Start),
    entry(&["stop", "q", "quit"], 0, Action::Stop),
    entry(&["zero-history", "zh"], 0, Action::ZeroHistory),
    #[cfg(feature = "applet")]
    entry(&["applet"], 0, Action::Applet),
    #[cfg(feature = "app-indicator")]
    entry(&["app-indicator"], 0, Action::AppIndicator),
    // one operand
    entry(&["add", "a"], 1, Action::Add),
    entry(&["backup-history", "bh"], 1, Action::BackupHistory),
    entry(&["delete", "d", "del", "rm", "remove"], 1, Action::Delete),
    entry(&["delete-password", "dp"], 1, Action::DeletePassword),
    entry(&["delete-history", "dh"], 1, Action::DeleteHistory),
    entry(&["file", "f"], 1, Action::File),
    entry(&["get", "g"], 1, Action::Get),
    entry(&["get-raw", "gr"], 1, Action::GetRaw),
    entry(&["search"], 1, Action::Search),
    entry(&["select", "s", "set"], 1, Action::Select),
    entry(&["switch-history", "sh"], 1, Action::SwitchHistory),
    // two operands
    entry(&["add-password", "ap"], 2, Action::AddPassword),
    entry(&["rename-password", "rp"], 2, Action::RenamePassword),
    entry(&["set-password", "sp"], 2, Action::SetPassword),
];

pub fn lookup(token: &str, operands: usize) -> Option<&'static Entry> {
    TABLE
        .iter()
        .find(|e| e.operands == operands && e.names.contains(&token))
}

/// Resolves the tokens after the program name. `None` means "show help and fail".
pub fn resolve(tokens: &[String]) -> Option<Operation> {
    let Some((token, operands)) = tokens.split_first() else {
        return Some(Operation::History(DisplayFlags::INDEXED));
    };
    let entry = lookup(token, operands.len())?;
    debug_assert_eq!(entry.operands, operands.len());
    tracing::debug!(command = entry.canonical(), "resolved command");
    Some(entry.action.bind(operands))
}

impl Action {
    /// Builds the operation from exactly `operands` tokens, as checked by `lookup`.
    fn bind(self, operands: &[String]) -> Operation {
        let text = |i: usize| operands[i].clone();
        // The daemon indexes with 32 bits; wider values keep their low bits.
        let index = |i: usize| parse_index(&operands[i]) as u32;
        match self {
            Action::History => Operation::History(DisplayFlags::INDEXED),
            Action::RawHistory => Operation::History(DisplayFlags::RAW),
            Action::OnelineHistory => Operation::History(DisplayFlags::ONELINE),
            Action::ZeroHistory => Operation::History(DisplayFlags::ZERO),
            Action::HistorySize => Operation::HistorySize,
            Action::ListHistories => Operation::ListHistories,
            Action::DaemonVersion => Operation::DaemonVersion,
            Action::About => Operation::About,
            Action::Empty => Operation::Empty,
            Action::Start => Operation::Track(true),
            Action::Stop => Operation::Track(false),
            Action::DaemonReexec => Operation::Reexecute,
            Action::ShowHistory => Operation::ShowHistory,
            Action::Settings => Operation::Launch(HelperApp::Settings),
            #[cfg(feature = "applet")]
            Action::Applet => Operation::Launch(HelperApp::Applet),
            #[cfg(feature = "app-indicator")]
            Action::AppIndicator => Operation::Launch(HelperApp::AppIndicator),

            Action::Add => Operation::Add(text(0)),
            Action::File => Operation::AddFile(text(0)),
            Action::Delete => Operation::Delete(index(0)),
            Action::DeletePassword => Operation::DeletePassword(text(0)),
            Action::DeleteHistory => Operation::DeleteHistory(text(0)),
            Action::Get => Operation::Get(index(0)),
            Action::GetRaw => Operation::GetRaw(index(0)),
            Action::Select => Operation::Select(index(0)),
            Action::SwitchHistory => Operation::SwitchHistory(text(0)),
            Action::BackupHistory => Operation::BackupHistory(text(0)),
            Action::Search => Operation::Search(text(0)),

            Action::AddPassword => Operation::AddPassword {
                name: text(0),
                password: text(1),
            },
            Action::RenamePassword => Operation::RenamePassword {
                old_name: text(0),
                new_name: text(1),
            },
            Action::SetPassword => Operation::SetPassword {
                index: index(0),
                name: text(1),
            },
        }
    }
}

/// Parses an index the way `strtoull(text, NULL, 0)` does: never fails.
///
/// Leading whitespace and one sign are skipped, `0x` selects hex and a leading
/// `0` selects octal. The longest run of valid digits is used, garbage yields
/// `0`, overflow saturates at `u64::MAX` and a minus sign wraps.
pub fn parse_index(text: &str) -> u64 {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let hex_digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()));
    let (radix, digits) = match hex_digits {
        Some(rest) => (16, rest),
        None if s.starts_with('0') => (8, s),
        None => (10, s),
    };

    let mut value: u64 = 0;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        value = match value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => v,
            None => return u64::MAX,
        };
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}
