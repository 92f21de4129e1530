const USAGE: &[(&str, &str)] = &[
    ("[history]", "print the history with indexes"),
    ("history-size", "print the size of the history"),
    ("backup-history <name>", "backup current history"),
    ("switch-history <name>", "switch to another history"),
    ("delete-history <name>", "delete a history"),
    ("list-histories", "list available histories"),
    ("oneline-history", "print the history without newlines"),
    ("raw-history", "print the history (raw) without indexes"),
    ("zero-history", "print the history with NUL as separator"),
    ("add <text>", "set text to clipboard"),
    (
        "add-password <name> <password>",
        "add the name - password couple to the clipboard",
    ),
    ("rename-password <old name> <new name>", "rename the password"),
    ("get <number>", "get the <number>th item from the history"),
    ("get-raw <number>", "get the <number>th item from the history (raw)"),
    (
        "select <number>",
        "set the <number>th item from the history to the clipboard",
    ),
    (
        "set-password <number> <name>",
        "set the <number>th item from the history as a password named <name>",
    ),
    ("delete <number>", "delete <number>th item of the history"),
    (
        "delete-password <name>",
        "delete the password <name> from the history",
    ),
    (
        "file <path>",
        "put the content of the file at <path> into the clipboard",
    ),
    ("search <query>", "print the indexes of the items matching <query>"),
    ("empty", "empty the history"),
    ("start", "start tracking clipboard changes"),
    ("stop", "stop tracking clipboard changes"),
    ("quit", "alias for stop"),
    ("daemon-reexec", "reexecute the daemon (after upgrading...)"),
    ("settings", "launch the configuration tool"),
    #[cfg(feature = "applet")]
    ("applet", "launch the applet"),
    #[cfg(feature = "app-indicator")]
    ("app-indicator", "launch the unity application indicator"),
    (
        "show-history",
        "make the applet or extension display the history",
    ),
    ("version", "display the version"),
    ("daemon-version", "display the daemon version"),
    ("help", "display this help"),
    ("about", "display the about dialog"),
];

/// Usage text; `caller` is the name the program was invoked as.
pub fn help_text(caller: &str) -> String {
    let mut text = String::from("Usage:\n");
    for (command, description) in USAGE {
        text.push_str(&format!("  {} {}: {}\n", caller, command, description));
        // The piped form sits right after `file` in the listing.
        if command.starts_with("file ") {
            text.push_str(&format!(
                "  whatever | {}: set the output of whatever to clipboard\n",
                caller
            ));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TABLE;

    #[test]
    fn help_starts_with_usage_and_uses_caller() {
        let text = help_text("/usr/bin/gpaste");
        assert!(text.starts_with("Usage:\n"));
        assert!(text.contains("  /usr/bin/gpaste [history]: print the history with indexes\n"));
        assert!(text.contains(
            "  whatever | /usr/bin/gpaste: set the output of whatever to clipboard\n"
        ));
    }

    #[test]
    fn every_canonical_command_is_documented() {
        let text = help_text("gpaste");
        for entry in TABLE {
            let needle = format!("gpaste {}", entry.canonical());
            let bracketed = format!("gpaste [{}]", entry.canonical());
            assert!(
                text.contains(&needle) || text.contains(&bracketed),
                "{} missing from help",
                entry.canonical()
            );
        }
    }

    #[test]
    fn applet_line_follows_feature() {
        let text = help_text("gpaste");
        assert_eq!(text.contains("gpaste applet:"), cfg!(feature = "applet"));
        assert_eq!(
            text.contains("gpaste app-indicator:"),
            cfg!(feature = "app-indicator")
        );
    }

    #[test]
    fn every_line_ends_with_newline() {
        assert!(help_text("gpaste").ends_with('\n'));
    }
}
