use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Commands are resolved by hand (`commands::resolve`) because the same alias
/// means different things depending on how many operands follow it, so clap
/// only collects the raw tokens here. They stay `OsString` so clap never
/// rejects an argument.
#[derive(Parser, Debug)]
#[command(
    name = "gpaste",
    about = "Command-line client for the GPaste clipboard daemon",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<OsString>,
}

const HELP_TRIGGERS: &[&str] = &["help", "-h", "--help"];
const VERSION_TRIGGERS: &[&str] = &["v", "version", "-v", "--version"];

/// Everything the dispatcher needs to know about how it was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Name the program was invoked as, used in the help text.
    pub program: String,
    /// Tokens after the program name.
    pub tokens: Vec<String>,
    pub stdin_is_terminal: bool,
    /// Working directory, used to anchor relative paths sent to the daemon.
    pub cwd: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    ShowHelp,
    ShowVersion,
    PipedAdd,
    Dispatch(&'a [String]),
}

impl Invocation {
    pub fn new(program: impl Into<String>, tokens: Vec<String>, stdin_is_terminal: bool) -> Self {
        Self {
            program: program.into(),
            tokens,
            stdin_is_terminal,
            cwd: std::env::current_dir().unwrap_or_default(),
        }
    }

    #[cfg(test)]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Captures argv through clap. `argv[0]` is kept for the help text.
    ///
    /// Tokens are matched verbatim later, so a `--` is placed in front of them
    /// and clap stops interpreting anything the user typed, including a `--`
    /// of their own. Non-UTF-8 bytes become U+FFFD.
    pub fn parse_from<I>(argv: I, stdin_is_terminal: bool) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let program = argv
            .next()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "gpaste".to_string());
        let raw: Vec<OsString> = argv.collect();

        let escaped = [OsString::from(&program), OsString::from("--")]
            .into_iter()
            .chain(raw.iter().cloned());
        let tokens = match Cli::try_parse_from(escaped) {
            Ok(cli) => cli.tokens,
            Err(e) => {
                tracing::debug!(error = %e, "clap rejected argv, using it unparsed");
                raw
            }
        };
        let tokens = tokens
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect();
        Self::new(program, tokens, stdin_is_terminal)
    }

    /// Decides what to do before any connection to the daemon exists.
    pub fn classify(&self) -> Mode<'_> {
        if let Some(first) = self.tokens.first() {
            if HELP_TRIGGERS.contains(&first.as_str()) {
                return Mode::ShowHelp;
            }
            if VERSION_TRIGGERS.contains(&first.as_str()) {
                return Mode::ShowVersion;
            }
        }
        if !self.stdin_is_terminal && self.tokens.is_empty() {
            return Mode::PipedAdd;
        }
        Mode::Dispatch(&self.tokens)
    }
}
