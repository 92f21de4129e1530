pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BUS_NAME: &str = "org.gnome.GPaste";
pub const DEFAULT_OBJECT_PATH: &str = "/org/gnome/GPaste";
pub const DEFAULT_INTERFACE: &str = "org.gnome.GPaste1";
pub const DEFAULT_HELPER_PREFIX: &str = "org.gnome.GPaste";

pub const CONFIG_ENV: &str = "GPASTE_CLI_CONFIG";
pub const LOG_ENV: &str = "GPASTE_LOG";

pub const DAEMON_ERROR: &str = "Couldn't connect to GPaste daemon";
pub const REEXEC_SUCCESS: &str = "Successfully reexecuted the daemon\n";

/// Build string printed by `gpaste version`.
pub fn version_string() -> String {
    format!("{} {}", APP_NAME, VERSION)
}
